use kanal::{AsyncReceiver, AsyncSender};
use studio_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{PracticeContext, event_loop};
use crate::io::input_loop;

/// Centralized channel management for a practice session.
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            // One user, one in-flight action; a small buffer is plenty.
            input_to_app: kanal::bounded_async(16),
        }
    }
}

/// Spawns the stdin reader and the practice event loop and ties their
/// lifetimes together through one cancellation token.
pub struct PracticeController {
    channels: ChannelSet,
    cancel_token: CancellationToken,
}

impl PracticeController {
    pub fn new() -> Self {
        Self {
            channels: ChannelSet::new(),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, ctx: PracticeContext) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            ctx,
            self.channels.input_to_app.1.clone(),
            self.cancel_token.clone(),
        ));

        tasks.spawn(input_loop(
            self.channels.input_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
