use chrono::NaiveDate;
use kanal::AsyncReceiver;
use studio_feedback::FeedbackClient;
use studio_session::PracticeSession;
use studio_store::StudioStore;
use studio_types::AppEvent;
use tokio_util::sync::CancellationToken;

pub mod submit;
pub mod vocab;

/// Everything the practice event loop works on. The session is ephemeral;
/// the store is the durable side.
pub struct PracticeContext {
    pub store: StudioStore,
    pub session: PracticeSession,
    pub client: FeedbackClient,
    pub today: NaiveDate,
}

/// Practice main loop. Events are handled one at a time, so there is never
/// more than one feedback call in flight.
pub async fn event_loop(
    mut ctx: PracticeContext,
    rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    print_sentence(&ctx.session);

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = rx.recv() => event?,
        };
        tracing::debug!(event = ?std::mem::discriminant(&event), "handling event");

        let done = match event {
            AppEvent::SubmitAttempt { text, premium } => {
                submit::handle_submit(&mut ctx, &text, premium).await?
            }
            AppEvent::SkipSentence => submit::handle_skip(&mut ctx)?,
            AppEvent::FlipDirection => {
                ctx.session.flip_direction();
                println!("방향 전환: {}", ctx.session.direction().label());
                print_sentence(&ctx.session);
                false
            }
            AppEvent::ShowSentence => {
                print_sentence(&ctx.session);
                false
            }
            AppEvent::ShowTerms => {
                vocab::print_terms(ctx.session.article());
                false
            }
            AppEvent::AddTerm(index) => {
                vocab::handle_add_term(&mut ctx, index)?;
                false
            }
            AppEvent::Quit => {
                println!("세션을 종료합니다. (완료 전 기록은 저장되지 않습니다)");
                true
            }
        };

        if done {
            cancel.cancel();
            break;
        }
    }

    Ok(())
}

pub fn print_sentence(session: &PracticeSession) {
    if let Some(source) = session.current_source() {
        println!();
        println!("[{}/{}] {}", session.position(), session.total(), source);
    }
}
