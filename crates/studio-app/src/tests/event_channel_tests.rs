use std::time::Duration;

use studio_types::AppEvent;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn events_flow_through_the_bounded_channel() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(16);

    tokio::spawn(async move {
        tx.send(AppEvent::SubmitAttempt {
            text: "중앙은행이 기준금리를 동결했다.".to_string(),
            premium: false,
        })
        .await
        .expect("send failed");
        tx.send(AppEvent::Quit).await.expect("send failed");
    });

    let first = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .expect("channel closed");
    match first {
        AppEvent::SubmitAttempt { text, premium } => {
            assert!(!premium);
            assert!(text.contains("기준금리"));
        }
        other => panic!("wrong event: {other:?}"),
    }

    let second = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .expect("channel closed");
    assert!(matches!(second, AppEvent::Quit));
}

#[tokio::test]
async fn cancelled_child_token_stops_a_waiting_consumer() {
    let (_tx, rx) = kanal::bounded_async::<AppEvent>(16);
    let token = CancellationToken::new();
    let child = token.child_token();

    let waiter = tokio::spawn(async move {
        tokio::select! {
            _ = child.cancelled() => true,
            _ = rx.recv() => false,
        }
    });

    token.cancel();
    let cancelled = timeout(Duration::from_secs(2), waiter)
        .await
        .expect("timeout")
        .expect("task panicked");
    assert!(cancelled);
}
