use kanal::AsyncSender;
use studio_types::AppEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Read practice commands from stdin and forward them as events.
/// Runs until stdin closes or the session is cancelled.
pub async fn input_loop(tx: AsyncSender<AppEvent>, cancel: CancellationToken) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            // stdin closed, treat like /quit
            let _ = tx.send(AppEvent::Quit).await;
            break;
        };

        match parse_line(&line) {
            Some(event) => tx.send(event).await?,
            None => println!("알 수 없는 명령입니다. /help 참고"),
        }
    }

    Ok(())
}

/// Turn one input line into an event. Anything not starting with `/` is a
/// submission; `/p` submits through the premium model.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return Some(AppEvent::ShowSentence);
    }

    if let Some(rest) = line.strip_prefix("/p ") {
        return Some(AppEvent::SubmitAttempt {
            text: rest.to_string(),
            premium: true,
        });
    }

    if let Some(command) = line.strip_prefix('/') {
        let mut parts = command.split_whitespace();
        return match parts.next()? {
            "skip" => Some(AppEvent::SkipSentence),
            "dir" => Some(AppEvent::FlipDirection),
            "show" => Some(AppEvent::ShowSentence),
            "terms" => Some(AppEvent::ShowTerms),
            "add" => parts.next()?.parse().ok().map(AppEvent::AddTerm),
            "quit" | "q" => Some(AppEvent::Quit),
            "help" => {
                print_help();
                Some(AppEvent::ShowSentence)
            }
            _ => None,
        };
    }

    Some(AppEvent::SubmitAttempt {
        text: line.to_string(),
        premium: false,
    })
}

fn print_help() {
    println!("  <번역문>     빠른 모델로 첨삭 제출");
    println!("  /p <번역문>  프리미엄 모델로 첨삭 제출");
    println!("  /skip        현재 문장 건너뛰기");
    println!("  /dir         번역 방향 전환");
    println!("  /show        현재 문장 다시 보기");
    println!("  /terms       핵심 용어 보기");
    println!("  /add <n>     n번 핵심 용어를 단어장에 추가");
    println!("  /quit        세션 종료");
}

#[cfg(test)]
mod tests {
    use super::parse_line;
    use studio_types::AppEvent;

    #[test]
    fn plain_text_is_a_fast_submission() {
        match parse_line("고양이가 앉았다.") {
            Some(AppEvent::SubmitAttempt { text, premium }) => {
                assert_eq!(text, "고양이가 앉았다.");
                assert!(!premium);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn premium_prefix_is_stripped() {
        match parse_line("/p The cat sat down.") {
            Some(AppEvent::SubmitAttempt { text, premium }) => {
                assert_eq!(text, "The cat sat down.");
                assert!(premium);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn commands_parse() {
        assert!(matches!(parse_line("/skip"), Some(AppEvent::SkipSentence)));
        assert!(matches!(parse_line("/dir"), Some(AppEvent::FlipDirection)));
        assert!(matches!(parse_line("/add 2"), Some(AppEvent::AddTerm(2))));
        assert!(matches!(parse_line("/quit"), Some(AppEvent::Quit)));
        assert!(parse_line("/nonsense").is_none());
    }
}
