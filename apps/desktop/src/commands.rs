//! Terminal line parsing into controller events.

use client_core::UiEvent;
use shared::domain::{FeedbackKind, Target};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Append(String),
    Clear,
    Convert,
    Copy,
    Feedback(FeedbackKind),
    Target(Target),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("알 수 없는 명령입니다: '/{0}' (/help 참고)")]
    Unknown(String),
    #[error("알 수 없는 대상입니다: '{0}' (상사, 타팀 동료, 고객 중 선택)")]
    Target(String),
    #[error("/target 뒤에 대상을 입력해주세요")]
    MissingTarget,
}

pub const HELP: &str = "\
내용을 입력한 뒤 아래 명령을 사용하세요:
  /convert          입력한 내용 변환
  /target <대상>    상사, 타팀 동료, 고객 중 선택
  /copy             결과를 클립보드에 복사
  /good, /bad       결과 평가
  /clear            입력 지우기
  /quit             종료";

pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let Some(rest) = line.trim_end().strip_prefix('/') else {
        return Ok(Command::Append(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "convert" | "c" => Ok(Command::Convert),
        "copy" => Ok(Command::Copy),
        "good" => Ok(Command::Feedback(FeedbackKind::Positive)),
        "bad" => Ok(Command::Feedback(FeedbackKind::Negative)),
        "clear" => Ok(Command::Clear),
        "help" => Ok(Command::Help),
        "quit" | "q" => Ok(Command::Quit),
        "target" if arg.is_empty() => Err(CommandError::MissingTarget),
        "target" => arg
            .parse::<Target>()
            .map(Command::Target)
            .map_err(|_| CommandError::Target(arg.to_string())),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Text typed so far; turns commands into the events a page would fire.
#[derive(Debug, Default)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn event_for(&mut self, command: Command) -> Option<UiEvent> {
        match command {
            Command::Append(line) => {
                if !self.text.is_empty() {
                    self.text.push('\n');
                }
                self.text.push_str(&line);
                Some(UiEvent::InputChanged(self.text.clone()))
            }
            Command::Clear => {
                self.text.clear();
                Some(UiEvent::InputChanged(String::new()))
            }
            Command::Convert => Some(UiEvent::SubmitRequested),
            Command::Copy => Some(UiEvent::CopyRequested),
            Command::Feedback(kind) => Some(UiEvent::FeedbackGiven(kind)),
            Command::Target(target) => Some(UiEvent::TargetSelected(target)),
            Command::Help | Command::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_appended_verbatim() {
        assert_eq!(
            parse_line("  see you at 3 "),
            Ok(Command::Append("  see you at 3 ".to_string()))
        );
    }

    #[test]
    fn parses_commands_and_targets() {
        assert_eq!(parse_line("/convert"), Ok(Command::Convert));
        assert_eq!(parse_line("/good"), Ok(Command::Feedback(FeedbackKind::Positive)));
        assert_eq!(
            parse_line("/target 타팀 동료"),
            Ok(Command::Target(Target::Lateral))
        );
        assert_eq!(parse_line("/target external"), Ok(Command::Target(Target::External)));
        assert_eq!(parse_line("/target"), Err(CommandError::MissingTarget));
        assert_eq!(
            parse_line("/target boss"),
            Err(CommandError::Target("boss".to_string()))
        );
        assert_eq!(
            parse_line("/dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn buffer_accumulates_lines_into_input_events() {
        let mut buffer = InputBuffer::default();
        buffer.event_for(Command::Append("first".into()));
        let event = buffer.event_for(Command::Append("second".into()));
        assert!(matches!(event, Some(UiEvent::InputChanged(ref text)) if text == "first\nsecond"));

        let event = buffer.event_for(Command::Clear);
        assert!(matches!(event, Some(UiEvent::InputChanged(ref text)) if text.is_empty()));
        assert!(buffer.event_for(Command::Quit).is_none());
    }
}
