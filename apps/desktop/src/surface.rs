//! Terminal rendering of controller render commands.

use std::io::Write;

use client_core::{CopyLabel, RenderCommand, UiSurface};
use tracing::debug;

pub struct TerminalSurface<W> {
    out: W,
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(error) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            debug!(%error, "terminal write failed");
        }
    }
}

impl<W: Write + Send> UiSurface for TerminalSurface<W> {
    fn render(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::CharCount {
                count,
                limit,
                at_limit,
            } => {
                if at_limit {
                    self.line(&format!("[{count}/{limit}] 글자 수 제한 도달"));
                } else {
                    self.line(&format!("[{count}/{limit}]"));
                }
            }
            RenderCommand::Loading(true) => self.line("변환 중..."),
            RenderCommand::Loading(false) => {}
            RenderCommand::ShowError(message) => self.line(&format!("오류: {message}")),
            RenderCommand::SetOutput(text) if !text.is_empty() => {
                self.line("---- 결과 ----");
                self.line(&text);
                self.line("-------------");
            }
            RenderCommand::CopyVisible(true) => self.line("(/copy 로 결과 복사)"),
            RenderCommand::CopyLabel(CopyLabel::Acknowledged) => {
                self.line(CopyLabel::Acknowledged.text())
            }
            RenderCommand::FeedbackVisible(true) => self.line("결과가 도움이 되었나요? /good 또는 /bad"),
            RenderCommand::FeedbackThanks(kind) => {
                self.line(&format!("피드백을 보내주셔서 감사합니다! ({})", kind.emoji()))
            }
            RenderCommand::HideError
            | RenderCommand::SetOutput(_)
            | RenderCommand::CopyVisible(false)
            | RenderCommand::CopyEnabled(_)
            | RenderCommand::CopyLabel(CopyLabel::Idle)
            | RenderCommand::FeedbackVisible(false) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::FeedbackKind;

    fn rendered(commands: Vec<RenderCommand>) -> String {
        let mut surface = TerminalSurface::new(Vec::new());
        for command in commands {
            surface.render(command);
        }
        String::from_utf8(surface.into_inner()).expect("utf8")
    }

    #[test]
    fn prints_result_block_and_affordances() {
        let out = rendered(vec![
            RenderCommand::Loading(true),
            RenderCommand::SetOutput(String::new()),
            RenderCommand::SetOutput("정중한 문장".into()),
            RenderCommand::CopyVisible(true),
            RenderCommand::FeedbackVisible(true),
            RenderCommand::Loading(false),
        ]);

        assert_eq!(
            out,
            "변환 중...\n---- 결과 ----\n정중한 문장\n-------------\n\
             (/copy 로 결과 복사)\n결과가 도움이 되었나요? /good 또는 /bad\n"
        );
    }

    #[test]
    fn flags_limit_and_feedback() {
        let out = rendered(vec![
            RenderCommand::CharCount {
                count: 500,
                limit: 500,
                at_limit: true,
            },
            RenderCommand::FeedbackThanks(FeedbackKind::Positive),
        ]);

        assert!(out.contains("[500/500] 글자 수 제한 도달"));
        assert!(out.contains("피드백을 보내주셔서 감사합니다! (👍)"));
    }
}
