use std::path::Path;

use advisor_core::Msg;

use super::event::AppEvent;
use super::files::load_candidate;

pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  /open            open the chat launcher",
    "  /close           close the chat launcher (discards the conversation)",
    "  <text>           ask a question while the chat is open",
    "  /attach <path>   choose a PDF to parse",
    "  /remove          drop the chosen file",
    "  /upload          send the chosen PDF to the parser",
    "  /clear           reset the PDF parser",
    "  /help            show this list",
    "  /quit            exit",
];

/// Turns one typed line into the events it stands for.
pub fn parse_line(line: &str) -> Vec<AppEvent> {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        // Plain text goes through the controller's own blank-input guard.
        return vec![
            AppEvent::Msg(Msg::ChatInputChanged(line.to_owned())),
            AppEvent::Msg(Msg::ChatSubmitted),
        ];
    }

    let (command, argument) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    let event = match command {
        "/open" => AppEvent::Msg(Msg::LauncherOpened),
        "/close" => AppEvent::Msg(Msg::LauncherClosed),
        "/attach" if argument.is_empty() => {
            AppEvent::Rejected("usage: /attach <path>".to_string())
        }
        "/attach" => match load_candidate(Path::new(argument)) {
            Ok(candidate) => AppEvent::Msg(Msg::FileSelected(candidate)),
            Err(err) => AppEvent::Rejected(err.to_string()),
        },
        "/remove" => AppEvent::Msg(Msg::FileRemoved),
        "/upload" => AppEvent::Msg(Msg::UploadClicked),
        "/clear" => AppEvent::Msg(Msg::ClearClicked),
        "/help" => AppEvent::Help,
        "/quit" | "/exit" => AppEvent::Quit,
        other => AppEvent::Rejected(format!("unknown command {other}; try /help")),
    };
    vec![event]
}
