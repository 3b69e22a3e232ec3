use super::constants::*;
use crate::platform::input::HELP_LINES;

/// Banner printed once at startup, before the first render.
pub fn initial_lines(chat_base_url: &str, ingest_base_url: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(HELP_LINES.len() + 4);
    lines.push(TITLE.to_string());
    lines.push(format!("chat service:   {chat_base_url}"));
    lines.push(format!("parser service: {ingest_base_url}"));
    lines.push(String::new());
    lines.extend(HELP_LINES.iter().map(|line| line.to_string()));
    lines
}
