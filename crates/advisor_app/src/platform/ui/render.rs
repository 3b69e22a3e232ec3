use advisor_core::{AppViewModel, ChatView, IngestionPhase, IngestionView, Message, Sender};

use super::constants::*;

/// Renders the whole view model as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    render_chat(view.chat.as_ref(), &mut lines);
    lines.push(String::new());
    render_ingestion(&view.ingestion, &mut lines);
    lines
}

fn render_chat(chat: Option<&ChatView>, lines: &mut Vec<String>) {
    let Some(chat) = chat else {
        lines.push(CHAT_CLOSED.to_string());
        return;
    };

    lines.push(CHAT_HEADER.to_string());
    if chat.show_welcome {
        lines.push(CHAT_WELCOME.to_string());
    }
    lines.extend(chat.messages.iter().map(format_message));
    if chat.pending {
        lines.push(CHAT_THINKING.to_string());
    } else if chat.messages.is_empty() {
        lines.push(format!("({CHAT_PROMPT_HINT})"));
    }
}

fn format_message(message: &Message) -> String {
    let prefix = match message.sender {
        Sender::User => USER_PREFIX,
        Sender::Agent => AGENT_PREFIX,
    };
    format!("{prefix} {}", message.text)
}

fn render_ingestion(view: &IngestionView, lines: &mut Vec<String>) {
    lines.push(PARSER_HEADER.to_string());

    match &view.file {
        Some(file) => lines.push(format!("File: {} ({})", file.name, file.size_label)),
        None if view.phase == IngestionPhase::Empty => lines.push(PARSER_EMPTY.to_string()),
        None => {}
    }

    if let Some(error) = &view.error {
        lines.push(format!("Error: {error}"));
    }

    if view.phase == IngestionPhase::Uploading {
        lines.push(PARSER_PROCESSING.to_string());
    } else if view.can_upload {
        lines.push("Ready: /upload to parse, /clear to reset".to_string());
    }

    if let Some(result) = &view.result {
        lines.push(PARSER_SUCCESS.to_string());
        lines.push(format!("  College: {}", result.college_name));
        lines.push(format!("  College Code: {}", result.college_code));
        lines.push(format!("  Total Branches: {}", result.total_branches));
        lines.push(PARSER_STORED.to_string());
    }
}
