use colored::Colorize;
use notes::api::{CmdMessage, MessageLevel, NoteSummary};
use notes::model::Note;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_summaries(summaries: &[NoteSummary]) {
    if summaries.is_empty() {
        println!("No notes found.");
        return;
    }

    println!("Notes:");
    for summary in summaries {
        let idx_str = format!("{}. ", summary.id);
        let available = LINE_WIDTH.saturating_sub(idx_str.width());
        println!(
            "{}{}",
            idx_str.yellow(),
            truncate_to_width(&summary.title, available)
        );
    }
}

pub(super) fn print_full_notes(notes: &[Note]) {
    for note in notes {
        println!(
            "{} . {} : {}",
            note.id.to_string().yellow(),
            note.title.bold(),
            note.body
        );
    }
}

pub(super) fn print_data_path(path: &Path) {
    println!("{}", path.display());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
