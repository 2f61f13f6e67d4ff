use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::Student;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 32;
const HEADERS: [&str; 5] = ["ID", "Name", "Age", "Grade", "Email"];

pub(crate) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// One labeled line per student, numbered.
pub(crate) fn print_full_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    for (i, student) in students.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, student)?;
    }
    Ok(())
}

/// Students as an aligned table, in the order given.
pub(crate) fn print_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return Ok(());
    }

    let rows: Vec<[String; 5]> = students
        .iter()
        .map(|s| {
            [
                s.id().to_string(),
                truncate_to_width(s.name(), MAX_CELL_WIDTH),
                s.age().to_string(),
                truncate_to_width(s.grade(), MAX_CELL_WIDTH),
                truncate_to_width(s.email(), MAX_CELL_WIDTH),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    writeln!(out, "{}", header.join("  ").trim_end().bold())?;

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| pad_to_width(cell, *w))
            .collect();
        writeln!(out, "{}", cells.join("  ").trim_end())?;
    }
    Ok(())
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
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
