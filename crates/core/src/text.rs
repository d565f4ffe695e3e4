//! Plain-text rendering of case documents, for terminals and logs.

use crate::document::{Block, RenderedDocument};

const INDENT: &str = "  ";

/// Renders a document as plain text.
///
/// Titles are underlined with `=`, section headings with `-`, list items are bulleted and card
/// lines are indented under their title. Sections are separated by a blank line.
pub fn render_text(document: &RenderedDocument) -> String {
    let sections: Vec<String> = document
        .sections
        .iter()
        .map(|section| {
            let mut lines = Vec::new();
            if let Some(heading) = &section.heading {
                lines.push(heading.clone());
                lines.push(underline(heading, '-'));
            }
            for block in &section.blocks {
                block_lines(block, &mut lines);
            }
            lines.join("\n")
        })
        .collect();

    let mut output = sections.join("\n\n");
    output.push('\n');
    output
}

fn block_lines(block: &Block, lines: &mut Vec<String>) {
    match block {
        Block::Title(text) => {
            lines.push(text.clone());
            lines.push(underline(text, '='));
        }
        Block::Subtitle(text)
        | Block::Paragraph(text)
        | Block::Placeholder(text)
        | Block::Notice(text) => lines.push(text.clone()),
        Block::List(items) => lines.extend(items.iter().map(|item| format!("• {item}"))),
        Block::Card { title, lines: body } => {
            lines.push(title.clone());
            lines.extend(body.iter().map(|line| format!("{INDENT}{line}")));
        }
    }
}

fn underline(text: &str, ch: char) -> String {
    ch.to_string().repeat(text.chars().count().max(1))
}
