//! Markdown rendering of case documents.
//!
//! Text that originates from a case record is escaped so it cannot introduce its own structure:
//! a record value such as `# urgent` or `- see notes` should read as prose, not as a heading or
//! a list item.

use crate::document::{Block, RenderedDocument, Section};

/// Service for rendering documents as Markdown.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a new `MarkdownRenderer` instance.
    pub fn new() -> Self {
        Self
    }

    /// Renders a full document.
    ///
    /// Layout produced:
    /// ```markdown
    /// # <title>
    ///
    /// _<subtitle>_
    ///
    /// ## <section heading>
    ///
    /// - list item
    ///
    /// ### <card title>
    ///
    /// - card line
    /// ```
    ///
    /// Blocks are separated by blank lines and the output ends with a single newline.
    pub fn render(&self, document: &RenderedDocument) -> String {
        let chunks: Vec<String> = document
            .sections
            .iter()
            .flat_map(|section| self.section_chunks(section))
            .collect();

        let mut output = chunks.join("\n\n");
        output.push('\n');
        output
    }

    fn section_chunks(&self, section: &Section) -> Vec<String> {
        let mut chunks = Vec::new();
        if let Some(heading) = &section.heading {
            chunks.push(format!("## {}", self.escape_text(heading)));
        }
        chunks.extend(section.blocks.iter().map(|block| self.block_render(block)));
        chunks
    }

    fn block_render(&self, block: &Block) -> String {
        match block {
            Block::Title(text) => format!("# {}", self.escape_text(text)),
            Block::Subtitle(text) | Block::Placeholder(text) => {
                format!("_{}_", self.escape_text(text))
            }
            Block::Paragraph(text) | Block::Notice(text) => self.escape_text(text),
            Block::List(items) => self.list_render(items),
            Block::Card { title, lines } => {
                format!(
                    "### {}\n\n{}",
                    self.escape_text(title),
                    self.list_render(lines)
                )
            }
        }
    }

    fn list_render(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("- {}", self.escape_text(item)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// Helper methods for escaping record-supplied text
impl MarkdownRenderer {
    /// Escapes Markdown structure in text.
    ///
    /// Rules, applied per line:
    /// - `#` or `>` at line start → escaped (prevents headers and blockquotes)
    /// - Lines made only of `=` or `-`, or of three or more `*` or `_` → escaped (prevents
    ///   setext underlines and horizontal rules)
    /// - `-`, `+` or `*` at line start followed by a space or line end → escaped (prevents lists)
    /// - `1.` or `1)` at line start followed by a space or line end → escaped (prevents ordered lists)
    /// - Triple backticks anywhere → `\`\`\`` (prevents code blocks)
    fn escape_text(&self, text: &str) -> String {
        text.lines()
            .map(|line| self.escape_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn escape_line(&self, line: &str) -> String {
        let leading = line.trim_start();
        let indent = &line[..line.len() - leading.len()];

        let escaped = if leading.starts_with('#')
            || leading.starts_with('>')
            || is_rule_or_underline(leading)
            || list_marker(leading).is_some()
        {
            format!(r"{indent}\{leading}")
        } else if let Some(digits) = ordered_marker(leading) {
            let (number, rest) = leading.split_at(digits);
            format!(r"{indent}{number}\{rest}")
        } else {
            line.to_string()
        };

        escaped.replace("```", r"\`\`\`")
    }
}

fn is_marker_end(next: Option<char>) -> bool {
    matches!(next, None | Some(' ') | Some('\t'))
}

fn list_marker(line: &str) -> Option<char> {
    let mut chars = line.chars();
    let marker = chars.next().filter(|c| matches!(c, '-' | '+' | '*'))?;
    is_marker_end(chars.next()).then_some(marker)
}

/// Length of the digit run in a line-start ordered-list marker such as `12.` or `3)`.
fn ordered_marker(line: &str) -> Option<usize> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let mut chars = line[digits..].chars();
    chars.next().filter(|c| matches!(c, '.' | ')'))?;
    is_marker_end(chars.next()).then_some(digits)
}

fn is_rule_or_underline(line: &str) -> bool {
    let marks: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    match marks.first() {
        Some(&first) if marks.iter().all(|&c| c == first) => match first {
            '=' | '-' => true,
            '*' | '_' => marks.len() >= 3,
            _ => false,
        },
        _ => false,
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SectionKind;

    fn doc(sections: Vec<Section>) -> RenderedDocument {
        RenderedDocument { sections }
    }

    #[test]
    fn test_render_header_and_list() {
        let document = doc(vec![
            Section::new(
                SectionKind::Header,
                None,
                vec![
                    Block::Title("Rex".into()),
                    Block::Subtitle("dog (male), 4 vuotta".into()),
                ],
            ),
            Section::new(
                SectionKind::Symptoms,
                Some("Oireet"),
                vec![Block::List(vec!["Cough".into(), "Fever, esiintyy".into()])],
            ),
        ]);

        let output = MarkdownRenderer::new().render(&document);
        assert_eq!(
            output,
            "# Rex\n\n_dog (male), 4 vuotta_\n\n## Oireet\n\n- Cough\n- Fever, esiintyy\n"
        );
    }

    #[test]
    fn test_render_card_and_placeholder() {
        let document = doc(vec![
            Section::new(
                SectionKind::Diagnoses,
                Some("Diagnoosit"),
                vec![Block::Card {
                    title: "Otitis".into(),
                    lines: vec!["Vaikeusaste: 2 / 3 (-)".into()],
                }],
            ),
            Section::new(
                SectionKind::Treatments,
                Some("Hoidot"),
                vec![Block::Placeholder("Ei hoitoja.".into())],
            ),
        ]);

        let output = MarkdownRenderer::new().render(&document);
        assert!(output.contains("## Diagnoosit\n\n### Otitis\n\n- Vaikeusaste: 2 / 3 (-)"));
        assert!(output.contains("## Hoidot\n\n_Ei hoitoja._"));
    }

    #[test]
    fn test_escape_hash_at_line_start() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(
            renderer.escape_text("Patient #12345\n# urgent"),
            "Patient #12345\n\\# urgent"
        );
    }

    #[test]
    fn test_escape_horizontal_rules() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(
            renderer.escape_text("Line 1\n---\nLine 2\n***\nLine 3\n___"),
            "Line 1\n\\---\nLine 2\n\\***\nLine 3\n\\___"
        );
    }

    #[test]
    fn test_escape_setext_underlines_and_long_rules() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(
            renderer.escape_text("Limping\n===="),
            "Limping\n\\===="
        );
        assert_eq!(renderer.escape_text("Limping\n="), "Limping\n\\=");
        assert_eq!(
            renderer.escape_text("Limping\n----"),
            "Limping\n\\----"
        );
        assert_eq!(renderer.escape_text("*****"), "\\*****");
        assert_eq!(renderer.escape_text("  _ _ _"), "  \\_ _ _");
        assert_eq!(renderer.escape_text("**bold**"), "**bold**");
        assert_eq!(renderer.escape_text("__"), "__");
    }

    #[test]
    fn test_escape_ordered_list_markers() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(
            renderer.escape_text("1. vomits at night"),
            "1\\. vomits at night"
        );
        assert_eq!(renderer.escape_text("12) refuses food"), "12\\) refuses food");
        assert_eq!(renderer.escape_text("2."), "2\\.");
        assert_eq!(renderer.escape_text("1.5 kg"), "1.5 kg");
        assert_eq!(renderer.escape_text("4 vuotta"), "4 vuotta");
    }

    #[test]
    fn test_escape_blockquotes() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(renderer.escape_text("> quoted"), "\\> quoted");
        assert_eq!(
            renderer.escape_text("weight > 30 kg"),
            "weight > 30 kg"
        );
    }

    #[test]
    fn test_owner_report_underline_stays_in_paragraph() {
        let document = doc(vec![Section::new(
            SectionKind::OwnerReport,
            Some("Omistajan kertomus"),
            vec![Block::Paragraph("Limping since Monday\n====".into())],
        )]);
        let output = MarkdownRenderer::new().render(&document);
        assert_eq!(
            output,
            "## Omistajan kertomus\n\nLimping since Monday\n\\====\n"
        );
    }

    #[test]
    fn test_escape_list_markers() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(renderer.escape_text("- – -"), "\\- – -");
        assert_eq!(renderer.escape_text("-"), "\\-");
        assert_eq!(renderer.escape_text("* note"), "\\* note");
        assert_eq!(renderer.escape_text("-5 degrees"), "-5 degrees");
    }

    #[test]
    fn test_escape_code_fences() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(
            renderer.escape_text("see ```code```"),
            "see \\`\\`\\`code\\`\\`\\`"
        );
    }

    #[test]
    fn test_missing_values_do_not_become_list_items() {
        let document = doc(vec![Section::new(
            SectionKind::FollowUp,
            Some("Kontrolli"),
            vec![
                Block::Paragraph("- – -".into()),
                Block::Paragraph("-".into()),
            ],
        )]);
        let output = MarkdownRenderer::new().render(&document);
        assert_eq!(output, "## Kontrolli\n\n\\- – -\n\n\\-\n");
    }
}
