//! Output format selection for rendered documents.

use crate::document::RenderedDocument;
use crate::markdown::MarkdownRenderer;
use crate::text::render_text;
use crate::{CaseError, CaseResult};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(CaseError::InvalidInput(format!(
                "unknown output format '{other}' (expected text, markdown or json)"
            ))),
        }
    }
}

/// Serialises the document tree as pretty-printed JSON.
pub fn render_json(document: &RenderedDocument) -> CaseResult<String> {
    let mut json = serde_json::to_string_pretty(document).map_err(CaseError::Serialization)?;
    json.push('\n');
    Ok(json)
}

/// Renders a document in the requested format.
///
/// # Errors
///
/// Only JSON output can fail, and only if serialisation fails.
pub fn render_document(document: &RenderedDocument, format: OutputFormat) -> CaseResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(document)),
        OutputFormat::Markdown => Ok(MarkdownRenderer::new().render(document)),
        OutputFormat::Json => render_json(document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CasePresenter, CaseRecord};
    use serde_json::json;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "html".parse::<OutputFormat>(),
            Err(CaseError::InvalidInput(msg)) if msg.contains("html")
        ));
    }

    #[test]
    fn test_render_json_tags_blocks() {
        let document = CasePresenter::default().render(None);
        let output = render_document(&document, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "sections": [{
                    "kind": "no_data",
                    "blocks": [{"type": "notice", "content": "Ei potilastietoja löytynyt."}]
                }]
            })
        );
    }

    #[test]
    fn test_render_json_card_block() {
        let record: CaseRecord =
            serde_json::from_value(json!({"diagnoses": [{"name": "Otitis"}]})).unwrap();
        let document = CasePresenter::default().render(Some(&record));
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&document).unwrap()).unwrap();
        assert_eq!(
            value["sections"][1],
            json!({
                "kind": "diagnoses",
                "heading": "Diagnoosit",
                "blocks": [{
                    "type": "card",
                    "content": {"title": "Otitis", "lines": ["Vaikeusaste: - / 3 (-)"]}
                }]
            })
        );
    }

    #[test]
    fn test_every_format_renders_notice() {
        let document = CasePresenter::default().render(None);
        for format in [OutputFormat::Text, OutputFormat::Markdown] {
            let output = render_document(&document, format).unwrap();
            assert_eq!(output, "Ei potilastietoja löytynyt.\n");
        }
    }
}
