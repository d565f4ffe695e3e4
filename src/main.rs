use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vetcase_core::config::{date_format_from_env_value, presence_from_env_value};
use vetcase_core::constants::DEFAULT_CASE_FILE;
use vetcase_core::{
    load_case_file, render_document, CaseError, CasePresenter, OutputFormat, PresenterConfig,
};

/// Main entry point for the vetcase application
///
/// Loads one configured case file, renders it and prints the document to stdout. Logs go to
/// stderr so the rendered output can be piped.
///
/// # Environment Variables
/// - `VETCASE_CASE_FILE`: Case file to render (default: "data/patient.json")
/// - `VETCASE_DATE_FORMAT`: chrono date pattern for follow-up dates (default: "%-d.%-m.%Y")
/// - `VETCASE_PRESENCE`: Presence policy, "legacy" or "defined" (default: "legacy")
/// - `VETCASE_OUTPUT`: Output format, "text", "markdown" or "json" (default: "text")
///
/// # Returns
/// * `Ok(())` - If the document was rendered
/// * `Err(anyhow::Error)` - If configuration is invalid or the case file cannot be read
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vetcase=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let case_file: PathBuf = std::env::var("VETCASE_CASE_FILE")
        .unwrap_or_else(|_| DEFAULT_CASE_FILE.into())
        .into();
    let output_format: OutputFormat = std::env::var("VETCASE_OUTPUT")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.parse())
        .transpose()
        .map_err(|e: CaseError| {
            tracing::error!("Configuration error: {:?}", e);
            e
        })?
        .unwrap_or_default();

    let config = presence_from_env_value(std::env::var("VETCASE_PRESENCE").ok())
        .and_then(|presence| {
            PresenterConfig::new(
                date_format_from_env_value(std::env::var("VETCASE_DATE_FORMAT").ok()),
                presence,
            )
        })
        .map_err(|e| {
            tracing::error!("Configuration error: {:?}", e);
            e
        })?;

    tracing::info!("++ Rendering case file {}", case_file.display());

    let record = load_case_file(&case_file).map_err(|e| {
        tracing::error!("Load case error: {:?}", e);
        e
    })?;

    let document = CasePresenter::new(config).render(record.as_ref());
    let rendered = render_document(&document, output_format).map_err(|e| {
        tracing::error!("Render error: {:?}", e);
        e
    })?;
    print!("{rendered}");

    Ok(())
}
