use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vetcase_core::{
    config::{date_format_from_env_value, presence_from_env_value},
    load_case_file, render_document, CasePresenter, CaseView, OutputFormat, PresenterConfig,
};

#[derive(Parser)]
#[command(name = "vetcase")]
#[command(about = "Veterinary case record presenter CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a case file
    Render {
        /// Case file (.json, .yaml or .yml)
        file: PathBuf,
        /// Output format: text, markdown or json
        #[arg(long, default_value = "text")]
        format: OutputFormat,
        /// chrono pattern for follow-up dates
        #[arg(long)]
        date_format: Option<String>,
        /// Presence policy: legacy or defined
        #[arg(long)]
        presence: Option<String>,
    },
    /// Print the normalised view of a case file as JSON
    Normalise {
        /// Case file (.json, .yaml or .yml)
        file: PathBuf,
    },
    /// List every optional clause and the presence rule it uses
    Clauses {
        /// Presence policy: legacy or defined
        #[arg(long)]
        presence: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vetcase=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            file,
            format,
            date_format,
            presence,
        }) => {
            let config = PresenterConfig::new(
                date_format_from_env_value(date_format),
                presence_from_env_value(presence)?,
            )?;
            let presenter = CasePresenter::new(config);
            tracing::debug!(
                "rendering {} as {:?} with dates as {}",
                file.display(),
                format,
                presenter.config().date_format()
            );
            let record = load_case_file(&file)?;
            let document = presenter.render(record.as_ref());
            print!("{}", render_document(&document, format)?);
        }
        Some(Commands::Normalise { file }) => match load_case_file(&file)? {
            Some(record) => {
                let view = CaseView::new(&record);
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            None => println!("null"),
        },
        Some(Commands::Clauses { presence }) => {
            let policy = presence_from_env_value(presence)?;
            for (clause, rule) in policy.rules() {
                println!("{clause}: {rule:?}");
            }
        }
        None => {
            println!("Use 'vetcase --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults_to_text() {
        let cli = Cli::try_parse_from(["vetcase", "render", "case.json"]).unwrap();
        match cli.command {
            Some(Commands::Render {
                file,
                format,
                date_format,
                presence,
            }) => {
                assert_eq!(file, PathBuf::from("case.json"));
                assert_eq!(format, OutputFormat::Text);
                assert!(date_format.is_none());
                assert!(presence.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_render_accepts_format_and_policy() {
        let cli = Cli::try_parse_from([
            "vetcase",
            "render",
            "case.yaml",
            "--format",
            "markdown",
            "--presence",
            "defined",
            "--date-format",
            "%F",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render {
                format,
                date_format,
                presence,
                ..
            }) => {
                assert_eq!(format, OutputFormat::Markdown);
                assert_eq!(date_format.as_deref(), Some("%F"));
                assert_eq!(presence.as_deref(), Some("defined"));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_render_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["vetcase", "render", "case.json", "--format", "pdf"]).is_err());
    }
}
