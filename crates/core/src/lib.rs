//! # Vetcase Core
//!
//! Core presentation logic for veterinary patient case records.
//!
//! This crate turns one case record into a read-only document:
//! - Shape-tolerant record model and case file loading (JSON or YAML)
//! - Normalisation into a fully defaulted safe view
//! - Projection of the view into ordered, presentation-neutral sections
//! - Plain text, Markdown and JSON rendering of the result
//!
//! **No process concerns**: environment handling, logging setup and argument parsing belong in
//! the `vetcase-run` and `vetcase-cli` binaries.

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod format;
mod lenient;
pub mod loader;
pub mod markdown;
pub mod output;
pub mod presence;
pub mod presenter;
pub mod record;
pub mod text;
pub mod view;

pub use config::PresenterConfig;
pub use document::{Block, RenderedDocument, Section, SectionKind};
pub use error::{CaseError, CaseResult};
pub use loader::{load_case_file, parse_case, CaseFormat};
pub use output::{render_document, OutputFormat};
pub use presence::{Clause, PolicyPreset, PresencePolicy, PresenceRule};
pub use presenter::CasePresenter;
pub use record::CaseRecord;
pub use view::CaseView;

pub use case_types::FieldValue;
