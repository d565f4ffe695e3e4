//! Presentation-neutral rendered document.
//!
//! A [`RenderedDocument`] is an ordered list of [`Section`]s. Renderers in [`crate::output`]
//! decide how titles, lists and cards look; the presenter only decides what they contain.

use serde::Serialize;

/// Identifies which part of the case a section shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Sole section of a document rendered without a record.
    NoData,
    Header,
    OwnerReport,
    ClinicalFindings,
    Symptoms,
    Diagnoses,
    DifferentialDiagnoses,
    Treatments,
    HomeCare,
    FollowUp,
}

/// One block of content within a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Block {
    /// Document title (the animal's name).
    Title(String),
    /// De-emphasised line under the title.
    Subtitle(String),
    Paragraph(String),
    /// Shown in place of an empty list.
    Placeholder(String),
    /// Bulleted list, one string per item.
    List(Vec<String>),
    /// A titled group of lines, used for one diagnosis each.
    Card { title: String, lines: Vec<String> },
    /// Stand-alone notice.
    Notice(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(kind: SectionKind, heading: Option<&str>, blocks: Vec<Block>) -> Self {
        Self {
            kind,
            heading: heading.map(str::to_owned),
            blocks,
        }
    }
}

/// Output of a single render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub sections: Vec<Section>,
}

impl RenderedDocument {
    /// Finds the first section of the given kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Section kinds in output order.
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}
