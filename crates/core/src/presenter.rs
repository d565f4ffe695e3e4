//! Case presenter: projects a case record into a [`RenderedDocument`].
//!
//! Rendering is a pure function of the record and the [`PresenterConfig`]. It never fails and
//! never logs: missing or malformed data is substituted with defaults, and sections are either
//! omitted or shown with a placeholder depending on the section.
//!
//! Section order is fixed:
//! header, owner report, clinical findings, symptoms, diagnoses, differential diagnoses,
//! treatments, home care, follow-up.

use crate::config::PresenterConfig;
use crate::constants::*;
use crate::document::{Block, RenderedDocument, Section, SectionKind};
use crate::format::{certainty_display, short_date, value_with_unit};
use crate::presence::Clause;
use crate::record::{
    CaseRecord, Diagnosis, DifferentialDiagnosis, Finding, HomeCareInstruction, Symptom,
    Treatment,
};
use crate::view::CaseView;
use case_types::FieldValue;

/// Stateless renderer for case records.
#[derive(Clone, Debug, Default)]
pub struct CasePresenter {
    config: PresenterConfig,
}

impl CasePresenter {
    pub fn new(config: PresenterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// Renders a case record.
    ///
    /// When `record` is `None` the document holds a single notice section and nothing else.
    /// Otherwise the record is normalised into a [`CaseView`] and every section is produced in
    /// fixed order.
    pub fn render(&self, record: Option<&CaseRecord>) -> RenderedDocument {
        let Some(record) = record else {
            return RenderedDocument {
                sections: vec![Section::new(
                    SectionKind::NoData,
                    None,
                    vec![Block::Notice(NO_DATA_NOTICE.to_string())],
                )],
            };
        };

        let view = CaseView::new(record);

        let mut sections = vec![self.header(&view)];
        sections.extend(self.owner_report(&view));
        sections.extend(self.clinical_findings(&view));
        sections.extend(self.symptoms(&view));
        sections.push(self.diagnoses(&view));
        sections.extend(self.differential_diagnoses(&view));
        sections.push(self.treatments(&view));
        sections.push(self.home_care(&view));
        sections.push(self.follow_up(&view));

        RenderedDocument { sections }
    }

    /// Returns the field when the clause's presence rule admits it.
    fn present<'a>(&self, clause: Clause, field: &'a Option<FieldValue>) -> Option<&'a FieldValue> {
        let value = field.as_ref();
        self.config
            .presence()
            .admits(clause, value)
            .then_some(value)
            .flatten()
    }

    fn header(&self, view: &CaseView<'_>) -> Section {
        let animal = view.animal;
        let subtitle = format!(
            "{} ({}), {} {}",
            or_missing(&animal.species),
            or_missing(&animal.sex),
            or_missing(&animal.age_years),
            AGE_UNIT
        );

        Section::new(
            SectionKind::Header,
            None,
            vec![
                Block::Title(or_missing(&animal.name)),
                Block::Subtitle(subtitle),
            ],
        )
    }

    fn owner_report(&self, view: &CaseView<'_>) -> Option<Section> {
        let report = self.present(Clause::OwnerReport, &view.visit.owner_report)?;
        Some(Section::new(
            SectionKind::OwnerReport,
            Some(HEADING_OWNER_REPORT),
            vec![Block::Paragraph(report.to_string())],
        ))
    }

    fn clinical_findings(&self, view: &CaseView<'_>) -> Option<Section> {
        if view.exam_findings.is_empty() {
            return None;
        }
        let items = view
            .exam_findings
            .iter()
            .map(|f| self.finding_item(f))
            .collect();
        Some(Section::new(
            SectionKind::ClinicalFindings,
            Some(HEADING_FINDINGS),
            vec![Block::List(items)],
        ))
    }

    fn finding_item(&self, finding: &Finding) -> String {
        let mut line = or_empty(&finding.name);

        if let Some(severity) = self.present(Clause::FindingSeverity, &finding.severity_level) {
            line.push_str(&format!(", {LABEL_SEVERITY}: {severity}"));
        }
        if let Some(value) = self.present(Clause::FindingValue, &finding.value) {
            line.push_str(&format!(
                ", {LABEL_VALUE}: {}",
                value_with_unit(value, finding.unit.as_ref())
            ));
        }
        if let Some(range) = self.present(Clause::FindingNormalRange, &finding.normal_range) {
            line.push_str(&format!(" ({LABEL_NORMAL_RANGE}: {range})"));
        }
        if is_flagged(&finding.present) {
            line.push_str(&format!(", {FINDING_PRESENT}"));
        }

        line
    }

    fn symptoms(&self, view: &CaseView<'_>) -> Option<Section> {
        if view.symptoms.is_empty() {
            return None;
        }
        let items = view.symptoms.iter().map(|s| self.symptom_item(s)).collect();
        Some(Section::new(
            SectionKind::Symptoms,
            Some(HEADING_SYMPTOMS),
            vec![Block::List(items)],
        ))
    }

    fn symptom_item(&self, symptom: &Symptom) -> String {
        let mut line = or_empty(&symptom.name);

        if let Some(n) = self.present(Clause::SymptomFrequencyPerDay, &symptom.frequency_per_day) {
            line.push_str(&format!(", {LABEL_FREQUENCY}: {n}{PER_DAY_UNIT}"));
        }
        if let Some(n) = self.present(Clause::SymptomDuration, &symptom.duration_seconds) {
            line.push_str(&format!(", {LABEL_DURATION}: {n} {SECONDS_UNIT}"));
        }
        if let Some(n) = self.present(Clause::SymptomIntensity, &symptom.intensity_level) {
            line.push_str(&format!(", {LABEL_INTENSITY}: {n}"));
        }
        if let Some(c) = self.present(Clause::SymptomCertainty, &symptom.certainty_level) {
            line.push_str(&format!(", {LABEL_CERTAINTY}: {}", certainty_display(c)));
        }
        if let Some(text) = self.present(Clause::SymptomFrequencyText, &symptom.frequency) {
            line.push_str(&format!(", {LABEL_FREQUENCY}: {text}"));
        }
        if is_flagged(&symptom.present) {
            line.push_str(&format!(", {SYMPTOM_PRESENT}"));
        }

        line
    }

    fn diagnoses(&self, view: &CaseView<'_>) -> Section {
        let blocks = if view.diagnoses.is_empty() {
            vec![Block::Placeholder(NO_DIAGNOSES.to_string())]
        } else {
            view.diagnoses
                .iter()
                .map(|d| self.diagnosis_card(d))
                .collect()
        };
        Section::new(SectionKind::Diagnoses, Some(HEADING_DIAGNOSES), blocks)
    }

    fn diagnosis_card(&self, diagnosis: &Diagnosis) -> Block {
        let mut lines = vec![format!(
            "{LABEL_DIAGNOSIS_SEVERITY}: {} / {SEVERITY_SCALE_MAX} ({})",
            or_missing(&diagnosis.severity_level),
            or_missing(&diagnosis.category)
        )];

        if let Some(rate) = &diagnosis.lethality_rate_percent {
            if let Some(n) = self.present(Clause::DiagnosisLethalityUntreated, &rate.untreated) {
                lines.push(format!("{LABEL_LETHALITY_UNTREATED}: {n}%"));
            }
            if let Some(n) = self.present(Clause::DiagnosisLethalityTreated, &rate.treated) {
                lines.push(format!("{LABEL_LETHALITY_TREATED}: {n}%"));
            }
        }

        if let Some(causes) = diagnosis.suspected_causes.as_ref().filter(|c| !c.is_empty()) {
            let joined = causes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("{LABEL_SUSPECTED_CAUSES}: {joined}"));
        }

        if let Some(primary) = self.present(Clause::DiagnosisSecondaryTo, &diagnosis.secondary_to) {
            lines.push(format!("{LABEL_SECONDARY_TO}: {primary}"));
        }

        Block::Card {
            title: or_missing(&diagnosis.name),
            lines,
        }
    }

    fn differential_diagnoses(&self, view: &CaseView<'_>) -> Option<Section> {
        if view.differential_diagnoses.is_empty() {
            return None;
        }
        let items = view
            .differential_diagnoses
            .iter()
            .map(|d| self.differential_item(d))
            .collect();
        Some(Section::new(
            SectionKind::DifferentialDiagnoses,
            Some(HEADING_DIFFERENTIALS),
            vec![Block::List(items)],
        ))
    }

    fn differential_item(&self, differential: &DifferentialDiagnosis) -> String {
        let mut line = or_empty(&differential.name);

        if let Some(p) = self.present(
            Clause::DifferentialProbability,
            &differential.probability_percent,
        ) {
            line.push_str(&format!(", {LABEL_PROBABILITY}: {p}%"));
        }
        if let Some(detail) = self.present(Clause::DifferentialDetail, &differential.detail) {
            line.push_str(&format!(" ({detail})"));
        }

        line
    }

    fn treatments(&self, view: &CaseView<'_>) -> Section {
        let blocks = if view.treatments.is_empty() {
            vec![Block::Placeholder(NO_TREATMENTS.to_string())]
        } else {
            vec![Block::List(
                view.treatments
                    .iter()
                    .map(|t| self.treatment_item(t))
                    .collect(),
            )]
        };
        Section::new(SectionKind::Treatments, Some(HEADING_TREATMENTS), blocks)
    }

    fn treatment_item(&self, treatment: &Treatment) -> String {
        let mut line = or_missing(&treatment.name);

        if let Some(method) = self.present(Clause::TreatmentMethod, &treatment.method) {
            line.push_str(&format!(" — {method}"));
        }
        if let Some(volume) = self.present(Clause::TreatmentVolume, &treatment.volume_ml) {
            line.push_str(&format!(" ({volume} {VOLUME_UNIT})"));
        }
        if let Some(drug) = self.present(Clause::TreatmentDrug, &treatment.drug) {
            line.push_str(&format!(", {LABEL_DRUG}: {drug}"));
        }
        if let Some(dose) = self.present(Clause::TreatmentDose, &treatment.dose_mg_per_kg) {
            line.push_str(&format!(", {LABEL_DOSE}: {dose} {DOSE_UNIT}"));
        }
        if let Some(diet) = self.present(Clause::TreatmentDiet, &treatment.diet_type) {
            line.push_str(&format!(", {LABEL_DIET}: {diet}"));
        }
        if let Some(product) = self.present(Clause::TreatmentProduct, &treatment.product) {
            line.push_str(&format!(", {LABEL_PRODUCT}: {product}"));
        }

        line
    }

    fn home_care(&self, view: &CaseView<'_>) -> Section {
        let blocks = if view.home_care.is_empty() {
            vec![Block::Placeholder(NO_HOME_CARE.to_string())]
        } else {
            vec![Block::List(
                view.home_care
                    .iter()
                    .map(|h| self.home_care_item(h))
                    .collect(),
            )]
        };
        Section::new(SectionKind::HomeCare, Some(HEADING_HOME_CARE), blocks)
    }

    fn home_care_item(&self, care: &HomeCareInstruction) -> String {
        let mut line = or_missing(&care.instruction);

        if let Some(days) = self.present(Clause::HomeCareDuration, &care.duration_days) {
            line.push_str(&format!(", {LABEL_DURATION}: {days} {DAYS_UNIT}"));
        }
        if let Some(availability) =
            self.present(Clause::HomeCareAvailability, &care.availability)
        {
            line.push_str(&format!(", {LABEL_AVAILABILITY}: {availability}"));
        }

        line
    }

    fn follow_up(&self, view: &CaseView<'_>) -> Section {
        let follow_up = view.follow_up;
        let date = |clause: Clause, field: &Option<FieldValue>| {
            self.present(clause, field)
                .map(|v| short_date(v, self.config.date_format()))
                .unwrap_or_else(|| MISSING.to_string())
        };

        let range = format!(
            "{}{DATE_RANGE_SEPARATOR}{}",
            date(Clause::FollowUpStartDate, &follow_up.start_date),
            date(Clause::FollowUpEndDate, &follow_up.end_date)
        );

        Section::new(
            SectionKind::FollowUp,
            Some(HEADING_FOLLOW_UP),
            vec![
                Block::Paragraph(range),
                Block::Paragraph(or_missing(&follow_up.reason)),
            ],
        )
    }
}

fn or_missing(field: &Option<FieldValue>) -> String {
    field
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| MISSING.to_string())
}

fn or_empty(field: &Option<FieldValue>) -> String {
    field.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn is_flagged(field: &Option<FieldValue>) -> bool {
    field.as_ref().is_some_and(FieldValue::is_true)
}
