//! Normalised safe view over a case record.
//!
//! The presenter never inspects `Option`s on the record's nested structures directly. It first
//! builds a [`CaseView`], in which every nested object is present (defaulted to empty) and every
//! collection is a slice (defaulted to empty). Only leaf fields remain optional.

use crate::record::{
    Animal, CaseRecord, Diagnosis, DifferentialDiagnosis, Finding, FollowUp, HomeCareInstruction,
    Symptom, Treatment, Visit,
};
use serde::Serialize;

static EMPTY_ANIMAL: Animal = Animal {
    name: None,
    species: None,
    sex: None,
    age_years: None,
};

static EMPTY_VISIT: Visit = Visit {
    owner_report: None,
    exam_findings: None,
};

static EMPTY_FOLLOW_UP: FollowUp = FollowUp {
    start_date: None,
    end_date: None,
    reason: None,
};

/// Borrowed, fully defaulted projection of a [`CaseRecord`].
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct CaseView<'a> {
    pub animal: &'a Animal,
    pub visit: &'a Visit,
    pub exam_findings: &'a [Finding],
    pub symptoms: &'a [Symptom],
    pub diagnoses: &'a [Diagnosis],
    pub differential_diagnoses: &'a [DifferentialDiagnosis],
    pub treatments: &'a [Treatment],
    pub home_care: &'a [HomeCareInstruction],
    pub follow_up: &'a FollowUp,
}

impl<'a> CaseView<'a> {
    /// Builds the view, substituting empty defaults for every absent structure.
    pub fn new(record: &'a CaseRecord) -> Self {
        let visit = record.visit.as_ref().unwrap_or(&EMPTY_VISIT);

        Self {
            animal: record.animal.as_ref().unwrap_or(&EMPTY_ANIMAL),
            visit,
            exam_findings: visit.exam_findings.as_deref().unwrap_or_default(),
            symptoms: record.symptoms.as_deref().unwrap_or_default(),
            diagnoses: record.diagnoses.as_deref().unwrap_or_default(),
            differential_diagnoses: record
                .differential_diagnoses
                .as_deref()
                .unwrap_or_default(),
            treatments: record.treatments.as_deref().unwrap_or_default(),
            home_care: record.home_care.as_deref().unwrap_or_default(),
            follow_up: record.follow_up.as_ref().unwrap_or(&EMPTY_FOLLOW_UP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_types::FieldValue;
    use serde_json::json;

    #[test]
    fn defaults_every_structure_for_empty_record() {
        let record = CaseRecord::default();
        let view = CaseView::new(&record);

        assert_eq!(view.animal, &Animal::default());
        assert_eq!(view.visit, &Visit::default());
        assert!(view.exam_findings.is_empty());
        assert!(view.symptoms.is_empty());
        assert!(view.diagnoses.is_empty());
        assert!(view.differential_diagnoses.is_empty());
        assert!(view.treatments.is_empty());
        assert!(view.home_care.is_empty());
        assert_eq!(view.follow_up, &FollowUp::default());
    }

    #[test]
    fn exam_findings_come_from_the_visit() {
        let record: CaseRecord = serde_json::from_value(json!({
            "visit": {"exam_findings": [{"name": "Fever"}, {"name": "Dehydration"}]}
        }))
        .unwrap();
        let view = CaseView::new(&record);

        assert_eq!(view.exam_findings.len(), 2);
        assert_eq!(view.exam_findings[1].name, Some(FieldValue::from("Dehydration")));
    }

    #[test]
    fn malformed_collections_view_as_empty() {
        let record: CaseRecord = serde_json::from_value(json!({
            "visit": {"exam_findings": "n/a"},
            "symptoms": {"name": "cough"},
            "home_care": null,
        }))
        .unwrap();
        let view = CaseView::new(&record);

        assert!(view.exam_findings.is_empty());
        assert!(view.symptoms.is_empty());
        assert!(view.home_care.is_empty());
    }

    #[test]
    fn serialises_with_defaults_filled_in() {
        let record = CaseRecord::default();
        let value = serde_json::to_value(CaseView::new(&record)).unwrap();
        assert_eq!(value["animal"], json!({}));
        assert_eq!(value["diagnoses"], json!([]));
        assert_eq!(value["follow_up"], json!({}));
    }
}
