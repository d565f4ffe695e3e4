//! Veterinary case record model.
//!
//! Every field is optional and every nested structure is deserialised through the helpers in
//! [`crate::lenient`], so any JSON mapping produces a `CaseRecord`. Fields of the wrong shape read
//! as `None`; deciding what `None` means for display is left to [`crate::view`].

use crate::lenient;
use case_types::FieldValue;
use serde::{Deserialize, Serialize};

/// Root of a patient case.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct CaseRecord {
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub animal: Option<Animal>,

    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub visit: Option<Visit>,

    #[serde(default, deserialize_with = "lenient::sequence", skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<Symptom>>,

    #[serde(default, deserialize_with = "lenient::sequence", skip_serializing_if = "Option::is_none")]
    pub diagnoses: Option<Vec<Diagnosis>>,

    #[serde(default, deserialize_with = "lenient::sequence", skip_serializing_if = "Option::is_none")]
    pub differential_diagnoses: Option<Vec<DifferentialDiagnosis>>,

    #[serde(default, deserialize_with = "lenient::sequence", skip_serializing_if = "Option::is_none")]
    pub treatments: Option<Vec<Treatment>>,

    #[serde(default, deserialize_with = "lenient::sequence", skip_serializing_if = "Option::is_none")]
    pub home_care: Option<Vec<HomeCareInstruction>>,

    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<FollowUp>,
}

/// Patient identity.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Animal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_years: Option<FieldValue>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Visit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_report: Option<FieldValue>,

    #[serde(default, deserialize_with = "lenient::sequence", skip_serializing_if = "Option::is_none")]
    pub exam_findings: Option<Vec<Finding>>,
}

/// One clinical exam observation.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Finding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_level: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_range: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present: Option<FieldValue>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Symptom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_per_day: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_level: Option<FieldValue>,
    /// Fraction in `[0, 1]`, shown as a whole percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certainty_level: Option<FieldValue>,
    /// Free-form frequency description, independent of `frequency_per_day`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present: Option<FieldValue>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Diagnosis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    /// Nominal scale 0-3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_level: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub lethality_rate_percent: Option<LethalityRate>,
    #[serde(default, deserialize_with = "lenient::values", skip_serializing_if = "Option::is_none")]
    pub suspected_causes: Option<Vec<FieldValue>>,
    /// Name of another diagnosis this one follows from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_to: Option<FieldValue>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct LethalityRate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub untreated: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treated: Option<FieldValue>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DifferentialDiagnosis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_percent: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<FieldValue>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Treatment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_ml: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drug: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose_mg_per_kg: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<FieldValue>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct HomeCareInstruction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<FieldValue>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FollowUp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<FieldValue>,
}
