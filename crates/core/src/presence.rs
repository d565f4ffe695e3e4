//! Presence rules for optional clauses.
//!
//! Each optional piece of output (a clause appended to a list item, an optional line, an optional
//! section) is identified by a [`Clause`]. Whether a field "is there" is decided by the
//! [`PresenceRule`] assigned to that clause in a [`PresencePolicy`].
//!
//! The `legacy` policy reproduces the historical output, where some clauses test definedness and
//! others test truthiness. Under truthiness a meaningful zero (`volume_ml: 0`) is hidden; the
//! `defined` policy shows it.

use case_types::FieldValue;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// How a clause decides whether its source field is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceRule {
    /// Present when the field exists and is not `null`.
    Defined,
    /// Present when the field is defined and not `""`, `0`, `NaN` or `false`.
    Truthy,
}

impl PresenceRule {
    pub fn admits(self, value: Option<&FieldValue>) -> bool {
        match self {
            Self::Defined => value.is_some(),
            Self::Truthy => value.is_some_and(FieldValue::is_truthy),
        }
    }
}

/// Every optional clause the presenter can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Clause {
    OwnerReport,
    FindingSeverity,
    FindingValue,
    FindingNormalRange,
    SymptomFrequencyPerDay,
    SymptomDuration,
    SymptomIntensity,
    SymptomCertainty,
    SymptomFrequencyText,
    DiagnosisLethalityUntreated,
    DiagnosisLethalityTreated,
    DiagnosisSecondaryTo,
    DifferentialProbability,
    DifferentialDetail,
    TreatmentMethod,
    TreatmentVolume,
    TreatmentDrug,
    TreatmentDose,
    TreatmentDiet,
    TreatmentProduct,
    HomeCareDuration,
    HomeCareAvailability,
    FollowUpStartDate,
    FollowUpEndDate,
}

impl Clause {
    pub const ALL: [Clause; 24] = [
        Clause::OwnerReport,
        Clause::FindingSeverity,
        Clause::FindingValue,
        Clause::FindingNormalRange,
        Clause::SymptomFrequencyPerDay,
        Clause::SymptomDuration,
        Clause::SymptomIntensity,
        Clause::SymptomCertainty,
        Clause::SymptomFrequencyText,
        Clause::DiagnosisLethalityUntreated,
        Clause::DiagnosisLethalityTreated,
        Clause::DiagnosisSecondaryTo,
        Clause::DifferentialProbability,
        Clause::DifferentialDetail,
        Clause::TreatmentMethod,
        Clause::TreatmentVolume,
        Clause::TreatmentDrug,
        Clause::TreatmentDose,
        Clause::TreatmentDiet,
        Clause::TreatmentProduct,
        Clause::HomeCareDuration,
        Clause::HomeCareAvailability,
        Clause::FollowUpStartDate,
        Clause::FollowUpEndDate,
    ];

    /// Rule used by the historical renderer.
    pub const fn legacy_rule(self) -> PresenceRule {
        match self {
            Clause::OwnerReport
            | Clause::FindingNormalRange
            | Clause::DiagnosisSecondaryTo
            | Clause::DifferentialDetail
            | Clause::TreatmentMethod
            | Clause::TreatmentVolume
            | Clause::TreatmentDrug
            | Clause::TreatmentDose
            | Clause::TreatmentDiet
            | Clause::TreatmentProduct
            | Clause::HomeCareDuration
            | Clause::HomeCareAvailability
            | Clause::FollowUpStartDate
            | Clause::FollowUpEndDate => PresenceRule::Truthy,
            _ => PresenceRule::Defined,
        }
    }

    /// Snake-case identifier, as used in serialised output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Clause::OwnerReport => "owner_report",
            Clause::FindingSeverity => "finding_severity",
            Clause::FindingValue => "finding_value",
            Clause::FindingNormalRange => "finding_normal_range",
            Clause::SymptomFrequencyPerDay => "symptom_frequency_per_day",
            Clause::SymptomDuration => "symptom_duration",
            Clause::SymptomIntensity => "symptom_intensity",
            Clause::SymptomCertainty => "symptom_certainty",
            Clause::SymptomFrequencyText => "symptom_frequency_text",
            Clause::DiagnosisLethalityUntreated => "diagnosis_lethality_untreated",
            Clause::DiagnosisLethalityTreated => "diagnosis_lethality_treated",
            Clause::DiagnosisSecondaryTo => "diagnosis_secondary_to",
            Clause::DifferentialProbability => "differential_probability",
            Clause::DifferentialDetail => "differential_detail",
            Clause::TreatmentMethod => "treatment_method",
            Clause::TreatmentVolume => "treatment_volume",
            Clause::TreatmentDrug => "treatment_drug",
            Clause::TreatmentDose => "treatment_dose",
            Clause::TreatmentDiet => "treatment_diet",
            Clause::TreatmentProduct => "treatment_product",
            Clause::HomeCareDuration => "home_care_duration",
            Clause::HomeCareAvailability => "home_care_availability",
            Clause::FollowUpStartDate => "follow_up_start_date",
            Clause::FollowUpEndDate => "follow_up_end_date",
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named starting points for a [`PresencePolicy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolicyPreset {
    /// Historical mix of definedness and truthiness.
    #[default]
    Legacy,
    /// Definedness everywhere.
    Defined,
}

impl FromStr for PolicyPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "defined" => Ok(Self::Defined),
            other => Err(format!(
                "unknown presence policy '{other}' (expected 'legacy' or 'defined')"
            )),
        }
    }
}

/// Per-clause presence rules. Clauses without an override use the preset's rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PresencePolicy {
    preset: PolicyPreset,
    overrides: BTreeMap<Clause, PresenceRule>,
}

impl PresencePolicy {
    pub fn legacy() -> Self {
        Self::from_preset(PolicyPreset::Legacy)
    }

    pub fn defined() -> Self {
        Self::from_preset(PolicyPreset::Defined)
    }

    pub fn from_preset(preset: PolicyPreset) -> Self {
        Self {
            preset,
            overrides: BTreeMap::new(),
        }
    }

    /// Replaces the rule for a single clause.
    pub fn with_rule(mut self, clause: Clause, rule: PresenceRule) -> Self {
        self.overrides.insert(clause, rule);
        self
    }

    pub fn rule(&self, clause: Clause) -> PresenceRule {
        if let Some(rule) = self.overrides.get(&clause) {
            return *rule;
        }
        match self.preset {
            PolicyPreset::Legacy => clause.legacy_rule(),
            PolicyPreset::Defined => PresenceRule::Defined,
        }
    }

    /// Applies the clause's rule to a field.
    pub fn admits(&self, clause: Clause, value: Option<&FieldValue>) -> bool {
        self.rule(clause).admits(value)
    }

    /// Every clause paired with its effective rule, in declaration order.
    pub fn rules(&self) -> Vec<(Clause, PresenceRule)> {
        Clause::ALL
            .iter()
            .map(|clause| (*clause, self.rule(*clause)))
            .collect()
    }
}
