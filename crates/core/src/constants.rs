//! Constants used throughout the vetcase core crate.
//!
//! Display strings are fixed Finnish literals. They live here so the presenter and its tests
//! agree on the exact wording.

/// Default case file read by the run binary when no path is configured.
pub const DEFAULT_CASE_FILE: &str = "data/patient.json";

/// Default chrono pattern for short dates (Finnish `d.m.yyyy`).
pub const DEFAULT_DATE_FORMAT: &str = "%-d.%-m.%Y";

/// Rendered in place of any missing scalar that has a default.
pub const MISSING: &str = "-";

/// Separator between the follow-up start and end dates.
pub const DATE_RANGE_SEPARATOR: &str = " – ";

/// Upper bound of the nominal diagnosis severity scale.
pub const SEVERITY_SCALE_MAX: u8 = 3;

/// Sole output when no record is supplied.
pub const NO_DATA_NOTICE: &str = "Ei potilastietoja löytynyt.";

/// Unit after the animal age in the header subtitle.
pub const AGE_UNIT: &str = "vuotta";

/// Heading of the owner's report section.
pub const HEADING_OWNER_REPORT: &str = "Omistajan kertomus";

/// Heading of the clinical findings section.
pub const HEADING_FINDINGS: &str = "Kliiniset havainnot";

/// Heading of the symptoms section.
pub const HEADING_SYMPTOMS: &str = "Oireet";

/// Heading of the diagnoses section.
pub const HEADING_DIAGNOSES: &str = "Diagnoosit";

/// Heading of the differential diagnoses section.
pub const HEADING_DIFFERENTIALS: &str = "Erotusdiagnoosit";

/// Heading of the treatments section.
pub const HEADING_TREATMENTS: &str = "Hoidot";

/// Heading of the home care section.
pub const HEADING_HOME_CARE: &str = "Kotihoito";

/// Heading of the follow-up section.
pub const HEADING_FOLLOW_UP: &str = "Kontrolli";

/// Placeholder when the record lists no diagnoses.
pub const NO_DIAGNOSES: &str = "Ei diagnooseja.";

/// Placeholder when the record lists no treatments.
pub const NO_TREATMENTS: &str = "Ei hoitoja.";

/// Placeholder when the record lists no home care instructions.
pub const NO_HOME_CARE: &str = "Ei kotihoito-ohjeita.";

/// Finding severity label.
pub const LABEL_SEVERITY: &str = "vaikeusaste";

/// Finding measured value label.
pub const LABEL_VALUE: &str = "arvo";

/// Finding normal range label.
pub const LABEL_NORMAL_RANGE: &str = "normaali";

/// Suffix for a finding flagged as present.
pub const FINDING_PRESENT: &str = "löydös";

/// Symptom frequency label.
pub const LABEL_FREQUENCY: &str = "tiheys";

/// Unit after a symptom frequency.
pub const PER_DAY_UNIT: &str = "/vrk";

/// Symptom duration label.
pub const LABEL_DURATION: &str = "kesto";

/// Unit after a symptom duration.
pub const SECONDS_UNIT: &str = "sekuntia";

/// Symptom intensity label.
pub const LABEL_INTENSITY: &str = "voimakkuus";

/// Symptom certainty label.
pub const LABEL_CERTAINTY: &str = "varmuus";

/// Suffix for a symptom flagged as present.
pub const SYMPTOM_PRESENT: &str = "esiintyy";

/// Diagnosis severity line label.
pub const LABEL_DIAGNOSIS_SEVERITY: &str = "Vaikeusaste";

/// Diagnosis lethality without treatment.
pub const LABEL_LETHALITY_UNTREATED: &str = "Kuolleisuus hoitamattomana";

/// Diagnosis lethality with treatment.
pub const LABEL_LETHALITY_TREATED: &str = "Kuolleisuus hoidettuna";

/// Diagnosis suspected causes label.
pub const LABEL_SUSPECTED_CAUSES: &str = "Mahdolliset syyt";

/// Label for the disease a diagnosis is secondary to.
pub const LABEL_SECONDARY_TO: &str = "Toissijainen tautiin";

/// Differential diagnosis probability label.
pub const LABEL_PROBABILITY: &str = "todennäköisyys";

/// Treatment drug label.
pub const LABEL_DRUG: &str = "lääke";

/// Treatment dose label.
pub const LABEL_DOSE: &str = "annos";

/// Unit after a treatment dose.
pub const DOSE_UNIT: &str = "mg/kg";

/// Unit after a treatment volume.
pub const VOLUME_UNIT: &str = "ml";

/// Home care diet label.
pub const LABEL_DIET: &str = "ruokavalio";

/// Home care product label.
pub const LABEL_PRODUCT: &str = "tuote";

/// Unit after a home care duration.
pub const DAYS_UNIT: &str = "päivää";

/// Home care product availability label.
pub const LABEL_AVAILABILITY: &str = "saatavuus";
