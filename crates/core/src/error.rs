#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read case file: {0}")]
    FileRead(std::io::Error),
    #[error("invalid JSON: {0}")]
    InvalidJson(serde_json::Error),
    #[error("invalid YAML: {0}")]
    InvalidYaml(serde_yaml::Error),
    #[error("unsupported case file format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to serialize document: {0}")]
    Serialization(serde_json::Error),
}

pub type CaseResult<T> = std::result::Result<T, CaseError>;
