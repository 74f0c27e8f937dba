use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown contract identity '{name}'{}", did_you_mean(.suggestion))]
    UnknownIdentity {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("Unknown network: {0}")]
    UnknownNetwork(u64),

    #[error("Artifact error for shape '{shape}': {source}")]
    Artifact {
        shape: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, RegistryError>;
