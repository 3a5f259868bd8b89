use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommuteError {
    #[error("API key not found")]
    CredentialMissing,

    #[error("Origin or destination is not provided.")]
    BlankInput,

    #[error("Directions request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse directions response: {0}")]
    Parse(#[from] serde_json::Error),

    // Non-OK status reported by the directions service
    #[error("Directions not found (status {status})")]
    ApiStatus {
        status: String,
        message: Option<String>,
    },

    #[error("Unexpected directions response: {0}")]
    Lookup(String),
}
