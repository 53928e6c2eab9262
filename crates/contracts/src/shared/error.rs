use thiserror::Error;

/// Failures of the profile contract layer
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid profile id: {0}")]
    InvalidId(String),

    #[error("malformed profile payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no profile is loaded")]
    NotLoaded,

    #[error("profile is not in edit mode")]
    NotEditing,

    #[error("a save is already in progress")]
    SaveInProgress,

    #[error("a file upload is still in progress")]
    UploadInProgress,
}
