use thiserror::Error;

/// Failures surfaced by the session controller and the web layer.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("players have not entered their names yet")]
    NotStarted,
    #[error("session already started")]
    AlreadyStarted,
    #[error("no entropy available for the dice: {0}")]
    Entropy(#[from] getrandom::Error),
    #[error("invalid board configuration: {0}")]
    Config(#[from] serde_json::Error),
}
