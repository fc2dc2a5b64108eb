use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsdeckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data load error: {0}")]
    DataLoad(String),

    #[error("Data shape error: {0}")]
    DataShape(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
