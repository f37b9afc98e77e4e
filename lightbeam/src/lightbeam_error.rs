use thiserror::Error;

/// Things that can go wrong when setting up or driving a pointer
#[derive(Error, Debug)]
pub enum LightbeamError {
    /// A pointer configuration value is outside its documented range
    #[error("The pointer configuration is invalid: {0}")]
    InvalidConfigurationError(&'static str),
    /// Something else went wrong
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
