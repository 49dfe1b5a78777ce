pub type StorydeckResult<T> = Result<T, StorydeckError>;

#[derive(thiserror::Error, Debug)]
pub enum StorydeckError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("compose error: {0}")]
    Compose(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StorydeckError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn compose(msg: impl Into<String>) -> Self {
        Self::Compose(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
