pub type WhorlResult<T> = Result<T, WhorlError>;

#[derive(thiserror::Error, Debug)]
pub enum WhorlError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("geometry error: {0}")]
    Geometry(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WhorlError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            WhorlError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            WhorlError::geometry("x")
                .to_string()
                .contains("geometry error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = WhorlError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
