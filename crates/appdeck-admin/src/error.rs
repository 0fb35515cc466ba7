use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Duplicate slug: '{0}' already exists on the board")]
    DuplicateSlug(String),

    #[error("Unknown slug: '{0}' is not on the board")]
    UnknownSlug(String),
}

impl BoardError {
    pub fn duplicate_slug(slug: impl Into<String>) -> Self {
        Self::DuplicateSlug(slug.into())
    }

    pub fn unknown_slug(slug: impl Into<String>) -> Self {
        Self::UnknownSlug(slug.into())
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(
            BoardError::duplicate_slug("timer")
                .to_string()
                .contains("'timer'")
        );
        assert!(
            BoardError::unknown_slug("ghost")
                .to_string()
                .contains("'ghost'")
        );
    }
}
