use {crate::domain::FormField, thiserror::Error};

/// Why an input could not be evaluated. Always terminal for that attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("PE must be valid and > 0")]
    InvalidPe,
    #[error("RSI must be between 0 and 100")]
    InvalidRsi,
}

impl ValidationError {
    /// The form field to highlight.
    pub fn field(&self) -> FormField {
        match self {
            Self::InvalidPe => FormField::PeRatio,
            Self::InvalidRsi => FormField::RsiRatio,
        }
    }
}
