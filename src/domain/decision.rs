use strum_macros::Display;

/// Outcome category of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum DecisionType {
    Buy,
    NotBuy,
    NoDecision,
    Error,
}

/// Visual treatment for a result. Presentation only, carries no business meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum StyleTag {
    Buy,
    NotBuy,
    NoDecision,
    Error,
}

impl From<DecisionType> for StyleTag {
    fn from(decision_type: DecisionType) -> Self {
        match decision_type {
            DecisionType::Buy => Self::Buy,
            DecisionType::NotBuy => Self::NotBuy,
            DecisionType::NoDecision => Self::NoDecision,
            DecisionType::Error => Self::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionResult {
    pub decision_type: DecisionType,
    pub title: String,
    pub reason: String,
    pub style: StyleTag,
}

impl DecisionResult {
    /// Builds a result whose title is `headline`, prefixed by the company code when there is one.
    pub(crate) fn new(
        decision_type: DecisionType,
        code_display: Option<&str>,
        headline: &str,
        reason: String,
    ) -> Self {
        let title = match code_display {
            Some(code) => format!("{} {}", code, headline),
            None => headline.to_string(),
        };
        Self {
            decision_type,
            title,
            reason,
            style: decision_type.into(),
        }
    }
}

impl std::fmt::Display for DecisionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} | {}", self.decision_type, self.title, self.reason)
    }
}
