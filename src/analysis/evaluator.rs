use crate::{
    analysis::{
        messages,
        parse::{parse_leading_number, resolve_threshold},
    },
    config::{DECISION, DF},
    domain::{DecisionResult, DecisionType, ScreeningInput, Sentiment, ValidationError},
};

/// PE and RSI after parsing and range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub pe: f64,
    pub rsi: f64,
}

/// Thresholds actually used for a decision (user value or default).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedThresholds {
    pub pe: f64,
    pub rsi: f64,
}

impl ResolvedThresholds {
    pub fn from_input(input: &ScreeningInput) -> Self {
        Self {
            pe: resolve_threshold(&input.pe_threshold, DECISION.default_pe_threshold),
            rsi: resolve_threshold(&input.rsi_threshold, DECISION.default_rsi_threshold),
        }
    }
}

/// Which branch of the rule produced the decision. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    StrongBuy,
    StrongNotBuy,
    SentimentZone,
    Fallback,
}

impl Branch {
    fn select(ratios: Ratios, thresholds: ResolvedThresholds) -> Self {
        let Ratios { pe, rsi } = ratios;
        if pe < thresholds.pe && rsi < thresholds.rsi {
            Self::StrongBuy
        } else if pe > DECISION.overvalued_pe && rsi >= DECISION.overbought_rsi {
            Self::StrongNotBuy
        } else if pe >= thresholds.pe
            && pe <= DECISION.overvalued_pe
            && rsi >= thresholds.rsi
            && rsi < DECISION.overbought_rsi
        {
            Self::SentimentZone
        } else {
            Self::Fallback
        }
    }
}

/// Parses and range-checks PE then RSI. The first failure wins.
pub fn validate(input: &ScreeningInput) -> Result<Ratios, ValidationError> {
    let pe = parse_leading_number(&input.pe_ratio)
        .filter(|&pe| pe > 0.0)
        .ok_or(ValidationError::InvalidPe)?;

    let rsi = parse_leading_number(&input.rsi_ratio)
        .filter(|rsi| (DECISION.rsi_min..=DECISION.rsi_max).contains(rsi))
        .ok_or(ValidationError::InvalidRsi)?;

    Ok(Ratios { pe, rsi })
}

/// Evaluates one draft into a recommendation. Pure: same input, same output.
pub fn evaluate(input: &ScreeningInput) -> DecisionResult {
    conclude(input, validate(input))
}

/// Turns an already-computed validation outcome into a result.
/// Lets callers that need the `ValidationError` (to flag form fields) avoid parsing twice.
pub fn conclude(
    input: &ScreeningInput,
    validated: Result<Ratios, ValidationError>,
) -> DecisionResult {
    let code = input.code_display();
    let code = code.as_deref();

    let ratios = match validated {
        Ok(ratios) => ratios,
        Err(err) => {
            if DF.log_decisions {
                log::info!("Rejected input {:?}: {}", input.company_code, err);
            }
            return DecisionResult::new(
                DecisionType::Error,
                code,
                messages::TITLE_ERROR,
                messages::validation_reason(&err),
            );
        }
    };

    let thresholds = ResolvedThresholds::from_input(input);
    let branch = Branch::select(ratios, thresholds);

    if DF.log_decisions {
        log::info!(
            "Decision {:?}: pe={} rsi={} thresholds=({}, {}) sentiment={} -> {:?}",
            input.company_code,
            ratios.pe,
            ratios.rsi,
            thresholds.pe,
            thresholds.rsi,
            input.sentiment,
            branch
        );
    }

    let (decision_type, headline, reason) = match branch {
        Branch::StrongBuy => (
            DecisionType::Buy,
            messages::TITLE_BUY,
            messages::strong_buy_reason(thresholds.pe, thresholds.rsi),
        ),
        Branch::StrongNotBuy => (
            DecisionType::NotBuy,
            messages::TITLE_NOT_BUY,
            messages::strong_not_buy_reason(),
        ),
        Branch::SentimentZone => match input.sentiment {
            Sentiment::Positive => (
                DecisionType::Buy,
                messages::TITLE_BUY,
                messages::sentiment_buy_reason(),
            ),
            Sentiment::Negative => (
                DecisionType::NotBuy,
                messages::TITLE_NOT_BUY,
                messages::sentiment_not_buy_reason(),
            ),
            Sentiment::Neutral => (
                DecisionType::NoDecision,
                messages::TITLE_NO_DECISION,
                messages::neutral_reason(),
            ),
        },
        Branch::Fallback => (
            DecisionType::NoDecision,
            messages::TITLE_NO_DECISION,
            messages::mixed_reason(),
        ),
    };

    DecisionResult::new(decision_type, code, headline, reason)
}
