//! Decision rule blueprint: cutoffs, defaults and the initial form draft.

/// Fixed cutoffs and user-overridable defaults used by the evaluator.
pub struct DecisionConfig {
    /// PE "Buy" threshold used when the user's value is blank, unparseable or zero.
    pub default_pe_threshold: f64,
    /// RSI "Buy" threshold used when the user's value is blank, unparseable or zero.
    pub default_rsi_threshold: f64,
    /// Above this PE the stock reads as overvalued. Not user-configurable.
    pub overvalued_pe: f64,
    /// At or above this RSI the stock reads as overbought. Not user-configurable.
    pub overbought_rsi: f64,
    pub rsi_min: f64,
    pub rsi_max: f64,
}

pub const DECISION: DecisionConfig = DecisionConfig {
    default_pe_threshold: 10.0,
    default_rsi_threshold: 32.0,
    overvalued_pe: 25.0,
    overbought_rsi: 70.0,
    rsi_min: 0.0,
    rsi_max: 100.0,
};

/// What the form shows on first launch (before any CLI prefill).
pub struct FormDefaults {
    pub pe_ratio: &'static str,
    pub rsi_ratio: &'static str,
    pub pe_threshold: &'static str,
    pub rsi_threshold: &'static str,
}

pub const FORM_DEFAULTS: FormDefaults = FormDefaults {
    pe_ratio: "15",
    rsi_ratio: "50",
    pe_threshold: "10",
    rsi_threshold: "32",
};
