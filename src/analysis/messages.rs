//! Bilingual (Sinhala / English) titles and reasons for decision results.

use crate::{analysis::format_number, config::DECISION, domain::ValidationError};

pub(crate) const TITLE_ERROR: &str = "දෝෂයකි (Error)";
pub(crate) const TITLE_BUY: &str = "✅ BUY (මිල දී ගන්න)";
pub(crate) const TITLE_NOT_BUY: &str = "❌ Not Buy (මිල දී නොගන්න)";
pub(crate) const TITLE_NO_DECISION: &str = "⚠ No Decision (තීරණයක් නැත)";

pub(crate) fn validation_reason(err: &ValidationError) -> String {
    match err {
        ValidationError::InvalidPe => format!(
            "PE අනුපාතය නිවැරදිව ඇතුළත් කරන්න (0 ට වඩා වැඩි විය යුතුයි). ({})",
            err
        ),
        ValidationError::InvalidRsi => format!(
            "RSI අනුපාතය {} ත් {} ත් අතර විය යුතුය. ({})",
            DECISION.rsi_min, DECISION.rsi_max, err
        ),
    }
}

pub(crate) fn strong_buy_reason(pe_threshold: f64, rsi_threshold: f64) -> String {
    format!(
        "PE අනුපාතය ({pe} ට අඩු) සහ RSI අනුපාතය ({rsi} ට අඩු) වේ. (PE below {pe} and RSI below {rsi}.)",
        pe = format_number(pe_threshold),
        rsi = format_number(rsi_threshold),
    )
}

pub(crate) fn strong_not_buy_reason() -> String {
    format!(
        "PE අනුපාතය ({pe} ට වැඩි - Overvalued) සහ RSI අනුපාතය ({rsi} ට වැඩි - Overbought) වේ.",
        pe = DECISION.overvalued_pe,
        rsi = DECISION.overbought_rsi,
    )
}

pub(crate) fn sentiment_buy_reason() -> String {
    "මධ්‍යස්ථ තාක්ෂණික දත්ත; ඔබේ හැඟීම් (Positive) හේතුවෙන් Buy. (Neutral technicals, Buy on positive sentiment.)".to_string()
}

pub(crate) fn sentiment_not_buy_reason() -> String {
    "මධ්‍යස්ථ තාක්ෂණික දත්ත; ඔබේ හැඟීම් (Negative) හේතුවෙන් Not Buy. (Neutral technicals, Not Buy on negative sentiment.)".to_string()
}

pub(crate) fn neutral_reason() -> String {
    "මධ්‍යස්ථ තාක්ෂණික දත්ත සහ මධ්‍යස්ථ හැඟීම් (Neutral). (Neutral technicals and neutral sentiment.)".to_string()
}

pub(crate) fn mixed_reason() -> String {
    "දත්ත මිශ්‍රයි, පැහැදිලි තීරණයක් නැත. පරීක්ෂා කරන්න. (Mixed data, inspect manually.)".to_string()
}
