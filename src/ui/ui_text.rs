use {
    crate::{config::DECISION, domain::Sentiment},
    std::sync::LazyLock,
};

// Glyphs from egui's bundled emoji font
pub const ICON_BUY: &str = "✔";
pub const ICON_NOT_BUY: &str = "✖";
pub const ICON_NO_DECISION: &str = "❓";
pub const ICON_ERROR: &str = "⚠";
pub const ICON_CALCULATOR: &str = "🖩";
pub const ICON_PRINT: &str = "🖶";
pub const ICON_COG: &str = "⚙";
pub const ICON_NOTES: &str = "✍";

pub struct UiText {
    pub app_title: String,
    pub app_subtitle: String,

    // --- Form ---
    pub label_company_code: String,
    pub hint_company_code: String,
    pub label_pe: String,
    pub label_rsi: String,
    pub label_sentiment: String,
    pub sentiment_neutral: String,
    pub sentiment_positive: String,
    pub sentiment_negative: String,
    pub thresholds_heading: String,
    pub label_pe_threshold: String,
    pub label_rsi_threshold: String,
    pub label_notes: String,
    pub hint_notes: String,

    // --- Actions ---
    pub btn_decide: String,
    pub btn_print: String,
    pub hover_shortcuts: String,

    // --- Result ---
    pub result_notes_heading: String,

    // --- Print feedback ---
    pub print_saved: String,
    pub print_failed: String,

    pub footer_suffix: String,
}

impl UiText {
    pub fn sentiment_label(&self, sentiment: Sentiment) -> &str {
        match sentiment {
            Sentiment::Neutral => &self.sentiment_neutral,
            Sentiment::Positive => &self.sentiment_positive,
            Sentiment::Negative => &self.sentiment_negative,
        }
    }
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: format!("{} කොටස් ආයෝජන තීරක", ICON_CALCULATOR),
    app_subtitle: "Stock Investment Decider".to_string(),

    label_company_code: "සමාගම් කේතය (Company Code):".to_string(),
    hint_company_code: "උදා: LOLC, DIAL, NEST".to_string(),
    label_pe: "PE අනුපාතය (Price-to-Earnings):".to_string(),
    label_rsi: "RSI අනුපාතය (Relative Strength Index):".to_string(),
    label_sentiment: "ඔබගේ හැඟීම් (Your Sentiment):".to_string(),
    sentiment_neutral: "Neutral (මධ්‍යස්ථ)".to_string(),
    sentiment_positive: "Positive (ධනාත්මක / Bullish)".to_string(),
    sentiment_negative: "Negative (ඍණාත්මක / Bearish)".to_string(),
    thresholds_heading: format!("{} අභිරුචි තීරණ සීමාවන් (Custom Thresholds)", ICON_COG),
    label_pe_threshold: format!(
        "PE 'Buy' සීමාව (පහළ අගය - Default: {}):",
        DECISION.default_pe_threshold
    ),
    label_rsi_threshold: format!(
        "RSI 'Buy' සීමාව (පහළ අගය - Default: {}):",
        DECISION.default_rsi_threshold
    ),
    label_notes: "ආයෝජනයට අදාළ සටහන් / අවදානම් සාධක:".to_string(),
    hint_notes: "උදා: නව කළමනාකාරීත්වය හොඳයි, හෝ වෙළෙඳපොළ අවදානම ඉහළයි.".to_string(),

    btn_decide: "තීරණය ගන්න (Get Decision)".to_string(),
    btn_print: if cfg!(target_arch = "wasm32") {
        format!("{} මුද්‍රණය කරන්න / PDF ලෙස සුරකින්න", ICON_PRINT)
    } else {
        format!("{} මුද්‍රණය කරන්න / සුරකින්න (Print / Save)", ICON_PRINT)
    },
    hover_shortcuts: "Ctrl+Enter: Get Decision   Ctrl+P: Print / Save".to_string(),

    result_notes_heading: format!("{} සටහන (Notes):", ICON_NOTES),

    print_saved: "Report saved:".to_string(),
    print_failed: "Could not save report:".to_string(),

    footer_suffix: "Stock Investment Decider".to_string(),
});
