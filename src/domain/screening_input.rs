use {
    crate::{config::FORM_DEFAULTS, domain::Sentiment},
    strum_macros::Display,
};

/// Identifies one editable field of the screening form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FormField {
    CompanyCode,
    PeRatio,
    RsiRatio,
    Sentiment,
    PeThreshold,
    RsiThreshold,
    Notes,
}

/// The form draft exactly as typed. Numeric fields stay as text until evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningInput {
    pub company_code: String,
    pub pe_ratio: String,
    pub rsi_ratio: String,
    pub sentiment: Sentiment,
    pub pe_threshold: String,
    pub rsi_threshold: String,
    pub notes: String,
}

impl Default for ScreeningInput {
    fn default() -> Self {
        Self {
            company_code: String::new(),
            pe_ratio: FORM_DEFAULTS.pe_ratio.to_string(),
            rsi_ratio: FORM_DEFAULTS.rsi_ratio.to_string(),
            sentiment: Sentiment::default(),
            pe_threshold: FORM_DEFAULTS.pe_threshold.to_string(),
            rsi_threshold: FORM_DEFAULTS.rsi_threshold.to_string(),
            notes: String::new(),
        }
    }
}

impl ScreeningInput {
    /// Uppercased, parenthesized company code, e.g. "(LOLC)". None when blank.
    pub fn code_display(&self) -> Option<String> {
        let code = self.company_code.trim();
        if code.is_empty() {
            None
        } else {
            Some(format!("({})", code.to_uppercase()))
        }
    }

    /// Notes worth showing under the result: the text as typed, but only if it isn't blank.
    pub fn visible_notes(&self) -> Option<&str> {
        if self.notes.trim().is_empty() {
            None
        } else {
            Some(&self.notes)
        }
    }

    /// Mutable access to a free-text field. `Sentiment` is not text, so it yields None.
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::CompanyCode => Some(&mut self.company_code),
            FormField::PeRatio => Some(&mut self.pe_ratio),
            FormField::RsiRatio => Some(&mut self.rsi_ratio),
            FormField::PeThreshold => Some(&mut self.pe_threshold),
            FormField::RsiThreshold => Some(&mut self.rsi_threshold),
            FormField::Notes => Some(&mut self.notes),
            FormField::Sentiment => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_matches_first_launch_form() {
        let input = ScreeningInput::default();
        assert_eq!(input.company_code, "");
        assert_eq!(input.pe_ratio, "15");
        assert_eq!(input.rsi_ratio, "50");
        assert_eq!(input.sentiment, Sentiment::Neutral);
        assert_eq!(input.pe_threshold, "10");
        assert_eq!(input.rsi_threshold, "32");
        assert_eq!(input.notes, "");
    }

    #[test]
    fn code_display_trims_and_uppercases() {
        let mut input = ScreeningInput::default();
        assert_eq!(input.code_display(), None);

        input.company_code = "   ".to_string();
        assert_eq!(input.code_display(), None);

        input.company_code = " lolc ".to_string();
        assert_eq!(input.code_display().as_deref(), Some("(LOLC)"));
    }

    #[test]
    fn blank_notes_are_hidden() {
        let mut input = ScreeningInput::default();
        assert_eq!(input.visible_notes(), None);

        input.notes = " \n\t ".to_string();
        assert_eq!(input.visible_notes(), None);

        input.notes = "  new management\n".to_string();
        assert_eq!(input.visible_notes(), Some("  new management\n"));
    }

    #[test]
    fn text_mut_reaches_each_text_field() {
        let mut input = ScreeningInput::default();
        if let Some(pe) = input.text_mut(FormField::PeRatio) {
            pe.push('0');
        }
        assert_eq!(input.pe_ratio, "150");
        assert!(input.text_mut(FormField::Sentiment).is_none());
    }
}
