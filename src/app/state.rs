// src/app/state.rs

use {
    crate::{
        analysis::{conclude, validate},
        config::DF,
        domain::{DecisionResult, FormField, ScreeningInput},
    },
    std::path::PathBuf,
};

/// Which numeric fields to highlight after a failed evaluation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldErrors {
    pub(crate) pe: bool,
    pub(crate) rsi: bool,
}

impl FieldErrors {
    pub(crate) fn any(&self) -> bool {
        self.pe || self.rsi
    }

    pub(crate) fn flag(&mut self, field: FormField) {
        match field {
            FormField::PeRatio => self.pe = true,
            FormField::RsiRatio => self.rsi = true,
            _ => {}
        }
    }

    pub(crate) fn is_flagged(&self, field: FormField) -> bool {
        match field {
            FormField::PeRatio => self.pe,
            FormField::RsiRatio => self.rsi,
            _ => false,
        }
    }
}

/// The mutable side of the form: draft, last result and field highlights.
/// The evaluator itself stays pure; all mutation happens here.
#[derive(Debug, Default, Clone)]
pub(crate) struct FormState {
    pub(crate) draft: ScreeningInput,
    pub(crate) result: Option<DecisionResult>,
    pub(crate) errors: FieldErrors,
}

impl FormState {
    pub(crate) fn new(draft: ScreeningInput) -> Self {
        Self {
            draft,
            ..Default::default()
        }
    }

    /// Any edit clears every field highlight, whichever field was touched.
    pub(crate) fn edited(&mut self, field: FormField) {
        if DF.log_form_edits {
            log::info!("Edited {} (clearing errors: {})", field, self.errors.any());
        }

        if self.errors.any() {
            self.errors = FieldErrors::default();
        }
    }

    /// Evaluates the current draft, replacing any previous result.
    pub(crate) fn submit(&mut self) -> &DecisionResult {
        let validated = validate(&self.draft);
        if let Err(err) = &validated {
            self.errors.flag(err.field());
        }
        self.result.insert(conclude(&self.draft, validated))
    }
}

/// Feedback line under the action buttons after "Print / Save".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub(crate) enum PrintOutcome {
    Saved(PathBuf),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::domain::{DecisionType, Sentiment},
    };

    #[test]
    fn invalid_pe_flags_only_pe() {
        let mut form = FormState::default();
        form.draft.pe_ratio = "-2".to_string();

        let result = form.submit().clone();
        assert_eq!(result.decision_type, DecisionType::Error);
        assert_eq!(form.errors, FieldErrors { pe: true, rsi: false });
        assert!(form.errors.is_flagged(FormField::PeRatio));
        assert!(!form.errors.is_flagged(FormField::Notes));
    }

    #[test]
    fn any_edit_clears_all_flags() {
        let mut form = FormState::default();
        form.draft.rsi_ratio = "101".to_string();
        form.submit();
        assert!(form.errors.rsi);

        // Notes has nothing to do with RSI but still resets the highlight.
        form.edited(FormField::Notes);
        assert!(!form.errors.any());
        // The stale result stays on screen until the next submit.
        assert_eq!(
            form.result.as_ref().map(|r| r.decision_type),
            Some(DecisionType::Error)
        );
    }

    #[test]
    fn flags_accumulate_until_an_edit() {
        let mut form = FormState::default();
        form.draft.pe_ratio = "x".to_string();
        form.submit();

        // Fix PE directly (no edit notification), break RSI, submit again.
        form.draft.pe_ratio = "12".to_string();
        form.draft.rsi_ratio = "x".to_string();
        form.submit();
        assert_eq!(form.errors, FieldErrors { pe: true, rsi: true });
    }

    #[test]
    fn submit_replaces_previous_result() {
        let mut form = FormState::new(ScreeningInput {
            pe_ratio: "15".to_string(),
            rsi_ratio: "40".to_string(),
            sentiment: Sentiment::Positive,
            ..Default::default()
        });
        assert_eq!(form.submit().decision_type, DecisionType::Buy);

        form.draft.sentiment = Sentiment::Negative;
        form.edited(FormField::Sentiment);
        assert_eq!(form.submit().decision_type, DecisionType::NotBuy);
        assert!(!form.errors.any());
    }
}
