use {
    crate::{
        app::FormState,
        domain::{FormField, Sentiment},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    },
    eframe::egui::{ComboBox, RichText, TextEdit, Ui},
    strum::IntoEnumIterator,
};

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormAction {
    Evaluate,
    Print,
}

/// Draws the whole input form. Every edit goes through `FormState::edited`.
pub(crate) fn render_form(ui: &mut Ui, form: &mut FormState) -> Option<FormAction> {
    text_row(
        ui,
        form,
        FormField::CompanyCode,
        &UI_TEXT.label_company_code,
        &UI_TEXT.hint_company_code,
    );

    ui.columns(2, |cols| {
        text_row(&mut cols[0], form, FormField::PeRatio, &UI_TEXT.label_pe, "");
        text_row(&mut cols[1], form, FormField::RsiRatio, &UI_TEXT.label_rsi, "");
    });

    sentiment_row(ui, form);
    ui.add_space(8.0);

    UI_CONFIG.thresholds_frame().show(ui, |ui| {
        ui.label(
            RichText::new(&UI_TEXT.thresholds_heading)
                .strong()
                .color(UI_CONFIG.colors.subtitle),
        );
        ui.add_space(6.0);
        ui.columns(2, |cols| {
            text_row(
                &mut cols[0],
                form,
                FormField::PeThreshold,
                &UI_TEXT.label_pe_threshold,
                "",
            );
            text_row(
                &mut cols[1],
                form,
                FormField::RsiThreshold,
                &UI_TEXT.label_rsi_threshold,
                "",
            );
        });
    });
    ui.add_space(8.0);

    text_row(
        ui,
        form,
        FormField::Notes,
        &UI_TEXT.label_notes,
        &UI_TEXT.hint_notes,
    );
    ui.add_space(8.0);

    let mut action = None;
    if ui
        .primary_button(&UI_TEXT.btn_decide)
        .on_hover_text(UI_TEXT.hover_shortcuts.as_str())
        .clicked()
    {
        action = Some(FormAction::Evaluate);
    }
    ui.add_space(4.0);
    if ui.secondary_button(&UI_TEXT.btn_print).clicked() {
        action = Some(FormAction::Print);
    }
    action
}

fn text_row(ui: &mut Ui, form: &mut FormState, field: FormField, label: &str, hint: &str) {
    let flagged = form.errors.is_flagged(field);
    ui.field_label(label);
    let changed = match form.draft.text_mut(field) {
        Some(value) => {
            let edit = if field == FormField::Notes {
                TextEdit::multiline(value).desired_rows(3)
            } else {
                TextEdit::singleline(value)
            };
            ui.text_field(edit.hint_text(hint), flagged).changed()
        }
        None => false,
    };
    if changed {
        form.edited(field);
    }
    ui.add_space(6.0);
}

fn sentiment_row(ui: &mut Ui, form: &mut FormState) {
    ui.field_label(&UI_TEXT.label_sentiment);
    let mut changed = false;
    ComboBox::from_id_salt("sentiment_selector")
        .width(ui.available_width())
        .selected_text(UI_TEXT.sentiment_label(form.draft.sentiment))
        .show_ui(ui, |ui| {
            for sentiment in Sentiment::iter() {
                changed |= ui
                    .selectable_value(
                        &mut form.draft.sentiment,
                        sentiment,
                        UI_TEXT.sentiment_label(sentiment),
                    )
                    .changed();
            }
        });
    if changed {
        form.edited(FormField::Sentiment);
    }
}
