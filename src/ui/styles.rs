use {
    crate::{
        domain::{DecisionType, StyleTag},
        ui::{
            UI_CONFIG,
            ui_config::Palette,
            ui_text::{ICON_BUY, ICON_ERROR, ICON_NO_DECISION, ICON_NOT_BUY},
        },
    },
    eframe::egui::{
        Button, Color32, CornerRadius, Frame, Margin, Response, RichText, Stroke, TextEdit, Ui,
        vec2,
    },
};

pub(crate) trait ResultStyle {
    fn palette(&self) -> Palette;
}

impl ResultStyle for StyleTag {
    fn palette(&self) -> Palette {
        match self {
            Self::Buy => UI_CONFIG.results.buy,
            Self::NotBuy => UI_CONFIG.results.not_buy,
            Self::NoDecision => UI_CONFIG.results.no_decision,
            Self::Error => UI_CONFIG.results.error,
        }
    }
}

pub(crate) trait DecisionIcon {
    fn icon(&self) -> &'static str;
}

impl DecisionIcon for DecisionType {
    fn icon(&self) -> &'static str {
        match self {
            Self::Buy => ICON_BUY,
            Self::NotBuy => ICON_NOT_BUY,
            Self::NoDecision => ICON_NO_DECISION,
            Self::Error => ICON_ERROR,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn field_label(&mut self, text: impl Into<String>);
    /// Text input, outlined in red while `flagged`.
    fn text_field(&mut self, edit: TextEdit<'_>, flagged: bool) -> Response;
    fn primary_button(&mut self, text: impl Into<String>) -> Response;
    fn secondary_button(&mut self, text: impl Into<String>) -> Response;
    fn label_subdued(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn field_label(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .strong()
                .size(13.0)
                .color(UI_CONFIG.colors.label),
        );
    }

    fn text_field(&mut self, edit: TextEdit<'_>, flagged: bool) -> Response {
        let stroke = if flagged {
            Stroke::new(1.5, UI_CONFIG.colors.field_error)
        } else {
            Stroke::NONE
        };
        Frame::new()
            .stroke(stroke)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::same(2))
            .show(self, |ui| ui.add(edit.desired_width(f32::INFINITY)))
            .inner
    }

    fn primary_button(&mut self, text: impl Into<String>) -> Response {
        let width = self.available_width();
        self.add(
            Button::new(RichText::new(text).strong().color(Color32::WHITE))
                .fill(UI_CONFIG.colors.primary_button)
                .min_size(vec2(width, UI_CONFIG.button_height)),
        )
    }

    fn secondary_button(&mut self, text: impl Into<String>) -> Response {
        let width = self.available_width();
        self.add(
            Button::new(RichText::new(text).color(UI_CONFIG.colors.heading))
                .fill(UI_CONFIG.colors.secondary_button)
                .min_size(vec2(width, UI_CONFIG.button_height)),
        )
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subtitle));
    }
}
