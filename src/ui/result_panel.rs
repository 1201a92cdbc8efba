use {
    crate::{
        domain::DecisionResult,
        ui::{DecisionIcon, ResultStyle, UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{Align, Layout, RichText, Ui},
};

/// Result box: icon, title, reason, then the user's notes when there are any.
pub(crate) fn render_result(ui: &mut Ui, result: &DecisionResult, notes: Option<&str>) {
    let palette = result.style.palette();
    UI_CONFIG.result_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(result.decision_type.icon())
                    .size(UI_CONFIG.result_icon_size)
                    .color(palette.text),
            );
            ui.label(
                RichText::new(&result.title)
                    .heading()
                    .strong()
                    .color(palette.text),
            );
            ui.add_space(4.0);
            ui.label(RichText::new(&result.reason).color(palette.text));
        });

        if let Some(notes) = notes {
            ui.add_space(12.0);
            ui.separator();
            ui.with_layout(Layout::top_down(Align::LEFT), |ui| {
                ui.label(
                    RichText::new(&UI_TEXT.result_notes_heading)
                        .small()
                        .strong()
                        .color(palette.text),
                );
                ui.label(RichText::new(notes).color(palette.text));
            });
        }
    });
}
