use {
    crate::{
        app::PrintOutcome,
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
        utils::current_year,
    },
    eframe::egui::{RichText, Ui},
};

pub(crate) fn render_header(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&UI_TEXT.app_title)
                .size(22.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label_subdued(&UI_TEXT.app_subtitle);
    });
    ui.separator();
    ui.add_space(8.0);
}

pub(crate) fn render_print_outcome(ui: &mut Ui, outcome: &PrintOutcome) {
    let (text, color) = match outcome {
        PrintOutcome::Saved(path) => (
            format!("{} {}", UI_TEXT.print_saved, path.display()),
            UI_CONFIG.results.buy.text,
        ),
        PrintOutcome::Failed(err) => (
            format!("{} {}", UI_TEXT.print_failed, err),
            UI_CONFIG.results.error.text,
        ),
    };
    ui.label(RichText::new(text).small().color(color));
}

pub(crate) fn render_footer(ui: &mut Ui) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("© {} {}", current_year(), UI_TEXT.footer_suffix))
                .small()
                .color(UI_CONFIG.colors.footer),
        );
    });
}
