use eframe::{
    Frame,
    egui::{Align, CentralPanel, Context, Key, Layout, ScrollArea, Visuals},
};

use crate::{
    Cli,
    app::{FormState, PrintOutcome},
    config::DF,
    ui::{
        FormAction, UI_CONFIG, render_footer, render_form, render_header, render_print_outcome,
        render_result,
    },
};

#[cfg(not(target_arch = "wasm32"))]
use {
    crate::{config::REPORT, data::save_report, utils::local_now},
    anyhow::{Context as _, Result},
    eframe::egui::{FontData, FontDefinitions, FontFamily},
    std::{
        path::{Path, PathBuf},
        sync::Arc,
    },
};

#[cfg(not(target_arch = "wasm32"))]
const CUSTOM_FONT: &str = "custom_font";

pub struct App {
    pub(crate) form: FormState,
    pub(crate) print_outcome: Option<PrintOutcome>,
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) report_dir: PathBuf,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &args.font {
            Self::configure_fonts(&cc.egui_ctx, path);
        }
        setup_custom_visuals(&cc.egui_ctx);

        Self {
            form: FormState::new(args.seed_input()),
            print_outcome: None,
            #[cfg(not(target_arch = "wasm32"))]
            report_dir: args
                .report_dir
                .unwrap_or_else(|| PathBuf::from(REPORT.directory)),
        }
    }

    pub(crate) fn handle_action(&mut self, action: FormAction) {
        match action {
            FormAction::Evaluate => {
                self.form.submit();
                self.print_outcome = None;
            }
            FormAction::Print => self.print(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn print(&mut self) {
        let outcome = match save_report(
            &self.report_dir,
            &self.form.draft,
            self.form.result.as_ref(),
            local_now(),
        ) {
            Ok(path) => PrintOutcome::Saved(path),
            Err(err) => {
                log::error!("Failed to save report: {:#}", err);
                PrintOutcome::Failed(format!("{:#}", err))
            }
        };
        self.print_outcome = Some(outcome);
    }

    /// Browser builds hand the page to the browser's own print dialog.
    #[cfg(target_arch = "wasm32")]
    fn print(&mut self) {
        if DF.log_reports {
            log::info!("Opening browser print dialog");
        }
        let printed = web_sys::window()
            .ok_or_else(|| "no global `window` exists".to_string())
            .and_then(|w| w.print().map_err(|e| format!("{:?}", e)));
        self.print_outcome = printed.err().map(|err| {
            log::error!("Print failed: {}", err);
            PrintOutcome::Failed(err)
        });
    }

    /// Ctrl/Cmd+Enter evaluates, Ctrl/Cmd+P prints. Works while a field has focus.
    fn read_shortcuts(ctx: &Context) -> Option<FormAction> {
        ctx.input(|i| {
            if i.modifiers.command && i.key_pressed(Key::Enter) {
                Some(FormAction::Evaluate)
            } else if i.modifiers.command && i.key_pressed(Key::P) {
                Some(FormAction::Print)
            } else {
                None
            }
        })
    }

    /// Adds a user-supplied font as a fallback after egui's defaults, so Latin text
    /// keeps its usual look and Sinhala falls through to the custom font.
    #[cfg(not(target_arch = "wasm32"))]
    fn configure_fonts(ctx: &Context, path: &Path) {
        match load_font(path) {
            Ok(font_data) => {
                let mut fonts = FontDefinitions::default();
                fonts
                    .font_data
                    .insert(CUSTOM_FONT.to_owned(), Arc::new(font_data));
                for family in [FontFamily::Proportional, FontFamily::Monospace] {
                    if let Some(list) = fonts.families.get_mut(&family) {
                        list.push(CUSTOM_FONT.to_owned());
                    }
                }
                ctx.set_fonts(fonts);
                if DF.log_fonts {
                    log::info!("Loaded custom font {}", path.display());
                }
            }
            Err(err) => log::warn!("Custom font not loaded: {:#}", err),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_font(path: &Path) -> Result<FontData> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading font file {}", path.display()))?;
    Ok(FontData::from_owned(bytes))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action = Self::read_shortcuts(ctx);

        CentralPanel::default()
            .frame(UI_CONFIG.page_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(UI_CONFIG.max_content_width);
                        UI_CONFIG.card_frame().show(ui, |ui| {
                            ui.with_layout(Layout::top_down(Align::LEFT), |ui| {
                                render_header(ui);
                                if let Some(clicked) = render_form(ui, &mut self.form) {
                                    action = Some(clicked);
                                }
                                if let Some(outcome) = &self.print_outcome {
                                    render_print_outcome(ui, outcome);
                                }
                                if let Some(result) = &self.form.result {
                                    ui.add_space(16.0);
                                    render_result(ui, result, self.form.draft.visible_notes());
                                }
                            });
                        });
                        render_footer(ui);
                    });
                });
            });

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();
    visuals.panel_fill = UI_CONFIG.colors.page;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
