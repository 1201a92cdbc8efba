use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// Fill, text and border colour for one result treatment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub fill: Color32,
    pub text: Color32,
    pub border: Color32,
}

/// One palette per result style.
#[derive(Clone, Copy)]
pub struct ResultPalettes {
    pub buy: Palette,
    pub not_buy: Palette,
    pub no_decision: Palette,
    pub error: Palette,
}

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subtitle: Color32,
    pub page: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub thresholds_fill: Color32,
    pub thresholds_border: Color32,
    pub field_error: Color32,
    pub primary_button: Color32,
    pub secondary_button: Color32,
    pub footer: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub results: ResultPalettes,
    pub max_content_width: f32,
    pub button_height: f32,
    pub result_icon_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(55, 65, 81),
        heading: Color32::from_rgb(30, 41, 59),
        subtitle: Color32::from_rgb(100, 116, 139),
        page: Color32::from_rgb(241, 245, 249),
        card: Color32::WHITE,
        card_border: Color32::from_rgb(226, 232, 240),
        thresholds_fill: Color32::from_rgb(248, 250, 252),
        thresholds_border: Color32::from_rgb(203, 213, 225),
        field_error: Color32::from_rgb(239, 68, 68),
        primary_button: Color32::from_rgb(37, 99, 235),
        secondary_button: Color32::from_rgb(226, 232, 240),
        footer: Color32::from_rgb(148, 163, 184),
    },
    results: ResultPalettes {
        buy: Palette {
            fill: Color32::from_rgb(240, 253, 244),
            text: Color32::from_rgb(22, 101, 52),
            border: Color32::from_rgb(22, 163, 74),
        },
        not_buy: Palette {
            fill: Color32::from_rgb(254, 242, 242),
            text: Color32::from_rgb(153, 27, 27),
            border: Color32::from_rgb(220, 38, 38),
        },
        no_decision: Palette {
            fill: Color32::from_rgb(255, 251, 235),
            text: Color32::from_rgb(146, 64, 14),
            border: Color32::from_rgb(245, 158, 11),
        },
        error: Palette {
            fill: Color32::from_rgb(254, 242, 242),
            text: Color32::from_rgb(185, 28, 28),
            border: Color32::from_rgb(239, 68, 68),
        },
    },
    max_content_width: 640.0,
    button_height: 36.0,
    result_icon_size: 32.0,
};

impl UiConfig {
    /// Frame for the whole window background
    pub fn page_frame(&self) -> Frame {
        Frame {
            fill: self.colors.page,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// The white card holding header, form and result
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            corner_radius: CornerRadius::same(16),
            inner_margin: Margin::same(20),
            ..Default::default()
        }
    }

    /// Boxed "Custom Thresholds" group
    pub fn thresholds_frame(&self) -> Frame {
        Frame {
            fill: self.colors.thresholds_fill,
            stroke: Stroke::new(1.0, self.colors.thresholds_border),
            corner_radius: CornerRadius::same(12),
            inner_margin: Margin::same(14),
            ..Default::default()
        }
    }

    /// Result box in the colours of its style
    pub fn result_frame(&self, palette: Palette) -> Frame {
        Frame {
            fill: palette.fill,
            stroke: Stroke::new(2.0, palette.border),
            corner_radius: CornerRadius::same(12),
            inner_margin: Margin::same(18),
            ..Default::default()
        }
    }
}
