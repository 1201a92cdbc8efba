mod form_panel;
mod page;
mod result_panel;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use form_panel::{FormAction, render_form};
pub(crate) use page::{render_footer, render_header, render_print_outcome};
pub(crate) use result_panel::render_result;
pub(crate) use styles::{DecisionIcon, ResultStyle, UiStyleExt};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
