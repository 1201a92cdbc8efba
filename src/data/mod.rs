mod report;

pub use report::{render_report, report_filename};

#[cfg(not(target_arch = "wasm32"))]
pub use report::save_report;
