//! Printable report configuration

pub struct ReportConfig {
    /// Default directory for saved reports (native only, overridable with `--report-dir`)
    pub directory: &'static str,
    /// Filename prefix, e.g. "decision_LOLC_20261018_093000.txt"
    pub filename_base: &'static str,
    /// Used when the company code is blank or has no usable characters
    pub unnamed_code: &'static str,
    pub extension: &'static str,
    /// chrono format for the timestamp in the filename
    pub file_stamp_format: &'static str,
    /// chrono format for the "Generated" line inside the report
    pub display_stamp_format: &'static str,
    pub rule_width: usize,
}

pub const REPORT: ReportConfig = ReportConfig {
    directory: "reports",
    filename_base: "decision",
    unnamed_code: "UNNAMED",
    extension: "txt",
    file_stamp_format: "%Y%m%d_%H%M%S",
    display_stamp_format: "%Y-%m-%d %H:%M:%S",
    rule_width: 44,
};
