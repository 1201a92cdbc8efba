//! Debugging feature flags.

pub struct LogFlags {
    /// Log every evaluation: inputs, resolved thresholds and the branch taken.
    pub log_decisions: bool,

    /// Log each form edit (and whether it cleared the field error flags).
    pub log_form_edits: bool,

    /// Log report rendering / saving / print requests.
    pub log_reports: bool,

    /// Log custom font loading at startup.
    pub log_fonts: bool,
}

pub const DF: LogFlags = LogFlags {
    log_decisions: true,
    log_reports: true,
    log_fonts: true,

    log_form_edits: false,
};
