//! Printable plain-text summary of one decision.

use {
    crate::{
        analysis::{ResolvedThresholds, format_number},
        config::REPORT,
        domain::{DecisionResult, ScreeningInput},
    },
    chrono::NaiveDateTime,
    std::fmt::Write,
};

#[cfg(not(target_arch = "wasm32"))]
use {
    crate::config::DF,
    anyhow::{Context, Result},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

const HEADER: &str = "කොටස් ආයෝජන තීරක / Stock Investment Decider";
const BLANK: &str = "-";
const NO_RESULT: &str = "තීරණයක් තවම ගෙන නැත (No decision requested yet)";

/// Renders the form inputs, the thresholds used and the result (if any) as print-ready text.
pub fn render_report(
    input: &ScreeningInput,
    result: Option<&DecisionResult>,
    generated_at: NaiveDateTime,
) -> String {
    let thresholds = ResolvedThresholds::from_input(input);
    let rule = "-".repeat(REPORT.rule_width);
    let code = input.company_code.trim().to_uppercase();

    let rows: [(&str, String); 6] = [
        ("Company Code", or_blank(&code)),
        ("PE Ratio", or_blank(input.pe_ratio.trim())),
        ("RSI Ratio", or_blank(input.rsi_ratio.trim())),
        ("Sentiment", input.sentiment.to_string()),
        ("PE Threshold", format_number(thresholds.pe)),
        ("RSI Threshold", format_number(thresholds.rsi)),
    ];

    let mut out = String::new();
    // Writing into a String can't fail.
    let _ = writeln!(out, "{}", HEADER);
    let _ = writeln!(
        out,
        "Generated: {}",
        generated_at.format(REPORT.display_stamp_format)
    );
    let _ = writeln!(out, "{}", rule);
    for (label, value) in rows {
        let _ = writeln!(out, "{:<14}: {}", label, value);
    }
    let _ = writeln!(out, "{}", rule);
    match result {
        Some(result) => {
            let _ = writeln!(out, "{}", result.title);
            let _ = writeln!(out, "{}", result.reason);
        }
        None => {
            let _ = writeln!(out, "{}", NO_RESULT);
        }
    }

    if let Some(notes) = input.visible_notes() {
        let _ = writeln!(out);
        let _ = writeln!(out, "සටහන (Notes):");
        let _ = writeln!(out, "{}", notes.trim_end());
    }
    out
}

/// "decision_LOLC_20261018_093000.txt". Code is reduced to ASCII alphanumerics.
pub fn report_filename(input: &ScreeningInput, generated_at: NaiveDateTime) -> String {
    let code: String = input
        .company_code
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let code = if code.is_empty() {
        REPORT.unnamed_code.to_string()
    } else {
        code
    };
    format!(
        "{}_{}_{}.{}",
        REPORT.filename_base,
        code,
        generated_at.format(REPORT.file_stamp_format),
        REPORT.extension
    )
}

/// Writes the report under `dir` (created if missing) and returns the file path.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_report(
    dir: &Path,
    input: &ScreeningInput,
    result: Option<&DecisionResult>,
    generated_at: NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating report directory {}", dir.display()))?;

    let path = dir.join(report_filename(input, generated_at));
    fs::write(&path, render_report(input, result, generated_at))
        .with_context(|| format!("writing report {}", path.display()))?;

    if DF.log_reports {
        log::info!("Report saved to {}", path.display());
    }
    Ok(path)
}

fn or_blank(text: &str) -> String {
    if text.is_empty() {
        BLANK.to_string()
    } else {
        text.to_string()
    }
}
