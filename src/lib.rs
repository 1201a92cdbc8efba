// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{ResolvedThresholds, evaluate, validate};
pub use app::App;
pub use domain::{
    DecisionResult, DecisionType, FormField, ScreeningInput, Sentiment, StyleTag, ValidationError,
};

// CLI argument parsing
use {clap::Parser, std::path::PathBuf};

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prefill the company code field
    #[arg(long)]
    pub company_code: Option<String>,

    /// Prefill the PE ratio field (kept as typed, parsed on evaluation)
    #[arg(long, allow_hyphen_values = true)]
    pub pe: Option<String>,

    /// Prefill the RSI ratio field
    #[arg(long, allow_hyphen_values = true)]
    pub rsi: Option<String>,

    /// Preselect the sentiment
    #[arg(long, value_enum)]
    pub sentiment: Option<Sentiment>,

    /// Prefill the PE "Buy" threshold
    #[arg(long, allow_hyphen_values = true)]
    pub pe_threshold: Option<String>,

    /// Prefill the RSI "Buy" threshold
    #[arg(long, allow_hyphen_values = true)]
    pub rsi_threshold: Option<String>,

    /// Directory that "Print / Save" writes reports into
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Extra TTF/OTF font for Sinhala glyphs (egui's bundled fonts have none)
    #[arg(long)]
    pub font: Option<PathBuf>,
}

impl Cli {
    /// The first-launch draft with any prefill options applied.
    pub fn seed_input(&self) -> ScreeningInput {
        let mut input = ScreeningInput::default();
        let prefill = [
            (FormField::CompanyCode, &self.company_code),
            (FormField::PeRatio, &self.pe),
            (FormField::RsiRatio, &self.rsi),
            (FormField::PeThreshold, &self.pe_threshold),
            (FormField::RsiThreshold, &self.rsi_threshold),
        ];
        for (field, value) in prefill {
            if let (Some(value), Some(slot)) = (value, input.text_mut(field)) {
                *slot = value.clone();
            }
        }
        if let Some(sentiment) = self.sentiment {
            input.sentiment = sentiment;
        }
        input
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_options_gives_default_draft() {
        let cli = Cli::try_parse_from(["stock-decider"]).expect("parses");
        assert_eq!(cli.seed_input(), ScreeningInput::default());
    }

    #[test]
    fn prefill_options_land_in_the_draft() {
        let cli = Cli::try_parse_from([
            "stock-decider",
            "--company-code",
            "nest",
            "--pe",
            "-3",
            "--rsi",
            "41.5",
            "--sentiment",
            "negative",
            "--rsi-threshold",
            "30",
        ])
        .expect("parses");
        let input = cli.seed_input();
        assert_eq!(input.company_code, "nest");
        assert_eq!(input.pe_ratio, "-3");
        assert_eq!(input.rsi_ratio, "41.5");
        assert_eq!(input.sentiment, Sentiment::Negative);
        assert_eq!(input.pe_threshold, "10");
        assert_eq!(input.rsi_threshold, "30");
    }
}
