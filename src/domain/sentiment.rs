use {
    clap::ValueEnum,
    strum_macros::{Display, EnumIter},
};

/// The user's own bias on the stock. Only consulted in the ambiguous middle zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Display, ValueEnum)]
pub enum Sentiment {
    #[default]
    Neutral,
    Positive,
    Negative,
}
