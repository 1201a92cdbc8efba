// Decision rule: parsing, validation and the branch evaluation
mod evaluator;
mod messages;
mod parse;

pub use evaluator::{Ratios, ResolvedThresholds, conclude, evaluate, validate};
pub use parse::{format_number, parse_leading_number, resolve_threshold};
