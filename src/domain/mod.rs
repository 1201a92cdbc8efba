// Domain types and value objects
mod decision;
mod screening_input;
mod sentiment;
mod validation;

// Re-export commonly used types to the world
pub use decision::{DecisionResult, DecisionType, StyleTag};
pub use screening_input::{FormField, ScreeningInput};
pub use sentiment::Sentiment;
pub use validation::ValidationError;
