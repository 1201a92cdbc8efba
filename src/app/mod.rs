mod root;
mod state;

pub(crate) use state::{FormState, PrintOutcome};

pub use root::App;
