mod time_utils;

pub use time_utils::{current_year, local_now};
