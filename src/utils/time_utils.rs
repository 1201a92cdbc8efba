use chrono::{Datelike, Local, NaiveDateTime};

/// Wall-clock time in the user's zone, without offset. Used for report stamps.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn current_year() -> i32 {
    Local::now().year()
}
