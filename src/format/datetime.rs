//! Compact date and time stamps used in generated note names

use chrono::{Datelike, Timelike};

/// `M-D-YYYY`, without zero padding
pub fn date_to_string<D: Datelike>(date: &D) -> String {
    format!("{}-{}-{}", date.month(), date.day(), date.year())
}

/// `H-M-S`, without zero padding
pub fn time_to_string<T: Timelike>(time: &T) -> String {
    format!("{}-{}-{}", time.hour(), time.minute(), time.second())
}

pub fn date_time_to_string<DT: Datelike + Timelike>(date_time: &DT) -> String {
    format!("{} {}", date_to_string(date_time), time_to_string(date_time))
}
