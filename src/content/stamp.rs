//! Creation stamps: timestamp-derived ids and display dates.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Datelike, Local, TimeZone};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Id and display date handed to a mutation at the moment it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// Milliseconds since the Unix epoch.
    pub id: i64,
    pub display_date: String,
}

impl Stamp {
    pub fn at<Tz: TimeZone>(time: DateTime<Tz>) -> Self {
        Self {
            id: time.timestamp_millis(),
            display_date: format_display_date(&time),
        }
    }
}

/// Format a date the way the site prints it: `25 Agu 2024`.
pub fn format_display_date<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    format!(
        "{:02} {} {}",
        time.day(),
        MONTHS[time.month0() as usize],
        time.year()
    )
}

/// Issues strictly increasing millisecond ids, even when called twice in the
/// same millisecond.
#[derive(Debug, Default)]
pub struct IdClock {
    last: AtomicI64,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stamp for "now" in local time.
    pub fn stamp(&self) -> Stamp {
        let mut stamp = Stamp::at(Local::now());
        stamp.id = self.issue(stamp.id);
        stamp
    }

    fn issue(&self, now: i64) -> i64 {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}
