//! Calendar clock used to stamp activities and goals.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use crossbeam::atomic::AtomicCell;

/// Source of the current local calendar day.
pub trait Clock: Send + Sync {
    /// Today's date in local time.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a settable date.
///
/// Clones share the same date, so a test can keep one handle and move the date while
/// the tracker holds another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Arc<AtomicCell<NaiveDate>>,
}

impl FixedClock {
    /// Create a clock that always returns `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Arc::new(AtomicCell::new(date)),
        }
    }

    /// Move the clock to a new date.
    pub fn set(&self, date: NaiveDate) {
        self.date.store(date);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.load()
    }
}
