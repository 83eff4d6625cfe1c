//! Time source for new entries

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use std::cell::Cell;

/// Supplies the creation instant and the local calendar day
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date in the user's local time zone
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time and local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually controlled clock
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
    today: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, today: NaiveDate) -> Self {
        FixedClock {
            now: Cell::new(now),
            today: Cell::new(today),
        }
    }

    /// Move both the instant and the calendar day forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
        self.today.set(self.today.get() + by);
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
