use chrono::{DateTime, Utc};

/// Source of the current time, injected so formatted results are reproducible.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
