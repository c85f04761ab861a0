//! Id and timestamp source for newly created records

use chrono::{DateTime, Utc};
use ulid::Ulid;

/// Supplies fresh ids and creation timestamps.
///
/// Only the mutations that create boards or items consult a stamper. The
/// reorder engine and the history never do, which keeps them deterministic.
pub trait Stamper {
    /// A new globally unique id
    fn next_id(&self) -> String;

    /// The creation timestamp for a new record
    fn now(&self) -> DateTime<Utc>;
}

/// Stamper backed by ULIDs and the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn next_id(&self) -> String {
        Ulid::new().to_string()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<T: Stamper + ?Sized> Stamper for &T {
    fn next_id(&self) -> String {
        (**self).next_id()
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;

    /// Deterministic stamper: ids `id-1`, `id-2`, ... and a clock that ticks
    /// one second per call.
    #[derive(Debug, Default)]
    pub struct SequenceStamper {
        counter: Cell<u32>,
    }

    impl Stamper for SequenceStamper {
        fn next_id(&self) -> String {
            let n = self.counter.get() + 1;
            self.counter.set(n);
            format!("id-{n}")
        }

        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::seconds(i64::from(self.counter.get()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_stamper_ids_are_ulids() {
        let id = SystemStamper.next_id();
        // ULID should be 26 chars
        assert_eq!(id.len(), 26);
        assert_ne!(id, SystemStamper.next_id());
    }

    #[test]
    fn test_sequence_stamper() {
        let stamper = test_support::SequenceStamper::default();
        assert_eq!(stamper.next_id(), "id-1");
        assert_eq!(stamper.next_id(), "id-2");
    }
}
