use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Source of the reference day used by "upcoming" and "past" filtering
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local calendar day of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        reference_day(Local::now())
    }
}

/// A clock pinned to one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Truncate an instant to its calendar day in its own time zone
pub fn reference_day<Tz: TimeZone>(instant: DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let clock = FixedClock(day);
        assert_eq!(clock.today(), day);
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn test_reference_day_drops_time_of_day() {
        let late = Utc.with_ymd_and_hms(2025, 12, 1, 23, 59, 59).unwrap();
        let early = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(reference_day(late), reference_day(early));
        assert_eq!(reference_day(late), NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
    }

    #[test]
    fn test_reference_day_uses_instant_offset() {
        let offset = FixedOffset::east_opt(5 * 3600).unwrap();
        let instant = offset.with_ymd_and_hms(2025, 12, 2, 1, 0, 0).unwrap();
        assert_eq!(reference_day(instant), NaiveDate::from_ymd_opt(2025, 12, 2).unwrap());
    }

    #[test]
    fn test_clock_as_trait_object() {
        let clocks: Vec<Box<dyn Clock>> = vec![
            Box::new(SystemClock),
            Box::new(FixedClock(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())),
        ];
        assert_eq!(clocks[1].today().to_string(), "2030-01-01");
    }
}
