//! Business-day enumeration.

use core::iter::FusedIterator;

use chrono::{Datelike, NaiveDate, Weekday};

use tallygen_core::{DomainError, DomainResult};

/// Inclusive date window with one weekly non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessCalendar {
    start: NaiveDate,
    end: NaiveDate,
    excluded: Weekday,
}

impl BusinessCalendar {
    /// Fails on a reversed window (`start > end`).
    pub fn new(start: NaiveDate, end: NaiveDate, excluded: Weekday) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::validation(format!(
                "calendar window is reversed: {start} > {end}"
            )));
        }
        Ok(Self { start, end, excluded })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn excluded(&self) -> Weekday {
        self.excluded
    }

    /// Number of business days in the window.
    pub fn len(&self) -> usize {
        let days = (self.end - self.start).num_days() + 1;
        let full_weeks = days / 7;
        let mut excluded = full_weeks;
        // Leftover days after the full weeks; `None` once past the end or past `NaiveDate::MAX`.
        let mut day = self
            .start
            .checked_add_signed(chrono::Duration::days(full_weeks * 7))
            .filter(|d| *d <= self.end);
        while let Some(current) = day {
            if current.weekday() == self.excluded {
                excluded += 1;
            }
            day = current.succ_opt().filter(|d| *d <= self.end);
        }
        (days - excluded) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn days(self) -> BusinessDays {
        BusinessDays {
            next: Some(self.start),
            end: self.end,
            excluded: self.excluded,
        }
    }
}

impl IntoIterator for BusinessCalendar {
    type Item = NaiveDate;
    type IntoIter = BusinessDays;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Ascending business days of a [`BusinessCalendar`]; consumed as it goes.
#[derive(Debug, Clone)]
pub struct BusinessDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
    excluded: Weekday,
}

impl Iterator for BusinessDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        loop {
            let day = self.next?;
            self.next = if day < self.end { day.succ_opt() } else { None };
            if day.weekday() != self.excluded {
                return Some(day);
            }
        }
    }
}

impl FusedIterator for BusinessDays {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_week_from_monday_without_sunday_has_six_days() {
        // 2024-04-01 is a Monday.
        let cal = BusinessCalendar::new(date(2024, 4, 1), date(2024, 4, 7), Weekday::Sun).unwrap();
        let days: Vec<_> = cal.days().collect();

        assert_eq!(days.len(), 6);
        assert_eq!(cal.len(), 6);
        assert_eq!(days.first(), Some(&date(2024, 4, 1)));
        assert_eq!(days.last(), Some(&date(2024, 4, 6)));
    }

    #[test]
    fn single_day_window() {
        let cal = BusinessCalendar::new(date(2024, 4, 1), date(2024, 4, 1), Weekday::Sun).unwrap();
        assert_eq!(cal.days().collect::<Vec<_>>(), vec![date(2024, 4, 1)]);

        let sunday = BusinessCalendar::new(date(2024, 4, 7), date(2024, 4, 7), Weekday::Sun).unwrap();
        assert!(sunday.is_empty());
        assert_eq!(sunday.days().count(), 0);
    }

    #[test]
    fn reversed_window_is_rejected() {
        let err = BusinessCalendar::new(date(2024, 4, 7), date(2024, 4, 1), Weekday::Sun).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn iterator_is_fused() {
        let cal = BusinessCalendar::new(date(2024, 4, 1), date(2024, 4, 2), Weekday::Sun).unwrap();
        let mut days = cal.days();
        assert!(days.next().is_some());
        assert!(days.next().is_some());
        assert_eq!(days.next(), None);
        assert_eq!(days.next(), None);
    }

    #[test]
    fn full_default_window_count() {
        // 2023-04-01 .. 2025-12-31: 1006 days, 144 Sundays.
        let cal = BusinessCalendar::new(date(2023, 4, 1), date(2025, 12, 31), Weekday::Sun).unwrap();
        assert_eq!(cal.len(), cal.days().count());
        assert_eq!(cal.len(), 862);
    }

    #[test]
    fn window_ending_at_the_last_representable_date() {
        let end = NaiveDate::MAX;
        let start = end - chrono::Duration::days(9);
        let cal = BusinessCalendar::new(start, end, Weekday::Sun).unwrap();
        assert_eq!(cal.len(), cal.days().count());
        assert!(cal.len() >= 8);

        let whole_weeks = BusinessCalendar::new(end - chrono::Duration::days(13), end, Weekday::Mon).unwrap();
        assert_eq!(whole_weeks.len(), 12);
        assert_eq!(whole_weeks.days().count(), 12);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every non-excluded date appears exactly once, ascending, and
        /// the excluded weekday never appears.
        #[test]
        fn covers_window_exactly(offset in 0i64..3_000, span in 0i64..120, wd in 0u8..7) {
            let excluded = Weekday::try_from(wd).unwrap();
            let start = date(2020, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(span);
            let cal = BusinessCalendar::new(start, end, excluded).unwrap();

            let days: Vec<_> = cal.days().collect();
            let expected: Vec<_> = start
                .iter_days()
                .take_while(|d| *d <= end)
                .filter(|d| d.weekday() != excluded)
                .collect();

            prop_assert_eq!(&days, &expected);
            prop_assert_eq!(days.len(), cal.len());
            prop_assert!(days.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
