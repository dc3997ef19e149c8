use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn from_number(n: u32) -> Option<Self> {
        Self::all().get(n.checked_sub(1)? as usize).copied()
    }

    pub fn number(&self) -> u32 {
        *self as u32
    }

    pub fn label(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Days offered for this month. February always offers the 29th since the
    /// analysis spans many years.
    pub fn day_count(&self) -> u32 {
        match self {
            Month::February => 29,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    pub fn all() -> &'static [Month] {
        &[
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::October,
            Month::November,
            Month::December,
        ]
    }
}

/// Number of selectable days in `month` (1-12); unknown months get 31.
pub fn days_in_month(month: u32) -> u32 {
    Month::from_number(month).map_or(31, |m| m.day_count())
}

/// Day-of-year the user wants analysed, without a year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelection {
    day: u32,
    month: Month,
}

impl Default for DateSelection {
    fn default() -> Self {
        Self {
            day: Config::DEFAULT_DAY,
            month: Config::DEFAULT_MONTH,
        }
    }
}

impl DateSelection {
    /// Builds a selection, clamping the day into the month.
    pub fn new(day: u32, month: Month) -> Self {
        Self {
            day: day.clamp(1, month.day_count()),
            month,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Switches month, pulling the day back to the last day of the new month if needed.
    pub fn with_month(&self, month: Month) -> Self {
        Self::new(self.day, month)
    }

    /// Returns `None` when `day` does not exist in the current month.
    pub fn with_day(&self, day: u32) -> Option<Self> {
        (1..=self.month.day_count())
            .contains(&day)
            .then_some(Self { day, ..*self })
    }

    pub fn day_options(&self) -> impl Iterator<Item = u32> {
        1..=self.month.day_count()
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.day, self.month.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1), 31);
        assert_eq!(days_in_month(2), 29);
        assert_eq!(days_in_month(4), 30);
        assert_eq!(days_in_month(12), 31);
        assert_eq!(days_in_month(13), 31);
        assert_eq!(days_in_month(0), 31);
    }

    #[test]
    fn test_month_from_number() {
        assert_eq!(Month::from_number(10), Some(Month::October));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
        assert_eq!(Month::October.number(), 10);
    }

    #[test]
    fn test_month_change_clamps_day() {
        let date = DateSelection::new(31, Month::January);
        let feb = date.with_month(Month::February);
        assert_eq!(feb.day(), 29);
        assert_eq!(feb.month(), Month::February);

        let apr = date.with_month(Month::April);
        assert_eq!(apr.day(), 30);

        let short = DateSelection::new(15, Month::March).with_month(Month::February);
        assert_eq!(short.day(), 15);
    }

    #[test]
    fn test_day_options_never_exceed_month() {
        for month in Month::all() {
            let date = DateSelection::new(1, *month);
            let options: Vec<u32> = date.day_options().collect();
            assert_eq!(options.len() as u32, month.day_count());
            assert_eq!(options.first(), Some(&1));
            assert_eq!(options.last(), Some(&month.day_count()));
        }
    }

    #[test]
    fn test_with_day_rejects_out_of_range() {
        let date = DateSelection::new(1, Month::April);
        assert_eq!(date.with_day(30).map(|d| d.day()), Some(30));
        assert!(date.with_day(31).is_none());
        assert!(date.with_day(0).is_none());
    }

    #[test]
    fn test_default_and_label() {
        let date = DateSelection::default();
        assert_eq!(date.day(), 4);
        assert_eq!(date.month(), Month::October);
        assert_eq!(date.label(), "4 October");
    }
}
