use crate::models::PeriodOption;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Monthly,
    Weekly,
}

impl ViewType {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewType::Monthly => "monthly",
            ViewType::Weekly => "weekly",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical period id for a date: `"2025-01"` monthly, `"2025-W05"` weekly.
pub fn period_key(date: NaiveDate, view: ViewType) -> String {
    match view {
        ViewType::Monthly => format!("{}-{:02}", date.year(), date.month()),
        ViewType::Weekly => format!("{}-W{:02}", date.year(), week_number(date)),
    }
}

/// Week number counted Sunday-based from January 1, NOT ISO-8601. Previously
/// stored period keys use this numbering, so it must stay bit-for-bit
/// compatible: years can end on week 53 (or 54 when a leap year starts on a
/// Saturday), and the count restarts at the year boundary mid-week.
pub fn week_number(date: NaiveDate) -> u32 {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap();
    let day_of_year = date.ordinal0();
    let jan1_weekday = jan1.weekday().num_days_from_sunday();
    (day_of_year + jan1_weekday + 1).div_ceil(7)
}

/// The twelve most recent periods ending at `today`, oldest first, for the
/// period selector.
pub fn period_options(today: NaiveDate, view: ViewType) -> Vec<PeriodOption> {
    let mut options = Vec::with_capacity(12);
    match view {
        ViewType::Monthly => {
            for offset in (0..12).rev() {
                let mut year = today.year();
                let mut month = today.month() as i32 - offset;
                while month < 1 {
                    month += 12;
                    year -= 1;
                }
                let first = NaiveDate::from_ymd_opt(year, month as u32, 1).unwrap();
                options.push(PeriodOption {
                    value: period_key(first, ViewType::Monthly),
                    label: first.format("%B %Y").to_string(),
                });
            }
        }
        ViewType::Weekly => {
            for offset in (0..12).rev() {
                let date = today - Duration::weeks(offset);
                options.push(PeriodOption {
                    value: period_key(date, ViewType::Weekly),
                    label: format!("Week {}, {}", week_number(date), date.year()),
                });
            }
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_key_is_stable_within_a_month() {
        let expected = "2025-01";
        for day in 1..=31 {
            assert_eq!(period_key(date(2025, 1, day), ViewType::Monthly), expected);
        }
        assert_eq!(period_key(date(2025, 2, 1), ViewType::Monthly), "2025-02");
    }

    #[test]
    fn monthly_key_pads_single_digit_months() {
        assert_eq!(period_key(date(2024, 9, 15), ViewType::Monthly), "2024-09");
        assert_eq!(period_key(date(2024, 12, 15), ViewType::Monthly), "2024-12");
    }

    #[test]
    fn weekly_key_when_jan_1_falls_on_a_saturday() {
        // 2022-01-01 is a Saturday: Jan 1 alone is week 1, Jan 2 opens week 2.
        assert_eq!(period_key(date(2022, 1, 1), ViewType::Weekly), "2022-W01");
        assert_eq!(period_key(date(2022, 1, 2), ViewType::Weekly), "2022-W02");
        assert_eq!(period_key(date(2022, 1, 8), ViewType::Weekly), "2022-W02");
        assert_eq!(period_key(date(2022, 1, 9), ViewType::Weekly), "2022-W03");
    }

    #[test]
    fn weekly_numbering_is_not_iso_8601() {
        // ISO-8601 puts 2022-01-01 in week 52 of 2021; this numbering does not.
        let d = date(2022, 1, 1);
        assert_eq!(week_number(d), 1);
        assert_ne!(week_number(d), d.iso_week().week());
    }

    #[test]
    fn weekly_numbering_can_exceed_52_at_year_end() {
        // 2022 starts on a Saturday and ends in week 53.
        assert_eq!(week_number(date(2022, 12, 31)), 53);
        // 2028 is a leap year starting on a Saturday: December 31 is week 54.
        assert_eq!(week_number(date(2028, 12, 31)), 54);
    }

    #[test]
    fn weekly_count_restarts_each_january() {
        // 2025-01-01 is a Wednesday (weekday index 3): week 1 runs Jan 1-4.
        assert_eq!(week_number(date(2025, 1, 1)), 1);
        assert_eq!(week_number(date(2025, 1, 4)), 1);
        assert_eq!(week_number(date(2025, 1, 5)), 2);
    }

    #[test]
    fn monthly_options_cover_the_last_twelve_months() {
        let options = period_options(date(2025, 3, 10), ViewType::Monthly);
        assert_eq!(options.len(), 12);
        assert_eq!(options[0].value, "2024-04");
        assert_eq!(options[0].label, "April 2024");
        assert_eq!(options[11].value, "2025-03");
        assert_eq!(options[11].label, "March 2025");
    }

    #[test]
    fn weekly_options_step_back_seven_days_at_a_time() {
        let options = period_options(date(2025, 3, 10), ViewType::Weekly);
        assert_eq!(options.len(), 12);
        assert_eq!(options[11].value, period_key(date(2025, 3, 10), ViewType::Weekly));
        assert_eq!(options[10].value, period_key(date(2025, 3, 3), ViewType::Weekly));
        assert!(options[0].label.starts_with("Week "));
    }
}
