use chrono::NaiveDate;
use serde::Serialize;
use crate::manager_owm::models::ForecastEntry;

/// Max number of distinct calendar dates kept in the daily view
const DAILY_DATES: usize = 5;
/// Number of 3 hour slots making up the hourly view, roughly the next 24 hours
const HOURLY_SLOTS: usize = 8;

/// One calendar day folded out of the 3-hourly forecast series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
    pub icon: String,
}

/// Folds a forecast series into at most five daily summaries.
///
/// Entries are grouped on the calendar date of their valid time, in the local
/// time zone. The first entry seen for a date seeds the summary, including its
/// description and icon which later entries never overwrite; subsequent entries
/// for the same date only widen the min/max temperatures. Dates keep the order
/// in which they first appear in the series, and the cut to five dates happens
/// after the whole series has been folded, so a late entry belonging to an
/// early date still counts.
///
/// # Arguments
///
/// * 'series' - forecast entries in provider order
pub fn daily_summaries(series: &[ForecastEntry]) -> Vec<DailySummary> {
    let mut days: Vec<DailySummary> = Vec::new();

    for entry in series {
        let date = entry.valid_time.date_naive();

        match days.iter_mut().find(|d| d.date == date) {
            Some(day) => {
                if entry.temp_max > day.temp_max {
                    day.temp_max = entry.temp_max;
                }
                if entry.temp_min < day.temp_min {
                    day.temp_min = entry.temp_min;
                }
            }
            None => {
                days.push(DailySummary {
                    date,
                    temp_min: entry.temp_min,
                    temp_max: entry.temp_max,
                    description: entry.description.clone(),
                    icon: entry.icon.clone(),
                });
            }
        }
    }

    days.truncate(DAILY_DATES);
    days
}

/// Returns the leading entries of the series covering roughly the next 24
/// hours, untouched and in original order. Shorter input gives a shorter
/// window, never padding.
///
/// # Arguments
///
/// * 'series' - forecast entries in provider order
pub fn hourly_window(series: &[ForecastEntry]) -> Vec<ForecastEntry> {
    series.iter().take(HOURLY_SLOTS).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn time(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
    }

    fn entry(day: u32, hour: u32, temp_min: f64, temp_max: f64, description: &str) -> ForecastEntry {
        ForecastEntry {
            valid_time: time(day, hour),
            temp: (temp_min + temp_max) / 2.0,
            feels_like: temp_min,
            temp_min,
            temp_max,
            humidity: 60,
            pressure: 1015,
            wind_speed: 3.2,
            visibility: Some(10000),
            description: description.to_string(),
            icon: "01d".to_string(),
        }
    }

    /// 8 entries spaced 3 hours apart for one calendar day, with the given max
    /// temperatures and each min 2 degrees below its max
    fn full_day(day: u32, maxes: [f64; 8], description: &str) -> Vec<ForecastEntry> {
        maxes
            .iter()
            .enumerate()
            .map(|(i, max)| entry(day, i as u32 * 3, max - 2.0, *max, description))
            .collect()
    }

    #[test]
    fn empty_series_yields_empty_views() {
        assert!(daily_summaries(&[]).is_empty());
        assert!(hourly_window(&[]).is_empty());
    }

    #[test]
    fn hourly_window_is_a_prefix_of_the_input() {
        let mut series = full_day(1, [10.0, 12.0, 15.0, 14.0, 13.0, 11.0, 9.0, 8.0], "overcast");
        series.extend(full_day(2, [20.0, 22.0, 25.0, 24.0, 23.0, 21.0, 19.0, 18.0], "rain"));

        let window = hourly_window(&series);

        assert_eq!(window.len(), 8);
        assert_eq!(window, series[..8].to_vec());
    }

    #[test]
    fn short_series_is_not_padded() {
        let series = vec![
            entry(1, 0, 4.0, 6.0, "mist"),
            entry(1, 3, 3.0, 5.0, "mist"),
            entry(1, 6, 5.0, 7.0, "clear sky"),
        ];

        assert_eq!(hourly_window(&series).len(), 3);
        assert_eq!(daily_summaries(&series).len(), 1);
    }

    #[test]
    fn two_days_fold_to_their_extremes() {
        let mut series = full_day(1, [10.0, 12.0, 15.0, 14.0, 13.0, 11.0, 9.0, 8.0], "scattered clouds");
        series.extend(full_day(2, [20.0, 22.0, 25.0, 24.0, 23.0, 21.0, 19.0, 18.0], "light rain"));

        let days = daily_summaries(&series);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].temp_max, 15.0);
        assert_eq!(days[0].temp_min, 6.0);
        assert_eq!(days[0].description, "scattered clouds");
        assert_eq!(days[1].temp_max, 25.0);
        assert_eq!(days[1].temp_min, 16.0);
        assert_eq!(days[1].description, "light rain");
    }

    #[test]
    fn description_comes_from_the_first_entry_of_each_date() {
        let series = vec![
            entry(1, 0, 5.0, 8.0, "fog"),
            entry(1, 3, 6.0, 12.0, "clear sky"),
            entry(1, 6, 4.0, 10.0, "thunderstorm"),
        ];

        let days = daily_summaries(&series);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].description, "fog");
        assert_eq!(days[0].temp_max, 12.0);
        assert_eq!(days[0].temp_min, 4.0);
    }

    #[test]
    fn five_full_days_need_no_truncation() {
        let mut series = Vec::new();
        for day in 1..=5 {
            series.extend(full_day(day, [10.0, 12.0, 15.0, 14.0, 13.0, 11.0, 9.0, 8.0], "clouds"));
        }
        assert_eq!(series.len(), 40);

        let days = daily_summaries(&series);
        let window = hourly_window(&series);

        assert_eq!(days.len(), 5);
        assert_eq!(window, series[..8].to_vec());
    }

    #[test]
    fn sixth_date_is_cut_but_early_dates_keep_updating() {
        let mut series = Vec::new();
        for day in 1..=6 {
            series.push(entry(day, 12, 10.0, 15.0, "clouds"));
        }
        // belongs to day 1 and arrives after the sixth date was seen
        series.push(entry(1, 15, 2.0, 30.0, "heat wave"));

        let days = daily_summaries(&series);

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].date, time(1, 0).date_naive());
        assert_eq!(days[0].temp_max, 30.0);
        assert_eq!(days[0].temp_min, 2.0);
        assert_eq!(days[0].description, "clouds");
    }

    #[test]
    fn dates_keep_first_appearance_order() {
        let series = vec![
            entry(2, 12, 8.0, 11.0, "rain"),
            entry(1, 9, 3.0, 6.0, "snow"),
            entry(2, 15, 9.0, 13.0, "rain"),
        ];

        let days = daily_summaries(&series);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, time(2, 0).date_naive());
        assert_eq!(days[1].date, time(1, 0).date_naive());
        assert_eq!(days[0].temp_max, 13.0);
    }

    #[test]
    fn rederiving_gives_identical_output() {
        let mut series = full_day(1, [10.0, 12.0, 15.0, 14.0, 13.0, 11.0, 9.0, 8.0], "clouds");
        series.extend(full_day(2, [20.0, 22.0, 25.0, 24.0, 23.0, 21.0, 19.0, 18.0], "rain"));

        assert_eq!(daily_summaries(&series), daily_summaries(&series));
        assert_eq!(hourly_window(&series), hourly_window(&series));
    }
}
