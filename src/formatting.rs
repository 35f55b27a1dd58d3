use chrono::{DateTime, Local};

/// Formats a timestamp as a short day label, e.g. "Sat, May 4"
///
/// # Arguments
///
/// * 'time' - the timestamp to format
pub fn day_label(time: &DateTime<Local>) -> String {
    time.format("%a, %b %-d").to_string()
}

/// Formats a timestamp as a short hour label, e.g. "2 PM"
///
/// # Arguments
///
/// * 'time' - the timestamp to format
pub fn hour_label(time: &DateTime<Local>) -> String {
    time.format("%-I %p").to_string()
}

/// Formats a visibility given in meters as kilometers with one decimal, e.g. "10.0 km"
///
/// # Arguments
///
/// * 'meters' - visibility in meters
pub fn visibility_km(meters: u32) -> String {
    format!("{:.1} km", meters as f64 / 1000.0)
}

/// Rounds a temperature to the nearest whole degree for display
///
/// # Arguments
///
/// * 'temp' - temperature in the active unit system
pub fn round_temp(temp: f64) -> i64 {
    temp.round() as i64
}

/// Returns the url to the provider icon for a condition
///
/// # Arguments
///
/// * 'icon' - provider icon identifier, e.g. "10d"
/// * 'scale' - raster scale, 1 for list entries, 2 or 4 for larger panels
pub fn icon_url(icon: &str, scale: u8) -> String {
    if scale > 1 {
        format!("https://openweathermap.org/img/wn/{}@{}x.png", icon, scale)
    } else {
        format!("https://openweathermap.org/img/wn/{}.png", icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_label_is_short_weekday_and_date() {
        let time = Local.with_ymd_and_hms(2024, 5, 4, 9, 0, 0).unwrap();
        assert_eq!(day_label(&time), "Sat, May 4");
    }

    #[test]
    fn hour_label_is_twelve_hour_clock() {
        let afternoon = Local.with_ymd_and_hms(2024, 5, 4, 14, 0, 0).unwrap();
        let morning = Local.with_ymd_and_hms(2024, 5, 4, 9, 0, 0).unwrap();
        let midnight = Local.with_ymd_and_hms(2024, 5, 4, 0, 0, 0).unwrap();

        assert_eq!(hour_label(&afternoon), "2 PM");
        assert_eq!(hour_label(&morning), "9 AM");
        assert_eq!(hour_label(&midnight), "12 AM");
    }

    #[test]
    fn visibility_is_km_with_one_decimal() {
        assert_eq!(visibility_km(10000), "10.0 km");
        assert_eq!(visibility_km(4300), "4.3 km");
        assert_eq!(visibility_km(0), "0.0 km");
    }

    #[test]
    fn temperatures_round_to_nearest_degree() {
        assert_eq!(round_temp(21.4), 21);
        assert_eq!(round_temp(21.5), 22);
        assert_eq!(round_temp(-3.6), -4);
    }

    #[test]
    fn icon_urls_follow_the_provider_scheme() {
        assert_eq!(icon_url("10d", 1), "https://openweathermap.org/img/wn/10d.png");
        assert_eq!(icon_url("10d", 2), "https://openweathermap.org/img/wn/10d@2x.png");
        assert_eq!(icon_url("01n", 4), "https://openweathermap.org/img/wn/01n@4x.png");
    }
}
