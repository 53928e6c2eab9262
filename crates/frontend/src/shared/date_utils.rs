/// Date helpers for the profile views
use chrono::NaiveDate;

/// Today's date in the browser's local time zone
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

/// Format a date as DD.MM.YYYY
/// Example: 1998-07-02 -> "02.07.1998"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Parse the value of an `<input type="date">`; blank or invalid is `None`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value for an `<input type="date">`
pub fn input_date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
