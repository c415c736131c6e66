use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Midnight UTC of the given calendar day.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_day_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).expect("date");
        let value = start_of_day_utc(date);
        assert_eq!(value.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }
}
