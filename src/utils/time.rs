use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Half-open bounds `[day, day + 1)` used by the single-day search filter.
pub fn day_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let next = day.succ_opt().unwrap_or(NaiveDate::MAX);
    (day, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_bounds_cross_month_end() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let (start, end) = day_bounds(day);
        assert_eq!(start, day);
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }

    #[test]
    fn day_bounds_saturate_at_max() {
        let (start, end) = day_bounds(NaiveDate::MAX);
        assert_eq!(start, end);
    }
}
