//! Day / month / year triple shown next to surveys.

use chrono::{DateTime, Datelike, Utc};

/// pt-BR short month names, lowercase, without the trailing dot
const MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl From<&DateTime<Utc>> for Calendar {
    fn from(date: &DateTime<Utc>) -> Self {
        Self {
            day: format!("{:02}", date.day()),
            month: MONTHS[date.month0() as usize].to_string(),
            year: date.year().to_string(),
        }
    }
}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_calendar_parts() {
        let date = Utc.with_ymd_and_hms(2022, 12, 21, 10, 0, 0).unwrap();
        let calendar = Calendar::from(&date);

        assert_eq!(calendar.day, "21");
        assert_eq!(calendar.month, "dez");
        assert_eq!(calendar.year, "2022");
    }

    #[test]
    fn test_day_is_zero_padded() {
        let date = Utc.with_ymd_and_hms(2023, 2, 3, 0, 0, 0).unwrap();
        assert_eq!(Calendar::from(&date).to_string(), "03 fev 2023");
    }
}
