use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::LectureValidationError;

/// Canonical format of the `date` field and of the aggregation keys.
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A single lecture recorded on a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    /// Time-derived unique ID. New IDs look like "lecture::epoch_millis",
    /// but any string already in storage is accepted as-is.
    pub id: String,
    /// Calendar date in YYYY-MM-DD format
    pub date: String,
    pub title: String,
    /// Amount in won, never negative once validated
    pub amount: f64,
}

impl Lecture {
    /// Generate a lecture ID from a millisecond timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("lecture::{}", epoch_millis)
    }

    /// The calendar date of this lecture, if the stored string is a valid date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date)
    }

    /// Whether this lecture falls inside the given year and month (1-12)
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.parsed_date()
            .map(|d| d.year() == year && d.month() == month)
            .unwrap_or(false)
    }
}

/// Format a date as the canonical YYYY-MM-DD key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a YYYY-MM-DD key. The result is a plain calendar date with no
/// timezone attached, so month membership never shifts around midnight.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT).ok()
}

/// Validate raw form input, returning the cleaned title and amount.
pub fn validate_lecture_input(
    title: &str,
    amount: &str,
) -> Result<(String, f64), LectureValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(LectureValidationError::EmptyTitle);
    }

    let raw_amount = amount.trim();
    let parsed = raw_amount
        .parse::<f64>()
        .map_err(|_| LectureValidationError::InvalidAmount(raw_amount.to_string()))?;
    if !parsed.is_finite() {
        return Err(LectureValidationError::InvalidAmount(raw_amount.to_string()));
    }
    if parsed < 0.0 {
        return Err(LectureValidationError::NegativeAmount);
    }

    // "-0" parses as negative zero
    let parsed = if parsed == 0.0 { 0.0 } else { parsed };
    Ok((title.to_string(), parsed))
}

/// The full, insertion-ordered lecture collection.
///
/// Persisted as a plain JSON array of lectures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LectureBook {
    lectures: Vec<Lecture>,
}

impl LectureBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    pub fn len(&self) -> usize {
        self.lectures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Lecture> {
        self.lectures.iter().find(|l| l.id == id)
    }

    /// Produce an ID for a lecture created at `epoch_millis` that does not
    /// collide with any existing lecture.
    pub fn next_id(&self, epoch_millis: u64) -> String {
        let mut millis = epoch_millis;
        loop {
            let id = Lecture::generate_id(millis);
            if self.get(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }

    /// Append a new lecture and return its ID
    pub fn add(
        &mut self,
        date: NaiveDate,
        title: String,
        amount: f64,
        epoch_millis: u64,
    ) -> String {
        let id = self.next_id(epoch_millis);
        log::info!("Adding lecture {} on {}", id, date_key(date));
        self.lectures.push(Lecture {
            id: id.clone(),
            date: date_key(date),
            title,
            amount,
        });
        id
    }

    /// Change title and amount of an existing lecture in place.
    /// ID, date and position are preserved. Returns false if the ID is unknown.
    pub fn update(&mut self, id: &str, title: String, amount: f64) -> bool {
        match self.lectures.iter_mut().find(|l| l.id == id) {
            Some(lecture) => {
                log::info!("Updating lecture {}", id);
                lecture.title = title;
                lecture.amount = amount;
                true
            }
            None => {
                log::warn!("Tried to update unknown lecture {}", id);
                false
            }
        }
    }

    /// Remove a lecture. Returns false if the ID is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lectures.len();
        self.lectures.retain(|l| l.id != id);
        let removed = self.lectures.len() != before;
        if removed {
            log::info!("Removed lecture {}", id);
        } else {
            log::warn!("Tried to remove unknown lecture {}", id);
        }
        removed
    }
}

impl From<Vec<Lecture>> for LectureBook {
    fn from(lectures: Vec<Lecture>) -> Self {
        Self { lectures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_lecture_id() {
        let id = Lecture::generate_id(1710460800000);
        assert_eq!(id, "lecture::1710460800000");
    }

    #[test]
    fn test_date_key_round_trip() {
        assert_eq!(date_key(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(parse_date_key("2024-03-05"), Some(date(2024, 3, 5)));
        assert_eq!(parse_date_key("2023-02-29"), None);
        assert_eq!(parse_date_key("garbage"), None);
    }

    #[test]
    fn test_is_in_month() {
        let lecture = Lecture {
            id: "1".to_string(),
            date: "2024-03-01".to_string(),
            title: "Math".to_string(),
            amount: 1.0,
        };
        assert!(lecture.is_in_month(2024, 3));
        assert!(!lecture.is_in_month(2024, 2));
        assert!(!lecture.is_in_month(2023, 3));

        let broken = Lecture { date: "not-a-date".to_string(), ..lecture };
        assert!(!broken.is_in_month(2024, 3));
    }

    #[test]
    fn test_validate_lecture_input() {
        assert_eq!(
            validate_lecture_input("  Math ", " 50000 "),
            Ok(("Math".to_string(), 50000.0))
        );
        assert_eq!(validate_lecture_input("Free", "0"), Ok(("Free".to_string(), 0.0)));
        assert_eq!(validate_lecture_input("Half", "12.5"), Ok(("Half".to_string(), 12.5)));

        assert_eq!(
            validate_lecture_input("   ", "100"),
            Err(LectureValidationError::EmptyTitle)
        );
        assert_eq!(
            validate_lecture_input("Math", "-1"),
            Err(LectureValidationError::NegativeAmount)
        );
        assert!(matches!(
            validate_lecture_input("Math", "abc"),
            Err(LectureValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate_lecture_input("Math", ""),
            Err(LectureValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate_lecture_input("Math", "inf"),
            Err(LectureValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let (_, amount) = validate_lecture_input("Math", "-0").unwrap();
        assert!(amount.is_sign_positive());
    }

    #[test]
    fn test_empty_title_reported_before_amount() {
        assert_eq!(validate_lecture_input("", "-5"), Err(LectureValidationError::EmptyTitle));
    }

    #[test]
    fn test_add_update_remove() {
        let mut book = LectureBook::new();
        let id = book.add(date(2024, 3, 15), "Math".to_string(), 50000.0, 1000);
        assert_eq!(book.len(), 1);

        assert!(book.update(&id, "Physics".to_string(), 30000.0));
        let lecture = book.get(&id).unwrap();
        assert_eq!(lecture.id, id);
        assert_eq!(lecture.date, "2024-03-15");
        assert_eq!(lecture.title, "Physics");
        assert_eq!(lecture.amount, 30000.0);

        assert!(!book.update("missing", "x".to_string(), 1.0));
        assert!(!book.remove("missing"));
        assert!(book.remove(&id));
        assert!(book.is_empty());
    }

    #[test]
    fn test_next_id_avoids_collisions() {
        let mut book = LectureBook::new();
        let first = book.add(date(2024, 1, 1), "A".to_string(), 1.0, 5000);
        let second = book.add(date(2024, 1, 1), "B".to_string(), 1.0, 5000);
        assert_eq!(first, "lecture::5000");
        assert_eq!(second, "lecture::5001");
    }

    #[test]
    fn test_update_preserves_order() {
        let mut book = LectureBook::new();
        let a = book.add(date(2024, 1, 1), "A".to_string(), 1.0, 1);
        book.add(date(2024, 1, 1), "B".to_string(), 2.0, 2);
        book.update(&a, "A2".to_string(), 3.0);
        let titles: Vec<&str> = book.lectures().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["A2", "B"]);
    }

    #[test]
    fn test_book_serializes_as_plain_array() {
        let book = LectureBook::from(vec![Lecture {
            id: "2024-03-15T09:00:00.000Z".to_string(),
            date: "2024-03-15".to_string(),
            title: "Math".to_string(),
            amount: 50000.0,
        }]);
        let json = serde_json::to_string(&book).unwrap();
        let expected = concat!(
            r#"[{"id":"2024-03-15T09:00:00.000Z","date":"2024-03-15","#,
            r#""title":"Math","amount":50000.0}]"#
        );
        assert_eq!(json, expected);

        let raw = r#"[{"id":"x","date":"2024-03-15","title":"Math","amount":50000}]"#;
        let parsed: LectureBook = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.lectures()[0].amount, 50000.0);
    }
}
