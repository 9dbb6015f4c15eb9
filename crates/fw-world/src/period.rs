use serde::{Deserialize, Serialize};

/// A named time-of-day bucket, active from its start hour until the next one begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePeriod {
    /// Hour of day (0.0..24.0) at which the period begins.
    #[serde(rename = "hour", alias = "startHour")]
    pub start_hour: f64,
    /// Period name, e.g. "Dawn".
    #[serde(alias = "periodName")]
    pub name: String,
    /// Message emitted when the period becomes active.
    #[serde(alias = "transitionMessage")]
    pub message: String,
}

impl TimePeriod {
    /// Create a period.
    pub fn new(start_hour: f64, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            start_hour,
            name: name.into(),
            message: message.into(),
        }
    }
}

/// The ordered list of time-of-day periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeTable {
    periods: Vec<TimePeriod>,
}

impl TimeTable {
    /// Create a table from periods already ordered by start hour.
    pub fn new(periods: Vec<TimePeriod>) -> Self {
        Self { periods }
    }

    /// All periods in order.
    pub fn periods(&self) -> &[TimePeriod] {
        &self.periods
    }

    /// Whether start hours never decrease.
    pub fn is_sorted(&self) -> bool {
        self.periods
            .windows(2)
            .all(|pair| pair[0].start_hour <= pair[1].start_hour)
    }

    /// The latest period whose start hour is at or before `hour`.
    ///
    /// Returns `None` when `hour` is earlier than every start hour.
    pub fn active_at(&self, hour: f64) -> Option<&TimePeriod> {
        self.periods
            .iter()
            .take_while(|period| period.start_hour <= hour)
            .last()
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the table has no periods.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> TimeTable {
        TimeTable::new(vec![
            TimePeriod::new(5.0, "Dawn", "The sky pales."),
            TimePeriod::new(8.0, "Morning", "The sun climbs."),
            TimePeriod::new(12.0, "Noon", "The sun stands high."),
            TimePeriod::new(18.0, "Dusk", "Shadows lengthen."),
            TimePeriod::new(21.0, "Night", "Darkness falls."),
        ])
    }

    #[test]
    fn active_period_is_latest_started() {
        let table = day();
        assert_eq!(table.active_at(8.0).map(|p| p.name.as_str()), Some("Morning"));
        assert_eq!(table.active_at(11.75).map(|p| p.name.as_str()), Some("Morning"));
        assert_eq!(table.active_at(12.0).map(|p| p.name.as_str()), Some("Noon"));
        assert_eq!(table.active_at(23.5).map(|p| p.name.as_str()), Some("Night"));
    }

    #[test]
    fn before_first_period_is_none() {
        assert!(day().active_at(2.0).is_none());
        assert!(TimeTable::default().active_at(10.0).is_none());
    }

    #[test]
    fn sortedness() {
        assert!(day().is_sorted());
        let table = TimeTable::new(vec![
            TimePeriod::new(12.0, "Noon", ""),
            TimePeriod::new(5.0, "Dawn", ""),
        ]);
        assert!(!table.is_sorted());
    }

    #[test]
    fn deserialize_accepts_both_field_spellings() {
        let json = r#"[
            { "hour": 5, "name": "Dawn", "message": "The sky pales." },
            { "startHour": 12, "periodName": "Noon", "transitionMessage": "High sun." }
        ]"#;
        let table: TimeTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.periods()[1].name, "Noon");
        assert!((table.periods()[1].start_hour - 12.0).abs() < f64::EPSILON);
    }
}
