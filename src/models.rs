use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitStatus {
    Success,
    Failed,
    /// Any other outcome string. Shown as a loss, never counted.
    #[serde(other)]
    Unknown,
}

/// A tracked habit as returned by the habits API. Read-only on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: HabitStatus,
    pub date: String,
    /// Per-day outcome keyed by date string.
    #[serde(default, deserialize_with = "null_as_default")]
    pub calendar_entries: BTreeMap<String, HabitStatus>,
}

/// Envelope of `GET /api/habits`.
#[derive(Debug, Default, Deserialize)]
pub struct HabitsEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Habit>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCounts {
    pub success: u32,
    pub failed: u32,
}

impl WindowCounts {
    pub fn record(&mut self, status: HabitStatus) {
        match status {
            HabitStatus::Success => self.success = self.success.saturating_add(1),
            HabitStatus::Failed => self.failed = self.failed.saturating_add(1),
            HabitStatus::Unknown => {}
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub weekly: WindowCounts,
    pub monthly: WindowCounts,
    pub annually: WindowCounts,
}

#[derive(Debug, Serialize)]
pub struct HabitCard {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: HabitStatus,
    pub icon: Option<&'static str>,
    pub statistics: Statistics,
}

#[derive(Debug, Serialize)]
pub struct BattleLogResponse {
    pub loading: bool,
    pub habits: Vec<HabitCard>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_data_is_empty() {
        let envelope: HabitsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());

        let envelope: HabitsEnvelope = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn habit_reads_wire_shape() {
        let habit: Habit = serde_json::from_str(
            r#"{
                "id": "h1",
                "user_id": "u1",
                "name": "No cigarettes",
                "type": "smoking",
                "status": "failed",
                "date": "2026-01-01",
                "calendar_entries": {"2026-01-02": "success", "2026-01-03": "failed"}
            }"#,
        )
        .unwrap();

        assert_eq!(habit.kind, "smoking");
        assert_eq!(habit.status, HabitStatus::Failed);
        assert_eq!(habit.calendar_entries.len(), 2);
        assert_eq!(
            habit.calendar_entries.get("2026-01-03"),
            Some(&HabitStatus::Failed)
        );
    }

    #[test]
    fn habit_with_null_calendar_has_no_entries() {
        let habit: Habit = serde_json::from_str(
            r#"{"id": "h1", "user_id": "u1", "name": "n", "type": "drink",
                "status": "success", "date": "2026-01-01", "calendar_entries": null}"#,
        )
        .unwrap();
        assert!(habit.calendar_entries.is_empty());
    }

    #[test]
    fn unknown_outcome_keeps_the_habit() {
        let envelope: HabitsEnvelope = serde_json::from_str(
            r#"{"data": [
                {"id": "h1", "user_id": "u1", "name": "n", "type": "drink",
                 "status": "maybe", "date": "2026-01-01",
                 "calendar_entries": {"2026-01-02": "skipped", "2026-01-03": "success"}},
                {"id": "h2", "user_id": "u1", "name": "m", "type": "smoking",
                 "status": "success", "date": "2026-01-01"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(envelope.data.len(), 2);
        let habit = &envelope.data[0];
        assert_eq!(habit.status, HabitStatus::Unknown);
        assert_eq!(
            habit.calendar_entries.get("2026-01-02"),
            Some(&HabitStatus::Unknown)
        );
    }

    #[test]
    fn unknown_outcome_is_not_recorded() {
        let mut counts = WindowCounts::default();
        counts.record(HabitStatus::Unknown);
        counts.record(HabitStatus::Failed);
        assert_eq!(counts, WindowCounts { success: 0, failed: 1 });
    }
}
