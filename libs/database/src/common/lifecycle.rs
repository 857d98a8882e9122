use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Storage state of a persisted record.
///
/// Deleted records stay in storage and are skipped by lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Lifecycle {
    #[default]
    Active,
    Deleted { at: DateTime<Utc> },
}

impl Lifecycle {
    /// Value stored in `lifecycle.state` for live records
    pub const ACTIVE_STATE: &'static str = "active";

    pub fn is_active(&self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    pub fn deleted_now() -> Self {
        Lifecycle::Deleted { at: Utc::now() }
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Lifecycle::Active => None,
            Lifecycle::Deleted { at } => Some(*at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_active() {
        let lifecycle = Lifecycle::default();
        assert!(lifecycle.is_active());
        assert_eq!(lifecycle.deleted_at(), None);
    }

    #[test]
    fn test_serializes_as_tagged_state() {
        assert_eq!(
            serde_json::to_value(Lifecycle::Active).unwrap(),
            json!({ "state": "active" })
        );

        let deleted = Lifecycle::deleted_now();
        let value = serde_json::to_value(deleted).unwrap();
        assert_eq!(value["state"], "deleted");
        assert!(value["at"].is_string());
    }

    #[test]
    fn test_deleted_round_trips_timestamp() {
        let value = json!({ "state": "deleted", "at": "2024-05-01T10:00:00Z" });
        let lifecycle: Lifecycle = serde_json::from_value(value).unwrap();

        assert!(!lifecycle.is_active());
        assert_eq!(
            lifecycle.deleted_at().unwrap().to_rfc3339(),
            "2024-05-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_unknown_state_rejected() {
        let result = serde_json::from_value::<Lifecycle>(json!({ "state": "archived" }));
        assert!(result.is_err());
    }
}
