//! Domain models for the presence service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A player presence record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    /// Unique identifier, assigned by storage
    pub id: i32,
    /// Display name
    pub name: String,
    /// When the presence event happened
    pub presence_date: DateTime<Utc>,
    /// Free-form presence status
    pub presence_state: String,
}

/// Writable fields of a player, as sent by clients on create and update.
///
/// Any `id` in the request body is ignored; identifiers only come from
/// storage or from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub name: String,
    pub presence_date: DateTime<Utc>,
    pub presence_state: String,
}

impl PlayerInput {
    /// Attach an identifier to these fields
    pub fn into_player(self, id: i32) -> Player {
        Player {
            id,
            name: self.name,
            presence_date: self.presence_date,
            presence_state: self.presence_state,
        }
    }
}

impl From<Player> for PlayerInput {
    fn from(player: Player) -> Self {
        Self {
            name: player.name,
            presence_date: player.presence_date,
            presence_state: player.presence_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_input() -> PlayerInput {
        PlayerInput {
            name: "alice".to_string(),
            presence_date: Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap(),
            presence_state: "present".to_string(),
        }
    }

    #[test]
    fn test_player_serialization() {
        let player = sample_input().into_player(7);
        let json = serde_json::to_value(&player).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "alice");
        assert_eq!(json["presence_date"], "2024-03-01T18:30:00Z");
        assert_eq!(json["presence_state"], "present");
    }

    #[test]
    fn test_input_ignores_client_id() {
        let json = r#"{
            "id": 99,
            "name": "alice",
            "presence_date": "2024-03-01T18:30:00Z",
            "presence_state": "present"
        }"#;
        let input: PlayerInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, sample_input());
    }

    #[test]
    fn test_input_normalizes_offset_to_utc() {
        let json = r#"{
            "name": "alice",
            "presence_date": "2024-03-01T15:30:00-03:00",
            "presence_state": "present"
        }"#;
        let input: PlayerInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.presence_date, sample_input().presence_date);
    }

    #[test]
    fn test_input_requires_all_fields() {
        let json = r#"{"name": "alice"}"#;
        assert!(serde_json::from_str::<PlayerInput>(json).is_err());
    }

    #[test]
    fn test_player_into_input_drops_id() {
        let player = sample_input().into_player(3);
        assert_eq!(PlayerInput::from(player), sample_input());
    }
}
