//! Persisted engine state
//!
//! The snapshot is a JSON object:
//!
//! ```text
//! {"board":[["f","i","","",""],...],"currentRow":0,"currentCol":2,"gameStatus":"playing","day":153}
//! ```
//!
//! Colors and the secret word are never written; colors are re-derived and the
//! secret is re-derived from `day` through the word provider.

use super::{EngineError, GameStatus};
use serde::{Deserialize, Serialize};

/// Full serializable snapshot of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub board: Vec<Vec<String>>,
    pub current_row: usize,
    pub current_col: usize,
    pub game_status: GameStatus,
    /// Day index the secret was chosen for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl PersistedState {
    /// Encode as JSON
    ///
    /// # Errors
    /// Returns `EngineError::Encode` if serialization fails.
    pub fn encode(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    ///
    /// # Errors
    /// Returns `EngineError::StateCorrupt` for unparsable input, missing
    /// fields, or wrongly typed fields.
    pub fn decode(blob: &str) -> Result<Self, EngineError> {
        serde_json::from_str(blob).map_err(|e| EngineError::StateCorrupt(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PersistedState {
        PersistedState {
            board: vec![vec!["f".to_string(), String::new()], vec![String::new(); 2]],
            current_row: 0,
            current_col: 1,
            game_status: GameStatus::Playing,
            day: Some(42),
        }
    }

    #[test]
    fn encode_uses_camel_case_fields() {
        let json = sample().encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["currentRow"], 0);
        assert_eq!(value["currentCol"], 1);
        assert_eq!(value["gameStatus"], "playing");
        assert_eq!(value["day"], 42);
        assert_eq!(value["board"][0][0], "f");
    }

    #[test]
    fn decode_encoded_state() {
        let state = sample();
        let decoded = PersistedState::decode(&state.encode().unwrap()).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn day_is_optional() {
        let json = r#"{"board":[],"currentRow":0,"currentCol":0,"gameStatus":"won"}"#;
        let state = PersistedState::decode(json).unwrap();
        assert_eq!(state.day, None);
        assert_eq!(state.game_status, GameStatus::Won);
    }

    #[test]
    fn decode_rejects_malformed_input() {
        for blob in [
            "",
            "null",
            "not json",
            r#"{"board":[],"currentRow":0,"currentCol":0}"#,
            r#"{"board":[],"currentRow":"zero","currentCol":0,"gameStatus":"playing"}"#,
            r#"{"board":[],"currentRow":0,"currentCol":0,"gameStatus":"paused"}"#,
            r#"{"board":[[1,2]],"currentRow":0,"currentCol":0,"gameStatus":"playing"}"#,
            r#"{"board":[],"currentRow":-1,"currentCol":0,"gameStatus":"playing"}"#,
        ] {
            assert!(
                matches!(
                    PersistedState::decode(blob),
                    Err(EngineError::StateCorrupt(_))
                ),
                "expected {blob:?} to be rejected"
            );
        }
    }
}
