//! View intents
//!
//! Typed commands the presentational layer emits instead of holding one
//! closure per action. The state owner matches on the intent and drives the
//! habit or purchase engine; the views never mutate anything themselves.

use serde::{Deserialize, Serialize};

use crate::types::HabitId;

/// A command emitted by a habit card
///
/// `Complete` carries an optional measured value for quantified habits
/// (minutes read, kilometers run). Plain habits leave it `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HabitIntent {
    Complete { id: HabitId, value: Option<f64> },
    Miss(HabitId),
    Delete(HabitId),
}

/// Result of a purchase attempt, reported back to the shop view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub success: bool,
    pub message: String,
}

impl PurchaseOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_intent_defaults_to_unquantified() {
        let id = HabitId::new();
        let intent = HabitIntent::Complete {
            id: id.clone(),
            value: None,
        };
        match intent {
            HabitIntent::Complete { id: got, value } => {
                assert_eq!(got, id);
                assert!(value.is_none());
            }
            other => panic!("unexpected intent: {other:?}"),
        }
    }

    #[test]
    fn test_intent_round_trips_through_json() {
        let intent = HabitIntent::Miss(HabitId::new());
        let json = serde_json::to_string(&intent).unwrap();
        let back: HabitIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, back);
    }

    #[test]
    fn test_outcome_constructors() {
        let granted = PurchaseOutcome::ok("Streak Shield purchased!");
        assert!(granted.success);
        assert_eq!(granted.message, "Streak Shield purchased!");

        let denied = PurchaseOutcome::rejected("Not enough coins");
        assert!(!denied.success);
        assert_eq!(denied.message, "Not enough coins");
    }
}
