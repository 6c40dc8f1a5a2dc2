//! Observable state of one fetch stage.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// The two dependent requests of a fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Layout,
    Data,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed payload together with the raw JSON it was parsed from.
///
/// Serializes as the raw JSON, so debug output shows exactly what the
/// backend sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub payload: T,
    pub raw: Value,
}

impl<T> Fetched<T> {
    pub fn new(payload: T, raw: Value) -> Self {
        Self { payload, raw }
    }
}

impl<T> Serialize for Fetched<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    #[must_use]
    pub fn succeeded(&self) -> Option<&T> {
        match self {
            Self::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

impl<T: Serialize> FetchState<T> {
    /// JSON shown in the response debug panels.
    ///
    /// `null` until a result exists, the payload on success and
    /// `{"error": message}` on failure.
    #[must_use]
    pub fn debug_json(&self) -> Value {
        match self {
            Self::Idle | Self::Loading => Value::Null,
            Self::Succeeded(payload) => {
                serde_json::to_value(payload).unwrap_or_else(|e| json!({ "error": e.to_string() }))
            }
            Self::Failed(message) => json!({ "error": message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_json_per_state() {
        let idle: FetchState<Fetched<()>> = FetchState::Idle;
        assert_eq!(idle.debug_json(), Value::Null);

        let ok = FetchState::Succeeded(Fetched::new((), json!({"items": [], "extra": 1})));
        assert_eq!(ok.debug_json(), json!({"items": [], "extra": 1}));

        let failed: FetchState<Fetched<()>> = FetchState::Failed("boom".to_string());
        assert_eq!(failed.debug_json(), json!({"error": "boom"}));
    }

    #[test]
    fn accessors() {
        let state = FetchState::Succeeded(3);
        assert_eq!(state.succeeded(), Some(&3));
        assert_eq!(state.error(), None);
        assert_eq!(state.label(), "succeeded");
        assert!(FetchState::<i32>::default().is_idle());
    }
}
