//! Declarative shift catalog — per-shift configuration, immutable once a
//! shift starts.
//!
//! The catalog is plain data: duration, spawn cadence, classification
//! rule, narrative text, atmosphere tint, and optional scripted dialogue
//! overrides keyed on spawn ordinal. It is typically loaded from JSON
//! (see `data/shift_catalog.json`).

use beltline_logic::classify::ClassifyRule;
use serde::{Deserialize, Serialize};

/// Configuration for one shift. Read-only while the shift runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Display name, e.g. "Night One".
    pub name: String,
    /// Real-time shift length in seconds.
    pub duration_secs: f32,
    /// Seconds between spawn attempts. The first spawn fires immediately
    /// at shift start.
    pub spawn_interval_secs: f32,
    /// Spawn-order classification rule for this shift.
    pub rule: ClassifyRule,
    /// Narrative text presented when the shift starts.
    #[serde(default)]
    pub narrative: String,
    /// Ambient tint for the presentation layer, e.g. "#1a1a2e". The core
    /// carries it but never interprets it.
    #[serde(default)]
    pub atmosphere: String,
    /// Scripted per-spawn dialogue, overriding the classification default.
    #[serde(default)]
    pub dialogue_overrides: Vec<DialogueOverride>,
}

/// Custom dialogue for the `ordinal`-th item spawned in a shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueOverride {
    /// 1-based spawn ordinal the override applies to.
    pub ordinal: u32,
    pub text: String,
}

impl ShiftConfig {
    /// Scripted dialogue for a spawn ordinal, if this shift declares one.
    pub fn dialogue_override(&self, ordinal: u32) -> Option<&str> {
        self.dialogue_overrides
            .iter()
            .find(|o| o.ordinal == ordinal)
            .map(|o| o.text.as_str())
    }
}

/// Ordered list of shift configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCatalog {
    pub shifts: Vec<ShiftConfig>,
}

impl ShiftCatalog {
    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: ShiftCatalog = serde_json::from_str(json)?;
        if catalog.shifts.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// Configuration for shift `index`, if one exists.
    pub fn get(&self, index: usize) -> Option<&ShiftConfig> {
        self.shifts.get(index)
    }

    /// Whether a shift follows `index`.
    pub fn has_next(&self, index: usize) -> bool {
        index + 1 < self.shifts.len()
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// The built-in three-night run used when no catalog file is supplied.
    pub fn builtin() -> Self {
        Self {
            shifts: vec![
                ShiftConfig {
                    name: "Night One".into(),
                    duration_secs: 180.0,
                    spawn_interval_secs: 10.0,
                    rule: ClassifyRule::DebutThird,
                    narrative: "First night on the line. Check every toy before it ships.".into(),
                    atmosphere: "#1a1a2e".into(),
                    dialogue_overrides: Vec::new(),
                },
                ShiftConfig {
                    name: "Night Two".into(),
                    duration_secs: 180.0,
                    spawn_interval_secs: 10.0,
                    rule: ClassifyRule::AlternatingOdd,
                    narrative: "More of them are wrong tonight. Trust nothing.".into(),
                    atmosphere: "#16213e".into(),
                    dialogue_overrides: Vec::new(),
                },
                ShiftConfig {
                    name: "Night Three".into(),
                    duration_secs: 180.0,
                    spawn_interval_secs: 10.0,
                    rule: ClassifyRule::AllGood,
                    narrative: "Quiet belt. Too quiet.".into(),
                    atmosphere: "#0f3460".into(),
                    dialogue_overrides: Vec::new(),
                },
            ],
        }
    }
}

/// Errors from loading a shift catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog parsed but contains no shifts.
    Empty,
    /// JSON parse failure.
    Json(serde_json::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(e)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "shift catalog contains no shifts"),
            CatalogError::Json(e) => write!(f, "shift catalog JSON error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_rules_follow_shift_order() {
        let catalog = ShiftCatalog::builtin();
        assert_eq!(catalog.get(0).unwrap().rule, ClassifyRule::DebutThird);
        assert_eq!(catalog.get(1).unwrap().rule, ClassifyRule::AlternatingOdd);
        assert_eq!(catalog.get(2).unwrap().rule, ClassifyRule::AllGood);
        assert!(catalog.has_next(0));
        assert!(!catalog.has_next(2));
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let json = r#"{
            "shifts": [{
                "name": "Test Night",
                "duration_secs": 60.0,
                "spawn_interval_secs": 5.0,
                "rule": "AlternatingOdd",
                "narrative": "hello",
                "dialogue_overrides": [{ "ordinal": 2, "text": "It blinked." }]
            }]
        }"#;
        let catalog = ShiftCatalog::from_json(json).unwrap();
        let shift = catalog.get(0).unwrap();
        assert_eq!(shift.rule, ClassifyRule::AlternatingOdd);
        assert_eq!(shift.dialogue_override(2), Some("It blinked."));
        assert_eq!(shift.dialogue_override(1), None);
        assert_eq!(shift.atmosphere, "");
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let err = ShiftCatalog::from_json(r#"{ "shifts": [] }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ShiftCatalog::from_json("{ nope").is_err());
    }
}
