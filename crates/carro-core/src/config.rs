//! # Configuration
//!
//! The two call conventions of Carro differ only in how they treat omitted
//! payload fields and how partial state updates are applied. Both are selected
//! through [`CarroConfig`]:
//!
//! ```rust
//! use carro_core::*;
//!
//! let cfg = CarroConfig::strict().merge_mode(MergeMode::Spread);
//! assert!(cfg.require_all_fields);
//! ```
//!
//! With the `serde` feature the config can be loaded from any serde format,
//! using snake_case names (`"spread"`, `"nested"`).

/// How `SetState::set` combines a partial update with the previous value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MergeMode {
    /// Keys of the partial override keys of the previous value.
    #[default]
    Spread,
    /// Partial is stored under [`NESTED_UPDATE_KEY`](crate::NESTED_UPDATE_KEY);
    /// existing keys are left as they were.
    Nested,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CarroConfig {
    /// Treat every payload field as required instead of defaulting it.
    pub require_all_fields: bool,
    pub merge_mode: MergeMode,
}

impl CarroConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            require_all_fields: true,
            ..Self::default()
        }
    }

    pub fn require_all_fields(mut self, yes: bool) -> Self {
        self.require_all_fields = yes;
        self
    }

    pub fn merge_mode(mut self, mode: MergeMode) -> Self {
        self.merge_mode = mode;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let cfg = CarroConfig::strict().merge_mode(MergeMode::Nested);
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(text, r#"{"require_all_fields":true,"merge_mode":"nested"}"#);
        assert_eq!(serde_json::from_str::<CarroConfig>(&text).unwrap(), cfg);
    }

    #[test]
    fn omitted_config_fields_use_defaults() {
        let cfg: CarroConfig = serde_json::from_str(r#"{"merge_mode":"nested"}"#).unwrap();
        assert!(!cfg.require_all_fields);
        assert_eq!(cfg.merge_mode, MergeMode::Nested);

        let cfg: CarroConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, CarroConfig::default());
        assert_eq!(serde_json::to_string(&MergeMode::Spread).unwrap(), r#""spread""#);
    }
}
