//! Built-in sample decisions.
//!
//! Presets are embedded with `include_str!` and parsed once on first use.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Alternative, ArasError, Criterion, CriterionConfig};
use crate::domain::foundation::{DomainError, ErrorCode};

static SMARTPHONE: Lazy<Result<Preset, String>> = Lazy::new(|| {
    serde_yaml::from_str(include_str!("presets/smartphone.yaml")).map_err(|e| e.to_string())
});

/// Errors loading a preset.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PresetError {
    #[error("Unknown preset '{0}'")]
    Unknown(String),

    #[error("Preset '{name}' is malformed: {reason}")]
    Malformed { name: &'static str, reason: String },
}

impl From<PresetError> for DomainError {
    fn from(err: PresetError) -> Self {
        let (code, name) = match &err {
            PresetError::Unknown(name) => (ErrorCode::PresetUnavailable, name.clone()),
            PresetError::Malformed { name, .. } => (ErrorCode::InternalError, name.to_string()),
        };
        DomainError::new(code, err.to_string()).with_detail("preset", name)
    }
}

/// A ready-made criterion set with sample alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

impl Preset {
    /// Names accepted by [`Preset::by_name`].
    pub const NAMES: &'static [&'static str] = &["smartphone"];

    /// Looks up a built-in preset.
    pub fn by_name(name: &str) -> Result<Preset, PresetError> {
        match name {
            "smartphone" => Self::smartphone(),
            other => Err(PresetError::Unknown(other.to_string())),
        }
    }

    /// Four mid-range phones over price, RAM, ROM, battery and camera.
    pub fn smartphone() -> Result<Preset, PresetError> {
        SMARTPHONE.clone().map_err(|reason| PresetError::Malformed {
            name: "smartphone",
            reason,
        })
    }

    /// Validated criterion configuration for this preset.
    pub fn config(&self) -> Result<CriterionConfig, ArasError> {
        CriterionConfig::from_criteria(self.criteria.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aras::{ArasPipeline, CriterionDirection, PipelineOptions};

    #[test]
    fn smartphone_preset_loads() {
        let preset = Preset::smartphone().unwrap();

        assert_eq!(preset.name, "smartphone");
        assert_eq!(preset.criteria.len(), 5);
        assert_eq!(preset.alternatives.len(), 4);
    }

    #[test]
    fn by_name_resolves_known_presets() {
        for name in Preset::NAMES {
            assert_eq!(Preset::by_name(name).unwrap().name, *name);
        }
    }

    #[test]
    fn by_name_rejects_unknown_preset() {
        let err = Preset::by_name("laptop").unwrap_err();
        assert_eq!(err, PresetError::Unknown("laptop".to_string()));

        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::PresetUnavailable);
        assert_eq!(domain.details.get("preset").map(String::as_str), Some("laptop"));
    }

    #[test]
    fn smartphone_price_is_the_only_cost_criterion() {
        let preset = Preset::smartphone().unwrap();
        let costs: Vec<_> = preset
            .criteria
            .iter()
            .filter(|c| c.direction == CriterionDirection::Cost)
            .map(|c| c.name.as_str())
            .collect();

        assert_eq!(costs, vec!["Price"]);
    }

    #[test]
    fn smartphone_weights_sum_to_one() {
        let config = Preset::smartphone().unwrap().config().unwrap();
        assert!((config.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn smartphone_alternatives_cover_every_criterion() {
        let preset = Preset::smartphone().unwrap();
        for alternative in &preset.alternatives {
            for criterion in &preset.criteria {
                assert!(
                    alternative.values.contains_key(&criterion.name),
                    "{} lacks {}",
                    alternative.id,
                    criterion.name
                );
            }
        }
    }

    #[test]
    fn smartphone_preset_ranks_realme_first() {
        let preset = Preset::smartphone().unwrap();
        let config = preset.config().unwrap();

        let outcome =
            ArasPipeline::run(&config, &preset.alternatives, PipelineOptions::default()).unwrap();

        let ids: Vec<_> = outcome.ranking.rows.iter().map(|r| r.header.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["realme-11-pro", "infinix-gt-10-pro", "xiaomi-13t", "samsung-galaxy-a54"]
        );
        assert!((outcome.best().unwrap().utility_degree - 0.929_738_113_722).abs() < 1e-9);
    }
}
