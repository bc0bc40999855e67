// src/generator/config.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CaveError, Result};

/// How tunnels between rooms are carved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum TunnelStyle {
    /// A walkable "+"-stamped curve.
    #[default]
    Bezier,
    /// A thin curve eroded in isolation before being merged into the map.
    Cavern { base_probability: f64, iterations: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub room_target: usize,
    pub min_radius: i32,
    pub max_radius: i32,
    pub min_separation: f64,
    pub max_placement_attempts: usize,
    /// Range of the random offset pushing a tunnel's control point away from
    /// the bounding box of its two rooms.
    pub min_bend: i32,
    pub max_bend: i32,
    pub tunnel_style: TunnelStyle,
    pub acid_base_probability: f64,
    pub acid_iterations: usize,
    pub smooth_min_diagonals: usize,
    pub fill_min_diagonals: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            room_target: 7,
            min_radius: 6,
            max_radius: 10,
            min_separation: 10.0,
            max_placement_attempts: 1000,
            min_bend: 1,
            max_bend: 5,
            tunnel_style: TunnelStyle::Bezier,
            acid_base_probability: 0.05,
            acid_iterations: 2,
            smooth_min_diagonals: 3,
            fill_min_diagonals: 3,
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CaveError::InvalidConfig(format!(
            "{} must lie in [0, 1], got {}",
            name, value
        )))
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_radius <= 0 {
            return Err(CaveError::DegenerateGeometry(format!(
                "room radius must be positive, got min_radius {}",
                self.min_radius
            )));
        }
        if self.min_radius > self.max_radius {
            return Err(CaveError::InvalidConfig(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        if self.min_bend > self.max_bend {
            return Err(CaveError::InvalidConfig(format!(
                "min_bend {} exceeds max_bend {}",
                self.min_bend, self.max_bend
            )));
        }
        if !self.min_separation.is_finite() {
            return Err(CaveError::InvalidConfig(
                "min_separation must be finite".to_string(),
            ));
        }
        check_probability("acid_base_probability", self.acid_base_probability)?;
        if let TunnelStyle::Cavern { base_probability, .. } = self.tunnel_style {
            check_probability("tunnel_style.base_probability", base_probability)?;
        }
        Ok(())
    }

    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_tunables() {
        let config = GeneratorConfig::default();
        assert_eq!(config.room_target, 7);
        assert_eq!((config.min_radius, config.max_radius), (6, 10));
        assert_eq!(config.min_separation, 10.0);
        assert_eq!(config.max_placement_attempts, 1000);
        assert_eq!(config.acid_base_probability, 0.05);
        assert_eq!(config.acid_iterations, 2);
        assert_eq!((config.smooth_min_diagonals, config.fill_min_diagonals), (3, 3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "room_target": 4, "max_radius": 8 }"#)
            .unwrap();
        assert_eq!(config.room_target, 4);
        assert_eq!(config.max_radius, 8);
        assert_eq!(config.min_radius, 6);
        assert_eq!(config.tunnel_style, TunnelStyle::Bezier);
    }

    #[test]
    fn test_cavern_style_from_json() {
        let config = GeneratorConfig::from_json_str(
            r#"{ "tunnel_style": { "style": "cavern", "base_probability": 0.1, "iterations": 3 } }"#,
        )
        .unwrap();
        assert_eq!(
            config.tunnel_style,
            TunnelStyle::Cavern {
                base_probability: 0.1,
                iterations: 3
            }
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero_radius = GeneratorConfig {
            min_radius: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            zero_radius.validate(),
            Err(CaveError::DegenerateGeometry(_))
        ));

        let inverted = GeneratorConfig {
            min_radius: 9,
            max_radius: 7,
            ..GeneratorConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(CaveError::InvalidConfig(_))));

        let bad_probability = GeneratorConfig {
            acid_base_probability: 1.5,
            ..GeneratorConfig::default()
        };
        assert!(bad_probability.validate().is_err());

        assert!(matches!(
            GeneratorConfig::from_json_str("{ not json"),
            Err(CaveError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GeneratorConfig::load("/definitely/not/here.json"),
            Err(CaveError::Io(_))
        ));
    }
}
