use crate::domain::model::{AnimationConfig, ObserverConfig, SvgIconConfig};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_root_margin,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub observer: ObserverConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub svg_icon: SvgIconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub name: String,
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Servicio Técnico PC".to_string(),
            description: "Reparación, armado y mantenimiento de computadoras".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta::default(),
            observer: ObserverConfig::default(),
            animation: AnimationConfig::default(),
            svg_icon: SvgIconConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Loads the site configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Field-level sanity checks beyond what deserialization guarantees.
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;
        validate_non_empty_string("site.description", &self.site.description)?;

        validate_range("observer.threshold", self.observer.threshold, 0.0, 1.0)?;
        validate_root_margin("observer.root_margin", &self.observer.root_margin)?;

        validate_range("animation.base_delay", self.animation.base_delay, 0.0, 60.0)?;
        validate_range(
            "animation.delay_multiplier",
            self.animation.delay_multiplier,
            0.0,
            10.0,
        )?;

        validate_positive_number("svg_icon.width", self.svg_icon.width as usize, 1)?;
        validate_positive_number("svg_icon.height", self.svg_icon.height as usize, 1)?;
        validate_positive_number(
            "svg_icon.stroke_width",
            self.svg_icon.stroke_width as usize,
            1,
        )?;
        validate_non_empty_string("svg_icon.view_box", &self.svg_icon.view_box)?;

        Ok(())
    }

    pub fn observer_config(&self) -> ObserverConfig {
        self.observer.clone()
    }

    pub fn animation_config(&self) -> AnimationConfig {
        self.animation
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
