use serde::{Deserialize, Serialize};

/// Layout weight of a service card in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Normal,
    Large,
}

/// A single service offered by the shop.
///
/// `icon` holds bare SVG path-command data (`M`, `L`, arcs and so on), not
/// element markup, so it can be checked against the path-character grammar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub size: CardSize,
}

/// Outcome of a shape check. Purely a return value, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Valid iff no errors accumulated.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Construction parameters for the visibility observer.
///
/// `threshold` is the fraction of an element that must be visible before a
/// notification fires; `root_margin` grows or shrinks the effective viewport
/// using CSS margin syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Stagger timing for card reveal animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub base_delay: f64,
    pub delay_multiplier: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_delay: 0.0,
            delay_multiplier: 0.1,
        }
    }
}

/// Rendering parameters for inline SVG icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgIconConfig {
    pub width: u32,
    pub height: u32,
    pub view_box: String,
    pub stroke_width: u32,
}

impl Default for SvgIconConfig {
    fn default() -> Self {
        Self {
            width: 24,
            height: 24,
            view_box: "0 0 24 24".to_string(),
            stroke_width: 2,
        }
    }
}

/// Opaque handle to a DOM element, minted by the platform adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// One visibility notification delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
}
