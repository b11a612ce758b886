use crate::core::scroll::TRIGGER_CLASS;
use crate::domain::model::{AnimationConfig, CardSize, Service, SvgIconConfig};
use once_cell::sync::Lazy;
use regex::Regex;

/// Base class every service card carries.
pub const CARD_CLASS: &str = "servicio-card";
/// Layout class for cards with extra grid weight.
pub const LARGE_CLASS: &str = "large";

static SCRIPT_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script>").unwrap());
static JS_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript:").unwrap());
static EVENT_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)on\w+\s*=").unwrap());

/// CSS delay for the card at `index`, staggering reveals down the page,
/// e.g. `"0.1s"` for the first card with the default configuration.
pub fn animation_delay(index: usize, config: &AnimationConfig) -> String {
    let delay = config.base_delay + config.delay_multiplier * (index as f64 + 1.0);
    format!("{}s", delay)
}

/// Classes for a service card: base card class, scroll trigger, and the
/// layout-weight class for large cards.
pub fn service_card_classes(service: &Service) -> String {
    let mut classes = vec![CARD_CLASS, TRIGGER_CLASS];
    if service.size == CardSize::Large {
        classes.push(LARGE_CLASS);
    }
    classes.join(" ")
}

/// Per-field overrides for [`svg_icon_config`].
#[derive(Debug, Clone, Default)]
pub struct SvgIconOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub view_box: Option<String>,
    pub stroke_width: Option<u32>,
}

/// Defaults merged with the supplied overrides.
pub fn svg_icon_config(overrides: SvgIconOverrides) -> SvgIconConfig {
    let defaults = SvgIconConfig::default();
    SvgIconConfig {
        width: overrides.width.unwrap_or(defaults.width),
        height: overrides.height.unwrap_or(defaults.height),
        view_box: overrides.view_box.unwrap_or(defaults.view_box),
        stroke_width: overrides.stroke_width.unwrap_or(defaults.stroke_width),
    }
}

/// Looks up a service by id. Ids are 1-based; zero is rejected up front.
pub fn find_service_by_id(services: &[Service], id: u32) -> Option<&Service> {
    if id == 0 {
        tracing::warn!("Invalid service id: 0");
        return None;
    }
    services.iter().find(|service| service.id == id)
}

pub fn filter_services_by_size(services: &[Service], size: CardSize) -> Vec<Service> {
    services
        .iter()
        .filter(|service| service.size == size)
        .cloned()
        .collect()
}

/// Strips script tags, `javascript:` URLs and inline event handlers before
/// icon markup is inlined into a template.
pub fn sanitize_svg_path(content: &str) -> String {
    let content = SCRIPT_TAG_RE.replace_all(content, "");
    let content = JS_URL_RE.replace_all(&content, "");
    EVENT_ATTR_RE.replace_all(&content, "").to_string()
}
