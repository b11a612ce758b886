use crate::domain::model::{Service, ValidationResult};
use crate::utils::error::{Result, SiteError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

// Accepts any ordering and arity of path commands; the catalog is small and
// hand-authored, so only the character set is enforced.
static SVG_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[MmLlHhVvCcSsQqTtAaZz0-9\s,.\-]+$").unwrap());

fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

fn is_positive_integer(value: &Value) -> bool {
    value.as_u64().is_some_and(|n| n > 0)
}

fn is_valid_svg_path(value: &Value) -> bool {
    match value.as_str() {
        Some(path) if !path.trim().is_empty() => SVG_PATH_RE.is_match(path),
        _ => false,
    }
}

fn is_valid_size(value: &Value) -> bool {
    matches!(value.as_str(), Some("normal") | Some("large"))
}

/// Checks one candidate against the service contract.
///
/// Field checks are independent and all-reporting: every failed check appends
/// its own error, so one call surfaces the complete defect list.
pub fn validate_service(candidate: &Value) -> ValidationResult {
    let Some(object) = candidate.as_object() else {
        return ValidationResult::from_errors(vec!["Service must be a valid object".to_string()]);
    };

    let mut errors = Vec::new();

    if !object.get("id").is_some_and(is_positive_integer) {
        errors.push("Invalid id: must be a positive integer".to_string());
    }

    if !object.get("title").is_some_and(is_non_empty_string) {
        errors.push("Invalid title: must be a non-empty string".to_string());
    }

    if !object.get("description").is_some_and(is_non_empty_string) {
        errors.push("Invalid description: must be a non-empty string".to_string());
    }

    if !object.get("icon").is_some_and(is_valid_svg_path) {
        errors.push("Invalid icon: must be a valid SVG path string".to_string());
    }

    if !object.get("size").is_some_and(is_valid_size) {
        errors.push("Invalid size: must be 'normal' or 'large'".to_string());
    }

    ValidationResult::from_errors(errors)
}

/// Checks a whole candidate catalog.
///
/// Fails fast when the candidate is not an array or is empty; otherwise every
/// element is validated and its errors are aggregated under its index.
pub fn validate_services(candidates: &Value) -> ValidationResult {
    let Some(items) = candidates.as_array() else {
        return ValidationResult::from_errors(vec!["Services must be an array".to_string()]);
    };

    if items.is_empty() {
        return ValidationResult::from_errors(vec!["Services array cannot be empty".to_string()]);
    }

    let mut all_errors = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let result = validate_service(item);
        if !result.is_valid {
            all_errors.push(format!(
                "Service at index {}: {}",
                index,
                result.errors.join(", ")
            ));
        }
    }

    ValidationResult::from_errors(all_errors)
}

/// True when any id repeats. Short-circuits on the first repeat.
pub fn has_duplicate_ids(services: &[Service]) -> bool {
    let mut seen = HashSet::new();
    services.iter().any(|service| !seen.insert(service.id))
}

/// Integrity gate for catalog data: structural validation plus the
/// duplicate-id invariant. Returns the typed services on success. This is the
/// only validator operation that surfaces an error.
pub fn assert_valid(candidate: &Value) -> Result<Vec<Service>> {
    let validation = validate_services(candidate);
    if !validation.is_valid {
        return Err(SiteError::ValidationError {
            message: format!(
                "Service validation failed:\n{}",
                validation.errors.join("\n")
            ),
        });
    }

    let services: Vec<Service> = serde_json::from_value(candidate.clone())?;

    if has_duplicate_ids(&services) {
        return Err(SiteError::ValidationError {
            message: "Duplicate service IDs detected".to_string(),
        });
    }

    Ok(services)
}
