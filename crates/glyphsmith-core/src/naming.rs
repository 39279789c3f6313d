//! Component naming
//!
//! Component names are derived from the asset's file stem and must be usable
//! both as a file name and as an export identifier. Metadata keys are the
//! kebab-case form of the component name.

use heck::{ToKebabCase, ToUpperCamelCase};
use std::path::Path;

/// Name used when a file stem has no identifier characters at all
pub const FALLBACK_COMPONENT_NAME: &str = "SvgComponent";

/// Prefix for names that would otherwise start with a digit
const DIGIT_PREFIX: &str = "Svg";

/// Derive the component name for an asset path
///
/// `user-profile.svg` → `UserProfile`, `2fa.svg` → `Svg2fa`.
pub fn component_name(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let ident: String = stem
        .to_upper_camel_case()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    match ident.chars().next() {
        None => FALLBACK_COMPONENT_NAME.to_string(),
        Some(first) if first.is_ascii_digit() => format!("{DIGIT_PREFIX}{ident}"),
        Some(_) => ident,
    }
}

/// Normalize a component name into its metadata lookup key
///
/// Uppercase runs are kept as one word: `IconABTest` → `icon-ab-test`.
pub fn metadata_key(component_name: &str) -> String {
    component_name.to_kebab_case()
}
