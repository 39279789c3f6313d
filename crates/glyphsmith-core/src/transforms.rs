//! Transform options
//!
//! Options recognized by the SVG → component transform. The generator
//! pipeline never inspects them; it hands the same value to the transform
//! for every asset in a run.
//!
//! # Example
//!
//! ```yaml
//! transform:
//!   typescript: true
//!   icon: true
//!   expand_props: end
//!   replace_attr_values:
//!     "#000": currentColor
//!   svg_props:
//!     role: img
//!     focusable: "{false}"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where `{...props}` is spread on the root `<svg>` element
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpandProps {
    /// Before the SVG's own attributes, so they take precedence
    Start,
    /// After the SVG's own attributes, so props take precedence
    #[default]
    End,
    /// Props are not spread at all
    None,
}

/// Options for the SVG → component transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Emit TypeScript (`.tsx`) instead of JavaScript (`.jsx`)
    pub typescript: bool,

    /// Size the root element with `1em` so the icon follows font size
    pub icon: bool,

    /// Keep the root `width` and `height` attributes
    pub dimensions: bool,

    /// Placement of the props spread on the root element
    pub expand_props: ExpandProps,

    /// Accept a `title` prop rendered as `<title>` inside the SVG
    pub title_prop: bool,

    /// Wrap the exported component in `React.memo`
    pub memo: bool,

    /// Attribute values to replace anywhere in the markup (value → value)
    pub replace_attr_values: BTreeMap<String, String>,

    /// Extra attributes added to the root element; `{expr}` values are
    /// emitted as JSX expressions
    pub svg_props: BTreeMap<String, String>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            typescript: true,
            icon: true,
            dimensions: true,
            expand_props: ExpandProps::default(),
            title_prop: false,
            memo: false,
            replace_attr_values: BTreeMap::new(),
            svg_props: BTreeMap::new(),
        }
    }
}

impl TransformConfig {
    /// File extension of generated component files
    pub fn file_extension(&self) -> &'static str {
        if self.typescript { "tsx" } else { "jsx" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform_config() {
        let config = TransformConfig::default();
        assert!(config.typescript);
        assert!(config.icon);
        assert_eq!(config.expand_props, ExpandProps::End);
        assert_eq!(config.file_extension(), "tsx");
    }

    #[test]
    fn test_parse_partial_transform_config() {
        let yaml = r##"
typescript: false
replace_attr_values:
  "#000": currentColor
"##;
        let config: TransformConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.typescript);
        assert!(config.icon, "unspecified fields keep their defaults");
        assert_eq!(config.file_extension(), "jsx");
        assert_eq!(
            config.replace_attr_values.get("#000").map(String::as_str),
            Some("currentColor")
        );
    }

    #[test]
    fn test_parse_expand_props() {
        let config: TransformConfig = serde_yaml::from_str("expand_props: none").unwrap();
        assert_eq!(config.expand_props, ExpandProps::None);

        let result: Result<TransformConfig, _> = serde_yaml::from_str("expand_props: middle");
        assert!(result.is_err());
    }
}
