//! SVG attribute → JSX attribute conversion

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// A rendered JSX attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxAttr {
    /// `name="value"`
    Literal {
        /// JSX attribute name
        name: String,
        /// Unescaped string value
        value: String,
    },
    /// `name={expression}`
    Expression {
        /// JSX attribute name
        name: String,
        /// Raw JavaScript expression
        expression: String,
    },
    /// `{...identifier}`
    Spread(String),
}

impl JsxAttr {
    /// Build an attribute from a configured value; `{expr}` becomes an expression
    pub fn from_configured(name: &str, value: &str) -> Self {
        match expression_body(value) {
            Some(expression) => JsxAttr::Expression {
                name: name.to_string(),
                expression: expression.to_string(),
            },
            None => JsxAttr::Literal {
                name: name.to_string(),
                value: value.to_string(),
            },
        }
    }

    /// Attribute name, `None` for spreads
    pub fn name(&self) -> Option<&str> {
        match self {
            JsxAttr::Literal { name, .. } | JsxAttr::Expression { name, .. } => Some(name),
            JsxAttr::Spread(_) => None,
        }
    }

    /// Render as JSX source
    pub fn render(&self) -> String {
        match self {
            JsxAttr::Literal { name, value } if value.contains('"') => {
                format!("{name}={{{}}}", js_string(value))
            }
            JsxAttr::Literal { name, value } => format!("{name}=\"{value}\""),
            JsxAttr::Expression { name, expression } => format!("{name}={{{expression}}}"),
            JsxAttr::Spread(ident) => format!("{{...{ident}}}"),
        }
    }
}

/// Inner expression of a `{...}` wrapped configuration value
pub fn expression_body(value: &str) -> Option<&str> {
    value
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .map(str::trim)
        .filter(|expr| !expr.is_empty())
}

/// Convert an SVG attribute name to its JSX spelling
///
/// `stroke-width` → `strokeWidth`, `xlink:href` → `xlinkHref`,
/// `class` → `className`. `data-*` and `aria-*` are kept verbatim.
pub fn jsx_attribute_name(name: &str) -> String {
    match name {
        "class" => "className".to_string(),
        "for" => "htmlFor".to_string(),
        _ if name.starts_with("data-") || name.starts_with("aria-") => name.to_string(),
        _ if name.contains(':') || name.contains('-') => name.replace(':', "-").to_lower_camel_case(),
        _ => name.to_string(),
    }
}

/// Convert an inline `style` declaration list to a JSX object literal
///
/// `fill: red; stroke-width: 2` → `{ fill: "red", strokeWidth: "2" }`.
pub fn style_object(style: &str) -> String {
    let entries: Vec<String> = declarations(style)
        .into_iter()
        .filter_map(|declaration| declaration.split_once(':'))
        .map(|(property, value)| (property.trim(), value.trim()))
        .filter(|(property, value)| !property.is_empty() && !value.is_empty())
        .map(|(property, value)| format!("{}: {}", style_key(property), js_string(value)))
        .collect();

    if entries.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", entries.join(", "))
    }
}

/// Split on `;` outside quotes and parentheses, e.g. inside `url("data:...;base64,...")`
fn declarations(style: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in style.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&style[start..]);
    parts
}

/// React style property name
///
/// Vendor prefixes are capitalized (`-webkit-transform` → `WebkitTransform`)
/// except `-ms-`, which React keeps lowercase (`msTransform`).
fn style_key(property: &str) -> String {
    if property.starts_with("--") {
        js_string(property)
    } else if let Some(rest) = property.strip_prefix("-ms-") {
        format!("ms-{rest}").to_lower_camel_case()
    } else if let Some(rest) = property.strip_prefix('-') {
        rest.to_upper_camel_case()
    } else {
        property.to_lower_camel_case()
    }
}

/// Quote a string as a JavaScript string literal
pub fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
