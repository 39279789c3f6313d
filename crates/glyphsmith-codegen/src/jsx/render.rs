//! JSX tree rendering

use super::attributes::{JsxAttr, jsx_attribute_name, style_object};
use super::parser::{SvgElement, SvgNode};

/// Indentation unit of the emitted markup
const INDENT: &str = "  ";

/// An element ready to be printed as JSX
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxElement {
    /// Tag name
    pub name: String,
    /// Attributes in output order
    pub attrs: Vec<JsxAttr>,
    /// Children in output order
    pub children: Vec<JsxChild>,
}

/// Child of a [`JsxElement`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxChild {
    /// Nested element
    Element(JsxElement),
    /// Text content
    Text(String),
    /// `{expression}` child
    Expression(String),
}

impl JsxElement {
    /// Convert a parsed SVG element, renaming attributes for JSX
    pub fn from_svg(element: &SvgElement) -> Self {
        let attrs = element
            .attributes
            .iter()
            .map(|(name, value)| {
                let name = jsx_attribute_name(name);
                if name == "style" {
                    JsxAttr::Expression {
                        name,
                        expression: style_object(value),
                    }
                } else {
                    JsxAttr::Literal {
                        name,
                        value: value.clone(),
                    }
                }
            })
            .collect();

        let children = element
            .children
            .iter()
            .map(|child| match child {
                SvgNode::Element(element) => JsxChild::Element(JsxElement::from_svg(element)),
                SvgNode::Text(text) => JsxChild::Text(escape_text(text.trim())),
            })
            .collect();

        Self {
            name: element.name.clone(),
            attrs,
            children,
        }
    }

    /// Insert or replace an attribute by name
    pub fn upsert_attr(&mut self, attr: JsxAttr) {
        let position = attr
            .name()
            .and_then(|name| self.attrs.iter().position(|a| a.name() == Some(name)));
        match position {
            Some(index) => self.attrs[index] = attr,
            None => self.attrs.push(attr),
        }
    }

    /// Visit this element and every descendant element
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut JsxElement)) {
        f(self);
        for child in &mut self.children {
            if let JsxChild::Element(element) = child {
                element.walk_mut(f);
            }
        }
    }

    /// Render this element at `depth` levels of indentation
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write(depth, &mut out);
        out.truncate(out.trim_end().len());
        out
    }

    fn write(&self, depth: usize, out: &mut String) {
        let pad = INDENT.repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.name);
        for attr in &self.attrs {
            out.push(' ');
            out.push_str(&attr.render());
        }

        if self.children.is_empty() {
            out.push_str(" />\n");
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            match child {
                JsxChild::Element(element) => element.write(depth + 1, out),
                JsxChild::Text(text) => {
                    out.push_str(&INDENT.repeat(depth + 1));
                    out.push_str(text);
                    out.push('\n');
                }
                JsxChild::Expression(expression) => {
                    out.push_str(&INDENT.repeat(depth + 1));
                    out.push('{');
                    out.push_str(expression);
                    out.push_str("}\n");
                }
            }
        }
        out.push_str(&pad);
        out.push_str("</");
        out.push_str(&self.name);
        out.push_str(">\n");
    }
}

/// Escape characters JSX text cannot contain literally
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' => escaped.push_str("{'{'}"),
            '}' => escaped.push_str("{'}'}"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
