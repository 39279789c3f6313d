//! SVG markup → element tree
//!
//! Declarations, comments, doctypes and processing instructions are dropped.
//! Whitespace-only text between elements is dropped too.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// A parsed SVG element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    /// Tag name as written, e.g. `path` or `linearGradient`
    pub name: String,

    /// Attributes in document order, values unescaped
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<SvgNode>,
}

/// A child node of an [`SvgElement`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgNode {
    /// Nested element
    Element(SvgElement),
    /// Character data, still entity-encoded
    Text(String),
}

impl SvgElement {
    /// Value of the attribute `name`, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set `name` to `value`, replacing in place or appending
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    /// Remove the attribute `name` if present
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(key, _)| key != name);
    }

    /// Visit this element and every descendant element
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut SvgElement)) {
        f(self);
        for child in &mut self.children {
            if let SvgNode::Element(element) = child {
                element.walk_mut(f);
            }
        }
    }
}

/// Parse SVG bytes into the root `<svg>` element
pub fn parse_svg(svg: &[u8]) -> Result<SvgElement, String> {
    let source = std::str::from_utf8(svg).map_err(|e| format!("not valid UTF-8: {e}"))?;
    let mut reader = Reader::from_str(source);

    let mut stack: Vec<SvgElement> = Vec::new();
    let mut root: Option<SvgElement> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("at byte {}: {e}", reader.buffer_position()))?;

        match event {
            Event::Start(start) => stack.push(element(&start)?),
            Event::Empty(start) => attach(&mut stack, &mut root, element(&start)?)?,
            Event::End(_) => {
                let element = stack.pop().ok_or("unexpected closing tag")?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = std::str::from_utf8(&text).map_err(|e| e.to_string())?;
                push_text(&mut stack, text)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data).map_err(|e| e.to_string())?;
                push_text(&mut stack, text)?;
            }
            Event::GeneralRef(reference) => {
                let name = std::str::from_utf8(&reference).map_err(|e| e.to_string())?;
                push_text(&mut stack, &format!("&{name};"))?;
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(format!("unclosed element <{}>", open.name));
    }

    let root = root.ok_or("document has no root element")?;
    if root.name != "svg" {
        return Err(format!("root element is <{}>, expected <svg>", root.name));
    }

    Ok(root)
}

fn element(start: &BytesStart<'_>) -> Result<SvgElement, String> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| e.to_string())?
        .to_string();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| format!("bad attribute on <{name}>: {e}"))?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|e| e.to_string())?;
        let raw = std::str::from_utf8(&attr.value).map_err(|e| e.to_string())?;
        let value = quick_xml::escape::unescape(raw)
            .map_err(|e| format!("bad value for '{key}' on <{name}>: {e}"))?;
        attributes.push((key.to_string(), value.into_owned()));
    }

    Ok(SvgElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [SvgElement],
    root: &mut Option<SvgElement>,
    element: SvgElement,
) -> Result<(), String> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(SvgNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(format!("unexpected second root element <{}>", element.name));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [SvgElement], text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let parent = stack.last_mut().ok_or("text outside the root element")?;

    // Adjacent text and entity references form one run
    if let Some(SvgNode::Text(previous)) = parent.children.last_mut() {
        previous.push_str(text);
    } else {
        parent.children.push(SvgNode::Text(text.to_string()));
    }
    Ok(())
}
