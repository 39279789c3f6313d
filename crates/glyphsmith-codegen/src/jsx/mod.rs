//! SVG → React component transform
//!
//! The bundled [`SvgTransform`] implementation. Markup is parsed with
//! quick-xml, attributes are renamed for JSX, the options in
//! [`TransformConfig`] are applied, and the tree is printed into the
//! component template.

pub mod attributes;
pub mod parser;
pub mod render;

use async_trait::async_trait;
use glyphsmith_core::{ExpandProps, TransformConfig};
use minijinja::{Environment, context};

use crate::error::{Error, Result};
use crate::templates::{self, COMPONENT_TEMPLATE};
use crate::transform::{SvgTransform, TransformContext};
use attributes::JsxAttr;
use parser::parse_svg;
use render::{JsxChild, JsxElement};

/// Identifier of the props object in generated components
const PROPS: &str = "props";

/// Prefix of the local component binding, e.g. `SvgHome`
const BINDING_PREFIX: &str = "Svg";

/// Title child rendered when `title_prop` is enabled
const TITLE_EXPRESSION: &str = "title ? <title>{title}</title> : null";

/// SVG → React function component transform
pub struct JsxTransform {
    env: Environment<'static>,
}

impl Default for JsxTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl JsxTransform {
    /// Create a transform with the bundled component template
    pub fn new() -> Self {
        Self {
            env: templates::environment(),
        }
    }

    /// Render one component synchronously
    pub fn render(
        &self,
        svg: &[u8],
        options: &TransformConfig,
        ctx: &TransformContext,
    ) -> Result<String> {
        let mut root = parse_svg(svg).map_err(|message| Error::InvalidSvg {
            path: ctx.file_path.display().to_string(),
            message,
        })?;

        if options.icon {
            root.set_attribute("width", "1em");
            root.set_attribute("height", "1em");
        }
        if !options.dimensions {
            root.remove_attribute("width");
            root.remove_attribute("height");
        }

        let mut element = JsxElement::from_svg(&root);
        replace_attr_values(&mut element, options);

        for (name, value) in &options.svg_props {
            element.upsert_attr(JsxAttr::from_configured(name, value));
        }

        if options.title_prop {
            element
                .children
                .insert(0, JsxChild::Expression(TITLE_EXPRESSION.to_string()));
        }

        match options.expand_props {
            ExpandProps::Start => element.attrs.insert(0, JsxAttr::Spread(PROPS.to_string())),
            ExpandProps::End => element.attrs.push(JsxAttr::Spread(PROPS.to_string())),
            ExpandProps::None => {}
        }

        let name = self.component_name(ctx);
        let code = self.env.render_str(
            COMPONENT_TEMPLATE,
            context! {
                binding => format!("{BINDING_PREFIX}{name}"),
                params => params(options),
                jsx => element.render(1),
                typescript => options.typescript,
                memo => options.memo,
            },
        )?;

        Ok(code)
    }
}

#[async_trait]
impl SvgTransform for JsxTransform {
    type Options = TransformConfig;

    async fn transform(
        &self,
        svg: &[u8],
        options: &TransformConfig,
        ctx: &TransformContext,
    ) -> Result<String> {
        self.render(svg, options, ctx)
    }

    fn extension(&self, options: &TransformConfig) -> &'static str {
        options.file_extension()
    }
}

fn replace_attr_values(element: &mut JsxElement, options: &TransformConfig) {
    if options.replace_attr_values.is_empty() {
        return;
    }
    element.walk_mut(&mut |el| {
        for attr in &mut el.attrs {
            let replaced = match attr {
                JsxAttr::Literal { name, value } => options
                    .replace_attr_values
                    .get(value.as_str())
                    .map(|replacement| JsxAttr::from_configured(name, replacement)),
                _ => None,
            };
            if let Some(replaced) = replaced {
                *attr = replaced;
            }
        }
    });
}

fn params(options: &TransformConfig) -> String {
    let pattern = if options.title_prop {
        format!("{{ title, ...{PROPS} }}")
    } else {
        PROPS.to_string()
    };

    match (options.typescript, options.title_prop) {
        (true, true) => format!("{pattern}: SVGProps<SVGSVGElement> & {{ title?: string }}"),
        (true, false) => format!("{pattern}: SVGProps<SVGSVGElement>"),
        (false, _) => pattern,
    }
}
