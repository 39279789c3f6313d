//! Transform seam
//!
//! The generator drives any [`SvgTransform`]; it never looks inside the
//! options it forwards. [`crate::JsxTransform`] is the bundled implementation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Per-asset context handed to the transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformContext {
    /// Absolute path of the asset being transformed
    pub file_path: PathBuf,
}

impl TransformContext {
    /// Create a context for the asset at `file_path`
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }
}

/// Trait for SVG → component transforms
///
/// Implementations must be deterministic: the same bytes, options and path
/// always produce the same text.
#[async_trait]
pub trait SvgTransform: Send + Sync {
    /// Options applied uniformly to every asset in a run
    type Options: Send + Sync;

    /// Produce component source text for one asset
    async fn transform(
        &self,
        svg: &[u8],
        options: &Self::Options,
        ctx: &TransformContext,
    ) -> Result<String>;

    /// Derive the component name (and generated file stem) for an asset
    fn component_name(&self, ctx: &TransformContext) -> String {
        glyphsmith_core::component_name(&ctx.file_path)
    }

    /// Extension of generated component files, without the dot
    fn extension(&self, options: &Self::Options) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl SvgTransform for Echo {
        type Options = ();

        async fn transform(&self, svg: &[u8], _: &(), _: &TransformContext) -> Result<String> {
            Ok(String::from_utf8_lossy(svg).into_owned())
        }

        fn extension(&self, _: &()) -> &'static str {
            "txt"
        }
    }

    #[tokio::test]
    async fn test_default_component_name() {
        let ctx = TransformContext::new("/icons/user-profile.svg");
        assert_eq!(Echo.component_name(&ctx), "UserProfile");
        assert_eq!(Echo.transform(b"<svg/>", &(), &ctx).await.unwrap(), "<svg/>");
    }
}
