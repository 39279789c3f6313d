//! Glyphsmith Code Generation
//!
//! This crate turns a directory of SVG assets into React components plus
//! two manifests: an index re-exporting every component and a metadata
//! table mapping kebab-case keys to component names.
//!
//! # Pipeline Overview
//!
//! ```text
//! ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐
//! │ Discover │────▶│Transform │────▶│  Commit  │────▶│Manifests │
//! │  (*.svg) │     │ (in mem) │     │ (swap)   │     │(index/md)│
//! └──────────┘     └──────────┘     └──────────┘     └──────────┘
//! ```
//!
//! Every asset is transformed in memory first; nothing touches the
//! filesystem until the whole plan succeeded.
//!
//! # Example
//!
//! ```rust,ignore
//! use glyphsmith_codegen::{Generator, GeneratorOptions, JsxTransform};
//!
//! let generator = Generator::new(
//!     JsxTransform::new(),
//!     config.project.transform.clone(),
//!     GeneratorOptions::from_config(&config),
//! );
//! let report = generator.run().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod generator;
pub mod jsx;
pub mod manifest;
pub mod templates;
pub mod transform;

pub use error::{Error, Result};
pub use generator::{
    BuildPlan, BuildReport, Drift, GeneratedComponent, Generator, GeneratorOptions, SkippedAsset,
};
pub use jsx::JsxTransform;
pub use manifest::Manifest;
pub use transform::{SvgTransform, TransformContext};
