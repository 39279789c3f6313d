//! Glyphsmith Core Library
//!
//! This crate provides the core functionality for Glyphsmith:
//! - Project configuration parsing and defaults
//! - Transform options applied uniformly to every asset
//! - SVG asset discovery
//! - Component naming and metadata key normalization
//! - Path resolution guarding the input against output resets
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Config    │────▶│  Discovery  │────▶│   Naming    │
//! │   (YAML)    │     │   (*.svg)   │     │ (Pascal/kebab)
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use glyphsmith_core::{Config, discover_assets};
//!
//! let config = Config::load("./my-icons")?;
//! for asset in discover_assets(&config.input_dir())? {
//!     println!("Asset: {}", asset.file_name);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod discovery;
pub mod error;
pub mod naming;
pub mod paths;
pub mod transforms;

pub use config::{CONFIG_FILE_NAME, Config, OnError, ProjectConfig};
pub use discovery::{Asset, discover_assets};
pub use error::{Error, Result};
pub use naming::{component_name, metadata_key};
pub use paths::{check_output_paths, resolve_path};
pub use transforms::{ExpandProps, TransformConfig};
