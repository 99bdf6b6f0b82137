//! # Token Core
//!
//! `token-core` turns design token JSON into reference documentation.
//!
//! Token documents (one per category, following the `$value` / `$type` /
//! `$description` convention) are loaded into a [`TokenCatalog`]. Semantic
//! tokens hold references such as `{color.blue.600}`, which are resolved
//! against the primitive documents and flattened into rows for display.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use token_core::{flatten_semantic, resolve_reference, TokenCatalog};
//!
//! let catalog = TokenCatalog::embedded().unwrap();
//! assert_eq!(resolve_reference("{color.blue.600}", catalog.primitives()), "#2563eb");
//!
//! let rows = flatten_semantic(catalog.semantic().unwrap(), &["semantic"], catalog.primitives());
//! for row in rows {
//!     println!("{} -> {}", row.path, row.value);
//! }
//! ```

/// Token documents and where they are read from.
pub mod catalog;

/// Consistency report over a catalog.
pub mod check;

/// Hex parsing and contrast helpers.
pub mod color;

/// Site build settings.
pub mod config;

pub mod errors;

/// Flattening nested token trees into rows.
pub mod flatten;

/// Markdown and HTML backends.
pub mod render;

/// Reference resolution.
pub mod resolve;

/// Page models for every token category and guide.
pub mod showcase;

/// Writing the rendered pages to disk.
pub mod site;

pub use catalog::{Category, DirectorySource, EmbeddedSource, TokenCatalog, TokenSource};
pub use check::{check_catalog, CheckReport};
pub use config::{OutputFormat, SiteConfig};
pub use errors::TokenError;
pub use flatten::{count_leaves, flatten_semantic, flatten_tokens, FlatToken, ResolvedRow};
pub use resolve::{lookup_reference, resolve_reference, Resolution};
pub use site::{build_site, SiteReport};

pub use token_data;
