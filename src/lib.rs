//! # Token Docs
//!
//! `token-docs` renders reference documentation for a design token set.
//!
//! *   **Token Data**: [`token_data`] parses token JSON into a tree of groups and tokens.
//! *   **Resolution**: Semantic references like `{color.blue.600}` resolve against the primitives.
//! *   **Flattening**: Nested trees become ordered rows for tables.
//! *   **Pages**: Colors, typography, spacing, radius, shadows, opacity, semantic colors and
//!     platform guides, rendered to Markdown or HTML.
//!
//! The `tokendoc` binary lives in the `token-cli` crate.

pub use token_core::*;
