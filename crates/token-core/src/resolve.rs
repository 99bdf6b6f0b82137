//! # Resolve Module
//!
//! Turns a reference such as `{color.blue.600}` into the value stored at that path.
//!
//! Resolution never fails loudly: anything that cannot be resolved is shown as
//! the original reference string.

use token_data::{Reference, TokenLeaf, TokenNode};

/// Outcome of looking a reference up in a primitive tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// The reference points at this token.
    Resolved(&'a TokenLeaf),
    /// The input is not of the form `{a.b.c}`.
    NotAReference,
    /// No node exists at `at_segment`, the dotted path up to and including the first missing segment.
    MissingPath { at_segment: String },
    /// The path ends on a group, or continues past a token.
    NotALeaf,
}

impl Resolution<'_> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Looks `reference` up in `primitives`, reporting why it failed if it did.
pub fn lookup_reference<'a>(reference: &str, primitives: &'a TokenNode) -> Resolution<'a> {
    let Some(parsed) = Reference::parse(reference) else {
        return Resolution::NotAReference;
    };

    let mut cur = primitives;
    let mut walked: Vec<&str> = Vec::new();
    for segment in parsed.segments() {
        walked.push(segment);
        match cur {
            TokenNode::Group(group) => match group.get(segment) {
                Some(next) => cur = next,
                None => {
                    return Resolution::MissingPath {
                        at_segment: walked.join("."),
                    }
                }
            },
            TokenNode::Leaf(_) => return Resolution::NotALeaf,
        }
    }

    match cur {
        TokenNode::Leaf(leaf) => Resolution::Resolved(leaf),
        TokenNode::Group(_) => Resolution::NotALeaf,
    }
}

/// Resolves `reference` against `primitives`.
///
/// Returns the display string of the referenced token, or `reference` unchanged when it is not
/// a reference or points nowhere. A referenced token whose own value is a reference is returned
/// as that string; chains are not followed.
pub fn resolve_reference(reference: &str, primitives: &TokenNode) -> String {
    match lookup_reference(reference, primitives) {
        Resolution::Resolved(leaf) => leaf.value.display(),
        _ => reference.to_string(),
    }
}
