use std::fmt;

/// A symbolic token reference such as `{color.blue.600}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference<'a> {
    raw: &'a str,
    path: &'a str,
}

impl<'a> Reference<'a> {
    /// Parses `{segment(.segment)*}`. Anything else (including `{}`) is not a reference.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let path = raw.strip_prefix('{')?.strip_suffix('}')?;
        if path.is_empty() {
            return None;
        }
        Some(Self { raw, path })
    }

    /// The dotted path between the braces.
    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.path.split('.')
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }
}

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::Reference;

    #[test]
    fn test_parse_reference() {
        let r = Reference::parse("{color.blue.600}").unwrap();
        assert_eq!(r.path(), "color.blue.600");
        assert_eq!(r.segments().collect::<Vec<_>>(), vec!["color", "blue", "600"]);
        assert_eq!(r.to_string(), "{color.blue.600}");
    }

    #[test]
    fn test_non_references() {
        assert!(Reference::parse("#2563eb").is_none());
        assert!(Reference::parse("{}").is_none());
        assert!(Reference::parse("{color.blue").is_none());
        assert!(Reference::parse(" {color.white}").is_none());
    }

    #[test]
    fn test_single_segment() {
        let r = Reference::parse("{white}").unwrap();
        assert_eq!(r.segments().count(), 1);
    }
}
