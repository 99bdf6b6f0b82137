use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A node of a token document: either a token (has a `value`) or a group of named nodes.
///
/// The distinction is made once, while parsing, from the JSON shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    Group(TokenGroup),
}

/// A single design token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeaf {
    pub value: TokenValue,
    /// `$type` of the token, or the nearest ancestor group's `$type`.
    pub kind: Option<String>,
    pub description: Option<String>,
}

/// Named children in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenGroup {
    pub kind: Option<String>,
    pub description: Option<String>,
    pub children: Vec<(String, TokenNode)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Number(serde_json::Number),
    Shadow(ShadowValue),
    Shadows(Vec<ShadowValue>),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowValue {
    pub offset_x: String,
    pub offset_y: String,
    pub blur: String,
    pub spread: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inset: bool,
}

impl ShadowValue {
    /// CSS `box-shadow` value, e.g. `inset 0px 2px 4px 0px rgba(0,0,0,0.06)`.
    pub fn to_css(&self) -> String {
        let inset = if self.inset { "inset " } else { "" };
        format!(
            "{}{} {} {} {} {}",
            inset, self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

impl TokenValue {
    /// The string shown for this value in tables and swatches.
    pub fn display(&self) -> String {
        match self {
            TokenValue::Text(s) => s.clone(),
            TokenValue::Number(n) => n.to_string(),
            TokenValue::Shadow(s) => s.to_css(),
            TokenValue::Shadows(list) => list
                .iter()
                .map(ShadowValue::to_css)
                .collect::<Vec<_>>()
                .join(", "),
            TokenValue::Other(v) => v.to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => n.as_f64(),
            TokenValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Error raised when a JSON document does not follow the token-leaf convention.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenParseError {
    pub path: String,
    pub message: String,
}

impl TokenParseError {
    fn at(path: &[String], message: impl Into<String>) -> Self {
        let path = if path.is_empty() {
            "<root>".to_string()
        } else {
            path.join(".")
        };
        Self {
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for TokenParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid token at `{}`: {}", self.path, self.message)
    }
}

impl std::error::Error for TokenParseError {}

// `$type` wins over `type`, same for description and value.
fn meta<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(&format!("${}", name)).or_else(|| obj.get(name))
}

fn meta_str(obj: &Map<String, Value>, name: &str) -> Option<String> {
    meta(obj, name).and_then(Value::as_str).map(str::to_string)
}

impl TokenNode {
    pub fn from_value(value: &Value) -> Result<Self, TokenParseError> {
        Self::parse(value, &mut Vec::new(), None)
    }

    fn parse(
        value: &Value,
        path: &mut Vec<String>,
        inherited: Option<&str>,
    ) -> Result<Self, TokenParseError> {
        let obj = value
            .as_object()
            .ok_or_else(|| TokenParseError::at(path, "expected a token or a group object"))?;

        let kind = meta_str(obj, "type").or_else(|| inherited.map(str::to_string));
        let description = meta_str(obj, "description");

        if let Some(raw) = meta(obj, "value") {
            let value = serde_json::from_value(raw.clone())
                .map_err(|e| TokenParseError::at(path, e.to_string()))?;
            return Ok(TokenNode::Leaf(TokenLeaf {
                value,
                kind,
                description,
            }));
        }

        let mut children = Vec::with_capacity(obj.len());
        for (key, child) in obj {
            // Group metadata: `$`-prefixed keys, or plain `type`/`description` strings.
            if key.starts_with('$') {
                continue;
            }
            if (key == "type" || key == "description") && child.is_string() {
                continue;
            }
            path.push(key.clone());
            let node = Self::parse(child, path, kind.as_deref())?;
            path.pop();
            children.push((key.clone(), node));
        }

        Ok(TokenNode::Group(TokenGroup {
            kind,
            description,
            children,
        }))
    }

    pub fn as_leaf(&self) -> Option<&TokenLeaf> {
        match self {
            TokenNode::Leaf(leaf) => Some(leaf),
            TokenNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&TokenGroup> {
        match self {
            TokenNode::Group(group) => Some(group),
            TokenNode::Leaf(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TokenNode::Leaf(_))
    }

    /// Direct child lookup. Always `None` on a leaf.
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.as_group().and_then(|g| g.get(key))
    }

    /// Walks the tree one segment at a time.
    pub fn lookup<I, S>(&self, segments: I) -> Option<&TokenNode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cur = self;
        for segment in segments {
            cur = cur.get(segment.as_ref())?;
        }
        Some(cur)
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            TokenNode::Leaf(_) => 1,
            TokenNode::Group(group) => group.iter().map(|(_, n)| n.leaf_count()).sum(),
        }
    }
}

impl TokenGroup {
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.children.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child, replacing an existing child with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, node: TokenNode) {
        let key = key.into();
        if let Some(slot) = self.children.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = node;
        } else {
            self.children.push((key, node));
        }
    }
}

impl<'de> Deserialize<'de> for TokenNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        TokenNode::from_value(&value).map_err(de::Error::custom)
    }
}

impl Serialize for TokenNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TokenNode::Leaf(leaf) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("$value", &leaf.value)?;
                if let Some(kind) = &leaf.kind {
                    map.serialize_entry("$type", kind)?;
                }
                if let Some(desc) = &leaf.description {
                    map.serialize_entry("$description", desc)?;
                }
                map.end()
            }
            TokenNode::Group(group) => {
                let mut map = serializer.serialize_map(None)?;
                if let Some(kind) = &group.kind {
                    map.serialize_entry("$type", kind)?;
                }
                if let Some(desc) = &group.description {
                    map.serialize_entry("$description", desc)?;
                }
                for (key, node) in &group.children {
                    map.serialize_entry(key, node)?;
                }
                map.end()
            }
        }
    }
}
