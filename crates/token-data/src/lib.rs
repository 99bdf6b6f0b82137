// token-data: Serde structs for design token JSON documents
pub mod model;
pub mod reference;

pub use model::{ShadowValue, TokenGroup, TokenLeaf, TokenNode, TokenValue};
pub use reference::Reference;

#[cfg(test)]
mod tests {
    use super::model::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_dtcg_leaf() {
        let data = json!({
            "$value": "#2563eb",
            "$type": "color",
            "$description": "Primary brand"
        });
        let node: TokenNode = serde_json::from_value(data).unwrap();
        let leaf = node.as_leaf().expect("leaf");
        assert_eq!(leaf.value.display(), "#2563eb");
        assert_eq!(leaf.kind.as_deref(), Some("color"));
        assert_eq!(leaf.description.as_deref(), Some("Primary brand"));
    }

    #[test]
    fn test_deserialize_plain_leaf() {
        let data = json!({ "value": "{color.blue.600}", "type": "color" });
        let node: TokenNode = serde_json::from_value(data).unwrap();
        let leaf = node.as_leaf().expect("leaf");
        assert_eq!(leaf.value.as_str(), Some("{color.blue.600}"));
        assert!(leaf.description.is_none());
    }

    #[test]
    fn test_group_keeps_insertion_order() {
        let data = json!({
            "spacing": {
                "0": { "$value": "0px" },
                "px": { "$value": "1px" },
                "0.5": { "$value": "2px" },
                "1": { "$value": "4px" }
            }
        });
        let node: TokenNode = serde_json::from_value(data).unwrap();
        let spacing = node.get("spacing").and_then(TokenNode::as_group).unwrap();
        let keys: Vec<&str> = spacing.keys().collect();
        assert_eq!(keys, vec!["0", "px", "0.5", "1"]);
    }

    #[test]
    fn test_group_type_is_inherited() {
        let data = json!({
            "opacity": {
                "$type": "number",
                "$description": "Opacity scale",
                "50": { "$value": 0.5 },
                "100": { "$value": 1, "$type": "custom" }
            }
        });
        let node: TokenNode = serde_json::from_value(data).unwrap();
        let group = node.get("opacity").and_then(TokenNode::as_group).unwrap();
        assert_eq!(group.description.as_deref(), Some("Opacity scale"));
        assert_eq!(group.len(), 2);

        let half = node.lookup(["opacity", "50"]).and_then(TokenNode::as_leaf).unwrap();
        assert_eq!(half.kind.as_deref(), Some("number"));
        assert_eq!(half.value.display(), "0.5");

        let full = node.lookup(["opacity", "100"]).and_then(TokenNode::as_leaf).unwrap();
        assert_eq!(full.kind.as_deref(), Some("custom"));
    }

    #[test]
    fn test_shadow_value() {
        let data = json!({
            "$type": "shadow",
            "$value": {
                "offsetX": "0px",
                "offsetY": "2px",
                "blur": "4px",
                "spread": "0px",
                "color": "rgba(0,0,0,0.06)",
                "inset": true
            }
        });
        let node: TokenNode = serde_json::from_value(data).unwrap();
        let leaf = node.as_leaf().unwrap();
        match &leaf.value {
            TokenValue::Shadow(s) => {
                assert!(s.inset);
                assert_eq!(s.to_css(), "inset 0px 2px 4px 0px rgba(0,0,0,0.06)");
            }
            other => panic!("Expected shadow, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_object_is_empty_group() {
        let node: TokenNode = serde_json::from_value(json!({ "broken": {} })).unwrap();
        let broken = node.get("broken").unwrap();
        assert!(broken.as_group().map(TokenGroup::is_empty).unwrap_or(false));
        assert_eq!(node.leaf_count(), 0);
    }

    #[test]
    fn test_scalar_child_is_rejected() {
        let res: Result<TokenNode, _> =
            serde_json::from_value(json!({ "color": { "white": "#ffffff" } }));
        let err = res.unwrap_err().to_string();
        assert!(err.contains("color.white"), "unexpected error: {}", err);
    }

    #[test]
    fn test_serialize_uses_dollar_keys() {
        let node: TokenNode = serde_json::from_value(json!({
            "text": { "link": { "value": "{color.blue.600}", "description": "Hyperlinks" } }
        }))
        .unwrap();
        let out = serde_json::to_value(&node).unwrap();
        assert_eq!(
            out,
            json!({
                "text": { "link": { "$value": "{color.blue.600}", "$description": "Hyperlinks" } }
            })
        );
    }
}
