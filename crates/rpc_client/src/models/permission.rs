use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `listpermissions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionEntry {
    pub address: String,

    /// Entity the permission applies to; `null` for global permissions
    #[serde(rename = "for", skip_serializing_if = "Option::is_none")]
    pub for_entity: Option<Value>,

    #[serde(rename = "type")]
    pub permission_type: String,

    #[serde(rename = "startblock")]
    pub start_block: u64,

    #[serde(rename = "endblock")]
    pub end_block: u64,

    /// Admins that granted the permission, in verbose listings
    pub admins: Vec<String>,
}

impl PermissionEntry {
    /// Whether the permission is active at `height`.
    pub fn is_active_at(&self, height: u64) -> bool {
        self.start_block <= height && height < self.end_block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_reserved_key_names() {
        let entry: PermissionEntry = serde_json::from_value(json!({
            "address": "1A",
            "for": null,
            "type": "send",
            "startblock": 0,
            "endblock": 4294967295u64
        }))
        .unwrap();
        assert_eq!(entry.permission_type, "send");
        assert!(entry.for_entity.is_none());
        assert!(entry.is_active_at(100));
    }

    #[test]
    fn active_window_is_half_open() {
        let entry = PermissionEntry {
            start_block: 10,
            end_block: 20,
            ..PermissionEntry::default()
        };
        assert!(!entry.is_active_at(9));
        assert!(entry.is_active_at(10));
        assert!(!entry.is_active_at(20));
    }
}
