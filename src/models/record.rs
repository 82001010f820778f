//! Typed row model for the Online Store list view
//!
//! The host list view hands rows over as JSON objects. Rather than treating
//! each row as an untyped bag of properties, the record is a struct with
//! named optional fields so missing or null values deserialize cleanly and
//! renderers never have to guard against absent keys.

use serde::{Deserialize, Serialize};

/// One "Online Store" row as supplied by the host list view.
///
/// Every display field is optional; only `name` (the integration key the
/// host uses as the row's unique identifier) defaults to an empty string
/// instead of `None`, since link construction always needs some value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreRecord {
    /// Unique identifier, e.g. `SHOPEE:SG:70000101`
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Platform label ("Shopee", "Lazada", ...)
    #[serde(default)]
    pub store_type: Option<String>,

    /// Absolute or host-relative logo image URL
    #[serde(default)]
    pub shop_logo_url: Option<String>,

    /// Region code ("SG", "MY", ...)
    #[serde(default)]
    pub region: Option<String>,

    /// Platform-side shop identifier
    #[serde(default)]
    pub shop_id: Option<String>,

    /// Sync pipeline status ("active", "delisted", ...)
    #[serde(default)]
    pub status: Option<String>,
}

impl StoreRecord {
    /// Look up a field's raw value by its list view column name.
    ///
    /// Unknown fields and empty optionals are both `None`, which keeps the
    /// formatter dispatch total over whatever columns the host asks for.
    pub fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(self.name.as_str()),
            "store_type" => self.store_type.as_deref(),
            "shop_logo_url" => self.shop_logo_url.as_deref(),
            "region" => self.region.as_deref(),
            "shop_id" => self.shop_id.as_deref(),
            "status" => self.status.as_deref(),
            _ => None,
        }
    }

    /// Platform token used for icon selection: the explicit `store_type`
    /// when present, otherwise derived from the integration key.
    pub fn platform(&self) -> Option<String> {
        match self.store_type.as_deref() {
            Some(t) if !t.is_empty() => Some(t.to_lowercase()),
            _ => platform_from_integration_key(&self.name),
        }
    }
}

/// Extract the platform token from an integration key shaped
/// `SHOPEE:SG:70000101` (the segment before the first `:`, lowercased).
///
/// Keys without a `:` separator carry no platform information.
pub fn platform_from_integration_key(key: &str) -> Option<String> {
    let (head, _) = key.split_once(':')?;
    if head.is_empty() {
        return None;
    }
    Some(head.to_lowercase())
}

/// Deserialize a JSON null as the type's default instead of failing
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tolerates_missing_fields() {
        let record: StoreRecord = serde_json::from_value(serde_json::json!({
            "name": "SHOPEE:SG:70000101"
        }))
        .expect("sparse row should deserialize");

        assert_eq!(record.name, "SHOPEE:SG:70000101");
        assert_eq!(record.store_type, None);
        assert_eq!(record.shop_logo_url, None);
    }

    #[test]
    fn record_tolerates_null_fields() {
        let record: StoreRecord = serde_json::from_value(serde_json::json!({
            "name": null,
            "region": null,
            "shop_id": null
        }))
        .expect("null fields should deserialize");

        assert_eq!(record.name, "");
        assert_eq!(record.region, None);
    }

    #[test]
    fn platform_prefers_explicit_store_type() {
        let record = StoreRecord {
            name: "LAZADA:MY:123".to_string(),
            store_type: Some("Shopee".to_string()),
            ..Default::default()
        };
        assert_eq!(record.platform().as_deref(), Some("shopee"));
    }

    #[test]
    fn platform_falls_back_to_integration_key() {
        let record = StoreRecord {
            name: "LAZADA:MY:123".to_string(),
            ..Default::default()
        };
        assert_eq!(record.platform().as_deref(), Some("lazada"));
    }

    #[test]
    fn platform_from_key_requires_separator() {
        assert_eq!(platform_from_integration_key("SHOPEE:SG:1"), Some("shopee".to_string()));
        assert_eq!(platform_from_integration_key("plain-name"), None);
        assert_eq!(platform_from_integration_key(":SG:1"), None);
        assert_eq!(platform_from_integration_key(""), None);
    }
}
