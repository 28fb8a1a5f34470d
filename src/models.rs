use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of a `POST auth/login/` response.
///
/// An empty or absent `key` means the login was rejected; `non_field_errors`
/// then usually carries the server's explanation.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthenticationResponse {
    #[serde(default)]
    pub(crate) key: String,
    #[serde(default)]
    pub(crate) non_field_errors: Vec<String>,
}

/// One inventory record from the `assets/` listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
    pub last_updated: DateTime<Utc>,
    /// Free-text note. Nullable on the wire; null decodes to an empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
    /// Opaque per-asset payload, kept as parsed JSON without interpretation.
    #[serde(default)]
    pub json_data: Value,
    pub type_id: i64,
    pub primary_ip_device_id: i64,
    pub site_id: i64,
    /// Tag identifiers, in server order.
    #[serde(default)]
    pub tags: Vec<i64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn authentication_response_with_key() {
        let auth: AuthenticationResponse =
            serde_json::from_str(r#"{"key": "1c1a552f5b013bd76b7d6acd731a8e46955f4b13"}"#).unwrap();
        assert_eq!(auth.key, "1c1a552f5b013bd76b7d6acd731a8e46955f4b13");
        assert!(auth.non_field_errors.is_empty());
    }

    #[test]
    fn authentication_response_rejection() {
        let auth: AuthenticationResponse = serde_json::from_str(
            r#"{"key": "", "non_field_errors": ["Unable to log in with provided credentials."]}"#,
        )
        .unwrap();
        assert!(auth.key.is_empty());
        assert_eq!(auth.non_field_errors.len(), 1);
    }

    #[test]
    fn authentication_response_empty_object() {
        let auth: AuthenticationResponse = serde_json::from_str("{}").unwrap();
        assert!(auth.key.is_empty());
    }

    #[test]
    fn asset_list_preserves_fields_and_tag_order() {
        let body = concat!(
            r#"[{"id":1,"name":"Asset 1","is_deleted":false,"last_updated":"1991-02-06T00:00:00.000000+00:00","note":null,"json_data":null,"type_id":3,"primary_ip_device_id":5,"site_id":1,"tags":[7]},"#,
            r#"{"id":2,"name":"Asset 2","is_deleted":false,"last_updated":"1991-02-06T00:00:00.000000+00:00","note":null,"json_data":null,"type_id":4,"primary_ip_device_id":6,"site_id":1,"tags":[8]}]"#,
        );

        let assets: Vec<Asset> = serde_json::from_str(body).unwrap();
        let last_updated = Utc.with_ymd_and_hms(1991, 2, 6, 0, 0, 0).unwrap();

        assert_eq!(
            assets,
            vec![
                Asset {
                    id: 1,
                    name: "Asset 1".into(),
                    is_deleted: false,
                    last_updated,
                    note: String::new(),
                    json_data: Value::Null,
                    type_id: 3,
                    primary_ip_device_id: 5,
                    site_id: 1,
                    tags: vec![7],
                },
                Asset {
                    id: 2,
                    name: "Asset 2".into(),
                    is_deleted: false,
                    last_updated,
                    note: String::new(),
                    json_data: Value::Null,
                    type_id: 4,
                    primary_ip_device_id: 6,
                    site_id: 1,
                    tags: vec![8],
                },
            ]
        );
    }

    #[test]
    fn asset_json_data_round_trips_untouched() {
        let body = r#"[{"id":9,"name":"n","is_deleted":true,"last_updated":"2024-03-01T13:00:00+00:00","note":"rack 4","json_data":{"ports":[1,2],"managed":true},"type_id":1,"primary_ip_device_id":2,"site_id":3,"tags":[]}]"#;

        let assets: Vec<Asset> = serde_json::from_str(body).unwrap();
        assert_eq!(assets[0].note, "rack 4");
        assert_eq!(
            assets[0].json_data,
            serde_json::json!({"ports": [1, 2], "managed": true})
        );
        assert!(assets[0].tags.is_empty());
    }
}
