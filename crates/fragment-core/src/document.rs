// ABOUTME: Defines the configuration document stored on disk and replaced over HTTP.
// ABOUTME: Contains the allowUnsigned flag, shared display options, and the signing key list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The document a freshly-bootstrapped server starts from.
pub const DEFAULT_DOCUMENT: &str = r#"{"allowUnsigned":false,"keys":[]}"#;

/// Display options embedded at the document top level and on each signing key.
/// Both values are opaque to the server and omitted from the JSON when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Options {
    #[serde(rename = "markdownHTML", skip_serializing_if = "Option::is_none")]
    pub markdown_html: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<Value>,
}

/// A JWK-shaped ECDSA public key as exported by WebCrypto.
/// Missing fields decode to their empty values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicKey {
    pub alg: String,
    pub crv: String,
    pub ext: bool,
    pub key_ops: Vec<String>,
    pub kty: String,
    pub x: String,
    pub y: String,
}

/// A named signing key trusted to sign fragments, with its own display options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningKey {
    #[serde(flatten)]
    pub options: Options,
    pub name: String,
    pub hash: String,
    pub key: PublicKey,
}

/// The full configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    #[serde(rename = "allowUnsigned")]
    pub allow_unsigned: bool,
    #[serde(flatten)]
    pub options: Options,
    pub keys: Vec<SigningKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_matches_constant() {
        let json = serde_json::to_string(&ConfigDocument::default()).unwrap();
        assert_eq!(json, DEFAULT_DOCUMENT);
    }

    #[test]
    fn default_document_constant_parses() {
        let doc: ConfigDocument = serde_json::from_str(DEFAULT_DOCUMENT).unwrap();
        assert!(!doc.allow_unsigned);
        assert!(doc.keys.is_empty());
        assert!(doc.options.markdown_html.is_none());
        assert!(doc.options.embed.is_none());
    }

    #[test]
    fn document_round_trips_with_keys() {
        let json = serde_json::json!({
            "allowUnsigned": true,
            "markdownHTML": {"sanitize": true},
            "keys": [{
                "embed": false,
                "name": "release",
                "hash": "ABCDEF",
                "key": {
                    "alg": "ES384",
                    "crv": "P-384",
                    "ext": true,
                    "key_ops": ["verify"],
                    "kty": "EC",
                    "x": "xxxx",
                    "y": "yyyy"
                }
            }]
        });

        let doc: ConfigDocument = serde_json::from_value(json.clone()).unwrap();
        assert!(doc.allow_unsigned);
        assert_eq!(doc.keys.len(), 1);
        assert_eq!(doc.keys[0].name, "release");
        assert_eq!(doc.keys[0].key.crv, "P-384");
        assert_eq!(doc.keys[0].key.key_ops, vec!["verify"]);
        assert_eq!(doc.keys[0].options.embed, Some(serde_json::json!(false)));

        let back = serde_json::to_value(&doc).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn unset_options_are_omitted() {
        let doc = ConfigDocument {
            allow_unsigned: true,
            ..ConfigDocument::default()
        };
        let json = serde_json::to_value(&doc).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("markdownHTML"));
        assert!(!obj.contains_key("embed"));
    }

    #[test]
    fn missing_fields_decode_to_empty_values() {
        let doc: ConfigDocument = serde_json::from_str("{}").unwrap();
        assert!(!doc.allow_unsigned);
        assert!(doc.keys.is_empty());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = serde_json::from_str::<ConfigDocument>(r#"{"allowUnsigned":"nope"}"#);
        assert!(err.is_err());

        let err = serde_json::from_str::<ConfigDocument>("{not json");
        assert!(err.is_err());
    }
}
