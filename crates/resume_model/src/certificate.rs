//! Certificates and credentials

use serde::{Deserialize, Serialize};

/// A professional certificate entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub verification_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_round_trip() {
        let cert = Certificate {
            name: "AWS SAA".to_string(),
            issuer: "Amazon".to_string(),
            date: "2023-04".to_string(),
            credential_id: Some("ABC-123".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&cert).unwrap();
        assert!(json.contains("credentialId"));
        let parsed: Certificate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cert);
    }
}
