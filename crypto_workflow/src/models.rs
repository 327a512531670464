// crypto_demo/crypto_workflow/src/models.rs

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;

/// Body of `POST /encrypt`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncryptRequest {
    pub algorithm: Algorithm,
    pub message: String,
}

/// Body of `POST /decrypt`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest {
    pub algorithm: Algorithm,
    pub encrypted_message: String,
}

/// Body of `POST /sign`. `message` carries the local digest, never the raw text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    pub algorithm: Algorithm,
    pub message: String,
}

/// Body of `POST /verify`. `message` carries the local digest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    pub algorithm: Algorithm,
    pub message: String,
    pub signature: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EncryptResponse {
    #[serde(default)]
    pub encrypted_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecryptResponse {
    #[serde(default)]
    pub decrypted_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SignResponse {
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    #[serde(default)]
    pub is_valid: Option<bool>,
}

/// A response field after explicit decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    Present(T),
    /// Wire name of the field that was absent (or null).
    MissingField(&'static str),
}

impl<T> Decoded<T> {
    fn from_option(value: Option<T>, field: &'static str) -> Self {
        match value {
            Some(v) => Decoded::Present(v),
            None => Decoded::MissingField(field),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Decoded::Present(v) => Some(v),
            Decoded::MissingField(_) => None,
        }
    }
}

impl EncryptResponse {
    pub fn decode(self) -> Decoded<String> {
        Decoded::from_option(self.encrypted_message, "encryptedMessage")
    }
}

impl DecryptResponse {
    pub fn decode(self) -> Decoded<String> {
        Decoded::from_option(self.decrypted_message, "decryptedMessage")
    }
}

impl SignResponse {
    // An empty signature string is treated like an absent one, matching the
    // `response.signature || placeholder` fallback of the browser client.
    pub fn decode(self) -> Decoded<String> {
        Decoded::from_option(self.signature.filter(|s| !s.is_empty()), "signature")
    }
}

impl VerifyResponse {
    pub fn decode(self) -> Decoded<bool> {
        Decoded::from_option(self.is_valid, "isValid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_field_names() {
        let decrypt = DecryptRequest {
            algorithm: Algorithm::ElGamal,
            encrypted_message: "abc".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&decrypt).unwrap(),
            json!({ "algorithm": "ElGamal", "encryptedMessage": "abc" })
        );

        let verify = VerifyRequest {
            algorithm: Algorithm::Ecc,
            message: "d".to_string(),
            signature: "s".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&verify).unwrap(),
            json!({ "algorithm": "ECC", "message": "d", "signature": "s" })
        );
    }

    #[test]
    fn test_response_fields_decode_when_present() {
        let sign: SignResponse = serde_json::from_value(json!({ "signature": "c2ln" })).unwrap();
        assert_eq!(sign.decode(), Decoded::Present("c2ln".to_string()));

        let verify: VerifyResponse = serde_json::from_value(json!({ "isValid": false })).unwrap();
        assert_eq!(verify.decode(), Decoded::Present(false));

        let encrypt: EncryptResponse =
            serde_json::from_value(json!({ "encryptedMessage": "x", "extra": 1 })).unwrap();
        assert_eq!(encrypt.decode(), Decoded::Present("x".to_string()));
    }

    #[test]
    fn test_response_fields_missing() {
        let sign: SignResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(sign.decode(), Decoded::MissingField("signature"));

        let verify: VerifyResponse = serde_json::from_value(json!({ "isValid": null })).unwrap();
        assert_eq!(verify.decode(), Decoded::MissingField("isValid"));

        let decrypt: DecryptResponse = serde_json::from_value(json!({ "other": "y" })).unwrap();
        assert_eq!(decrypt.decode(), Decoded::MissingField("decryptedMessage"));
    }

    #[test]
    fn test_empty_signature_is_missing() {
        let sign: SignResponse = serde_json::from_value(json!({ "signature": "" })).unwrap();
        assert_eq!(sign.decode(), Decoded::MissingField("signature"));
    }
}
