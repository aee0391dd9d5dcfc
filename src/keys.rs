//! Step-key catalogs and display labels for handshake benchmark data.
//!
//! Each measured phase of a handshake is identified by a string step key.
//! The two catalogs below list the recognized keys per role in chronological
//! order of occurrence within a handshake; keys outside the selected catalog
//! are never aggregated, even if present in input records.

use serde::{Deserialize, Serialize};

/// Ordered client step keys, from the earliest operation to the latest.
pub const CLIENT_KEYS: &[&str] = &[
    "client_att_request",
    "client_extensions",
    "client_hello",
    "client_certificate_verify_att_request_challenge_generation",
    "client_certificate_verify_att_request",
    "client_certificate_verify",
    "client_handshake",
];

/// Ordered server step keys, from the earliest operation to the latest.
pub const SERVER_KEYS: &[&str] = &[
    "server_hello",
    "server_att_request_challenge_generation",
    "server_att_request_generation",
    "server_att_request",
    "server_extensions",
    "server_handshake",
];

/// Handshake role a trial batch was recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Client,
    Server,
}

impl Role {
    /// The ordered step-key catalog for this role.
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            Role::Client => CLIENT_KEYS,
            Role::Server => SERVER_KEYS,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Client => write!(f, "client"),
            Role::Server => write!(f, "server"),
        }
    }
}

/// Map a step key to its short display label.
///
/// Returns `None` for unrecognized keys; callers decide the fallback
/// (report rendering falls back to the raw key).
pub fn key_label(key: &str) -> Option<&'static str> {
    match key {
        "client_att_request" => Some("AttReq Encoding"),
        "client_certificate_verify" => Some("Certificate Verify"),
        "client_certificate_verify_att_request" => Some("Certificate Verify: AttReq"),
        "client_certificate_verify_att_request_challenge_generation" => {
            Some("Certificate Verify: AttReq Challenge Generation")
        }
        "client_extensions" => Some("ClientHello Extensions"),
        "client_hello" => Some("ClientHello"),
        "client_handshake" => Some("Handshake"),
        "server_handshake" => Some("Handshake (S)"),
        "server_att_request" => Some("AttReq Encoding"),
        "server_att_request_challenge_generation" => Some("AttReq Challenge Generation"),
        "server_att_request_generation" => Some("AttReq Generation"),
        "server_extensions" => Some("EncryptedExtensions"),
        "server_hello" => Some("ServerHello"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_selection() {
        assert_eq!(Role::Client.catalog(), CLIENT_KEYS);
        assert_eq!(Role::Server.catalog(), SERVER_KEYS);
        assert_eq!(CLIENT_KEYS.len(), 7);
        assert_eq!(SERVER_KEYS.len(), 6);
    }

    #[test]
    fn test_catalogs_are_disjoint() {
        for key in CLIENT_KEYS {
            assert!(!SERVER_KEYS.contains(key));
        }
    }

    #[test]
    fn test_every_catalog_key_has_a_label() {
        for key in CLIENT_KEYS.iter().chain(SERVER_KEYS.iter()) {
            assert!(key_label(key).is_some(), "no label for {}", key);
        }
    }

    #[test]
    fn test_known_labels() {
        assert_eq!(key_label("client_hello"), Some("ClientHello"));
        assert_eq!(key_label("client_handshake"), Some("Handshake"));
        assert_eq!(key_label("server_handshake"), Some("Handshake (S)"));
        assert_eq!(key_label("server_extensions"), Some("EncryptedExtensions"));
    }

    #[test]
    fn test_unrecognized_key_has_no_label() {
        assert_eq!(key_label("not_a_step"), None);
        assert_eq!(key_label(""), None);
    }
}
