//! Base58Check version prefixes
//!
//! Each network prepends its own version bytes before Base58Check encoding,
//! so a payload decoded under the wrong network is rejected by its prefix.

use thiserror::Error;

/// Address errors
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Invalid base58check encoding: {0}")]
    Encoding(#[from] bs58::decode::Error),
    #[error("Prefix {found} does not match expected {expected}")]
    PrefixMismatch { expected: String, found: String },
    #[error("Address has no payload")]
    MissingPayload,
}

/// Kinds of base58-encoded data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

/// Version prefixes of one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => std::slice::from_ref(&self.pubkey_address),
            Base58Type::ScriptAddress => std::slice::from_ref(&self.script_address),
            Base58Type::SecretKey => std::slice::from_ref(&self.secret_key),
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }

    /// Base58Check-encode `payload` behind the prefix for `kind`
    pub fn encode(&self, kind: Base58Type, payload: &[u8]) -> String {
        let prefix = self.get(kind);
        let mut data = Vec::with_capacity(prefix.len() + payload.len());
        data.extend_from_slice(prefix);
        data.extend_from_slice(payload);
        bs58::encode(data).with_check().into_string()
    }

    /// Decode Base58Check text and strip the prefix for `kind`
    pub fn decode(&self, kind: Base58Type, text: &str) -> Result<Vec<u8>, AddressError> {
        let data = bs58::decode(text).with_check(None).into_vec()?;
        let prefix = self.get(kind);

        if !data.starts_with(prefix) {
            let found = &data[..prefix.len().min(data.len())];
            return Err(AddressError::PrefixMismatch {
                expected: hex::encode(prefix),
                found: hex::encode(found),
            });
        }
        if data.len() == prefix.len() {
            return Err(AddressError::MissingPayload);
        }

        Ok(data[prefix.len()..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> Base58Prefixes {
        Base58Prefixes {
            pubkey_address: 80,
            script_address: 9,
            secret_key: 224,
            ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
        }
    }

    #[test]
    fn test_prefix_lengths() {
        let p = prefixes();
        assert_eq!(p.get(Base58Type::PubkeyAddress), &[80]);
        assert_eq!(p.get(Base58Type::SecretKey).len(), 1);
        assert_eq!(p.get(Base58Type::ExtPublicKey).len(), 4);
        assert_eq!(p.get(Base58Type::ExtSecretKey).len(), 4);
    }

    #[test]
    fn test_encode_then_decode() {
        let p = prefixes();
        let payload = [7u8; 20];
        let text = p.encode(Base58Type::PubkeyAddress, &payload);
        assert_eq!(p.decode(Base58Type::PubkeyAddress, &text).unwrap(), payload);
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let p = prefixes();
        let text = p.encode(Base58Type::ScriptAddress, &[1u8; 20]);
        let err = p.decode(Base58Type::PubkeyAddress, &text).unwrap_err();
        assert!(matches!(
            err,
            AddressError::PrefixMismatch { ref expected, ref found } if expected == "50" && found == "09"
        ));
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let p = prefixes();
        let mut text = p.encode(Base58Type::PubkeyAddress, &[1u8; 20]);
        let last = text.pop().unwrap();
        text.push(if last == '2' { '3' } else { '2' });
        assert!(matches!(
            p.decode(Base58Type::PubkeyAddress, &text),
            Err(AddressError::Encoding(_))
        ));
    }

    #[test]
    fn test_prefix_only_has_no_payload() {
        let p = prefixes();
        let text = p.encode(Base58Type::PubkeyAddress, &[]);
        assert!(matches!(
            p.decode(Base58Type::PubkeyAddress, &text),
            Err(AddressError::MissingPayload)
        ));
    }
}
