use error_stack::{IntoReport, Report, Result, ResultExt};
use lazy_static::lazy_static;
use log::trace;
use secp256k1::{PublicKey, Secp256k1, SecretKey, SignOnly};

use crate::errors::*;
use crate::static_values::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};
use crate::tools;
use crate::types::{PrivateKeyBytes, PublicKeyBytes};

lazy_static! {
    static ref SECP: Secp256k1<SignOnly> = Secp256k1::signing_only();
}

/// A key in one of its two accepted representations.
///
/// Operations over keys hand back the same representation they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// `0x`-prefixed hex string
    Hex(String),
    Raw(Vec<u8>),
}

impl Key {
    pub fn is_hex(&self) -> bool {
        matches!(self, Key::Hex(_))
    }

    /// Decodes the key into exactly `expected_len` raw bytes.
    pub fn to_bytes(
        &self,
        field: &str,
        expected_len: usize,
        context: AddressError,
    ) -> Result<Vec<u8>, AddressError> {
        match self {
            Key::Hex(value) => tools::decode_hex(field, value, expected_len, context),
            Key::Raw(bytes) => {
                if bytes.len() != expected_len {
                    return Err(Report::new(context).attach_printable(format!(
                        "{field}: expected {expected_len} bytes, got {}",
                        bytes.len()
                    )));
                }
                Ok(bytes.clone())
            }
        }
    }

    /// Wraps `bytes` in the same representation as `self`.
    pub fn mirror(&self, bytes: &[u8]) -> Key {
        match self {
            Key::Hex(_) => Key::Hex(tools::encode_hex(bytes)),
            Key::Raw(_) => Key::Raw(bytes.to_vec()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Hex(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Hex(value)
    }
}

impl From<Vec<u8>> for Key {
    fn from(value: Vec<u8>) -> Self {
        Key::Raw(value)
    }
}

impl From<&[u8]> for Key {
    fn from(value: &[u8]) -> Self {
        Key::Raw(value.to_vec())
    }
}

pub fn decode_private_key(private_key: &Key) -> Result<PrivateKeyBytes, AddressError> {
    let context = AddressError::InvalidKeyFormat(KeyFormatErrorKind::PrivateKey);
    let bytes = private_key.to_bytes("privateKey", PRIVATE_KEY_LENGTH, context)?;
    tools::to_array("privateKey", &bytes, context)
}

pub fn decode_public_key(public_key: &Key) -> Result<PublicKeyBytes, AddressError> {
    let context = AddressError::InvalidKeyFormat(KeyFormatErrorKind::PublicKey);
    let bytes = public_key.to_bytes("publicKey", PUBLIC_KEY_LENGTH, context)?;
    tools::to_array("publicKey", &bytes, context)
}

/// Derives the compressed secp256k1 public key.
///
/// A hex private key yields a hex public key (`0x` + 66 digits), raw bytes
/// yield the raw 33-byte encoding.
pub fn derive_public_key(private_key: &Key) -> Result<Key, AddressError> {
    let secret = decode_private_key(private_key)?;

    let secret_key = SecretKey::from_slice(&secret)
        .into_report()
        .change_context(AddressError::InvalidKeyFormat(
            KeyFormatErrorKind::PrivateKey,
        ))
        .attach_printable("privateKey: expected a non-zero scalar below the secp256k1 order")?;

    let public_key: PublicKeyBytes = PublicKey::from_secret_key(&*SECP, &secret_key).serialize();
    trace!("derived public key {}", tools::encode_hex(&public_key));

    Ok(private_key.mirror(&public_key))
}

#[cfg(test)]
mod tests {
    use super::{decode_public_key, derive_public_key, Key};
    use crate::errors::*;

    static GENERATOR: &str = "0x0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn scalar(last: u8) -> [u8; 32] {
        let mut key = [0u8; 32];
        key[31] = last;
        key
    }

    #[test]
    fn derive_generator() {
        let public_key = derive_public_key(&Key::Raw(scalar(1).to_vec())).unwrap();
        assert_eq!(
            public_key,
            Key::Raw(hex::decode(&GENERATOR[2..]).unwrap())
        );
    }

    #[test]
    fn mirror_keeps_representation() {
        let key = Key::Hex("0x00".to_owned());
        assert_eq!(key.mirror(&[0xab, 0x01]), Key::Hex("0xab01".to_owned()));

        let key = Key::Raw(vec![0]);
        assert_eq!(key.mirror(&[0xab, 0x01]), Key::Raw(vec![0xab, 0x01]));
    }

    #[test]
    fn zero_scalar_rejected() {
        let err = derive_public_key(&Key::Raw(vec![0; 32])).unwrap_err();
        assert_eq!(
            *err.current_context(),
            AddressError::InvalidKeyFormat(KeyFormatErrorKind::PrivateKey)
        );
    }

    #[test]
    fn curve_order_rejected() {
        let order = "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
        let err = derive_public_key(&Key::from(order)).unwrap_err();
        assert!(err.current_context().is_invalid_key_format());
    }

    #[test]
    fn public_key_lengths() {
        decode_public_key(&Key::from(GENERATOR)).unwrap();

        let err = decode_public_key(&Key::Raw(vec![2; 34])).unwrap_err();
        assert_eq!(
            *err.current_context(),
            AddressError::InvalidKeyFormat(KeyFormatErrorKind::PublicKey)
        );
    }
}
