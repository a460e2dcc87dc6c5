use std::fmt;

use error_stack::Result;
use log::trace;

use crate::errors::*;
use crate::key::{self, Key};
use crate::tools;
use crate::types::Blake160;

/// Account identifier: the first 20 bytes of the public key's ckb hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortHash(Blake160);

impl ShortHash {
    pub fn new(bytes: Blake160) -> Self {
        ShortHash(bytes)
    }

    pub fn as_bytes(&self) -> &Blake160 {
        &self.0
    }

    /// `0x` followed by 40 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        tools::encode_hex(&self.0)
    }
}

impl fmt::Display for ShortHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Blake160> for ShortHash {
    fn from(bytes: Blake160) -> Self {
        ShortHash(bytes)
    }
}

pub fn to_short_hash(public_key: &Key) -> Result<ShortHash, AddressError> {
    let public_key = key::decode_public_key(public_key)?;
    let short_hash = ShortHash(tools::blake160(&public_key));
    trace!("short hash {short_hash}");
    Ok(short_hash)
}

pub fn private_key_to_short_hash(private_key: &Key) -> Result<ShortHash, AddressError> {
    let public_key = key::derive_public_key(private_key)?;
    to_short_hash(&public_key)
}
