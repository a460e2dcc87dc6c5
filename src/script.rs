use std::fmt;
use std::str::FromStr;

use error_stack::{Report, Result};
use log::debug;

use crate::config::{ChainConfig, ConfigStore};
use crate::errors::*;
use crate::hasher::ShortHash;
use crate::static_values::{ANYONE_CAN_PAY, SECP256K1_BLAKE160};
use crate::tools;
use crate::types::Hash;

/// How a script's `code_hash` is matched against cells.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashType {
    Data = 0,
    Type = 1,
    Data1 = 2,
    Data2 = 4,
}

impl HashType {
    pub fn from_u8(hash_type: u8) -> Result<HashType, AddressError> {
        match hash_type {
            0 => Ok(HashType::Data),
            1 => Ok(HashType::Type),
            2 => Ok(HashType::Data1),
            4 => Ok(HashType::Data2),
            _ => Err(
                Report::new(AddressError::EncodingError(EncodingErrorKind::HashType))
                    .attach_printable(format!(
                        "hashType: expected one of 0, 1, 2, 4, got {hash_type}"
                    )),
            ),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashType::Data => "data",
            HashType::Type => "type",
            HashType::Data1 => "data1",
            HashType::Data2 => "data2",
        }
    }
}

impl FromStr for HashType {
    type Err = Report<AddressError>;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "data" => Ok(HashType::Data),
            "type" => Ok(HashType::Type),
            "data1" => Ok(HashType::Data1),
            "data2" => Ok(HashType::Data2),
            _ => Err(
                Report::new(AddressError::EncodingError(EncodingErrorKind::HashType))
                    .attach_printable(format!(
                        "hashType: expected one of data, type, data1, data2, got {value:?}"
                    )),
            ),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Script {
    pub code_hash: Hash,
    pub hash_type: HashType,
    pub args: Vec<u8>,
}

impl Script {
    pub fn new(code_hash: Hash, hash_type: HashType, args: Vec<u8>) -> Self {
        Script {
            code_hash,
            hash_type,
            args,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ codeHash: {}, hashType: {}, args: {} }}",
            tools::encode_hex(&self.code_hash),
            self.hash_type,
            tools::encode_hex(&self.args)
        )
    }
}

/// Instantiates the template registered under `name` with `args`.
pub fn build_script(
    name: &str,
    args: Vec<u8>,
    config: &ChainConfig,
) -> Result<Script, AddressError> {
    let template = config.script(name)?;
    Ok(Script::new(
        template.code_hash_bytes()?,
        template.hash_type()?,
        args,
    ))
}

/// Anyone-can-pay lock owned by `short_hash`.
///
/// Args are the 20 short hash bytes followed by `minimum_ckb`, the exponent of
/// the smallest accepted transfer in shannons.
pub fn build_pay_to_short_hash_script(
    short_hash: &ShortHash,
    store: &ConfigStore,
    minimum_ckb: u8,
) -> Result<Script, AddressError> {
    let config = store.get()?;

    let mut args = Vec::with_capacity(short_hash.as_bytes().len() + 1);
    args.extend_from_slice(short_hash.as_bytes());
    args.push(minimum_ckb);

    let script = build_script(ANYONE_CAN_PAY, args, config)?;
    debug!("built anyone-can-pay script {script}");
    Ok(script)
}

/// Default secp256k1/blake160 lock owned by `short_hash`.
pub fn build_default_lock_script(
    short_hash: &ShortHash,
    store: &ConfigStore,
) -> Result<Script, AddressError> {
    let config = store.get()?;
    build_script(SECP256K1_BLAKE160, short_hash.as_bytes().to_vec(), config)
}
