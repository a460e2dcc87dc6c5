use bech32::{FromBase32, ToBase32, Variant};
use error_stack::{IntoReport, Report, Result, ResultExt};
use log::debug;

use crate::config::ChainConfig;
use crate::errors::*;
use crate::script::{HashType, Script};
use crate::static_values::{
    ANYONE_CAN_PAY_MAX_ARGS, ANYONE_CAN_PAY_MIN_ARGS, CODE_HASH_LENGTH, SHORT_HASH_LENGTH,
};
use crate::tools;
use crate::types::{Address, Hash};

/// Payload format byte of an address.
///
/// Only `Full` is current, the others are deprecated but still produced and
/// accepted by wallets.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFormat {
    #[default]
    Full = 0x00,
    Short = 0x01,
    FullData = 0x02,
    FullType = 0x04,
}

impl AddressFormat {
    pub fn from_u8(format: u8) -> Result<AddressFormat, AddressError> {
        match format {
            0x00 => Ok(AddressFormat::Full),
            0x01 => Ok(AddressFormat::Short),
            0x02 => Ok(AddressFormat::FullData),
            0x04 => Ok(AddressFormat::FullType),
            _ => Err(
                Report::new(AddressError::EncodingError(EncodingErrorKind::Format))
                    .attach_printable(format!(
                        "format: expected one of 0x00, 0x01, 0x02, 0x04, got {format:#04x}"
                    )),
            ),
        }
    }

    fn variant(&self) -> Variant {
        match self {
            AddressFormat::Full => Variant::Bech32m,
            _ => Variant::Bech32,
        }
    }
}

/// Encodes `script` in the full address format.
pub fn encode(script: &Script, config: &ChainConfig) -> Result<Address, AddressError> {
    encode_with_format(script, config, AddressFormat::Full)
}

pub fn encode_with_format(
    script: &Script,
    config: &ChainConfig,
    format: AddressFormat,
) -> Result<Address, AddressError> {
    let payload = payload(script, config, format)?;

    let address = bech32::encode(&config.prefix, payload.to_base32(), format.variant())
        .into_report()
        .change_context(AddressError::EncodingError(EncodingErrorKind::Format))
        .attach_printable_lazy(|| format!("prefix: cannot encode with {:?}", config.prefix))?;

    debug!("encoded {format:?} address {address}");
    Ok(address)
}

fn payload(
    script: &Script,
    config: &ChainConfig,
    format: AddressFormat,
) -> Result<Vec<u8>, AddressError> {
    let mut payload = Vec::with_capacity(1 + CODE_HASH_LENGTH + 1 + script.args.len());
    payload.push(format as u8);

    match format {
        AddressFormat::Full => {
            payload.extend_from_slice(&script.code_hash);
            payload.push(script.hash_type as u8);
        }
        AddressFormat::Short => {
            expect_hash_type(script, HashType::Type, format)?;
            let short_id = short_id(script, config)?;
            check_short_args(short_id, script.args.len())?;
            payload.push(short_id);
        }
        AddressFormat::FullData => {
            expect_hash_type(script, HashType::Data, format)?;
            payload.extend_from_slice(&script.code_hash);
        }
        AddressFormat::FullType => {
            expect_hash_type(script, HashType::Type, format)?;
            payload.extend_from_slice(&script.code_hash);
        }
    }

    payload.extend_from_slice(&script.args);
    Ok(payload)
}

fn expect_hash_type(
    script: &Script,
    expected: HashType,
    format: AddressFormat,
) -> Result<(), AddressError> {
    if script.hash_type != expected {
        return Err(
            Report::new(AddressError::EncodingError(EncodingErrorKind::HashType))
                .attach_printable(format!(
                    "hashType: {format:?} format requires {expected}, got {}",
                    script.hash_type
                )),
        );
    }
    Ok(())
}

fn short_id(script: &Script, config: &ChainConfig) -> Result<u8, AddressError> {
    for template in config.scripts.values() {
        if let Some(short_id) = template.short_id {
            if template.code_hash_bytes()? == script.code_hash {
                return Ok(short_id);
            }
        }
    }

    Err(
        Report::new(AddressError::EncodingError(EncodingErrorKind::CodeHash))
            .attach_printable(format!(
                "codeHash: {} has no short format index",
                tools::encode_hex(&script.code_hash)
            )),
    )
}

fn check_short_args(short_id: u8, len: usize) -> Result<(), AddressError> {
    let (min, max) = match short_id {
        0x02 => (ANYONE_CAN_PAY_MIN_ARGS, ANYONE_CAN_PAY_MAX_ARGS),
        _ => (SHORT_HASH_LENGTH, SHORT_HASH_LENGTH),
    };

    if len < min || len > max {
        return Err(
            Report::new(AddressError::EncodingError(EncodingErrorKind::Args))
                .attach_printable(format!(
                    "args: short format index {short_id:#04x} expects {min}..={max} bytes, got {len}"
                )),
        );
    }
    Ok(())
}

fn split_code_hash(payload: &[u8]) -> Result<(Hash, &[u8]), AddressError> {
    if payload.len() < CODE_HASH_LENGTH {
        return Err(
            Report::new(AddressError::EncodingError(EncodingErrorKind::Format))
                .attach_printable(format!(
                    "payload: expected at least {CODE_HASH_LENGTH} bytes after the format byte, got {}",
                    payload.len()
                )),
        );
    }
    let (code_hash, rest) = payload.split_at(CODE_HASH_LENGTH);
    let code_hash = tools::to_array(
        "codeHash",
        code_hash,
        AddressError::EncodingError(EncodingErrorKind::CodeHash),
    )?;
    Ok((code_hash, rest))
}

/// Decodes an address back into its script, accepting every format.
pub fn parse_address(address: &str, config: &ChainConfig) -> Result<Script, AddressError> {
    let (prefix, data, variant) = bech32::decode(address)
        .into_report()
        .change_context(AddressError::EncodingError(EncodingErrorKind::Checksum))
        .attach_printable_lazy(|| format!("address: {address:?} is not valid bech32"))?;

    if prefix != config.prefix {
        return Err(
            Report::new(AddressError::EncodingError(EncodingErrorKind::Prefix))
                .attach_printable(format!(
                    "prefix: expected {:?}, got {prefix:?}",
                    config.prefix
                )),
        );
    }

    let payload = Vec::<u8>::from_base32(&data)
        .into_report()
        .change_context(AddressError::EncodingError(EncodingErrorKind::Format))?;

    let (&format_byte, body) = payload.split_first().ok_or_else(|| {
        Report::new(AddressError::EncodingError(EncodingErrorKind::Format))
            .attach_printable("payload: empty")
    })?;
    let format = AddressFormat::from_u8(format_byte)?;

    if variant != format.variant() {
        return Err(
            Report::new(AddressError::EncodingError(EncodingErrorKind::Checksum))
                .attach_printable(format!(
                    "checksum: {format:?} format requires {:?}, got {variant:?}",
                    format.variant()
                )),
        );
    }

    let script = match format {
        AddressFormat::Full => {
            let (code_hash, rest) = split_code_hash(body)?;
            let (&hash_type, args) = rest.split_first().ok_or_else(|| {
                Report::new(AddressError::EncodingError(EncodingErrorKind::Format))
                    .attach_printable("payload: missing hash type")
            })?;
            Script::new(code_hash, HashType::from_u8(hash_type)?, args.to_vec())
        }
        AddressFormat::Short => {
            let (&short_id, args) = body.split_first().ok_or_else(|| {
                Report::new(AddressError::EncodingError(EncodingErrorKind::Format))
                    .attach_printable("payload: missing code hash index")
            })?;
            let (name, template) = config.script_by_short_id(short_id).ok_or_else(|| {
                Report::new(AddressError::EncodingError(EncodingErrorKind::CodeHash))
                    .attach_printable(format!("codeHashIndex: unknown index {short_id:#04x}"))
            })?;
            check_short_args(short_id, args.len())?;
            debug!("short address refers to {name}");
            Script::new(template.code_hash_bytes()?, HashType::Type, args.to_vec())
        }
        AddressFormat::FullData => {
            let (code_hash, args) = split_code_hash(body)?;
            Script::new(code_hash, HashType::Data, args.to_vec())
        }
        AddressFormat::FullType => {
            let (code_hash, args) = split_code_hash(body)?;
            Script::new(code_hash, HashType::Type, args.to_vec())
        }
    };

    Ok(script)
}
