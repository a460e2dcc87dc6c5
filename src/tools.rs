use crate::errors::*;
use crate::static_values::{CKB_HASH_LENGTH, CKB_HASH_PERSONALIZATION, HEX_PREFIX};
use crate::types::{Blake160, Hash};
use error_stack::{IntoReport, Report, Result, ResultExt};
use std::convert::TryInto;

/// Decodes a `0x`-prefixed hex string holding exactly `expected_len` bytes.
///
/// `field` names the value in the attached message, `context` is the error
/// reported on failure.
pub fn decode_hex(
    field: &str,
    value: &str,
    expected_len: usize,
    context: AddressError,
) -> Result<Vec<u8>, AddressError> {
    let digits = match value.strip_prefix(HEX_PREFIX) {
        Some(digits) => digits,
        None => {
            return Err(Report::new(context)
                .attach_printable(format!("{field}: expected a {HEX_PREFIX}-prefixed hex string")))
        }
    };

    if digits.len() % 2 != 0 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(Report::new(context)
            .attach_printable(format!("{field}: expected an even number of hex digits")));
    }

    let expected_chars = HEX_PREFIX.len() + expected_len * 2;
    if value.len() != expected_chars {
        return Err(Report::new(context).attach_printable(format!(
            "{field}: expected {expected_len} bytes ({expected_chars} characters), got {} characters",
            value.len()
        )));
    }

    hex::decode(digits)
        .into_report()
        .change_context(context)
        .attach_printable_lazy(|| format!("{field}: failed to decode hex"))
}

pub fn encode_hex(data: &[u8]) -> String {
    format!("{HEX_PREFIX}{}", hex::encode(data))
}

/// Blake2b-256 with the chain personalization.
pub fn ckb_hash(data: &[u8]) -> Hash {
    let digest = blake2b_simd::Params::new()
        .hash_length(CKB_HASH_LENGTH)
        .personal(CKB_HASH_PERSONALIZATION)
        .hash(data);

    let mut output = [0u8; 32];
    output.copy_from_slice(digest.as_bytes());
    output
}

/// First 20 bytes of `ckb_hash`.
pub fn blake160(data: &[u8]) -> Blake160 {
    let hash = ckb_hash(data);
    let mut output = [0u8; 20];
    output.copy_from_slice(&hash[..20]);
    output
}

pub fn to_array<const N: usize>(
    field: &str,
    data: &[u8],
    context: AddressError,
) -> Result<[u8; N], AddressError> {
    data.try_into().map_err(|_| {
        Report::new(context).attach_printable(format!(
            "{field}: expected {N} bytes, got {}",
            data.len()
        ))
    })
}
