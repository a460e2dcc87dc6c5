use error_stack::Result;
use log::debug;

use crate::address;
use crate::config::{self, ConfigStore, Network};
use crate::errors::*;
use crate::hasher;
use crate::key::{self, Key};
use crate::script;
use crate::static_values::DEFAULT_MINIMUM_CKB;
use crate::types::Address;

/// Mainnet anyone-can-pay address of `private_key`.
///
/// Initializes the process-wide chain config on first use. Fails if that
/// config was already initialized for another network.
pub fn get_address(private_key: &Key) -> Result<Address, AddressError> {
    let store = config::global_store();
    store.initialize(Network::Mainnet.config())?;
    get_address_with(private_key, store, DEFAULT_MINIMUM_CKB)
}

/// Same as [`get_address`] over an explicit config store.
pub fn get_address_with(
    private_key: &Key,
    store: &ConfigStore,
    minimum_ckb: u8,
) -> Result<Address, AddressError> {
    let public_key = key::derive_public_key(private_key)?;
    let short_hash = hasher::to_short_hash(&public_key)?;
    debug!("short hash {short_hash}");

    let script = script::build_pay_to_short_hash_script(&short_hash, store, minimum_ckb)?;
    let address = address::encode(&script, store.get()?)?;
    debug!("derived address {address}");

    Ok(address)
}
