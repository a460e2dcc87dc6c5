use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use error_stack::{Report, Result};
use log::debug;
use once_cell::sync::OnceCell;

use crate::errors::*;
use crate::script::HashType;
use crate::static_values::{
    AGGRON4, CODE_HASH_LENGTH, LINA, MAINNET_PREFIX, NETWORK_ENV, TESTNET_PREFIX,
};
use crate::tools;
use crate::types::Hash;

static CHAIN_CONFIG: ConfigStore = ConfigStore::new();

/// Entry of the chain script table, kept in the textual form chain config
/// files publish it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTemplate {
    pub code_hash: String,
    pub hash_type: String,
    /// Code hash index used by the short address format.
    pub short_id: Option<u8>,
}

impl ScriptTemplate {
    pub fn new(code_hash: impl Into<String>, hash_type: impl Into<String>) -> Self {
        ScriptTemplate {
            code_hash: code_hash.into(),
            hash_type: hash_type.into(),
            short_id: None,
        }
    }

    pub fn with_short_id(mut self, short_id: u8) -> Self {
        self.short_id = Some(short_id);
        self
    }

    pub fn code_hash_bytes(&self) -> Result<Hash, AddressError> {
        let context = AddressError::EncodingError(EncodingErrorKind::CodeHash);
        let bytes = tools::decode_hex("CODE_HASH", &self.code_hash, CODE_HASH_LENGTH, context)?;
        tools::to_array("CODE_HASH", &bytes, context)
    }

    pub fn hash_type(&self) -> Result<HashType, AddressError> {
        self.hash_type.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Human-readable part of addresses on this network.
    pub prefix: String,
    pub scripts: HashMap<String, ScriptTemplate>,
}

impl ChainConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        ChainConfig {
            prefix: prefix.into(),
            scripts: HashMap::new(),
        }
    }

    pub fn with_script(mut self, name: impl Into<String>, template: ScriptTemplate) -> Self {
        self.scripts.insert(name.into(), template);
        self
    }

    pub fn script(&self, name: &str) -> Result<&ScriptTemplate, AddressError> {
        self.scripts.get(name).ok_or_else(|| {
            Report::new(AddressError::ConfigNotInitialized(
                ConfigErrorKind::MissingScript,
            ))
            .attach_printable(format!(
                "SCRIPTS.{name}: not present in config for prefix {}",
                self.prefix
            ))
        })
    }

    /// Looks up the template registered under a short address code hash index.
    pub fn script_by_short_id(&self, short_id: u8) -> Option<(&str, &ScriptTemplate)> {
        self.scripts
            .iter()
            .find(|(_, template)| template.short_id == Some(short_id))
            .map(|(name, template)| (name.as_str(), template))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn config(&self) -> &'static ChainConfig {
        match self {
            Network::Mainnet => &*LINA,
            Network::Testnet => &*AGGRON4,
        }
    }

    /// Reads the network from `CKB_NETWORK`, falling back to mainnet when unset.
    pub fn from_env() -> Result<Network, AddressError> {
        match std::env::var(NETWORK_ENV) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Network::Mainnet),
        }
    }
}

impl FromStr for Network {
    type Err = Report<AddressError>;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mainnet" | "lina" | "ckb" => Ok(Network::Mainnet),
            "testnet" | "aggron4" | "ckt" => Ok(Network::Testnet),
            _ => Err(Report::new(AddressError::InvalidConfig(
                InvalidConfigErrorKind::UnknownNetwork,
            ))
            .attach_printable(format!(
                "network: expected one of mainnet, testnet, got {value}"
            ))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet ({MAINNET_PREFIX})"),
            Network::Testnet => write!(f, "testnet ({TESTNET_PREFIX})"),
        }
    }
}

/// Write-once holder of a [`ChainConfig`].
///
/// Readers observe either nothing or the complete config. Initializing again
/// with an equal config is a no-op, with a different one it is an error.
#[derive(Debug, Default)]
pub struct ConfigStore {
    cell: OnceCell<ChainConfig>,
}

impl ConfigStore {
    pub const fn new() -> Self {
        ConfigStore {
            cell: OnceCell::new(),
        }
    }

    pub fn initialize(&self, config: &ChainConfig) -> Result<&ChainConfig, AddressError> {
        let current = self.cell.get_or_init(|| {
            debug!("initializing chain config with prefix {}", config.prefix);
            config.clone()
        });

        if current != config {
            return Err(Report::new(AddressError::InvalidConfig(
                InvalidConfigErrorKind::AlreadyInitialized,
            ))
            .attach_printable(format!(
                "config: initialized with prefix {}, refusing prefix {}",
                current.prefix, config.prefix
            )));
        }

        Ok(current)
    }

    pub fn get(&self) -> Result<&ChainConfig, AddressError> {
        self.cell.get().ok_or_else(|| {
            Report::new(AddressError::ConfigNotInitialized(
                ConfigErrorKind::NotInitialized,
            ))
            .attach_printable("config: initialize the chain config before building scripts")
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Process-wide store used by [`crate::pipeline::get_address`].
pub fn global_store() -> &'static ConfigStore {
    &CHAIN_CONFIG
}
