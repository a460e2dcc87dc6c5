use lazy_static::lazy_static;

use crate::config::{ChainConfig, ScriptTemplate};

pub static CKB_HASH_PERSONALIZATION: &[u8; 16] = b"ckb-default-hash";
pub static CKB_HASH_LENGTH: usize = 32;

pub static HEX_PREFIX: &str = "0x";

pub static PRIVATE_KEY_LENGTH: usize = 32;
pub static PUBLIC_KEY_LENGTH: usize = 33;
pub static SHORT_HASH_LENGTH: usize = 20;
pub static CODE_HASH_LENGTH: usize = 32;

// anyone-can-pay args: blake160 plus optional minimum ckb and minimum udt bytes
pub static ANYONE_CAN_PAY_MIN_ARGS: usize = 20;
pub static ANYONE_CAN_PAY_MAX_ARGS: usize = 22;

// 10^8 shannons, i.e. 1 CKB
pub static DEFAULT_MINIMUM_CKB: u8 = 8;

pub static SECP256K1_BLAKE160: &str = "SECP256K1_BLAKE160";
pub static SECP256K1_BLAKE160_MULTISIG: &str = "SECP256K1_BLAKE160_MULTISIG";
pub static DAO: &str = "DAO";
pub static ANYONE_CAN_PAY: &str = "ANYONE_CAN_PAY";

pub static MAINNET_PREFIX: &str = "ckb";
pub static TESTNET_PREFIX: &str = "ckt";

pub static NETWORK_ENV: &str = "CKB_NETWORK";

lazy_static! {
    /// Mainnet parameters.
    pub static ref LINA: ChainConfig = ChainConfig::new(MAINNET_PREFIX)
        .with_script(
            SECP256K1_BLAKE160,
            ScriptTemplate::new(
                "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
                "type",
            )
            .with_short_id(0x00),
        )
        .with_script(
            SECP256K1_BLAKE160_MULTISIG,
            ScriptTemplate::new(
                "0x5c5069eb0857efc65e1bca0c07df34c31663b3622fd3876c876320fc9634e2a8",
                "type",
            )
            .with_short_id(0x01),
        )
        .with_script(
            DAO,
            ScriptTemplate::new(
                "0x82d76d1b75fe2fd9a27dfbaa65a039221a380d76c926f378d3f81cf3e7e13f2e",
                "type",
            ),
        )
        .with_script(
            ANYONE_CAN_PAY,
            ScriptTemplate::new(
                "0xd369597ff47f29fbc0d47d2e3775370d1250b85140c670e4718af712983a2354",
                "type",
            )
            .with_short_id(0x02),
        );

    /// Testnet parameters.
    pub static ref AGGRON4: ChainConfig = ChainConfig::new(TESTNET_PREFIX)
        .with_script(
            SECP256K1_BLAKE160,
            ScriptTemplate::new(
                "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
                "type",
            )
            .with_short_id(0x00),
        )
        .with_script(
            SECP256K1_BLAKE160_MULTISIG,
            ScriptTemplate::new(
                "0x5c5069eb0857efc65e1bca0c07df34c31663b3622fd3876c876320fc9634e2a8",
                "type",
            )
            .with_short_id(0x01),
        )
        .with_script(
            DAO,
            ScriptTemplate::new(
                "0x82d76d1b75fe2fd9a27dfbaa65a039221a380d76c926f378d3f81cf3e7e13f2e",
                "type",
            ),
        )
        .with_script(
            ANYONE_CAN_PAY,
            ScriptTemplate::new(
                "0x3419a1c09eb2567f6552ee7a8ecffd64155cffe0f1796e6e61ec088d740c1356",
                "type",
            )
            .with_short_id(0x02),
        );
}
