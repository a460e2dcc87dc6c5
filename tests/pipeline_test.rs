use std::thread;

use ckbaddress::address;
use ckbaddress::config::{self, ConfigStore, Network};
use ckbaddress::errors::{AddressError, ConfigErrorKind};
use ckbaddress::hasher;
use ckbaddress::key::Key;
use ckbaddress::pipeline;
use ckbaddress::script::HashType;
use ckbaddress::static_values::{DEFAULT_MINIMUM_CKB, LINA};
use secp256k1::SecretKey;

static PRIVATE_KEY_ONE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";
static ADDRESS_ONE: &str = "ckb1qrfkjktl73ljn77q637judm4xux3y59c29qvvu8ywx90wy5c8g34gqt4z78ng4yutl5u6xsv27ht6q08mhujf8sgs447nc";

#[test]
fn golden_address() {
    let address = pipeline::get_address(&Key::from(PRIVATE_KEY_ONE)).unwrap();
    assert_eq!(address, ADDRESS_ONE);

    let mut raw = [0u8; 32];
    raw[31] = 1;
    assert_eq!(
        pipeline::get_address(&Key::Raw(raw.to_vec())).unwrap(),
        ADDRESS_ONE
    );

    assert_eq!(
        pipeline::get_address(&Key::from(
            "0x0000000000000000000000000000000000000000000000000000000000000002"
        ))
        .unwrap(),
        "ckb1qrfkjktl73ljn77q637judm4xux3y59c29qvvu8ywx90wy5c8g34gqdrcaufs8qeu8wvvy0myyedek4vqad9qeqg7y23sf"
    );
}

#[test]
fn address_is_deterministic() {
    for _ in 0..8 {
        let private_key = Key::Raw(
            SecretKey::new(&mut rand::thread_rng())
                .secret_bytes()
                .to_vec(),
        );
        let first = pipeline::get_address(&private_key).unwrap();
        let second = pipeline::get_address(&private_key).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn address_decodes_to_anyone_can_pay() {
    let private_key = Key::from(PRIVATE_KEY_ONE);
    let address = pipeline::get_address(&private_key).unwrap();
    let short_hash = hasher::private_key_to_short_hash(&private_key).unwrap();

    let script = address::parse_address(&address, &LINA).unwrap();
    assert_eq!(script.hash_type, HashType::Type);
    assert_eq!(
        script.code_hash.to_vec(),
        hex::decode("d369597ff47f29fbc0d47d2e3775370d1250b85140c670e4718af712983a2354").unwrap()
    );
    assert_eq!(&script.args[..20], short_hash.as_bytes());
    assert_eq!(script.args[20..], [DEFAULT_MINIMUM_CKB]);
}

#[test]
fn minimum_ckb_is_a_parameter() {
    let store = ConfigStore::new();
    store.initialize(&LINA).unwrap();

    let address = pipeline::get_address_with(&Key::from(PRIVATE_KEY_ONE), &store, 0).unwrap();
    assert_eq!(
        address,
        "ckb1qrfkjktl73ljn77q637judm4xux3y59c29qvvu8ywx90wy5c8g34gqt4z78ng4yutl5u6xsv27ht6q08mhujf8sqwp3jd9"
    );
}

#[test]
fn testnet_address() {
    let store = ConfigStore::new();
    store.initialize(Network::Testnet.config()).unwrap();

    let address = pipeline::get_address_with(
        &Key::from(PRIVATE_KEY_ONE),
        &store,
        DEFAULT_MINIMUM_CKB,
    )
    .unwrap();
    assert_eq!(
        address,
        "ckt1qq6pngwqn6e9vlm92th84rk0l4jp2h8lurchjmnwv8kq3rt5psf4vqt4z78ng4yutl5u6xsv27ht6q08mhujf8sgjs8a5d"
    );
}

#[test]
fn config_must_be_initialized() {
    let store = ConfigStore::new();
    let private_key = Key::from(PRIVATE_KEY_ONE);

    let err = pipeline::get_address_with(&private_key, &store, DEFAULT_MINIMUM_CKB).unwrap_err();
    assert_eq!(
        *err.current_context(),
        AddressError::ConfigNotInitialized(ConfigErrorKind::NotInitialized)
    );

    store.initialize(&LINA).unwrap();
    assert_eq!(
        pipeline::get_address_with(&private_key, &store, DEFAULT_MINIMUM_CKB).unwrap(),
        ADDRESS_ONE
    );
}

#[test]
fn key_errors_propagate_unchanged() {
    let inputs = [
        Key::Raw(vec![1; 31]),
        Key::from("0xnothex"),
        Key::from("hello"),
    ];

    for private_key in inputs.iter() {
        let err = pipeline::get_address(private_key).unwrap_err();
        assert!(err.current_context().is_invalid_key_format());

        let contexts = err
            .frames()
            .filter(|frame| frame.downcast_ref::<AddressError>().is_some())
            .count();
        assert_eq!(contexts, 1);
    }
}

#[test]
fn global_config_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| pipeline::get_address(&Key::from(PRIVATE_KEY_ONE)).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), ADDRESS_ONE);
    }
    assert_eq!(config::global_store().get().unwrap().prefix, "ckb");
}
