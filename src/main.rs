use std::process;

use ckbaddress::config::{self, Network};
use ckbaddress::errors::AddressError;
use ckbaddress::key::Key;
use ckbaddress::pipeline;
use ckbaddress::static_values::DEFAULT_MINIMUM_CKB;
use colored::Colorize;
use error_stack::Result;
use log::info;

fn run(private_key: String, network: Option<String>) -> Result<String, AddressError> {
    let network = match network {
        Some(network) => network.parse::<Network>()?,
        None => Network::from_env()?,
    };
    info!("deriving address on {network}");

    let store = config::global_store();
    store.initialize(network.config())?;
    pipeline::get_address_with(&Key::Hex(private_key), store, DEFAULT_MINIMUM_CKB)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let private_key = match args.next() {
        Some(private_key) => private_key,
        None => {
            eprintln!("usage: ckbaddress <0x-private-key> [mainnet|testnet]");
            process::exit(2);
        }
    };

    match run(private_key, args.next()) {
        Ok(address) => println!("{address}"),
        Err(report) => {
            eprintln!("{}", format!("{report:?}").red());
            process::exit(1);
        }
    }
}
