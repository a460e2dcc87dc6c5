pub mod address;
pub mod config;
pub mod errors;
pub mod hasher;
pub mod key;
pub mod pipeline;
pub mod script;
pub mod static_values;
pub mod tools;
pub mod types;
