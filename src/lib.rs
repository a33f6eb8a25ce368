#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

extern crate alloc;

pub mod authority;
pub mod condition;
pub mod decoder;
pub mod errors;
pub mod gate;
pub mod interfaces;
pub mod utils;

pub use condition::ExecuteSelectorCondition;
