//! Types shared between Hearth crates.

#![cfg_attr(not(test), no_std)]

pub mod error;

pub use error::ShellError;
