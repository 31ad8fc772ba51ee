//! Architecture-specific implementations.
//!
//! This module provides platform abstractions for bare-metal targets.
//! Currently supported: x86_64.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;
