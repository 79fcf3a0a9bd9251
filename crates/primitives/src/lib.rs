//! # nativelib-primitives
//!
//! Byte-level data model shared by the signature and hash engines: the 32-byte [`Word`] and
//! the hex/byte-array helpers every other crate builds its buffers with.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod error;
pub mod utilities;

pub use error::ByteArrayError;
pub use hex;
pub use utilities::*;

/// Size of a [`Word`] in bytes.
pub const WORD_SIZE: usize = 32;

/// Fixed 32-byte buffer, the unit of hash input/output and of key material.
pub type Word = [u8; WORD_SIZE];
