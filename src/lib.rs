// This is free and unencumbered software released into the public domain.

#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(feature = "cli")]
pub mod cli;

pub mod ffi;

pub mod shared;
