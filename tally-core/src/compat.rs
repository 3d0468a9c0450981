// Compatibility module for std/no_std builds
// Provides common types that work in both environments

#[cfg(target_os = "none")]
extern crate alloc;

#[cfg(not(target_os = "none"))]
pub use std::{
    fmt,
    format,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(target_os = "none")]
pub use self::alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(target_os = "none")]
pub use core::fmt;
