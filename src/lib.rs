//! wasm-ports - port descriptors for wasm cross-compilation
//!
//! Describes how the host toolchain fetches, builds and links third-party
//! libraries for the wasm target, and ships the `sdl-config` shim that
//! answers configure-time probes.

pub mod cli;
pub mod config;
pub mod error;
pub mod port;
pub mod sdl_config;

pub use error::{OptionError, PortError, PortResult};
