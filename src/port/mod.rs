//! Port descriptors
//!
//! A port teaches the host toolchain how to obtain, build and link a
//! third-party library for the wasm target. Each port exposes the same
//! extension points through the [`Port`] trait; the host calls them at the
//! matching phase of a build:
//!
//! | Phase | Entry point |
//! |-------|-------------|
//! | option parsing | [`Port::handle_options`] / [`Port::check_option`] |
//! | compile | [`Port::process_args`] |
//! | library acquisition | [`Port::get`] |
//! | link | [`Port::linker_setup`] |
//! | cache maintenance | [`Port::clear`] |

pub mod fetch;
pub mod glfw3;
pub mod host;
pub mod options;
#[cfg(test)]
pub(crate) mod testing;

pub use fetch::FetchDescriptor;
pub use glfw3::{Glfw3Options, Glfw3Port, OptLevel};
pub use host::{BuildRequest, LibraryCache, PortBuilder, PortLayout, StaticLayout};
pub use options::{OptionKind, OptionSpec, OptionValue};

use crate::error::{OptionError, PortError, PortResult};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default `MAX_WEBGL_VERSION` of a fresh build
pub const DEFAULT_MAX_WEBGL_VERSION: u32 = 1;

/// Static metadata every port declares
#[derive(Debug, Clone, Copy)]
pub struct PortInfo {
    /// Namespaced port name (e.g. `contrib.glfw3`)
    pub name: &'static str,
    /// Project homepage
    pub homepage: &'static str,
    pub description: &'static str,
    pub license: &'static str,
    pub fetch: FetchDescriptor,
    /// Option schema
    pub options: &'static [OptionSpec],
}

/// Build settings shared between the host and its ports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Threading (`-pthread`) enabled
    pub pthreads: bool,
    /// JS libraries passed to the linker
    pub js_libraries: Vec<PathBuf>,
    /// Highest WebGL version the output may use
    pub max_webgl_version: u32,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            pthreads: false,
            js_libraries: Vec::new(),
            max_webgl_version: DEFAULT_MAX_WEBGL_VERSION,
        }
    }
}

/// Extension points a port offers to the host toolchain
pub trait Port {
    /// Static metadata
    fn info(&self) -> &'static PortInfo;

    /// Artifact identity (library file name) for the current options
    fn lib_name(&self, settings: &BuildSettings) -> String;

    /// Fetch, build if not cached, and return the libraries to link
    fn get(
        &self,
        builder: &mut dyn PortBuilder,
        settings: &BuildSettings,
        cache: &mut dyn LibraryCache,
    ) -> PortResult<Vec<PathBuf>>;

    /// Drop the cached library for the current options
    fn clear(&self, settings: &BuildSettings, cache: &mut dyn LibraryCache) -> PortResult<()>;

    /// Adjust link settings
    fn linker_setup(&self, layout: &dyn PortLayout, settings: &mut BuildSettings);

    /// Compiler flags for code using the port
    fn process_args(&self, layout: &dyn PortLayout) -> Vec<String>;

    /// Validate one option value
    fn check_option(&self, option: &str, value: &str) -> Result<OptionValue, OptionError> {
        let info = self.info();
        options::check(info.name, info.options, option, value)
    }

    /// Validate and store a batch of options
    ///
    /// Either every entry is stored or none is.
    fn handle_options(&mut self, options: &BTreeMap<String, String>) -> PortResult<()>;

    /// Current value of every option, in schema order
    fn current_options(&self) -> Vec<(&'static str, OptionValue)>;
}

/// Names of all known ports
pub const KNOWN_PORTS: &[&str] = &[glfw3::PORT_NAME];

/// Create a port descriptor with default options by name
pub fn lookup(name: &str) -> PortResult<Box<dyn Port>> {
    match name {
        glfw3::PORT_NAME => Ok(Box::new(Glfw3Port::new())),
        other => Err(PortError::UnknownPort(other.to_string())),
    }
}
