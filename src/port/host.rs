//! Host toolchain interfaces
//!
//! Ports never download, compile or cache anything themselves. The host
//! toolchain implements these traits and hands them to the port at the
//! matching build phase.

use crate::error::PortResult;
use std::path::{Path, PathBuf};

/// Directory layout of the host's ports tree
pub trait PortLayout {
    /// Root directory where fetched projects are unpacked
    fn get_dir(&self) -> PathBuf;

    /// Include directory reserved for the named port
    fn get_include_dir(&self, name: &str) -> PathBuf;
}

/// Fetch and build services provided by the host
///
/// Implementations own all network and compiler I/O, including retries
/// and integrity checking.
pub trait PortBuilder: PortLayout {
    /// Download and unpack `url` under `get_dir()/name`, unless already present
    ///
    /// Must fail if the archive's SHA-512 does not match `sha512`.
    fn fetch_project(&mut self, name: &str, url: &str, sha512: &str) -> PortResult<()>;

    /// Copy a header directory into the sysroot under `target`
    fn install_headers(&mut self, source: &Path, target: &Path) -> PortResult<()>;

    /// Compile every source under `source` into the static archive `output`
    fn build_port(&mut self, request: &BuildRequest<'_>) -> PortResult<()>;
}

/// Parameters for [`PortBuilder::build_port`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest<'a> {
    pub source: &'a Path,
    pub output: &'a Path,
    pub name: &'a str,
    pub includes: &'a [PathBuf],
    pub flags: &'a [String],
}

/// Callback invoked by [`LibraryCache::get_lib`] on a miss
pub type CreateLib<'a> = dyn FnMut(&Path) -> PortResult<()> + 'a;

/// Library cache keyed by artifact identity
pub trait LibraryCache {
    /// Return the cached library `name`, calling `create` to build it on a miss
    ///
    /// `create` receives the path the library must be written to.
    fn get_lib(&mut self, name: &str, create: &mut CreateLib<'_>) -> PortResult<PathBuf>;

    /// Remove the cached library `name`, if present
    fn erase_lib(&mut self, name: &str) -> PortResult<()>;
}

/// A fixed layout with explicit roots
///
/// Enough for operations that only compute paths (compiler and linker flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLayout {
    pub ports_dir: PathBuf,
    pub include_dir: PathBuf,
}

impl PortLayout for StaticLayout {
    fn get_dir(&self) -> PathBuf {
        self.ports_dir.clone()
    }

    fn get_include_dir(&self, name: &str) -> PathBuf {
        self.include_dir.join(name)
    }
}
