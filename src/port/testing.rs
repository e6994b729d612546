//! In-memory host doubles for port tests

use super::host::{BuildRequest, CreateLib, LibraryCache, PortBuilder, PortLayout};
use crate::error::PortResult;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Records every fetch, header install and build it is asked for
#[derive(Debug, Default)]
pub(crate) struct RecordingBuilder {
    pub fetched: Vec<(String, String, String)>,
    pub headers: Vec<(PathBuf, PathBuf)>,
    pub builds: Vec<RecordedBuild>,
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedBuild {
    pub source: PathBuf,
    pub output: PathBuf,
    pub name: String,
    pub includes: Vec<PathBuf>,
    pub flags: Vec<String>,
}

impl PortLayout for RecordingBuilder {
    fn get_dir(&self) -> PathBuf {
        PathBuf::from("/ports")
    }

    fn get_include_dir(&self, name: &str) -> PathBuf {
        PathBuf::from("/sysroot/include").join(name)
    }
}

impl PortBuilder for RecordingBuilder {
    fn fetch_project(&mut self, name: &str, url: &str, sha512: &str) -> PortResult<()> {
        self.fetched
            .push((name.to_string(), url.to_string(), sha512.to_string()));
        Ok(())
    }

    fn install_headers(&mut self, source: &Path, target: &Path) -> PortResult<()> {
        self.headers.push((source.to_path_buf(), target.to_path_buf()));
        Ok(())
    }

    fn build_port(&mut self, request: &BuildRequest<'_>) -> PortResult<()> {
        self.builds.push(RecordedBuild {
            source: request.source.to_path_buf(),
            output: request.output.to_path_buf(),
            name: request.name.to_string(),
            includes: request.includes.to_vec(),
            flags: request.flags.to_vec(),
        });
        Ok(())
    }
}

/// Library cache backed by a map
#[derive(Debug, Default)]
pub(crate) struct MemoryCache {
    pub libs: BTreeMap<String, PathBuf>,
    pub erased: Vec<String>,
}

impl LibraryCache for MemoryCache {
    fn get_lib(&mut self, name: &str, create: &mut CreateLib<'_>) -> PortResult<PathBuf> {
        if let Some(path) = self.libs.get(name) {
            return Ok(path.clone());
        }
        let path = PathBuf::from("/cache/sysroot/lib").join(name);
        create(&path)?;
        self.libs.insert(name.to_string(), path.clone());
        Ok(path)
    }

    fn erase_lib(&mut self, name: &str) -> PortResult<()> {
        self.libs.remove(name);
        self.erased.push(name.to_string());
        Ok(())
    }
}
