//! Fetch descriptors: where a port's source lives and how to verify it

use crate::error::{PortError, PortResult};
use sha2::{Digest, Sha512};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Immutable description of a downloadable source archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchDescriptor {
    /// Release tag
    pub tag: &'static str,
    /// Archive URL with `{tag}` placeholders
    pub url_template: &'static str,
    /// Expected SHA-512 of the archive, lower-case hex
    pub sha512: &'static str,
}

impl FetchDescriptor {
    /// Archive URL with the tag substituted
    pub fn url(&self) -> String {
        self.url_template.replace("{tag}", self.tag)
    }

    /// Tag with `.` separators removed (`3.4.0.20250305` -> `34020250305`)
    pub fn tag_digits(&self) -> String {
        self.tag.replace('.', "")
    }

    /// Check archive bytes against the expected hash
    pub fn verify(&self, name: &str, contents: &[u8]) -> PortResult<()> {
        let actual = hex::encode(Sha512::digest(contents));
        if !actual.eq_ignore_ascii_case(self.sha512) {
            return Err(PortError::IntegrityMismatch {
                name: name.to_string(),
                expected: self.sha512.to_string(),
                actual,
            });
        }
        debug!("Verified {} archive ({} bytes)", name, contents.len());
        Ok(())
    }

    /// Read a downloaded archive from disk and verify it
    pub fn verify_file(&self, name: &str, path: &Path) -> PortResult<()> {
        let contents = fs::read(path)
            .map_err(|e| PortError::io(format!("reading archive {}", path.display()), e))?;
        self.verify(name, &contents)
    }
}
