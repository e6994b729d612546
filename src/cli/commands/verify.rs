//! Verify command - check a downloaded archive against the fetch descriptor

use super::PortContext;
use crate::error::PortResult;
use console::style;
use std::path::Path;

/// Execute the verify command
pub fn execute(ctx: &PortContext, archive: &Path) -> PortResult<()> {
    let info = ctx.port.info();
    info.fetch.verify_file(info.name, archive)?;
    println!(
        "{} {} matches {} {}",
        style("✓").green(),
        archive.display(),
        info.name,
        info.fetch.tag
    );
    Ok(())
}
