//! Lib-name command - print the artifact identity

use super::PortContext;
use crate::error::PortResult;

/// Execute the lib-name command
pub fn execute(ctx: &PortContext) -> PortResult<()> {
    println!("{}", ctx.port.lib_name(&ctx.settings));
    Ok(())
}
