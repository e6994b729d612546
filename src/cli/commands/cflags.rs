//! Cflags command - print compiler flags for code using the port

use super::PortContext;
use crate::error::PortResult;

/// Execute the cflags command
pub fn execute(ctx: &PortContext) -> PortResult<()> {
    let args = ctx.port.process_args(&ctx.layout);
    println!("{}", args.join(" "));
    Ok(())
}
