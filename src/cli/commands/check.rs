//! Check command - print the effective, normalized options
//!
//! Validation already happened while preparing the port context; reaching
//! this point means every option was accepted.

use super::PortContext;
use crate::error::PortResult;
use console::style;

/// Execute the check command
pub fn execute(ctx: &PortContext) -> PortResult<()> {
    for (name, value) in ctx.port.current_options() {
        println!("{}={}", name, value);
    }
    eprintln!(
        "{} options valid for {}",
        style("✓").green(),
        ctx.port.info().name
    );
    Ok(())
}
