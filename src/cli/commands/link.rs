//! Link command - print link settings contributed by the port

use super::PortContext;
use crate::error::PortResult;

/// Execute the link command
pub fn execute(ctx: &PortContext) -> PortResult<()> {
    let mut settings = ctx.settings.clone();
    ctx.port.linker_setup(&ctx.layout, &mut settings);

    for lib in &settings.js_libraries {
        println!("--js-library {}", lib.display());
    }
    println!("-sMAX_WEBGL_VERSION={}", settings.max_webgl_version);
    Ok(())
}
