//! Stand-in for the `sdl-config` query tool
//!
//! Build scripts probing for SDL during cross-compilation call
//! `sdl-config --cflags` or `sdl-config --version`. The real tool is not
//! available for the wasm target, so this answers with static values.

use std::io::{self, Write};

/// Flag requesting compiler flags (answered with an empty line)
pub const CFLAGS_FLAG: &str = "--cflags";

/// Flag requesting the library version
pub const VERSION_FLAG: &str = "--version";

/// Version reported for `--version`
pub const SDL_VERSION: &str = "1.3.0";

/// What a single invocation writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Diagnostic line for stderr
    pub trace: String,
    /// Line for stdout, if any rule matched
    pub stdout: Option<String>,
}

/// Compute the response for a full argv (program name first)
pub fn respond(argv: &[String]) -> Response {
    let trace = format!("emscripten sdl-config called with {}", argv.join(" "));
    let args = argv.get(1..).unwrap_or_default();

    let stdout = if args.first().map(String::as_str) == Some(CFLAGS_FLAG) {
        Some(String::new())
    } else if args.iter().any(|a| a == VERSION_FLAG) {
        Some(SDL_VERSION.to_string())
    } else {
        None
    };

    Response { trace, stdout }
}

/// Write the response for `argv` to the given streams
pub fn run(argv: &[String], out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    let response = respond(argv);
    writeln!(err, "{}", response.trace)?;
    if let Some(line) = response.stdout {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
