//! `contrib.glfw3`: the emscripten-glfw port of GLFW 3.4
//!
//! Headers are installed under the namespaced `contrib.glfw3/GLFW`
//! directory instead of the top-level include path, so they never collide
//! with the GLFW headers bundled with the toolchain.

use super::fetch::FetchDescriptor;
use super::host::{BuildRequest, LibraryCache, PortBuilder, PortLayout};
use super::options::{OptionSpec, OptionValue};
use super::{BuildSettings, Port, PortInfo};
use crate::error::{OptionError, PortError, PortResult};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const PORT_NAME: &str = "contrib.glfw3";

pub const DISABLE_WARNING: &str = "disableWarning";
pub const DISABLE_JOYSTICK: &str = "disableJoystick";
pub const DISABLE_MULTI_WINDOW: &str = "disableMultiWindow";
pub const DISABLE_WEBGL2: &str = "disableWebGL2";
pub const OPTIMIZATION_LEVEL: &str = "optimizationLevel";

const OPT_LEVEL_VALUES: [&str; 7] = {
    let mut values = [""; 7];
    let mut i = 0;
    while i < 7 {
        values[i] = OptLevel::ALL[i].as_value();
        i += 1;
    }
    values
};

/// Every `-O` level the compiler accepts, as option values
pub const OPT_LEVELS: &[&str] = &OPT_LEVEL_VALUES;

const OPTIONS: &[OptionSpec] = &[
    OptionSpec::boolean(DISABLE_WARNING, "Boolean to disable warnings emitted by the library"),
    OptionSpec::boolean(DISABLE_JOYSTICK, "Boolean to disable support for joystick entirely"),
    OptionSpec::boolean(DISABLE_MULTI_WINDOW, "Boolean to disable multi window support"),
    OptionSpec::boolean(DISABLE_WEBGL2, "Boolean to disable WebGL2 support"),
    OptionSpec::choice(
        OPTIMIZATION_LEVEL,
        OPT_LEVELS,
        "Optimization level: 0, 1, 2, 3, g, s, z (default to 2)",
    ),
];

static INFO: PortInfo = PortInfo {
    name: PORT_NAME,
    homepage: "https://github.com/pongasoft/emscripten-glfw",
    description: "This project is an emscripten port of GLFW 3.4 written in C++ for the web/webassembly platform",
    license: "Apache 2.0 license",
    fetch: FetchDescriptor {
        tag: "3.4.0.20250305",
        url_template: "https://github.com/pongasoft/emscripten-glfw/releases/download/v{tag}/emscripten-glfw3-{tag}.zip",
        sha512: "d5d1496cf1e05a640c182584a09ed0b43c8d6c42386513e5c2b1e05a2289854a0a0abe085e0a8b64c3a484836a8e63dc5ddb683ce4d2899fccbbf89536d58ee1",
    },
    options: OPTIONS,
};

/// Optimization level the library is compiled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptLevel {
    O0,
    O1,
    #[default]
    O2,
    O3,
    Og,
    Os,
    Oz,
}

impl OptLevel {
    /// All levels, in option-schema order
    pub const ALL: [Self; 7] = [
        Self::O0,
        Self::O1,
        Self::O2,
        Self::O3,
        Self::Og,
        Self::Os,
        Self::Oz,
    ];

    /// Parse the option value (`0`..`3`, `g`, `s`, `z`)
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_value() == value)
    }

    /// Option value, the part after `-O`
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::O0 => "0",
            Self::O1 => "1",
            Self::O2 => "2",
            Self::O3 => "3",
            Self::Og => "g",
            Self::Os => "s",
            Self::Oz => "z",
        }
    }
}

impl fmt::Display for OptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-O{}", self.as_value())
    }
}

/// Current option values of the port
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glfw3Options {
    pub disable_warning: bool,
    pub disable_joystick: bool,
    pub disable_multi_window: bool,
    pub disable_webgl2: bool,
    pub optimization_level: OptLevel,
}

impl Glfw3Options {
    /// Store a value validated against the schema
    ///
    /// A value whose type does not match the option is rejected, never dropped.
    fn set(&mut self, option: &str, value: OptionValue) -> Result<(), OptionError> {
        match (option, value) {
            (DISABLE_WARNING, OptionValue::Bool(b)) => self.disable_warning = b,
            (DISABLE_JOYSTICK, OptionValue::Bool(b)) => self.disable_joystick = b,
            (DISABLE_MULTI_WINDOW, OptionValue::Bool(b)) => self.disable_multi_window = b,
            (DISABLE_WEBGL2, OptionValue::Bool(b)) => self.disable_webgl2 = b,
            (OPTIMIZATION_LEVEL, OptionValue::Choice(raw)) => {
                self.optimization_level =
                    OptLevel::from_value(raw).ok_or_else(|| OptionError::InvalidValue {
                        option: OPTIMIZATION_LEVEL.to_string(),
                        allowed: OPT_LEVELS.iter().map(|v| v.to_string()).collect(),
                        value: raw.to_string(),
                    })?;
            }
            (option, value) => {
                let allowed = OPTIONS
                    .iter()
                    .find(|spec| spec.name == option)
                    .ok_or_else(|| OptionError::UnknownOption {
                        port: PORT_NAME.to_string(),
                        option: option.to_string(),
                    })?
                    .values;
                return Err(OptionError::InvalidValue {
                    option: option.to_string(),
                    allowed: allowed.iter().map(|v| v.to_string()).collect(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Compiler flags for building the library itself
    pub fn build_flags(&self, settings: &BuildSettings) -> Vec<String> {
        let mut flags = vec![self.optimization_level.to_string()];
        if self.disable_warning {
            flags.push("-DEMSCRIPTEN_GLFW3_DISABLE_WARNING".to_string());
        }
        if self.disable_joystick {
            flags.push("-DEMSCRIPTEN_GLFW3_DISABLE_JOYSTICK".to_string());
        }
        if self.disable_multi_window {
            flags.push("-DEMSCRIPTEN_GLFW3_DISABLE_MULTI_WINDOW_SUPPORT".to_string());
        }
        if settings.pthreads {
            flags.push("-pthread".to_string());
        }
        flags
    }
}

/// The `contrib.glfw3` port descriptor
#[derive(Debug, Clone, Default)]
pub struct Glfw3Port {
    options: Glfw3Options,
}

impl Glfw3Port {
    /// Descriptor with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor with explicit options
    pub fn with_options(options: Glfw3Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Glfw3Options {
        &self.options
    }

    fn root(ports_dir: PathBuf) -> PathBuf {
        ports_dir.join(PORT_NAME)
    }

    fn include_sources(root: &Path) -> Vec<PathBuf> {
        vec![root.join("external"), root.join("include")]
    }

    fn build(
        &self,
        builder: &mut dyn PortBuilder,
        settings: &BuildSettings,
        output: &Path,
    ) -> PortResult<()> {
        let root = Self::root(builder.get_dir());
        let source = root.join("src").join("cpp");
        let includes = Self::include_sources(&root);

        let target = Path::new(PORT_NAME).join("GLFW");
        for include in &includes {
            builder.install_headers(&include.join("GLFW"), &target)?;
        }

        let flags = self.options.build_flags(settings);
        info!("Building {} with {}", PORT_NAME, flags.join(" "));
        builder.build_port(&BuildRequest {
            source: &source,
            output,
            name: PORT_NAME,
            includes: &includes,
            flags: &flags,
        })
    }
}

impl Port for Glfw3Port {
    fn info(&self) -> &'static PortInfo {
        &INFO
    }

    fn lib_name(&self, settings: &BuildSettings) -> String {
        let opts = &self.options;
        let mut name = format!("lib_{}-O{}", PORT_NAME, opts.optimization_level.as_value());
        if opts.disable_warning {
            name.push_str("-nw");
        }
        if opts.disable_joystick {
            name.push_str("-nj");
        }
        if opts.disable_multi_window {
            name.push_str("-sw");
        }
        if settings.pthreads {
            name.push_str("-mt");
        }
        name.push_str(".a");
        name
    }

    fn get(
        &self,
        builder: &mut dyn PortBuilder,
        settings: &BuildSettings,
        cache: &mut dyn LibraryCache,
    ) -> PortResult<Vec<PathBuf>> {
        let fetch = &INFO.fetch;
        builder.fetch_project(PORT_NAME, &fetch.url(), fetch.sha512)?;

        let lib_name = self.lib_name(settings);
        debug!("Resolving {} from cache", lib_name);
        let lib = cache.get_lib(&lib_name, &mut |output: &Path| {
            self.build(builder, settings, output)
        })?;
        Ok(vec![lib])
    }

    fn clear(&self, settings: &BuildSettings, cache: &mut dyn LibraryCache) -> PortResult<()> {
        let lib_name = self.lib_name(settings);
        debug!("Erasing {} from cache", lib_name);
        cache.erase_lib(&lib_name)
    }

    fn linker_setup(&self, layout: &dyn PortLayout, settings: &mut BuildSettings) {
        let js = Self::root(layout.get_dir())
            .join("src")
            .join("js")
            .join("lib_emscripten_glfw3.js");
        settings.js_libraries.push(js);
        if !self.options.disable_webgl2 {
            settings.max_webgl_version = settings.max_webgl_version.max(2);
        }
    }

    fn process_args(&self, layout: &dyn PortLayout) -> Vec<String> {
        vec![
            "-isystem".to_string(),
            layout.get_include_dir(PORT_NAME).display().to_string(),
            format!(
                "-DEMSCRIPTEN_USE_PORT_CONTRIB_GLFW3={}",
                INFO.fetch.tag_digits()
            ),
        ]
    }

    fn handle_options(&mut self, options: &BTreeMap<String, String>) -> PortResult<()> {
        let mut staged = self.options.clone();
        let mut errors = Vec::new();

        for (option, value) in options {
            match self.check_option(option, &value.to_lowercase()) {
                Ok(normalized) => {
                    if let Err(e) = staged.set(option, normalized) {
                        errors.push(e);
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(PortError::InvalidOptions(errors));
        }

        debug!("Applied {} option(s) to {}", options.len(), PORT_NAME);
        self.options = staged;
        Ok(())
    }

    fn current_options(&self) -> Vec<(&'static str, OptionValue)> {
        let opts = &self.options;
        vec![
            (DISABLE_WARNING, OptionValue::Bool(opts.disable_warning)),
            (DISABLE_JOYSTICK, OptionValue::Bool(opts.disable_joystick)),
            (DISABLE_MULTI_WINDOW, OptionValue::Bool(opts.disable_multi_window)),
            (DISABLE_WEBGL2, OptionValue::Bool(opts.disable_webgl2)),
            (
                OPTIMIZATION_LEVEL,
                OptionValue::Choice(opts.optimization_level.as_value()),
            ),
        ]
    }
}
