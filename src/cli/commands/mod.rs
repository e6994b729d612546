//! CLI command implementations

pub mod cflags;
pub mod check;
pub mod config;
pub mod info;
pub mod lib_name;
pub mod link;
pub mod verify;

pub use cflags::execute as cflags;
pub use check::execute as check;
pub use config::execute as config;
pub use info::execute as info;
pub use lib_name::execute as lib_name;
pub use link::execute as link;
pub use verify::execute as verify;

use crate::config::{Config, ConfigManager};
use crate::error::{PortError, PortResult};
use crate::port::{self, options, BuildSettings, Port, StaticLayout};
use std::collections::BTreeMap;
use tracing::debug;

/// A port with the effective options applied, plus the host settings
pub struct PortContext {
    pub port: Box<dyn Port>,
    pub settings: BuildSettings,
    pub layout: StaticLayout,
}

impl PortContext {
    /// Resolve the port and apply options from config, then from `overrides`
    ///
    /// Each source is applied as one batch, so a bad value in either leaves
    /// the port untouched and reports every problem at once. `pthreads`
    /// replaces `build.pthreads` from the config when set.
    pub fn prepare(
        name: &str,
        overrides: &[String],
        pthreads: Option<bool>,
        config: &Config,
    ) -> PortResult<Self> {
        let mut port = port::lookup(name)?;

        let from_config = config.port_options(name);
        if !from_config.is_empty() {
            debug!("Applying {} option(s) from config", from_config.len());
            port.handle_options(&from_config)?;
        }

        let from_cli = parse_overrides(overrides)?;
        if !from_cli.is_empty() {
            debug!("Applying {} option(s) from command line", from_cli.len());
            port.handle_options(&from_cli)?;
        }

        Ok(Self {
            port,
            settings: BuildSettings {
                pthreads: pthreads.unwrap_or(config.build.pthreads),
                ..BuildSettings::default()
            },
            layout: ConfigManager::layout(config),
        })
    }
}

fn parse_overrides(overrides: &[String]) -> PortResult<BTreeMap<String, String>> {
    let mut parsed = BTreeMap::new();
    let mut errors = Vec::new();
    for raw in overrides {
        match options::parse_assignment(raw) {
            Ok((key, value)) => {
                parsed.insert(key, value);
            }
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(PortError::InvalidOptions(errors));
    }
    Ok(parsed)
}
