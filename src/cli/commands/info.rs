//! Info command - show port metadata and option schema

use super::PortContext;
use crate::cli::args::OutputFormat;
use crate::error::PortResult;
use crate::port::{OptionKind, OptionValue, PortInfo};
use console::style;
use serde::Serialize;

#[derive(Serialize)]
struct InfoJson<'a> {
    name: &'a str,
    tag: &'a str,
    url: String,
    sha512: &'a str,
    homepage: &'a str,
    description: &'a str,
    license: &'a str,
    options: Vec<OptionJson<'a>>,
}

#[derive(Serialize)]
struct OptionJson<'a> {
    name: &'a str,
    kind: &'a str,
    values: &'a [&'a str],
    current: String,
    description: &'a str,
}

/// Execute the info command
pub fn execute(ctx: &PortContext, format: OutputFormat) -> PortResult<()> {
    let info = ctx.port.info();
    let current = ctx.port.current_options();

    match format {
        OutputFormat::Table => print_table(info, &current),
        OutputFormat::Json => print_json(info, &current)?,
    }

    Ok(())
}

fn current_value(current: &[(&'static str, OptionValue)], name: &str) -> String {
    current
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.to_string())
        .unwrap_or_default()
}

fn print_table(info: &PortInfo, current: &[(&'static str, OptionValue)]) {
    println!("{} {}", style(info.name).bold(), info.fetch.tag);
    println!("{}", info.description);
    println!("Homepage: {}", info.homepage);
    println!("License:  {}", info.license);
    println!("Source:   {}", info.fetch.url());
    println!();

    println!(
        "{:<20} {:<8} {:<20} {}",
        style("OPTION").bold(),
        style("VALUE").bold(),
        style("ALLOWED").bold(),
        style("DESCRIPTION").bold()
    );
    println!("{}", "-".repeat(80));

    for spec in info.options {
        println!(
            "{:<20} {:<8} {:<20} {}",
            spec.name,
            current_value(current, spec.name),
            spec.values.join(","),
            style(spec.description).dim()
        );
    }
}

fn print_json(info: &PortInfo, current: &[(&'static str, OptionValue)]) -> PortResult<()> {
    let json = InfoJson {
        name: info.name,
        tag: info.fetch.tag,
        url: info.fetch.url(),
        sha512: info.fetch.sha512,
        homepage: info.homepage,
        description: info.description,
        license: info.license,
        options: info
            .options
            .iter()
            .map(|spec| OptionJson {
                name: spec.name,
                kind: match spec.kind {
                    OptionKind::Bool => "bool",
                    OptionKind::Choice => "choice",
                },
                values: spec.values,
                current: current_value(current, spec.name),
                description: spec.description,
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
