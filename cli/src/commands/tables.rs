use std::collections::BTreeMap;

use anyhow::{Context, Result};
use colored::Colorize;
use probes_decoder::{
    arm::{arm_actions, ARM_DECODE_TABLES, ARM_TABLE_NAMES},
    DecodeEntry,
};

use crate::{commands::out_of_line, PROBE_DECODE_VERSION_MESSAGE};

/// Validates the built-in decode tables and summarizes them
#[derive(clap::Args)]
#[command(
    about = "Check the built-in ARM decode tables",
    long_about = None,
    version = PROBE_DECODE_VERSION_MESSAGE
)]
#[command(propagate_version = true)]
pub struct TablesCmd;

/// Number of entries of each kind in a table
pub fn entry_kinds(entries: &[DecodeEntry]) -> BTreeMap<&'static str, usize> {
    let mut kinds = BTreeMap::new();
    for entry in entries {
        *kinds.entry(entry.kind()).or_insert(0) += 1;
    }
    kinds
}

impl TablesCmd {
    pub fn run(&self) -> Result<()> {
        println!("{} Tables", format!("{: >12}", "Command").bright_green().bold());
        println!();

        let actions = arm_actions(out_of_line);
        ARM_DECODE_TABLES.validate(&actions).context("Built-in ARM decode tables are invalid")?;

        for (id, entries) in ARM_DECODE_TABLES.iter() {
            let name = ARM_TABLE_NAMES.get(id.index()).copied().unwrap_or("unnamed");
            let kinds = entry_kinds(entries)
                .iter()
                .map(|(kind, count)| format!("{kind}={count}"))
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "{: >4} {: <28} {: >3} entries  {}",
                id.0,
                name.bright_green(),
                entries.len(),
                kinds
            );
        }

        println!();
        println!(
            "{} {} tables valid with {} actions",
            "[OK]".green().bold(),
            ARM_DECODE_TABLES.len(),
            actions.len()
        );

        Ok(())
    }
}
