//! Implementation of the `quire list` command.

use serde::Serialize;

use quire_adapters::dissertation;
use quire_core::domain::ScaffoldTable;

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ListedFile<'a> {
    path: &'a str,
    bytes: usize,
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let table = dissertation().map_err(|e| CliError::Core(e.into()))?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Scaffold '{}':", table.name()))?;
            let width = table.iter().map(|e| e.path.as_str().len()).max().unwrap_or(0);
            for entry in &table {
                output.print(&format!(
                    "  {:<width$}  {:>6} bytes",
                    entry.path.as_str(),
                    entry.size(),
                ))?;
            }
        }

        ListFormat::Json => {
            output.json(&listed(&table))?;
        }

        ListFormat::List => {
            for entry in &table {
                println!("{}", entry.path);
            }
        }

        ListFormat::Csv => {
            println!("path,bytes");
            for file in listed(&table) {
                println!("{},{}", file.path, file.bytes);
            }
        }
    }

    Ok(())
}

fn listed(table: &ScaffoldTable) -> Vec<ListedFile<'_>> {
    table
        .iter()
        .map(|entry| ListedFile {
            path: entry.path.as_str(),
            bytes: entry.size(),
        })
        .collect()
}
