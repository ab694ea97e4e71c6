//! Help command - list available commands

use std::io::{BufRead, Write};

use anyhow::Result;

use super::COMMANDS;
use crate::output::create_table;
use crate::shell::{Flow, Shell};

pub fn run<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> Result<Flow> {
    if shell.output.is_json() {
        return Ok(Flow::Continue);
    }

    let mut table = create_table();
    table.set_header(vec!["Command", "Description"]);
    for (command, description) in COMMANDS {
        table.add_row(vec![*command, *description]);
    }

    shell.output.plain("")?;
    shell.output.plain("Options:")?;
    shell.output.table(&table)?;
    shell.output.plain("")?;
    Ok(Flow::Continue)
}
