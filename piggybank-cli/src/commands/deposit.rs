//! Deposit command - add money to the balance

use std::io::{BufRead, Write};

use anyhow::Result;
use piggybank_core::{parse_amount, Receipt};

use crate::shell::{Flow, Shell};

const PROMPT: &str = "Enter amount to deposit: ";

pub fn run<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> Result<Flow> {
    let Some(raw) = shell.read_line(PROMPT)? else {
        return Ok(Flow::EndOfInput);
    };

    let result = parse_amount(&raw).and_then(|amount| {
        shell
            .account
            .deposit(amount)
            .map(|balance| Receipt::deposit(amount, balance))
    });

    shell.report(result)?;
    Ok(Flow::Continue)
}
