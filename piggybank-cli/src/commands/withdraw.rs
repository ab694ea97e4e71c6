//! Withdraw command - take money out of the balance

use std::io::{BufRead, Write};

use anyhow::Result;
use piggybank_core::{parse_amount, Receipt};

use crate::shell::{Flow, Shell};

const PROMPT: &str = "Enter amount to withdraw: ";

pub fn run<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> Result<Flow> {
    let Some(raw) = shell.read_line(PROMPT)? else {
        return Ok(Flow::EndOfInput);
    };

    // Insufficient funds leaves the balance untouched
    let result = parse_amount(&raw).and_then(|amount| {
        shell
            .account
            .withdraw(amount)
            .map(|balance| Receipt::withdraw(amount, balance))
    });

    shell.report(result)?;
    Ok(Flow::Continue)
}
