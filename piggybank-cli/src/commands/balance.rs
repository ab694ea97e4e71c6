//! Balance command - show the current balance

use std::io::{BufRead, Write};

use anyhow::Result;
use piggybank_core::Receipt;

use crate::shell::{Flow, Shell};

pub fn run<R: BufRead, W: Write>(shell: &mut Shell<R, W>) -> Result<Flow> {
    let balance = shell.account.check_balance();
    shell.report(Ok(Receipt::balance(balance)))?;
    Ok(Flow::Continue)
}
