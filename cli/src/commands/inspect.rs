use std::io::{self, Write};

use anyhow::Context;
use cidrscope_core::calc;
use tracing::info;

use crate::terminal::report;

/// Computes the report for `cidr` and writes it to stdout.
pub fn inspect(cidr: &str) -> anyhow::Result<()> {
    let info = calc(cidr).with_context(|| format!("cannot inspect '{cidr}'"))?;
    info!(
        "{} is {}/{} with {} tag(s)",
        cidr,
        info.network,
        info.net_mask_size,
        info.tags.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, cidr, &info).context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    Ok(())
}
