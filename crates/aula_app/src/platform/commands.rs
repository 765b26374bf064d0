use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Context;
use aula_engine::Orchestrator;
use aula_logging::aula_info;

use super::input::read_line;

pub const SOURCE_PROMPT: &str = "Enter the file name: ";

/// Prompts for one source name and runs a single word-count request.
pub fn count_words<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    orchestrator: &Orchestrator,
) -> anyhow::Result<bool> {
    write!(out, "{SOURCE_PROMPT}").context("failed to write prompt")?;
    out.flush().context("failed to flush prompt")?;

    let source_name = read_line(input)
        .context("failed to read file name")?
        .unwrap_or_default();
    aula_info!("Word count requested for {:?}", source_name);

    orchestrator
        .process(&source_name)
        .with_context(|| format!("failed to show results for {source_name}"))
}

pub fn print_lines<W, I>(out: &mut W, items: I) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        writeln!(out, "{item}").context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

pub fn describe_parity(n: i64) -> String {
    if aula_core::is_even(n) {
        format!("{n} is even")
    } else {
        format!("{n} is odd")
    }
}
