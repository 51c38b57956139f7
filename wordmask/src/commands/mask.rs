//! Mask command implementation: runs the filter over the input and handles
//! output and the stderr summary.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::fs;
use std::path::PathBuf;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use wordmask_core::WordFilter;

/// Options for a single masking run.
pub struct MaskOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub mask_char: char,
    pub no_summary: bool,
    pub quiet: bool,
}

/// The main operation runner for the wordmask CLI.
pub fn run_mask(filter: &WordFilter, opts: MaskOptions) -> Result<()> {
    info!("Starting mask operation.");

    let (masked, occurrences) = filter.mask_with_summary(&opts.input, opts.mask_char);

    debug!(
        "Content masked. Original length: {}, masked length: {}",
        opts.input.len(),
        masked.len()
    );

    handle_primary_output(&opts, &masked)?;
    handle_summary(occurrences, &opts);

    info!("Mask operation completed.");
    Ok(())
}

fn handle_primary_output(opts: &MaskOptions, masked: &str) -> Result<()> {
    if let Some(path) = opts.output_path.clone() {
        debug!("Writing masked content to file: {}", path.display());
        let mut file = fs::File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", masked)?;
    } else {
        debug!("Writing masked content to stdout.");
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", masked)?;
    }
    Ok(())
}

fn handle_summary(occurrences: usize, opts: &MaskOptions) {
    if opts.no_summary || opts.quiet {
        return;
    }
    let message = format!("Masked {} occurrence(s).", occurrences);
    if io::stderr().is_terminal() {
        eprintln!("{}", message.green());
    } else {
        eprintln!("{}", message);
    }
}
