// wordmask/src/main.rs
//! Wordmask entry point.
//!
//! Builds the filter configuration from the CLI arguments (and an optional
//! YAML file), constructs the engine, and runs the mask command over stdin
//! or a file.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::io::Read;

use wordmask_core::{merge_configs, FilterConfig, WordFilter};

use crate::cli::Cli;
use crate::commands::mask::{run_mask, MaskOptions};

fn init_logger(args: &Cli) {
    let default_level = if args.quiet {
        "off"
    } else if args.debug {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Builds the effective configuration: file config, then CLI keywords
/// merged on top, then an explicit mask-char override.
fn build_config(args: &Cli) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => FilterConfig::default(),
    };

    if !args.keywords.is_empty() {
        let extra = FilterConfig {
            keywords: args.keywords.clone(),
            mask_char: config.mask_char,
        };
        config = merge_configs(config, Some(extra));
    }

    if let Some(mask_char) = args.mask_char {
        config.mask_char = mask_char;
    }

    Ok(config)
}

fn read_input(args: &Cli) -> Result<String> {
    match &args.input_file {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin...");
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read from stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(&args);
    info!("wordmask started. Version: {}", env!("CARGO_PKG_VERSION"));

    let config = build_config(&args)?;
    if config.keyword_count() == 0 {
        warn!("No keywords configured; input will pass through unchanged.");
    }

    let filter = WordFilter::from_config(&config);
    let input = read_input(&args)?;

    run_mask(
        &filter,
        MaskOptions {
            input,
            output_path: args.output.clone(),
            mask_char: config.mask_char,
            no_summary: args.no_summary,
            quiet: args.quiet,
        },
    )
}
