use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use vmlabel_core::prelude::*;
use vmlabel_observe::init_logger;

mod cli;
mod config;

use cli::{AddressesArgs, Cli, Command, LabelsArgs};
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = AppConfig::resolve(&cli)?;
    if let Command::Labels(LabelsArgs {
        prefix: Some(prefix),
        ..
    }) = &cli.command
    {
        cfg.tokenizer.prefix = prefix.clone();
    }
    init_logger(&cfg.logger)?;
    debug!(?cfg, "configuration resolved");

    match &cli.command {
        Command::Labels(args) => run_labels(args, &cfg),
        Command::Addresses(args) => run_addresses(args),
    }
}

fn run_labels(args: &LabelsArgs, cfg: &AppConfig) -> anyhow::Result<()> {
    // Descriptions are untrusted free text; invalid UTF-8 must not hide the directives.
    let bytes = read_input(args.file.as_deref())?;
    let text = String::from_utf8_lossy(&bytes);
    let tokenizer = LabelTokenizer::new(&cfg.tokenizer);

    let labels = tokenizer.extract_labels(&text);
    info!(extractor = tokenizer.name(), keys = labels.len(), "labels extracted");

    write_json(&labels, args.pretty)
}

fn run_addresses(args: &AddressesArgs) -> anyhow::Result<()> {
    let raw = String::from_utf8(read_input(args.file.as_deref())?)
        .context("interface query result is not valid UTF-8")?;
    let res = InterfaceQueryResult::from_json(&raw)?;

    let mut addrs = InterfaceFlattener.extract_addresses(&res);
    if args.skip_loopback {
        addrs.retain(|a| !a.is_loopback());
    }
    info!(
        interfaces = res.len(),
        addresses = addrs.len(),
        "addresses extracted"
    );

    write_json(&addrs, args.pretty)
}

/// Read the raw input from `path`, or stdin for `None` / `-`.
fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{out}")?;
    Ok(())
}
