use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vmlabel")]
#[command(about = "Extract routing labels and guest addresses from workload metadata")]
pub struct Cli {
    /// JSON config file with `logger` and `tokenizer` sections.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter expression, overrides the config file (e.g. `vmlabel_core=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recover `key=value` directives from a description and print them as a JSON object.
    Labels(LabelsArgs),
    /// Flatten a guest interface query result and print the addresses as a JSON array.
    Addresses(AddressesArgs),
}

#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Description file; reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Directive prefix, overrides the config file.
    #[arg(long)]
    pub prefix: Option<String>,

    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct AddressesArgs {
    /// Interface query JSON file; reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Drop loopback addresses from the output.
    #[arg(long)]
    pub skip_loopback: bool,

    #[arg(long)]
    pub pretty: bool,
}
