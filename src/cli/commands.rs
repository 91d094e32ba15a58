use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "mnid", about = "Encode, decode and check Multi Network Identifiers")]
pub struct Opt {
    #[arg(
        long = "output",
        global = true,
        help = "Output format (text, json); overrides MNID_OUTPUT"
    )]
    pub output: Option<OutputFormat>,
    #[arg(
        long = "log-level",
        global = true,
        help = "Log level (off, error, warn, info, debug, trace); overrides MNID_LOG_LEVEL"
    )]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "encode", about = "Encode a network id and an address as an MNID")]
    Encode {
        #[arg(help = "Network id as hex, e.g. 0x1")]
        network: String,
        #[arg(help = "Account address as hex, at most 20 bytes")]
        address: String,
    },
    #[command(
        name = "encode-blank",
        about = "Print the blank MNID (network 0x00, zero address)"
    )]
    EncodeBlank,
    #[command(name = "decode", about = "Decode an MNID into network and address")]
    Decode {
        #[arg(help = "The MNID to decode")]
        mnid: String,
    },
    #[command(
        name = "check",
        about = "Check whether a string is MNID-shaped (checksum not verified)"
    )]
    Check {
        #[arg(help = "The candidate string")]
        candidate: String,
    },
    #[command(name = "inspect", about = "Check a string's shape and decode it if it fits")]
    Inspect {
        #[arg(help = "The candidate string")]
        candidate: String,
    },
}
