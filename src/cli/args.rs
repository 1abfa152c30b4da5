use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bytevise", version)]
#[command(about = "Encode and decode byte sequences using chunked, hex, and radix codecs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// List available alphabet presets
    #[arg(short, long)]
    pub list: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode bytes to text
    Encode(CodecArgs),
    /// Decode text back to bytes
    Decode(CodecArgs),
}

/// Codec selection and I/O, shared by encode and decode.
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Alphabet preset for the chunked codec
    #[arg(short, long, default_value = "base64")]
    pub alphabet: String,

    /// Use the hex codec instead of an alphabet preset
    #[arg(long, conflicts_with = "radix")]
    pub hex: bool,

    /// Uppercase hex output
    #[arg(long, requires = "hex")]
    pub upper: bool,

    /// Use the radix-N numeric codec (base 2-36)
    #[arg(long, value_name = "N")]
    pub radix: Option<u32>,

    /// Treat the buffer as little-endian when encoding
    #[arg(long)]
    pub little_endian: bool,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
