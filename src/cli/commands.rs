use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use bytevise::{AlphabetRegistry, ByteOrder, Codec, HexCodec, RadixCodec};

use crate::cli::args::{Cli, CodecArgs, Command};

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.list {
        return list_presets();
    }

    match cli.command {
        Some(Command::Encode(args)) => encode(&args),
        Some(Command::Decode(args)) => decode(&args),
        None => {
            eprintln!("error: no command given; try `bytevise --help`");
            std::process::exit(2);
        }
    }
}

fn list_presets() -> Result<(), Box<dyn Error>> {
    let registry = AlphabetRegistry::load_with_overrides()?;
    println!("Available alphabet presets:\n");
    for name in registry.names() {
        let config = registry.get(name)?;
        let preview: String = config.chars.chars().take(20).collect();
        let suffix = if config.chars.chars().count() > 20 {
            "..."
        } else {
            ""
        };
        let padding = match &config.padding {
            Some(p) => format!(", padding '{}'", p),
            None => String::new(),
        };
        println!(
            "  {:<12} {} symbols{}: {}{}",
            name,
            config.chars.chars().count(),
            padding,
            preview,
            suffix
        );
    }
    println!("\nBuilt-in codecs: --hex, --radix <2-36>");
    Ok(())
}

fn build_codec(args: &CodecArgs) -> Result<Box<dyn Codec>, Box<dyn Error>> {
    if args.hex {
        return Ok(Box::new(if args.upper {
            HexCodec::upper()
        } else {
            HexCodec::lower()
        }));
    }
    if let Some(base) = args.radix {
        return Ok(Box::new(RadixCodec::new(base)?));
    }
    let registry = AlphabetRegistry::load_with_overrides()?;
    let codec = registry.get(&args.alphabet)?.codec()?;
    Ok(Box::new(codec))
}

fn byte_order(args: &CodecArgs) -> ByteOrder {
    if args.little_endian {
        ByteOrder::LittleEndian
    } else {
        ByteOrder::BigEndian
    }
}

fn read_input(args: &CodecArgs) -> Result<Vec<u8>, Box<dyn Error>> {
    match &args.file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

fn write_output(args: &CodecArgs, data: &[u8], trailing_newline: bool) -> Result<(), Box<dyn Error>> {
    match &args.output {
        Some(path) => {
            fs::write(path, data)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(data)?;
            if trailing_newline {
                handle.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn encode(args: &CodecArgs) -> Result<(), Box<dyn Error>> {
    let codec = build_codec(args)?;
    let data = read_input(args)?;
    let encoded = codec.encode(&data, byte_order(args));
    write_output(args, encoded.as_bytes(), true)
}

fn decode(args: &CodecArgs) -> Result<(), Box<dyn Error>> {
    let codec = build_codec(args)?;
    let input = read_input(args)?;
    let text = String::from_utf8(input)?;
    let decoded = codec.decode(text.trim_end())?;
    write_output(args, &decoded, false)
}
