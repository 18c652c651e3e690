//! CDL command-line tool for converting CDL configuration documents.
//!
//! Usage: cdl [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --to <FORMAT>      Output format (yaml, json, toml) [default: yaml]
//!   -o, --output <FILE>    Write output to specified file
//!   --check                Check if input is valid (exit 0 if valid, 1 if invalid)
//!   -h, --help             Print help
//!   -V, --version          Print version

use libcdl::{encode_json, parse, Document};
use std::fs;
use std::io::{self, Read};
use std::process;

mod transcode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
    Toml,
}

/// Resolve a -t argument to a format, or `None` if unrecognized.
fn parse_format(s: &str) -> Option<Format> {
    match s {
        "yaml" | "yml" => Some(Format::Yaml),
        "json" => Some(Format::Json),
        "toml" => Some(Format::Toml),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut to_format: Option<Format> = None;
    let mut output_file: Option<&str> = None;
    let mut check_only = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("cdl {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-t" | "--to" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: -t requires a format argument");
                    process::exit(1);
                }
                match parse_format(&args[i]) {
                    Some(format) => to_format = Some(format),
                    None => {
                        eprintln!("Error: Unknown format: {}", args[i]);
                        process::exit(1);
                    }
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "--check" => {
                check_only = true;
            }
            "-" => {
                // Explicit stdin
                // input_path stays None, which means stdin
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    let output_format = to_format.unwrap_or(Format::Yaml);

    // Read raw bytes first; charset handling happens here, not in the parser.
    let raw_bytes: Vec<u8> = match input_path {
        Some(path) => match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    let input: String = match String::from_utf8(strip_bom(&raw_bytes).to_vec()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: input is not valid UTF-8: {}", e);
            process::exit(1);
        }
    };

    let document: Document = match parse(&input) {
        Ok(document) => document,
        Err(e) => {
            match input_path {
                Some(path) => eprintln!("{}: {}", path, render_error(&e)),
                None => eprintln!("Parse error: {}", render_error(&e)),
            }
            process::exit(1);
        }
    };

    if check_only {
        match input_path {
            Some(path) => println!("{}: ok", path),
            None => println!("ok"),
        }
        return;
    }

    let output = match output_format {
        Format::Yaml => match transcode::yaml::encode(&document) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Error: Cannot convert to YAML: {}", e);
                process::exit(1);
            }
        },
        Format::Json => encode_json(&document),
        Format::Toml => transcode::toml::encode(&document),
    };

    write_text_output(&output, output_file);
}

/// Drop a leading UTF-8 byte-order mark if present.
fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes)
}

/// Render an error with its source chain on a single line.
fn render_error(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn write_text_output(output: &str, output_file: Option<&str>) {
    if let Some(path) = output_file {
        if let Err(e) = fs::write(path, output) {
            eprintln!("Error writing {}: {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", output);
        // Ensure output ends with newline
        if !output.ends_with('\n') {
            println!();
        }
    }
}

fn print_help() {
    println!(
        "cdl - CDL configuration converter

USAGE:
    cdl [OPTIONS] [FILE]

ARGS:
    [FILE]    Input CDL file (reads from stdin if not provided)

OPTIONS:
    -t, --to <FORMAT>      Output format [default: yaml]
                           Supported: yaml, json, toml

    -o, --output <FILE>    Write output to specified file

    --check                Check if input is valid (exit 0 if valid, 1 if invalid)

    -h, --help             Print help

    -V, --version          Print version

EXAMPLES:
    # Convert a CDL file to YAML on stdout (default behavior)
    cdl config.cdl

    # Convert to a YAML file
    cdl config.cdl -o config.yaml

    # Convert CDL to JSON
    cdl -t json config.cdl

    # Convert CDL to TOML
    cdl -t toml config.cdl

    # Validate a CDL file
    cdl --check config.cdl

    # Read from stdin
    cat config.cdl | cdl -t json
"
    );
}
