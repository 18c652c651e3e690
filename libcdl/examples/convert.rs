//! Parse a CDL file and print its JSON rendition.

use libcdl::{encode_json, parse};
use std::fs;

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: convert <file.cdl>");
            std::process::exit(1);
        }
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }
    };

    match parse(&content) {
        Ok(document) => println!("{}", encode_json(&document)),
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    }
}
