use std::{env, process};

use inidoc::{Ini, ParseOptions};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: inidoc <path> [--raw]");
        process::exit(2);
    };
    let raw = args.any(|arg| arg == "--raw");

    let options = ParseOptions::default().with_quotes(!raw);
    let ini = match Ini::open_with(&path, options) {
        Ok(ini) => ini,
        Err(err) => {
            eprintln!("error: {path}: {err}");
            if let Some(source) = std::error::Error::source(&err) {
                eprintln!("  caused by: {source}");
            }
            process::exit(1);
        }
    };

    match ini.document() {
        Ok(document) => print!("{document}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
