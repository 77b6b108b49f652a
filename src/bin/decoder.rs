use clap::Parser;
use std::fs;
use std::path::PathBuf;

use chesscloud::{
    decode,
    io_utils::{chesscloud_cli_error, extension_error, io_cli_error},
    EXTENSION,
};

/// Decode a .chesscloud container back into the original file.
#[derive(Parser)]
struct Args {
    /// Input .chesscloud file
    input: PathBuf,
    /// Output path stem; the recovered format's extension is appended
    output: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args
        .input
        .extension()
        .and_then(|s| s.to_str())
        .map_or(true, |ext| ext.to_ascii_lowercase() != EXTENSION)
    {
        return Err(extension_error(&args.input).into());
    }
    let data =
        fs::read(&args.input).map_err(|e| io_cli_error("reading input file", &args.input, e))?;
    let decoded = decode(&data).map_err(|e| chesscloud_cli_error("decoding failed", e))?;

    let mut out_path = args.output.into_os_string();
    out_path.push(format!(".{}", decoded.format.extension()));
    let out_path = PathBuf::from(out_path);
    fs::write(&out_path, &decoded.payload)
        .map_err(|e| io_cli_error("writing output file", &out_path, e))?;

    decoded.stats.report();
    Ok(())
}
