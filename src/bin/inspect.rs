use clap::Parser;
use std::fs;
use std::path::PathBuf;

use chesscloud::{
    io_utils::{chesscloud_cli_error, extension_error, io_cli_error},
    peek_stats, EXTENSION,
};

/// Print the metadata of a .chesscloud container as JSON without decoding
/// the payload.
#[derive(Parser)]
struct Args {
    /// Input .chesscloud file
    input: PathBuf,
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
    let (format, stats, padding) =
        peek_stats(&data).map_err(|e| chesscloud_cli_error("reading metadata", e))?;

    let out_json = serde_json::json!({
        "format": format.extension(),
        "sessions": stats.sessions,
        "shortest": stats.shortest,
        "longest": stats.longest,
        "shortest_session_moves": stats.shortest_labels,
        "padding_bits": padding,
    });
    println!("{}", serde_json::to_string_pretty(&out_json)?);
    Ok(())
}
