use clap::Parser;
use std::fs;
use std::path::PathBuf;

use chesscloud::{
    encode,
    io_utils::{chesscloud_cli_error, io_cli_error, unsupported_input_error},
    peek_stats, FormatCode, Limits,
};

/// Encode a file into a .chesscloud container.
#[derive(Parser)]
struct Args {
    /// Input file (.txt, .json, .png or .jpg)
    input: PathBuf,
    /// Output .chesscloud path
    output: PathBuf,
    /// Print a stats summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let format = args
        .input
        .extension()
        .and_then(|s| s.to_str())
        .and_then(FormatCode::from_extension)
        .ok_or_else(|| unsupported_input_error(&args.input))?;
    let data =
        fs::read(&args.input).map_err(|e| io_cli_error("reading input file", &args.input, e))?;
    Limits::default()
        .check_payload(data.len())
        .map_err(|e| chesscloud_cli_error("refusing to encode", e))?;

    let container =
        encode(&data, format).map_err(|e| chesscloud_cli_error("encoding failed", e))?;
    fs::write(&args.output, &container)
        .map_err(|e| io_cli_error("writing output file", &args.output, e))?;

    let (_, stats, _) =
        peek_stats(&container).map_err(|e| chesscloud_cli_error("re-reading container", e))?;
    if args.json {
        let out_json = serde_json::json!({
            "input_bytes": data.len(),
            "container_bytes": container.len(),
            "sessions": stats.sessions,
            "shortest": stats.shortest,
            "longest": stats.longest,
        });
        println!("{}", serde_json::to_string_pretty(&out_json)?);
    } else {
        stats.report();
    }
    Ok(())
}
