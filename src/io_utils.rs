//! Error presentation for the command-line binaries.

use std::fmt;
use std::io;
use std::path::Path;

use crate::error::ChesscloudError;

/// A terminal-ready error: one finished sentence plus the underlying cause.
#[derive(Debug)]
pub struct CliError {
    msg: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    fn new(msg: String) -> Self {
        Self { msg, source: None }
    }

    fn caused_by(msg: String, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            msg,
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Wrap an I/O failure with the operation, the path, and a next step.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    use io::ErrorKind::*;
    let next_step = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    CliError::caused_by(
        format!("Error {operation} '{}': {err}. {next_step}", path.display()),
        err,
    )
}

/// The decoder and inspector only accept `.chesscloud` containers.
pub fn extension_error(path: &Path) -> CliError {
    CliError::new(format!(
        "Invalid file extension for '{}'. Expected .chesscloud. Check the input file.",
        path.display()
    ))
}

/// The encoder only accepts inputs whose extension maps to a format code.
pub fn unsupported_input_error(path: &Path) -> CliError {
    CliError::new(format!(
        "Unsupported file type for '{}'. Expected one of .txt, .json, .png, .jpg.",
        path.display()
    ))
}

/// Attach a context line and an actionable hint to a library error.
pub fn chesscloud_cli_error(context: &str, err: ChesscloudError) -> CliError {
    use ChesscloudError::*;
    let hint = match &err {
        TruncatedHeader => "Header too short. Verify the file is intact.".into(),
        UnknownFormat(code) => {
            format!("Unknown format code {code}. The file was not produced by this encoder.")
        }
        TruncatedLabelBlob => "Session record cut off. Verify the file is intact.".into(),
        InvalidLabelBlob => "Session record is not valid UTF-8. The file is corrupt.".into(),
        MissingPaddingByte => "Missing padding byte. Verify the file is intact.".into(),
        CorruptPadding(count) => format!("Padding count {count} is out of range."),
        Alignment(bits) => format!("Bitstream of {bits} bits is not byte-aligned."),
        EmptyPayload => "The payload is empty.".into(),
        OutOfRange { .. } => "Bit read out of range. This is a bug.".into(),
        UnproductiveOracle => "The move source never offers a choice. This is a bug.".into(),
        PayloadTooLarge { limit, .. } => {
            format!("Input exceeds the {limit} byte limit. Choose a smaller file.")
        }
        Io(io) => format!("{io}"),
    };
    CliError::caused_by(format!("{context}: {hint}"), err)
}
