//! CLI error classification and process exit codes.
//!
//! Every failure the binary can hit is folded into one of four classes so
//! scripts driving `warpfield` can branch on the exit code:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: field error — the pipeline rejected the run (unknown sampler,
//!       bad grid dimensions, bad domain, bad timeline)
//! - 11: I/O error — outdir creation, PNG frame write, scene-file write
//! - 12: input error — malformed `--params` JSON, bad colormap name or
//!       band count
//! - 13: serialization error — JSON output failure

use std::fmt;
use warpfield_core::FieldError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// The pipeline rejected the run (unknown sampler, bad dimensions,
    /// bad domain, bad timeline).
    Field(FieldError),
    /// An I/O failure while writing frames or the scene file.
    Io(String),
    /// Bad user input: malformed `--params` JSON, colormap mistakes.
    Input(String),
    /// A serialization failure producing `--json` output.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Field(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Field(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<FieldError> for CliError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::Io(msg) => CliError::Io(msg),
            // A typo'd colormap name or a zero band count is a user
            // mistake, not a pipeline failure.
            FieldError::UnknownColormap(_) | FieldError::InvalidColormap(_) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Field(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
