//! CLI exit codes.
//!
//! Invariants:
//! - Missing credentials (the only fatal path) exits with code 1.
//! - A completed run exits 0 regardless of verification outcome; the
//!   printed report carries the verdict.

/// Structured exit codes for dd-log-verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the verification run completed.
    Success = 0,

    /// General error - missing credentials or client construction failure.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
