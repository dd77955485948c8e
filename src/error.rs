//! Application-level error carrying the process exit code.
//!
//! Library code returns the typed errors of its module (`LoadError`,
//! `CurveError`); they are converted here at the binary boundary.
//!
//! Exit codes:
//! - 2: usage, configuration or local file problems
//! - 3: nothing to display (no data, too few points)
//! - 4: network or terminal failures

use crate::data::LoadError;
use crate::fit::CurveError;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        let exit_code = match &err {
            LoadError::UnknownCountry(_) | LoadError::Config(_) => 2,
            LoadError::DataUnavailable { .. } => 3,
            LoadError::Http(_) | LoadError::Server { .. } | LoadError::Decode(_) => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl From<CurveError> for AppError {
    fn from(err: CurveError) -> Self {
        AppError::new(3, err.to_string())
    }
}
