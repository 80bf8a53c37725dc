//! Application error type.
//!
//! Every fallible operation returns `Result<T, AppError>`; `main` prints the
//! message to stderr and exits with the stored code.
//!
//! Exit codes:
//! - `2` — usage/configuration problems (bad CLI values, bad tenure table,
//!   unwritable output paths)
//! - `3` — data unavailable (neither FRED nor the local cache yielded a
//!   usable series, or the joined series is empty)
//! - `4` — render failure (drawing backend error)

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

    /// Usage/configuration error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// No data obtainable from network or cache (exit code 3).
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// Drawing primitive failure (exit code 4).
    pub fn render(message: impl Into<String>) -> Self {
        Self::new(4, message)
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
