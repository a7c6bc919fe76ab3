///
/// Bridge Error Type
///
/// Internal typed error for the bridge entry points. Each variant maps to
/// a stable code on the qcrypt-core error channel; `surface` converts a
/// `Result` into the C-ABI convention of null-plus-raised-error.
///

use qcrypt_core::error as host_error;
use qcrypt_core::value::QVal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("wrong type for {argument}: expected {expected}, found {found}")]
    TypeMismatch {
        argument: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unsupported hash function: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("{0}")]
    InvalidParameter(String),

    #[error("random source failure: {0}")]
    RandomSource(#[from] rand::Error),

    #[error("key derivation failed: {0}")]
    Derivation(#[from] hmac::digest::InvalidLength),

    #[error("invalid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl BridgeError {
    pub fn code(&self) -> i64 {
        match self {
            Self::TypeMismatch { .. } => host_error::ERROR_TYPE_MISMATCH,
            Self::UnsupportedAlgorithm(_) => host_error::ERROR_UNSUPPORTED_ALGORITHM,
            Self::InvalidParameter(_) => host_error::ERROR_INVALID_PARAMETER,
            Self::RandomSource(_) => host_error::ERROR_RANDOM_SOURCE,
            Self::Derivation(_) => host_error::ERROR_DERIVATION,
            Self::Decode(_) => host_error::ERROR_DECODE,
        }
    }

    /// Record this error on the host error channel
    pub fn report(&self) {
        host_error::raise(self.code(), &self.to_string());
    }
}

/// Convert an entry point result into the C-ABI return convention:
/// the value on success, null with a raised error on failure.
pub(crate) fn surface(result: Result<*mut QVal, BridgeError>) -> *mut QVal {
    match result {
        Ok(v) => v,
        Err(e) => {
            e.report();
            std::ptr::null_mut()
        }
    }
}
