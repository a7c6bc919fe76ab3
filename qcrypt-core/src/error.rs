//!
//! Error Channel
//!
//! Thread-local storage for the typed error an entry point raises when it
//! returns null. The host checks for a pending error after each call,
//! reads the code and message, and clears the channel once handled.
//!
//! Error codes:
//! - 1: TypeMismatch
//! - 2: UnsupportedAlgorithm
//! - 3: InvalidParameter
//! - 4: RandomSourceFailure
//! - 5: DerivationFailure
//! - 6: DecodeError
//!

use std::cell::{Cell, RefCell};

thread_local! {
    static CURRENT_ERROR_CODE: Cell<i64> = const { Cell::new(0) };
    static CURRENT_ERROR_MESSAGE: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Error codes for bridge failures
pub const ERROR_NONE: i64 = 0;
pub const ERROR_TYPE_MISMATCH: i64 = 1;
pub const ERROR_UNSUPPORTED_ALGORITHM: i64 = 2;
pub const ERROR_INVALID_PARAMETER: i64 = 3;
pub const ERROR_RANDOM_SOURCE: i64 = 4;
pub const ERROR_DERIVATION: i64 = 5;
pub const ERROR_DECODE: i64 = 6;

/// Record a pending error (called by bridge entry points on failure)
pub fn raise(code: i64, message: &str) {
    CURRENT_ERROR_CODE.with(|c| c.set(code));
    CURRENT_ERROR_MESSAGE.with(|m| {
        let mut m = m.borrow_mut();
        m.clear();
        m.push_str(message);
    });
}

/// Get the pending error code without clearing it (for tests and hosts)
pub fn current_code() -> i64 {
    CURRENT_ERROR_CODE.with(|c| c.get())
}

/// Get a copy of the pending error message
pub fn current_message() -> String {
    CURRENT_ERROR_MESSAGE.with(|m| m.borrow().clone())
}

/// Check if there is a pending error
#[unsafe(no_mangle)]
pub extern "C" fn qcrypt_error_check() -> i64 {
    if current_code() == ERROR_NONE { 0 } else { 1 }
}

/// Get the pending error code (0 if none)
#[unsafe(no_mangle)]
pub extern "C" fn qcrypt_error_code() -> i64 {
    current_code()
}

/// Get the pending error message.
///
/// Writes the message length to `out_len` and returns a pointer to the
/// message bytes, valid until the next raise or clear on this thread.
/// Returns null with length 0 when no error is pending.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_error_message(out_len: *mut usize) -> *const u8 {
    if current_code() == ERROR_NONE {
        if !out_len.is_null() {
            unsafe { *out_len = 0 }
        }
        return std::ptr::null();
    }
    CURRENT_ERROR_MESSAGE.with(|m| {
        let m = m.borrow();
        if !out_len.is_null() {
            unsafe { *out_len = m.len() }
        }
        m.as_ptr()
    })
}

/// Clear the pending error (called by the host after handling it)
#[unsafe(no_mangle)]
pub extern "C" fn qcrypt_error_clear() {
    CURRENT_ERROR_CODE.with(|c| c.set(ERROR_NONE));
    CURRENT_ERROR_MESSAGE.with(|m| m.borrow_mut().clear());
}
