///
/// Host Value Conversion
///
/// Borrows the payload of host values as byte slices and builds result
/// values, enforcing the tag rules shared by every entry point: buffer
/// arguments must be byte or char vectors, integer arguments must be
/// integer atoms. Conversions use the value's explicit length only;
/// embedded zero bytes pass through untouched.
///

use crate::error::BridgeError;
use qcrypt_core::value::{qcrypt_bytes_new, qcrypt_chars_new, QVal, ValTag};

fn tag_name(v: *const QVal) -> &'static str {
    if v.is_null() {
        return "null value";
    }
    match unsafe { (*v).tag() } {
        ValTag::ByteVec => "byte vector",
        ValTag::CharVec => "char vector",
        ValTag::IntAtom => "int atom",
    }
}

/// Borrow a byte-like argument (byte vector or char vector) as a slice
/// covering exactly its explicit length.
pub(crate) unsafe fn byte_like<'a>(
    v: *const QVal,
    argument: &'static str,
) -> Result<&'a [u8], BridgeError> {
    let mismatch = || BridgeError::TypeMismatch {
        argument,
        expected: "a byte or char vector",
        found: tag_name(v),
    };
    if v.is_null() {
        return Err(mismatch());
    }
    unsafe {
        match (*v).tag() {
            ValTag::ByteVec | ValTag::CharVec => Ok(std::slice::from_raw_parts(
                (*v).data.as_ptr(),
                (*v).len,
            )),
            ValTag::IntAtom => Err(mismatch()),
        }
    }
}

/// Read an integer argument from an integer atom.
pub(crate) unsafe fn int_atom(
    v: *const QVal,
    argument: &'static str,
) -> Result<i64, BridgeError> {
    let mismatch = || BridgeError::TypeMismatch {
        argument,
        expected: "an int atom",
        found: tag_name(v),
    };
    if v.is_null() {
        return Err(mismatch());
    }
    unsafe {
        match (*v).tag() {
            ValTag::IntAtom => Ok((*v).int_value()),
            ValTag::ByteVec | ValTag::CharVec => Err(mismatch()),
        }
    }
}

/// Build a byte vector result owned by the host.
pub(crate) fn new_byte_vec(data: &[u8]) -> *mut QVal {
    unsafe { qcrypt_bytes_new(data.as_ptr(), data.len()) }
}

/// Build a char vector result owned by the host.
pub(crate) fn new_char_vec(text: &[u8]) -> *mut QVal {
    unsafe { qcrypt_chars_new(text.as_ptr(), text.len()) }
}
