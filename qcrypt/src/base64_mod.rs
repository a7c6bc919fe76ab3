///
/// Base64 Entry Points
///
/// `qcrypt_b64e(bytes) -> string` — standard-alphabet base64 with padding
/// and no line wrapping.
/// `qcrypt_b64d(string) -> bytes` — strict decode; the output length is
/// the codec's reported length, so trailing zero bytes in the decoded
/// data survive intact. Malformed input is a typed decode error.
///

use crate::convert::{byte_like, new_byte_vec, new_char_vec};
use crate::error::{surface, BridgeError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use qcrypt_core::value::QVal;

unsafe fn b64e_impl(input: *const QVal) -> Result<*mut QVal, BridgeError> {
    let data = unsafe { byte_like(input, "input")? };
    Ok(new_char_vec(STANDARD.encode(data).as_bytes()))
}

unsafe fn b64d_impl(input: *const QVal) -> Result<*mut QVal, BridgeError> {
    let text = unsafe { byte_like(input, "base64 input")? };
    let decoded = STANDARD.decode(text)?;
    Ok(new_byte_vec(&decoded))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_b64e(input: *const QVal) -> *mut QVal {
    surface(unsafe { b64e_impl(input) })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_b64d(input: *const QVal) -> *mut QVal {
    surface(unsafe { b64d_impl(input) })
}
