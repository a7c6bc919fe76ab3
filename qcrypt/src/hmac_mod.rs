///
/// HMAC Entry Point
///
/// `qcrypt_hmac(secret, message, name) -> bytes` — keyed digest of the
/// message under the secret with the named algorithm. Both the secret and
/// the message are consumed at their full explicit length; a secret with
/// an embedded zero byte is never silently truncated.
///

use crate::algo::DigestAlgo;
use crate::convert::{byte_like, new_byte_vec};
use crate::error::{surface, BridgeError};
use qcrypt_core::value::QVal;

unsafe fn hmac_impl(
    secret: *const QVal,
    message: *const QVal,
    name: *const QVal,
) -> Result<*mut QVal, BridgeError> {
    unsafe {
        let secret = byte_like(secret, "secret")?;
        let message = byte_like(message, "message")?;
        let name = byte_like(name, "hash function name")?;
        let algo = DigestAlgo::from_name(name)?;
        Ok(new_byte_vec(&algo.hmac(secret, message)))
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_hmac(
    secret: *const QVal,
    message: *const QVal,
    name: *const QVal,
) -> *mut QVal {
    surface(unsafe { hmac_impl(secret, message, name) })
}
