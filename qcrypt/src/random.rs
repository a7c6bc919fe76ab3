///
/// Random Bytes Entry Point
///
/// `qcrypt_qrand(n) -> bytes` — n cryptographically secure random bytes
/// from OS entropy via `OsRng`. Entropy failure propagates as a typed
/// error; the call never returns a partially filled buffer.
///

use crate::convert::{int_atom, new_byte_vec};
use crate::error::{surface, BridgeError};
use qcrypt_core::value::QVal;
use rand::rngs::OsRng;
use rand::RngCore;

/// Upper bound on a single request, so a hostile length cannot force an
/// unbounded allocation.
pub const MAX_RANDOM_LEN: i64 = 1 << 30;

unsafe fn qrand_impl(n: *const QVal) -> Result<*mut QVal, BridgeError> {
    let n = unsafe { int_atom(n, "byte count")? };
    if n < 0 {
        return Err(BridgeError::InvalidParameter(format!(
            "byte count must be non-negative, got {}",
            n
        )));
    }
    if n > MAX_RANDOM_LEN {
        return Err(BridgeError::InvalidParameter(format!(
            "byte count {} exceeds the per-call maximum of {}",
            n, MAX_RANDOM_LEN
        )));
    }

    let mut buf = vec![0u8; n as usize];
    OsRng.try_fill_bytes(&mut buf)?;
    Ok(new_byte_vec(&buf))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_qrand(n: *const QVal) -> *mut QVal {
    surface(unsafe { qrand_impl(n) })
}
