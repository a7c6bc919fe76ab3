///
/// Key Derivation Entry Point
///
/// `qcrypt_pbkdf2(password, salt, iterations, dklen) -> bytes` —
/// PBKDF2-HMAC-SHA1 key stretching. The password is consumed at its full
/// explicit length, embedded zero bytes included. Non-positive iteration
/// counts and out-of-range derived lengths are rejected up front instead
/// of being handed to the primitive.
///

use crate::convert::{byte_like, int_atom, new_byte_vec};
use crate::error::{surface, BridgeError};
use hmac::Hmac;
use qcrypt_core::value::QVal;
use sha1::Sha1;

/// PBKDF2 caps the derived key at (2^32 - 1) blocks of the PRF output,
/// 20 bytes per block for HMAC-SHA1.
pub const MAX_DERIVED_LEN: u64 = (u32::MAX as u64) * 20;

unsafe fn pbkdf2_impl(
    password: *const QVal,
    salt: *const QVal,
    iterations: *const QVal,
    dklen: *const QVal,
) -> Result<*mut QVal, BridgeError> {
    unsafe {
        let password = byte_like(password, "password")?;
        let salt = byte_like(salt, "salt")?;
        let iterations = int_atom(iterations, "iteration count")?;
        let dklen = int_atom(dklen, "derived key length")?;

        if iterations <= 0 || iterations > i64::from(u32::MAX) {
            return Err(BridgeError::InvalidParameter(format!(
                "iteration count must be between 1 and {}, got {}",
                u32::MAX,
                iterations
            )));
        }
        if dklen < 0 {
            return Err(BridgeError::InvalidParameter(format!(
                "derived key length must be non-negative, got {}",
                dklen
            )));
        }
        if dklen as u64 > MAX_DERIVED_LEN {
            return Err(BridgeError::InvalidParameter(format!(
                "derived key length {} exceeds the PBKDF2-HMAC-SHA1 maximum of {}",
                dklen, MAX_DERIVED_LEN
            )));
        }

        let mut derived = vec![0u8; dklen as usize];
        pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt, iterations as u32, &mut derived)?;
        Ok(new_byte_vec(&derived))
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_pbkdf2(
    password: *const QVal,
    salt: *const QVal,
    iterations: *const QVal,
    dklen: *const QVal,
) -> *mut QVal {
    surface(unsafe { pbkdf2_impl(password, salt, iterations, dklen) })
}
