///
/// Digest Entry Point
///
/// `qcrypt_hash(message, name) -> bytes` — one-shot digest of the whole
/// message buffer with the named algorithm. The message may be any length
/// including zero and may contain zero bytes anywhere; the digest always
/// covers exactly the buffer's explicit length.
///

use crate::algo::DigestAlgo;
use crate::convert::{byte_like, new_byte_vec};
use crate::error::{surface, BridgeError};
use qcrypt_core::value::QVal;

unsafe fn hash_impl(message: *const QVal, name: *const QVal) -> Result<*mut QVal, BridgeError> {
    unsafe {
        let message = byte_like(message, "message")?;
        let name = byte_like(name, "hash function name")?;
        let algo = DigestAlgo::from_name(name)?;
        Ok(new_byte_vec(&algo.digest(message)))
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_hash(message: *const QVal, name: *const QVal) -> *mut QVal {
    surface(unsafe { hash_impl(message, name) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use md5::Md5;
    use qcrypt_core::error as host_error;
    use qcrypt_core::value::{qcrypt_bytes_new, qcrypt_chars_new, qcrypt_int_new};
    use sha2::Digest;

    fn make_chars(data: &[u8]) -> *mut QVal {
        unsafe { qcrypt_chars_new(data.as_ptr(), data.len()) }
    }

    fn read_bytes(v: *const QVal) -> Vec<u8> {
        unsafe { (*v).as_slice().to_vec() }
    }

    unsafe fn hash_hex(message: &[u8], name: &[u8]) -> String {
        unsafe {
            let out = qcrypt_hash(make_chars(message), make_chars(name));
            assert!(!out.is_null());
            hex::encode(read_bytes(out))
        }
    }

    #[test]
    fn test_known_vectors_testtest() {
        unsafe {
            assert_eq!(hash_hex(b"testtest", b"md5"), "05a671c66aefea124cc08b76ea6d30bb");
            assert_eq!(
                hash_hex(b"testtest", b"sha1"),
                "51abb9636078defbf888d8457a7c76f85c8f114c"
            );
            assert_eq!(
                hash_hex(b"testtest", b"sha224"),
                "f617af1ca774ebbd6d23e8fe12c56d41d25a22d81e88f67c6c6ee0d4"
            );
            assert_eq!(
                hash_hex(b"testtest", b"sha256"),
                "37268335dd6931045bdcdf92623ff819a64244b53d0e746d438797349d4da578"
            );
            assert_eq!(
                hash_hex(b"testtest", b"sha384"),
                "40e1b690e9200dd972cb29f4526a1c6597eb9bbc06bd4a2650c34dd9424cbde0\
                 327d3f3d6898d8e456f91f21fb6805c6"
            );
            assert_eq!(
                hash_hex(b"testtest", b"sha512"),
                "125d6d03b32c84d492747f79cf0bf6e179d287f341384eb5d6d3197525ad6be8\
                 e6df0116032935698f99a09e265073d1d6c32c274591bf1d0a20ad67cba921bc"
            );
        }
    }

    #[test]
    fn test_empty_message() {
        unsafe {
            assert_eq!(
                hash_hex(b"", b"sha256"),
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            );
        }
    }

    #[test]
    fn test_message_with_embedded_zero_uses_full_length() {
        unsafe {
            let data = [0x70u8, 0x61, 0x00, 0x73, 0x73];
            let out = qcrypt_hash(
                qcrypt_bytes_new(data.as_ptr(), data.len()),
                make_chars(b"md5"),
            );
            // Reference digest over the same explicit-length byte sequence.
            assert_eq!(read_bytes(out), Md5::digest(data).to_vec());
            assert_ne!(read_bytes(out), Md5::digest(&data[..2]).to_vec());
        }
    }

    #[test]
    fn test_unsupported_algorithm() {
        unsafe {
            host_error::qcrypt_error_clear();
            let out = qcrypt_hash(make_chars(b"testtest"), make_chars(b"sha3"));
            assert!(out.is_null());
            assert_eq!(host_error::current_code(), host_error::ERROR_UNSUPPORTED_ALGORITHM);
            host_error::qcrypt_error_clear();
        }
    }

    #[test]
    fn test_wrong_tag_for_message() {
        unsafe {
            host_error::qcrypt_error_clear();
            let out = qcrypt_hash(qcrypt_int_new(1), make_chars(b"md5"));
            assert!(out.is_null());
            assert_eq!(host_error::current_code(), host_error::ERROR_TYPE_MISMATCH);
            host_error::qcrypt_error_clear();
        }
    }

    #[test]
    fn test_byte_vector_message_accepted() {
        unsafe {
            let out = qcrypt_hash(
                qcrypt_bytes_new(b"testtest".as_ptr(), 8),
                make_chars(b"md5"),
            );
            assert_eq!(hex::encode(read_bytes(out)), "05a671c66aefea124cc08b76ea6d30bb");
        }
    }
}
