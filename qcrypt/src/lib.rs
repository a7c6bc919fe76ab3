///
/// qcrypt - Cryptographic Bridge
///
/// Exposes a small set of cryptographic primitives to an embedding host
/// runtime over tagged `QVal` values:
///
/// - `qcrypt_hash(message, name) -> bytes` — MD5/SHA-1/SHA-224/SHA-256/SHA-384/SHA-512 digest
/// - `qcrypt_hmac(secret, message, name) -> bytes` — HMAC over the same digest family
/// - `qcrypt_pbkdf2(password, salt, iterations, dklen) -> bytes` — PBKDF2-HMAC-SHA1
/// - `qcrypt_qrand(n) -> bytes` — n cryptographically secure random bytes
/// - `qcrypt_b64e(bytes) -> string` / `qcrypt_b64d(string) -> bytes` — base64 codec
///
/// Every entry point validates argument tags, copies exactly the explicit
/// length of each input buffer (embedded zero bytes never truncate), and
/// on failure returns null after raising a typed error on the qcrypt-core
/// error channel. No partial results are ever returned.
///

pub mod algo;
pub mod base64_mod;
pub mod convert;
pub mod error;
pub mod hash;
pub mod hmac_mod;
pub mod kdf;
pub mod random;

pub use base64_mod::*;
pub use hash::*;
pub use hmac_mod::*;
pub use kdf::*;
pub use random::*;
