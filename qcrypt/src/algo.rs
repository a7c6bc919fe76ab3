///
/// Digest Algorithm Dispatch
///
/// Maps caller-supplied algorithm names onto the closed set of supported
/// digests and carries the per-algorithm dispatch: output length, one-shot
/// digest and HMAC. Name lookup compares the full explicit length of the
/// supplied buffer, so a valid name followed by trailing garbage (for
/// example after an embedded zero byte) is rejected, never matched.
///

use crate::error::BridgeError;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

/// The supported digest algorithms, fixed for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgo {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgo {
    /// Resolve an algorithm name. Case-sensitive, exact byte-for-byte
    /// comparison over the whole buffer; no aliases, no partial matches.
    pub fn from_name(name: &[u8]) -> Result<Self, BridgeError> {
        match name {
            b"md5" => Ok(Self::Md5),
            b"sha1" => Ok(Self::Sha1),
            b"sha224" => Ok(Self::Sha224),
            b"sha256" => Ok(Self::Sha256),
            b"sha384" => Ok(Self::Sha384),
            b"sha512" => Ok(Self::Sha512),
            other => Err(BridgeError::UnsupportedAlgorithm(
                String::from_utf8_lossy(other).into_owned(),
            )),
        }
    }

    /// Digest output length in bytes
    pub fn output_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// One-shot digest over the whole message
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => Md5::digest(message).to_vec(),
            Self::Sha1 => Sha1::digest(message).to_vec(),
            Self::Sha224 => Sha224::digest(message).to_vec(),
            Self::Sha256 => Sha256::digest(message).to_vec(),
            Self::Sha384 => Sha384::digest(message).to_vec(),
            Self::Sha512 => Sha512::digest(message).to_vec(),
        }
    }

    /// One-shot HMAC over the whole message with the whole secret
    pub fn hmac(self, secret: &[u8], message: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => keyed::<Hmac<Md5>>(secret, message),
            Self::Sha1 => keyed::<Hmac<Sha1>>(secret, message),
            Self::Sha224 => keyed::<Hmac<Sha224>>(secret, message),
            Self::Sha256 => keyed::<Hmac<Sha256>>(secret, message),
            Self::Sha384 => keyed::<Hmac<Sha384>>(secret, message),
            Self::Sha512 => keyed::<Hmac<Sha512>>(secret, message),
        }
    }
}

fn keyed<M: Mac + KeyInit>(secret: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = <M as Mac>::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}
