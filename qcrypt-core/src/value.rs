//!
//! Host Value Representation
//!
//! The host exchanges values with the bridge as pointers to `QVal`, a
//! reference-counted heap object with a type tag and an explicit length:
//!
//! - `ByteVec`: raw byte vector, payload in the trailing data area
//! - `CharVec`: character vector (text), payload in the trailing data area
//! - `IntAtom`: integer scalar, payload in `int_val`, length always 0
//!
//! The length recorded at allocation is the number of bytes actually
//! present. Payloads may contain zero bytes anywhere; there is no
//! terminator and no function here ever scans for one.
//!

use std::alloc::{alloc, dealloc, Layout};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Type tags for host heap values
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValTag {
    ByteVec = 0,
    CharVec = 1,
    IntAtom = 2,
}

/// Header for all heap-allocated host values
#[repr(C)]
pub struct HeapHeader {
    pub refcount: AtomicUsize,
    pub tag: ValTag,
    pub _pad: [u8; 7],
}

impl HeapHeader {
    pub fn new(tag: ValTag) -> Self {
        Self {
            refcount: AtomicUsize::new(1),
            tag,
            _pad: [0; 7],
        }
    }

    pub fn incref(&self) {
        self.refcount.fetch_add(1, Ordering::Relaxed);
    }

    pub fn decref(&self) -> bool {
        if self.refcount.fetch_sub(1, Ordering::Release) == 1 {
            std::sync::atomic::fence(Ordering::Acquire);
            true
        } else {
            false
        }
    }

    pub fn refcount(&self) -> usize {
        self.refcount.load(Ordering::Relaxed)
    }
}

/// A heap-allocated host value: tagged vector or integer atom
#[repr(C)]
pub struct QVal {
    pub header: HeapHeader,
    pub len: usize,
    pub int_val: i64,
    pub data: [u8; 0],
}

impl QVal {
    pub fn tag(&self) -> ValTag {
        self.header.tag
    }

    /// Payload of a byte or char vector, exactly `len` bytes
    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    pub fn int_value(&self) -> i64 {
        self.int_val
    }
}

fn val_layout(len: usize) -> Layout {
    Layout::from_size_align(
        std::mem::size_of::<QVal>() + len,
        std::mem::align_of::<QVal>(),
    )
    .unwrap()
}

unsafe fn val_new(tag: ValTag, data: *const u8, len: usize) -> *mut QVal {
    unsafe {
        let ptr = alloc(val_layout(len)) as *mut QVal;
        if ptr.is_null() {
            panic!("Failed to allocate host value");
        }

        (*ptr).header = HeapHeader::new(tag);
        (*ptr).len = len;
        (*ptr).int_val = 0;

        if !data.is_null() && len > 0 {
            std::ptr::copy_nonoverlapping(data, (*ptr).data.as_mut_ptr(), len);
        }

        ptr
    }
}

/// Allocate a new byte vector holding a copy of `len` bytes from `data`
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_bytes_new(data: *const u8, len: usize) -> *mut QVal {
    unsafe { val_new(ValTag::ByteVec, data, len) }
}

/// Allocate a new char vector holding a copy of `len` bytes from `data`
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_chars_new(data: *const u8, len: usize) -> *mut QVal {
    unsafe { val_new(ValTag::CharVec, data, len) }
}

/// Allocate a new integer atom
#[unsafe(no_mangle)]
pub extern "C" fn qcrypt_int_new(value: i64) -> *mut QVal {
    unsafe {
        let ptr = val_new(ValTag::IntAtom, std::ptr::null(), 0);
        (*ptr).int_val = value;
        ptr
    }
}

/// Increment the reference count of a value
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_val_incref(v: *mut QVal) {
    if !v.is_null() {
        unsafe { (*v).header.incref() }
    }
}

/// Decrement the reference count and free the value when it reaches zero
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_val_decref(v: *mut QVal) {
    if !v.is_null() {
        unsafe {
            if (*v).header.decref() {
                let len = (*v).len;
                dealloc(v as *mut u8, val_layout(len));
            }
        }
    }
}

/// Get the type tag of a value
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_val_tag(v: *const QVal) -> u8 {
    if v.is_null() {
        u8::MAX
    } else {
        unsafe { (*v).header.tag as u8 }
    }
}

/// Get the element count of a vector value (0 for atoms)
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_val_len(v: *const QVal) -> usize {
    if v.is_null() {
        0
    } else {
        unsafe { (*v).len }
    }
}

/// Get a pointer to the payload bytes of a vector value
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_val_data(v: *const QVal) -> *const u8 {
    if v.is_null() {
        std::ptr::null()
    } else {
        unsafe { (*v).data.as_ptr() }
    }
}

/// Get the payload of an integer atom
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qcrypt_val_int(v: *const QVal) -> i64 {
    if v.is_null() {
        0
    } else {
        unsafe { (*v).int_val }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_vec_creation() {
        unsafe {
            let data = [1u8, 2, 0, 4, 5];
            let v = qcrypt_bytes_new(data.as_ptr(), data.len());
            assert!(!v.is_null());
            assert_eq!((*v).tag(), ValTag::ByteVec);
            assert_eq!((*v).len, 5);
            assert_eq!((*v).as_slice(), &data);
            assert_eq!((*v).header.refcount(), 1);
            qcrypt_val_decref(v);
        }
    }

    #[test]
    fn test_char_vec_creation() {
        unsafe {
            let v = qcrypt_chars_new(b"sha256".as_ptr(), 6);
            assert_eq!((*v).tag(), ValTag::CharVec);
            assert_eq!((*v).as_slice(), b"sha256");
            qcrypt_val_decref(v);
        }
    }

    #[test]
    fn test_zero_length_vec() {
        unsafe {
            let v = qcrypt_bytes_new(std::ptr::null(), 0);
            assert_eq!((*v).len, 0);
            assert_eq!((*v).as_slice(), b"");
            qcrypt_val_decref(v);
        }
    }

    #[test]
    fn test_int_atom() {
        unsafe {
            let v = qcrypt_int_new(-42);
            assert_eq!((*v).tag(), ValTag::IntAtom);
            assert_eq!((*v).int_value(), -42);
            assert_eq!(qcrypt_val_int(v), -42);
            assert_eq!((*v).len, 0);
            qcrypt_val_decref(v);
        }
    }

    #[test]
    fn test_refcounting() {
        unsafe {
            let v = qcrypt_bytes_new(b"x".as_ptr(), 1);
            qcrypt_val_incref(v);
            assert_eq!((*v).header.refcount(), 2);
            qcrypt_val_decref(v);
            assert_eq!((*v).header.refcount(), 1);
            qcrypt_val_decref(v);
        }
    }

    #[test]
    fn test_embedded_zero_preserved() {
        unsafe {
            let data = [0x70u8, 0x61, 0x00, 0x73, 0x73];
            let v = qcrypt_bytes_new(data.as_ptr(), data.len());
            assert_eq!(qcrypt_val_len(v), 5);
            let slice = std::slice::from_raw_parts(qcrypt_val_data(v), qcrypt_val_len(v));
            assert_eq!(slice, &data);
            qcrypt_val_decref(v);
        }
    }
}
