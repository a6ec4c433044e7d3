//! Adapter for a foreign C `cn_slow_hash`
//!
//! Applications that link the reference CryptoNote implementation can
//! inject it as a [`SlowHash`] without this crate depending on it.

use core::ffi::{c_char, c_int, c_void};

use crate::params::DIGEST_SIZE;
use crate::primitive::{SlowHash, SlowHashInput};

/// C signature of the reference `cn_slow_hash`
///
/// ```c
/// void cn_slow_hash(const void *data, size_t length, char *hash,
///                   int variant, int prehashed, uint64_t height);
/// ```
pub type CnSlowHashFn = unsafe extern "C" fn(
    data: *const c_void,
    length: usize,
    hash: *mut c_char,
    variant: c_int,
    prehashed: c_int,
    height: u64,
);

/// Foreign slow hash handle
#[derive(Clone, Copy)]
pub struct ExternSlowHash {
    func: CnSlowHashFn,
}

impl ExternSlowHash {
    /// Wrap a foreign `cn_slow_hash`
    ///
    /// # Safety
    ///
    /// `func` must read exactly `length` bytes from `data`, write exactly 32
    /// bytes to `hash`, and be safe to call from several threads at once
    /// (no shared scratchpad). It is only ever called with a
    /// [`SlowHashInput`]: at least 43 bytes, `prehashed = 0`, and height 0
    /// unless the variant is 4.
    pub unsafe fn new(func: CnSlowHashFn) -> Self {
        Self { func }
    }
}

impl SlowHash for ExternSlowHash {
    fn slow_hash(&self, input: &SlowHashInput<'_>) -> [u8; DIGEST_SIZE] {
        let bytes = input.as_bytes();
        let mut output = [0u8; DIGEST_SIZE];

        // SAFETY: upheld by the contract of `ExternSlowHash::new`; `input`
        // is length-checked by construction and the output buffer is
        // exactly DIGEST_SIZE bytes.
        unsafe {
            (self.func)(
                bytes.as_ptr() as *const c_void,
                bytes.len(),
                output.as_mut_ptr() as *mut c_char,
                input.variant().code() as c_int,
                input.prehashed() as c_int,
                input.height(),
            );
        }

        output
    }
}

impl core::fmt::Debug for ExternSlowHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExternSlowHash")
            .field("func", &(self.func as *const c_void))
            .finish()
    }
}
