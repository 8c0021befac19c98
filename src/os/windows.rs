//! Operating system entropy (Windows)

use std::io;

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Fills a buffer with random bytes from the system-preferred RNG.
///
/// Buffers larger than `u32::MAX` are filled in chunks.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            return Err(io::Error::other(format!(
                "BCryptGenRandom failed with status {status:#010x}"
            )));
        }
    }

    Ok(())
}
