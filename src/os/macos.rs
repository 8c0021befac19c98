//! Operating system entropy (macOS)

use std::io;

use libc::{arc4random_buf, c_void};

/// Fills a buffer with random bytes from `arc4random_buf`.
///
/// The call cannot fail, so this always returns `Ok`.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut c_void, buf.len());
    }

    Ok(())
}
