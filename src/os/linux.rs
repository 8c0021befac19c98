//! Operating system entropy (Linux)
//!
//! On Linux, `getrandom` provides direct access to the kernel entropy pool
//! and is suitable for cryptographic seeding.

use std::io;

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Repeatedly calls `getrandom` until the entire buffer is filled. Partial
/// reads and `EINTR` interruptions are handled transparently.
///
/// # Errors
/// Returns the OS error if `getrandom` fails for any other reason (for
/// example `ENOSYS` on kernels without the system call).
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();

            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }

            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
