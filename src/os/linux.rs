//! Operating system abstraction layer (Linux)
//!
//! Random bytes come from the kernel through the `getrandom` system call,
//! which reads directly from the kernel entropy pool and blocks only until
//! the pool has been initialized once at boot.

use std::io;

use libc::{EINTR, c_void, getrandom};

/// Checks that the `getrandom` system call is available.
///
/// A zero-length request touches no memory and returns `0` on any kernel
/// that implements the call. Older kernels report `ENOSYS`.
pub(crate) fn probe() -> io::Result<()> {
    let ret = unsafe { getrandom(std::ptr::null_mut(), 0, 0) };

    if ret < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// This function repeatedly calls `getrandom` until the entire buffer is
/// filled. Partial reads and `EINTR` are handled transparently. Any other
/// error is returned and the buffer content must then be discarded.
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
            if err.raw_os_error() == Some(EINTR) {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
