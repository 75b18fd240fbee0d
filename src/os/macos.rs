use std::io;

use libc::arc4random_buf;

// arc4random is always available and cannot fail.
pub(crate) fn probe() -> io::Result<()> {
    Ok(())
}

pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
