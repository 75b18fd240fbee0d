use std::io;

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

// The system-preferred RNG needs no algorithm handle to open.
pub(crate) fn probe() -> io::Result<()> {
    Ok(())
}

pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    // BCryptGenRandom takes a u32 length.
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
                "BCryptGenRandom failed with status {status:#x}"
            )));
        }
    }

    Ok(())
}
