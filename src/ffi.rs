//! C ABI for host bridges (JNI shims, Swift, plain C).
//!
//! Every export borrows the caller's buffers for the duration of the call
//! only. Status-returning exports use the `POSESCORE_*` codes below.

use std::ffi::{CStr, c_char};
use std::slice;

use tracing::warn;

use crate::bridge;
use crate::error::PoseError;
use crate::score::score_angles;
use crate::skeleton::extract::extract_angles_xy;

pub const POSESCORE_OK: i32 = 0;
pub const POSESCORE_INVALID_LENGTH: i32 = 1;
pub const POSESCORE_NULL_POINTER: i32 = 2;
pub const POSESCORE_ERROR: i32 = 3;

static GREETING: &CStr = c"Hello from Rust";

fn status_of(err: &PoseError) -> i32 {
    match err {
        PoseError::InvalidLength { .. } => POSESCORE_INVALID_LENGTH,
        PoseError::NullPointer { .. } => POSESCORE_NULL_POINTER,
        _ => POSESCORE_ERROR,
    }
}

/// # Safety
/// `ptr` must be null or valid for reads of `len` floats for `'a`.
unsafe fn borrow<'a>(
    ptr: *const f32,
    len: usize,
    what: &'static str,
) -> Result<&'a [f32], PoseError> {
    if ptr.is_null() {
        return Err(PoseError::NullPointer { what });
    }
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

/// # Safety
/// `ptr` must be null or valid for writes of `len` floats for `'a`, and must
/// not overlap any other buffer passed in the same call.
unsafe fn borrow_mut<'a>(
    ptr: *mut f32,
    len: usize,
    what: &'static str,
) -> Result<&'a mut [f32], PoseError> {
    if ptr.is_null() {
        return Err(PoseError::NullPointer { what });
    }
    Ok(unsafe { slice::from_raw_parts_mut(ptr, len) })
}

#[unsafe(no_mangle)]
pub extern "C" fn posescore_sum(a: i32, b: i32) -> i32 {
    bridge::sum(a, b)
}

/// Static NUL-terminated string; the caller must not free it.
#[unsafe(no_mangle)]
pub extern "C" fn posescore_greeting() -> *const c_char {
    GREETING.as_ptr()
}

/// Writes the 10 native joint angles for the 15 keypoints in `x`/`y` into `out`.
///
/// `out` is left untouched unless the call returns `POSESCORE_OK`.
///
/// # Safety
/// Each pointer must be null or valid for `*_len` floats; `out` must be
/// writable and must not overlap `x` or `y`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn posescore_extract_angles(
    x: *const f32,
    x_len: usize,
    y: *const f32,
    y_len: usize,
    out: *mut f32,
    out_len: usize,
) -> i32 {
    let result = unsafe {
        borrow(x, x_len, "x").and_then(|x| {
            let y = borrow(y, y_len, "y")?;
            let out = borrow_mut(out, out_len, "out")?;
            extract_angles_xy(x, y, out)
        })
    };
    match result {
        Ok(()) => POSESCORE_OK,
        Err(err) => {
            warn!(%err, "posescore_extract_angles rejected input");
            status_of(&err)
        }
    }
}

/// Mean native similarity of two 10-angle vectors; 0.0 on any invalid input.
///
/// # Safety
/// Each pointer must be null or valid for reads of its `*_len` floats.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn posescore_get_score(
    reference: *const f32,
    reference_len: usize,
    candidate: *const f32,
    candidate_len: usize,
) -> f32 {
    let inputs = unsafe {
        borrow(reference, reference_len, "reference")
            .and_then(|r| Ok((r, borrow(candidate, candidate_len, "candidate")?)))
    };
    match inputs {
        Ok((r, c)) => bridge::get_score(r, c),
        Err(err) => {
            warn!(%err, "posescore_get_score defaulted to 0.0");
            0.0
        }
    }
}

/// Explicit-status form of [`posescore_get_score`]. `out_score` is written
/// only on `POSESCORE_OK`.
///
/// # Safety
/// As for [`posescore_get_score`]; `out_score` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn posescore_score_status(
    reference: *const f32,
    reference_len: usize,
    candidate: *const f32,
    candidate_len: usize,
    out_score: *mut f32,
) -> i32 {
    if out_score.is_null() {
        return POSESCORE_NULL_POINTER;
    }
    let result = unsafe {
        borrow(reference, reference_len, "reference").and_then(|r| {
            let c = borrow(candidate, candidate_len, "candidate")?;
            score_angles(r, c)
        })
    };
    match result {
        Ok(score) => {
            unsafe { *out_score = score };
            POSESCORE_OK
        }
        Err(err) => status_of(&err),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/ffi/tests.rs"]
mod tests;
