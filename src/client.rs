//! Caller-side view of the C boundary: a prediction buffer is acquired,
//! decoded, and released on every exit path by `Drop`.

use crate::ffi;
use crate::scorer::Prediction;
use std::ffi::{c_char, CStr, CString};
use tracing::warn;

/// Release function matching [`ffi::swipe_engine_free_string`].
pub type ReleaseFn = unsafe extern "C" fn(*mut c_char);

pub struct PredictionBuffer {
    ptr: *mut c_char,
    release: ReleaseFn,
}

impl PredictionBuffer {
    /// Takes ownership of a callee-allocated buffer. Returns `None` for null.
    ///
    /// # Safety
    /// `ptr` must be a live buffer that `release` accepts, and nothing else may
    /// release it afterwards.
    pub unsafe fn from_raw(ptr: *mut c_char, release: ReleaseFn) -> Option<Self> {
        if ptr.is_null() {
            None
        } else {
            Some(Self { ptr, release })
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        // SAFETY: non-null and owned by `self` until drop.
        unsafe { CStr::from_ptr(self.ptr) }.to_str().ok()
    }

    /// Deserialises the buffer; malformed content degrades to an empty list.
    pub fn decode(&self) -> Vec<Prediction> {
        let Some(json) = self.as_str() else {
            warn!("prediction buffer is not valid UTF-8");
            return Vec::new();
        };
        serde_json::from_str(json).unwrap_or_else(|e| {
            warn!("prediction buffer is not a prediction list: {}", e);
            Vec::new()
        })
    }
}

impl Drop for PredictionBuffer {
    fn drop(&mut self) {
        // SAFETY: `from_raw` made this the sole owner.
        unsafe { (self.release)(self.ptr) }
    }
}

/// Loads a dictionary through the boundary, returning the raw result code.
pub fn load_dictionary(path: &str) -> i32 {
    match CString::new(path) {
        // SAFETY: `c_path` is a valid NUL-terminated string for the call.
        Ok(c_path) => unsafe { ffi::swipe_engine_load_dictionary(c_path.as_ptr()) },
        Err(_) => crate::error::LoadError::CODE_EMPTY_INPUT,
    }
}

/// Predicts through the boundary and returns decoded results.
pub fn predict(trace: &str, limit: i32) -> Vec<Prediction> {
    let Ok(c_trace) = CString::new(trace) else {
        return Vec::new();
    };
    // SAFETY: `c_trace` outlives the call; the returned pointer comes from the
    // engine and is released exactly once by `PredictionBuffer`.
    let buffer = unsafe {
        let raw = ffi::swipe_engine_predict(c_trace.as_ptr(), limit);
        PredictionBuffer::from_raw(raw, ffi::swipe_engine_free_string)
    };
    buffer.map(|b| b.decode()).unwrap_or_default()
}
