//! C boundary over one process-wide engine instance.
//!
//! Strings returned by [`swipe_engine_predict`] are owned by the caller and
//! must be handed back exactly once to [`swipe_engine_free_string`].

use crate::engine::SwipeEngine;
use crate::error::LoadError;
use crate::ranker::clamp_limit;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::OnceLock;
use tracing::error;

static ENGINE: OnceLock<SwipeEngine> = OnceLock::new();

fn engine() -> &'static SwipeEngine {
    ENGINE.get_or_init(SwipeEngine::new)
}

/// Borrows a NUL-terminated UTF-8 argument; `None` for null or invalid UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn read_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

fn load_code(result: Result<usize, LoadError>) -> i32 {
    match result {
        Ok(count) => i32::try_from(count).unwrap_or(i32::MAX),
        Err(e) => e.code(),
    }
}

fn into_c_json(json: String) -> *mut c_char {
    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(_) => CString::new("[]").map_or(ptr::null_mut(), CString::into_raw),
    }
}

/// Loads a dictionary file. Returns the entry count, or a code `<= 0`:
/// `-1` not found, `-2` unreadable, `0` no valid entries, `-3` empty input.
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn swipe_engine_load_dictionary(path: *const c_char) -> i32 {
    let path = match read_arg(path) {
        Some(p) if !p.is_empty() => p,
        _ => return LoadError::CODE_EMPTY_INPUT,
    };
    catch_unwind(AssertUnwindSafe(|| load_code(engine().load(path)))).unwrap_or_else(|_| {
        error!("panic while loading dictionary");
        LoadError::CODE_PARSE_FAILURE
    })
}

/// Loads a dictionary from in-memory text. Same result codes as
/// [`swipe_engine_load_dictionary`].
///
/// # Safety
/// `content` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn swipe_engine_load_dictionary_str(content: *const c_char) -> i32 {
    let content = match read_arg(content) {
        Some(c) if !c.is_empty() => c,
        _ => return LoadError::CODE_EMPTY_INPUT,
    };
    catch_unwind(AssertUnwindSafe(|| load_code(engine().load_str(content)))).unwrap_or_else(|_| {
        error!("panic while loading dictionary text");
        LoadError::CODE_PARSE_FAILURE
    })
}

#[no_mangle]
pub extern "C" fn swipe_engine_word_count() -> i32 {
    i32::try_from(engine().word_count()).unwrap_or(i32::MAX)
}

/// Predicts from a letter trace. Always returns a JSON array (possibly `[]`);
/// the caller must release it with [`swipe_engine_free_string`].
///
/// # Safety
/// `input` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn swipe_engine_predict(input: *const c_char, limit: i32) -> *mut c_char {
    let trace = read_arg(input).unwrap_or("");
    let limit = clamp_limit(limit as i64);
    let json = catch_unwind(AssertUnwindSafe(|| engine().predict_json(trace, limit)))
        .unwrap_or_else(|_| {
            error!("panic while predicting");
            "[]".to_string()
        });
    into_c_json(json)
}

/// Releases a string returned by [`swipe_engine_predict`]. Null is ignored.
///
/// # Safety
/// `s` must be null or a pointer obtained from [`swipe_engine_predict`] that
/// has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn swipe_engine_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Sets how much word frequency weighs in the final score (0.0 to 1.0).
#[no_mangle]
pub extern "C" fn swipe_engine_set_pop_weight(weight: f64) {
    engine().set_popularity_weight(weight);
}
