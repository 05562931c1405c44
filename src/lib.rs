// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod trace_init;
pub mod translit;
pub mod unicode;

use std::ffi::{c_char, CStr, CString};
use std::ptr;

pub use translit::latinize;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

#[no_mangle]
pub extern "C" fn lac_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Convert a NUL-terminated UTF-8 string to its Łacinka rendering.
///
/// Returns a newly allocated NUL-terminated string that must be released
/// with [`lac_string_free`], or null when `text` is null or not valid
/// UTF-8 (the decoding boundary is the caller's concern; the converter
/// itself never fails).
#[no_mangle]
pub extern "C" fn lac_latinize(text: *const c_char) -> *mut c_char {
    let Some(text_str) = (unsafe { cptr_to_str(text) }) else {
        return ptr::null_mut();
    };

    match CString::new(latinize(text_str)) {
        Ok(converted) => converted.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn lac_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
