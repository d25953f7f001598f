//! C-ABI Foreign Function Interface for pastex.
//!
//! Lets a host editor (or any language with C FFI support) call the cleaner
//! and the LaTeX converter directly. The host stays responsible for reading
//! the clipboard and inserting the result.
//!
//! # Memory Management
//!
//! All strings returned by this library must be freed using `pastex_free_string`.
//!
//! # Error Handling
//!
//! Functions that can fail return a null pointer on error. Use `pastex_last_error`
//! to retrieve the error message.
//!
//! # Example (C)
//!
//! ```c
//! #include <stdio.h>
//! #include "pastex.h"
//!
//! int main() {
//!     char* latex = pastex_to_latex("x2", "x<sup>2</sup>", NULL);
//!     if (!latex) {
//!         fprintf(stderr, "Error: %s\n", pastex_last_error());
//!         return 1;
//!     }
//!     printf("$%s$\n", latex);
//!     pastex_free_string(latex);
//!     return 0;
//! }
//! ```

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CStr, CString};
use std::panic::catch_unwind;
use std::ptr;

use crate::bundle::ClipboardBundle;
use crate::config::CleanerConfig;

// Thread-local storage for the last error message.
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Reads an optional UTF-8 C string. Null maps to `None`.
unsafe fn optional_str<'a>(s: *const c_char) -> Result<Option<&'a str>, String> {
    if s.is_null() {
        return Ok(None);
    }
    CStr::from_ptr(s)
        .to_str()
        .map(Some)
        .map_err(|e| format!("invalid UTF-8: {e}"))
}

/// Hands an owned string to the caller, or records an error.
fn into_raw_string(result: std::thread::Result<Result<String, String>>, what: &str) -> *mut c_char {
    match result {
        Ok(Ok(output)) => match CString::new(output) {
            Ok(s) => s.into_raw(),
            Err(_) => {
                set_last_error("output contains null byte");
                ptr::null_mut()
            }
        },
        Ok(Err(e)) => {
            set_last_error(&e);
            ptr::null_mut()
        }
        Err(_) => {
            set_last_error(&format!("panic occurred during {what}"));
            ptr::null_mut()
        }
    }
}

/// Get the version of the library.
///
/// # Safety
///
/// Returns a static string that must not be freed.
#[no_mangle]
pub extern "C" fn pastex_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

/// Get the last error message.
///
/// # Safety
///
/// Returns a pointer to a thread-local error string. The pointer is valid until
/// the next call to any pastex function on the same thread.
#[no_mangle]
pub extern "C" fn pastex_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Clean clipboard text for pasting as body text.
///
/// # Safety
///
/// - `text` must be a valid null-terminated UTF-8 string.
/// - `merge_hyphenated_words` is treated as a boolean (0 = false).
/// - Returns null on error. Use `pastex_last_error` to get the error message.
/// - The returned string must be freed with `pastex_free_string`.
#[no_mangle]
pub unsafe extern "C" fn pastex_clean(
    text: *const c_char,
    merge_hyphenated_words: c_int,
) -> *mut c_char {
    clear_last_error();

    if text.is_null() {
        set_last_error("text is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(|| {
        let text = optional_str(text)?.unwrap_or_default();
        let config = CleanerConfig::new().with_merge_hyphenated_words(merge_hyphenated_words != 0);
        Ok(crate::cleaner::clean(text, &config))
    });

    into_raw_string(result, "cleaning")
}

/// Convert clipboard representations to a LaTeX fragment (without `$` delimiters).
///
/// # Safety
///
/// - `text` must be a valid null-terminated UTF-8 string.
/// - `html` and `mathml` may be null, meaning the representation was not offered.
///   Otherwise they must be valid null-terminated UTF-8 strings.
/// - Returns null on error. Use `pastex_last_error` to get the error message.
/// - The returned string must be freed with `pastex_free_string`.
#[no_mangle]
pub unsafe extern "C" fn pastex_to_latex(
    text: *const c_char,
    html: *const c_char,
    mathml: *const c_char,
) -> *mut c_char {
    clear_last_error();

    if text.is_null() {
        set_last_error("text is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(|| {
        let bundle = ClipboardBundle {
            text: optional_str(text)?.unwrap_or_default().to_string(),
            html: optional_str(html)?.map(str::to_string),
            math_ml: optional_str(mathml)?.map(str::to_string),
        };
        Ok(crate::latex::convert_to_latex(&bundle))
    });

    into_raw_string(result, "conversion")
}

/// Replace Unicode math symbols with LaTeX macros.
///
/// # Safety
///
/// - `text` must be a valid null-terminated UTF-8 string.
/// - Returns null on error. Use `pastex_last_error` to get the error message.
/// - The returned string must be freed with `pastex_free_string`.
#[no_mangle]
pub unsafe extern "C" fn pastex_substitute_symbols(text: *const c_char) -> *mut c_char {
    clear_last_error();

    if text.is_null() {
        set_last_error("text is null");
        return ptr::null_mut();
    }

    let result = catch_unwind(|| {
        let text = optional_str(text)?.unwrap_or_default();
        Ok(crate::latex::substitute_symbols(text))
    });

    into_raw_string(result, "substitution")
}

/// Free a string returned by pastex.
///
/// # Safety
///
/// - `s` must be a pointer returned by a pastex function, or null.
#[no_mangle]
pub unsafe extern "C" fn pastex_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}
