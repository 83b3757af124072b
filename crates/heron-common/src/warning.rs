//! Layout warnings with colored terminal output.
//!
//! The legacy flexible-box model degrades silently: unresolved selectors
//! drop their declarations, missing measurements read as zero, and a
//! single-child `box-pack: justify` divides by zero. Every such site
//! reports here instead of failing, and deduplication keeps a 250ms-style
//! re-layout loop from spamming the same message on every pass.

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a degenerate or unsupported condition (prints once per
/// unique message).
///
/// # Example
/// ```ignore
/// warn_once("Binder", "selector `.stage` matched no element; declaration dropped");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[Heron {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when loading a new document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
