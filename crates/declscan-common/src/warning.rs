//! Scanner warnings with colored terminal output.
//!
//! Provides deduplication so a document full of the same broken declaration
//! reports it once. Used by the markup tokenizer and the CLI.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a diagnostic (prints once per unique component/message pair).
///
/// Returns `true` if the warning was printed, `false` if it was a duplicate.
///
/// # Example
/// ```ignore
/// warn_once("Markup", "unknown status keyword \"bogus\" in marked section");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[declscan {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Clear all recorded warnings (call when scanning a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
