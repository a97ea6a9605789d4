//! Log sanitization utilities for masking sensitive data.
//!
//! Emails are personal data and never reach the logs in full.

const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Keeps up to the first 3 characters of the local part and the domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("ana.silva@x.com"), "ana***@x.com");
/// assert_eq!(mask_email("jo@x.com"), "jo***@x.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", visible_prefix(local), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(value: &str) -> &str {
    match value.char_indices().nth(VISIBLE_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
