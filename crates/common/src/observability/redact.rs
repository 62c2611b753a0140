//! Credential masking for log payloads.

/// Mask a credential or address before it goes into a log payload
///
/// The output never reveals content or exact length: up to three `*`
/// (one per leading character) followed by `***`.
///
/// ```rust
/// use anamnese_common::observability::mask_secret;
///
/// assert_eq!(mask_secret("user@example.com"), "******");
/// assert_eq!(mask_secret("ab"), "*****");
/// assert_eq!(mask_secret(""), "***");
/// ```
pub fn mask_secret(value: &str) -> String {
    let visible = value.chars().take(3).count();
    let mut masked = "*".repeat(visible);
    masked.push_str("***");
    masked
}
