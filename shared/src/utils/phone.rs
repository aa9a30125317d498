//! Phone number utilities for log output

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for display (e.g., 138****5678)
///
/// Numbers shorter than seven characters after normalization are fully masked.
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

/// Mask every number in a comma separated list, as accepted by batch sends
pub fn mask_phone_numbers(phones: &str) -> String {
    phones
        .split(',')
        .map(|phone| mask_phone_number(phone.trim()))
        .collect::<Vec<_>>()
        .join(",")
}
