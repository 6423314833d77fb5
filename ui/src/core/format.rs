//! Formatting helpers for presenting page values.

/// Zero-pads to at least two digits (`7` -> `"07"`, `123` -> `"123"`).
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

/// Groups digits in threes with commas, as `en-US` number formatting does.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn copyright_notice(year: i32, holder: &str) -> String {
    format!("© {year} {holder}. All rights reserved.")
}
