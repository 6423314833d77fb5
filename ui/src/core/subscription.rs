//! Email capture for launch updates. Submissions are only simulated; nothing
//! is persisted or sent anywhere.

/// Supporter count shown before anyone subscribes in this session.
pub const INITIAL_SUPPORTERS: u64 = 1247;

/// Trim `raw`, or `None` when nothing is left.
pub fn normalize_email(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Text held by the form's single email input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailField {
    value: String,
}

impl EmailField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
    }

    /// Take the trimmed address and clear the field. An empty field is left
    /// untouched and yields `None`.
    pub fn submit(&mut self) -> Option<String> {
        let email = normalize_email(&self.value)?.to_string();
        self.value.clear();
        Some(email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupporterTally {
    count: u64,
}

impl SupporterTally {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Count one more supporter and return their number.
    pub fn record(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }
}

impl Default for SupporterTally {
    fn default() -> Self {
        Self::new(INITIAL_SUPPORTERS)
    }
}

pub fn thank_you_message(email: &str, subscriber_number: u64) -> String {
    format!(
        "Thank you! We'll keep you posted at {email}. You're subscriber #{subscriber_number}"
    )
}
