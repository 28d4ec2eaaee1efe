use std::fmt;

pub const SEPARATOR: &str = " | ";

/// One composed status line, built fresh every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    /// Joins the override (when non-empty) and the fragments in order.
    pub fn compose<I>(override_message: &str, fragments: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut parts = Vec::new();
        if !override_message.is_empty() {
            parts.push(override_message.to_string());
        }
        parts.extend(fragments);

        Self {
            text: parts.join(SEPARATOR),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Bytes written to each subscriber.
    pub fn to_delivery_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.text.len() + 1);
        bytes.extend_from_slice(self.text.as_bytes());
        bytes.push(b'\n');
        bytes
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
