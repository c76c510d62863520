use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wrapper for secrets (passwords) that hides its value in Debug and Display output.
///
/// Serialization writes the real value: the credential file needs it, and only
/// log macros like `tracing::info!("{:?}", record)` must be kept from leaking it.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Masked(value)
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Masked(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_value_in_debug_and_display() {
        let secret = Masked::from("hunter2");
        assert_eq!(format!("{:?}", secret), "********");
        assert_eq!(secret.to_string(), "********");
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn test_masked_serializes_plain_value() {
        let secret = Masked::from("pw,with\"quotes");
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, r#""pw,with\"quotes""#);

        let back: Masked<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, secret);
    }
}
