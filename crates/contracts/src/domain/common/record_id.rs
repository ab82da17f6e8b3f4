use serde::{Deserialize, Serialize};

/// Opaque identifier of a record within its collection.
///
/// Assigned by the record store at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|e| format!("Invalid record id '{}': {}", s, e))
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip() {
        let id = RecordId::new(17);
        assert_eq!(RecordId::from_string(&id.as_string()), Ok(id));
        assert!(RecordId::from_string("abc").is_err());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&RecordId::new(3)).unwrap(), "3");
    }
}
