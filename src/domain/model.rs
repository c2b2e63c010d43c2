use serde::{Deserialize, Serialize};

/// One (name, year-of-birth) pair from the lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub year_of_birth: String,
}

impl Record {
    pub fn new(name: impl Into<String>, year_of_birth: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            year_of_birth: year_of_birth.into(),
        }
    }

    /// Name compared case-insensitively, year of birth compared as an exact string.
    pub fn matches(&self, name_lower: &str, year_of_birth: &str) -> bool {
        self.year_of_birth == year_of_birth && self.name.to_lowercase() == name_lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_matches() {
        let record = Record::new("Alice", "1990");
        assert!(record.matches("alice", "1990"));
        assert!(!record.matches("alice", "90"));
        assert!(!record.matches("alice", " 1990"));
        assert!(!record.matches("bob", "1990"));
    }
}
