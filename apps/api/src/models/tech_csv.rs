//! Technology lists travel as `", "`-joined text on the wire and stay a list
//! everywhere else (`TEXT[]` in Postgres, `Vec<String>` in Rust).

use serde::{Deserialize, Deserializer, Serializer};

/// Splits `"React.js, CSS3"` into trimmed entries. Empty input gives an empty list.
pub fn split(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn serialize<S: Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&items.join(", "))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(split(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_skips_blanks() {
        assert_eq!(
            split("React.js, CSS3,Responsive Design, "),
            vec!["React.js", "CSS3", "Responsive Design"]
        );
        assert!(split("").is_empty());
    }
}
