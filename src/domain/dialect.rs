use serde::{Deserialize, Serialize};

/// SQL syntax rules for one connection, used to drive highlighting.
///
/// Arrives from the server in the full product; the fields mirror that
/// payload so the value can cross a wire or a config file unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlDialectInfo {
    pub name: String,
    pub reserved_words: Vec<String>,
    pub single_line_comments: Vec<String>,
    pub quote_strings: Vec<char>,
    pub identifier_quote: char,
    pub script_delimiter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_server_payload() {
        let payload = r#"{
            "name": "PostgreSQL",
            "reserved_words": ["SELECT", "CREATE", "TABLE"],
            "single_line_comments": ["--"],
            "quote_strings": ["'"],
            "identifier_quote": "\"",
            "script_delimiter": ";"
        }"#;

        let dialect: SqlDialectInfo = serde_json::from_str(payload).unwrap();

        assert_eq!(dialect.name, "PostgreSQL");
        assert_eq!(dialect.identifier_quote, '"');
        assert_eq!(dialect.quote_strings, vec!['\'']);
    }
}
