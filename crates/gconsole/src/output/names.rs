//! Role name typeahead output formatting.

use serde::Serialize;

/// JSON output structure for the names command.
#[derive(Serialize)]
pub struct NamesOutput<'a> {
    pub term: &'a str,
    pub names: &'a [&'a str],
}

/// Formats matched role names as JSON.
pub fn format_names_json(term: &str, names: &[&str]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&NamesOutput { term, names })
}

/// Formats matched role names, one per line.
pub fn format_names_list(names: &[&str]) -> String {
    if names.is_empty() {
        return "No matching roles.\n".to_string();
    }
    let mut output = names.join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_list() {
        assert_eq!(format_names_list(&["admin", "observer"]), "admin\nobserver\n");
        assert_eq!(format_names_list(&[]), "No matching roles.\n");
    }

    #[test]
    fn test_format_names_json() {
        let json = format_names_json("^ad", &["admin"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["term"], "^ad");
        assert_eq!(value["names"][0], "admin");
    }
}
