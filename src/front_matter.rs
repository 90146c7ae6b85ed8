//! The front matter micro-format of notes.
//!
//! A document whose first line is exactly `---` starts a metadata block. Each following
//! `key: value` line adds an entry until the closing `---`. A line without a `:` ends the
//! block early without an error.

use std::collections::BTreeMap;

const DELIMITER: &str = "---";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: BTreeMap<String, String>,
}

impl FrontMatter {
    pub fn parse(text: &str) -> Self {
        let mut entries = BTreeMap::new();
        let mut lines = text.lines();

        if lines.next().map(str::trim_end) != Some(DELIMITER) {
            return Self { entries };
        }

        for line in lines {
            if line.trim_end() == DELIMITER {
                break;
            }
            let Some((key, value)) = line.split_once(':') else {
                break;
            };
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comma separated `tags` entry
    pub fn tags(&self) -> Vec<String> {
        self.get("tags")
            .map(|tags| {
                tags.split(',')
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
