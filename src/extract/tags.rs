//! `tag=value` list parsing shared by DKIM and DMARC records.
//!
//! Both formats are `;`-separated lists of `name=value` pairs. The parser is
//! deliberately lenient: segments without `=` are skipped, names are matched
//! case-insensitively, and the first occurrence of a name wins.

/// Parsed tag list borrowing its values from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagList<'a> {
    tags: Vec<(String, &'a str)>,
}

impl<'a> TagList<'a> {
    /// Value of the first tag called `name`, trimmed.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.tags
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    /// Value of `name`, treating an empty value as absent.
    pub fn get_non_empty(&self, name: &str) -> Option<&'a str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Splits `record` on `;`, then each segment on its first `=`.
pub fn parse_tags(record: &str) -> TagList<'_> {
    let tags = record
        .split(';')
        .filter_map(|segment| {
            let (name, value) = segment.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_ascii_lowercase(), value.trim()))
        })
        .collect();
    TagList { tags }
}
