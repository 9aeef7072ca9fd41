use crate::utils::error::{Result, TidyError};
use std::collections::HashMap;

/// Only the first 10 characters of a title are significant for grouping.
pub const MAX_PREFIX_CHARS: usize = 10;

/// Frequency of every exact prefix (1..=MAX_PREFIX_CHARS characters) across
/// one category's titles. Built fresh per sort, discarded after.
pub type PrefixFrequencyTable = HashMap<String, u32>;

/// 統計所有可能的前綴（1 到標題長度，上限 10 個字符）
pub fn build_prefix_frequency(titles: &[&str]) -> PrefixFrequencyTable {
    let mut table = PrefixFrequencyTable::new();

    for title in titles {
        let mut prefix = String::new();
        for ch in title.chars().take(MAX_PREFIX_CHARS) {
            prefix.push(ch);
            *table.entry(prefix.clone()).or_insert(0) += 1;
        }
    }

    table
}

/// Derive the subject of one title: the longest prefix whose frequency in
/// the table is > 1, falling back to the first character.
///
/// Frequencies are monotonically non-increasing in prefix length, so the
/// scan stops at the first prefix with frequency <= 1.
pub fn extract_subject(title: &str, table: &PrefixFrequencyTable) -> Result<String> {
    let first = title.chars().next().ok_or(TidyError::EmptyTitle)?;
    let mut subject = first.to_string();

    let mut prefix = String::new();
    for ch in title.chars().take(MAX_PREFIX_CHARS) {
        prefix.push(ch);
        if table.get(&prefix).copied().unwrap_or(0) > 1 {
            subject = prefix.clone();
        } else {
            break;
        }
    }

    Ok(subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(table: &PrefixFrequencyTable, prefix: &str) -> u32 {
        table.get(prefix).copied().unwrap_or(0)
    }

    #[test]
    fn test_frequency_counts_every_prefix() {
        let table = build_prefix_frequency(&["UserList", "UserAdd"]);

        assert_eq!(freq(&table, "U"), 2);
        assert_eq!(freq(&table, "User"), 2);
        assert_eq!(freq(&table, "UserL"), 1);
        assert_eq!(freq(&table, "UserList"), 1);
        assert_eq!(freq(&table, "UserA"), 1);
    }

    #[test]
    fn test_frequency_is_monotonically_non_increasing() {
        let titles = ["UserList", "UserAdd", "UserEdit", "Report", "Re-run"];
        let table = build_prefix_frequency(&titles);

        for title in &titles {
            let chars: Vec<char> = title.chars().take(MAX_PREFIX_CHARS).collect();
            for len in 1..chars.len() {
                let shorter: String = chars[..len].iter().collect();
                let longer: String = chars[..len + 1].iter().collect();
                assert!(
                    freq(&table, &shorter) >= freq(&table, &longer),
                    "freq({:?}) < freq({:?})",
                    shorter,
                    longer
                );
            }
        }
    }

    #[test]
    fn test_prefix_length_is_capped() {
        let table = build_prefix_frequency(&["abcdefghijkl", "abcdefghijxx"]);

        // 10 個字符以內才計數
        assert_eq!(freq(&table, "abcdefghij"), 2);
        assert_eq!(freq(&table, "abcdefghijk"), 0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let table = build_prefix_frequency(&["用户列表", "用户添加"]);

        assert_eq!(freq(&table, "用"), 2);
        assert_eq!(freq(&table, "用户"), 2);
        assert_eq!(freq(&table, "用户列"), 1);
    }

    #[test]
    fn test_single_title_subject_is_first_character() {
        let table = build_prefix_frequency(&["Report"]);
        assert_eq!(extract_subject("Report", &table).unwrap(), "R");
    }

    #[test]
    fn test_subject_is_longest_shared_prefix() {
        // "Use" shared by two titles, nothing longer shared
        let table = build_prefix_frequency(&["UseA", "UseB", "Other"]);
        assert_eq!(extract_subject("UseA", &table).unwrap(), "Use");
        assert_eq!(extract_subject("UseB", &table).unwrap(), "Use");
        assert_eq!(extract_subject("Other", &table).unwrap(), "O");
    }

    #[test]
    fn test_subject_for_multibyte_titles() {
        let table = build_prefix_frequency(&["用户列表", "用户添加", "报表导出"]);

        assert_eq!(extract_subject("用户列表", &table).unwrap(), "用户");
        assert_eq!(extract_subject("用户添加", &table).unwrap(), "用户");
        assert_eq!(extract_subject("报表导出", &table).unwrap(), "报");
    }

    #[test]
    fn test_duplicate_titles_share_full_prefix_as_subject() {
        let table = build_prefix_frequency(&["Ping", "Ping"]);
        assert_eq!(extract_subject("Ping", &table).unwrap(), "Ping");
    }

    #[test]
    fn test_subject_never_exceeds_cap() {
        let titles = ["abcdefghijkl", "abcdefghijkl"];
        let table = build_prefix_frequency(&titles);
        assert_eq!(extract_subject(titles[0], &table).unwrap(), "abcdefghij");
    }

    #[test]
    fn test_empty_title_is_an_error() {
        let table = build_prefix_frequency(&["UserList"]);
        assert!(matches!(
            extract_subject("", &table),
            Err(TidyError::EmptyTitle)
        ));
    }
}
