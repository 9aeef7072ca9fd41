/// Priority assigned when no configured keyword appears in the title.
pub const UNRANKED: usize = usize::MAX;

/// 動作優先級（小的排前面）
pub const DEFAULT_ACTION_KEYWORDS: [&str; 5] = ["列表", "导出", "添加", "编辑", "删除"];

pub fn default_action_keywords() -> Vec<String> {
    DEFAULT_ACTION_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

/// Rank a title by the first keyword (in list order) it contains as a
/// substring. First match wins; list order is the priority. Titles matching
/// no keyword get [`UNRANKED`].
pub fn action_priority(title: &str, keywords: &[String]) -> usize {
    for (i, keyword) in keywords.iter().enumerate() {
        if title.contains(keyword.as_str()) {
            return i;
        }
    }
    UNRANKED
}
