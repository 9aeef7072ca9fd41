use serde::{Deserialize, Serialize};

/// One interface entry inside a category, as returned by `list_menu`.
/// Extra wire fields (path, method, status, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    #[serde(rename = "_id")]
    pub id: u64,
    pub title: String,
    /// 服務端當前的顯示位置
    #[serde(default)]
    pub index: i64,
}

/// A named category of interface entries within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    #[serde(rename = "_id")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub list: Vec<MenuEntry>,
}

/// One element of the `up_index` write payload: entry id and its new
/// 0-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPosition {
    pub id: u64,
    pub index: usize,
}

/// An entry annotated with its derived subject and action priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedEntry {
    pub id: u64,
    pub title: String,
    pub subject: String,
    pub action_priority: usize,
}

/// The computed ordering for one category. Entries appear in final display
/// order; positions are derived from that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPlan {
    pub entries: Vec<GroupedEntry>,
}

impl SortPlan {
    pub fn positions(&self) -> Vec<EntryPosition> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryPosition {
                id: entry.id,
                index,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of one sort operation: the plan, and whether it was written back.
#[derive(Debug, Clone)]
pub struct SortOutcome {
    pub category: String,
    pub plan: SortPlan,
    pub applied: bool,
}
