use crate::core::{action, prefix};
use crate::domain::model::{GroupedEntry, MenuCategory, SortPlan};
use crate::utils::error::{Result, TidyError};
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Locale-aware title comparison. Titles are predominantly Chinese, so ties
/// collate under the `zh` locale (pinyin order).
pub struct TitleCollation {
    collator: Collator,
}

impl TitleCollation {
    pub fn new() -> Result<Self> {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator = Collator::try_new(&locale!("zh").into(), options).map_err(|e| {
            TidyError::CollationError {
                message: e.to_string(),
            }
        })?;

        Ok(Self { collator })
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

/// Computes the display order for one category's entries.
///
/// Grouping is by prefix-frequency subject; groups are ordered
/// lexicographically by subject string, entries within a group by action
/// priority then collated title. The plan is a pure function of the
/// category contents.
pub struct SortPlanner {
    action_keywords: Vec<String>,
    collation: TitleCollation,
}

impl SortPlanner {
    pub fn new(action_keywords: Vec<String>) -> Result<Self> {
        Ok(Self {
            action_keywords,
            collation: TitleCollation::new()?,
        })
    }

    pub fn with_default_keywords() -> Result<Self> {
        Self::new(action::default_action_keywords())
    }

    pub fn plan(&self, category: &MenuCategory) -> Result<SortPlan> {
        if category.list.is_empty() {
            return Err(TidyError::EmptyCategory {
                name: category.name.clone(),
            });
        }

        // 1. 構建前綴頻率表
        let titles: Vec<&str> = category.list.iter().map(|e| e.title.as_str()).collect();
        let table = prefix::build_prefix_frequency(&titles);

        // 2. 按主體分組（BTreeMap 同時給出確定的組順序）
        let mut groups: BTreeMap<String, Vec<GroupedEntry>> = BTreeMap::new();
        for entry in &category.list {
            let subject = prefix::extract_subject(&entry.title, &table)?;
            let action_priority = action::action_priority(&entry.title, &self.action_keywords);
            groups.entry(subject.clone()).or_default().push(GroupedEntry {
                id: entry.id,
                title: entry.title.clone(),
                subject,
                action_priority,
            });
        }

        tracing::debug!(
            groups = groups.len(),
            entries = category.list.len(),
            "computed subject groups"
        );

        // 3. 組內動作優先級 + 標題排序，然後拼接
        let mut entries = Vec::with_capacity(category.list.len());
        for (_, mut members) in groups {
            members.sort_by(|a, b| {
                a.action_priority
                    .cmp(&b.action_priority)
                    .then_with(|| self.collation.compare(&a.title, &b.title))
            });
            entries.extend(members);
        }

        Ok(SortPlan { entries })
    }
}
