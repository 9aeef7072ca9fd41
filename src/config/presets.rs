use crate::utils::error::{Result, TidyError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Visual/semantic class of a snippet, mirrored in how the copy command
/// reports it: full mock bodies, request parameter names, value hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    #[default]
    Mock,
    Param,
    Value,
}

impl PresetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetKind::Mock => "mock",
            PresetKind::Param => "param",
            PresetKind::Value => "value",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub label: String,
    #[serde(default)]
    pub kind: PresetKind,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct PresetFile {
    #[serde(rename = "preset", default)]
    presets: Vec<Preset>,
}

/// Load `[[preset]]` tables from a TOML file, replacing the built-in set.
pub fn load_presets(path: &Path) -> Result<Vec<Preset>> {
    let raw = std::fs::read_to_string(path)?;
    let file: PresetFile = toml::from_str(&raw)?;

    if file.presets.is_empty() {
        return Err(TidyError::ConfigError {
            message: format!("No [[preset]] tables found in {}", path.display()),
        });
    }
    check_duplicate_labels(&file.presets)?;

    Ok(file.presets)
}

/// Built-ins when no preset file is given.
pub fn resolve_presets(path: Option<&Path>) -> Result<Vec<Preset>> {
    match path {
        Some(path) => load_presets(path),
        None => Ok(default_presets()),
    }
}

pub fn find<'a>(presets: &'a [Preset], label: &str) -> Result<&'a Preset> {
    presets
        .iter()
        .find(|p| p.label == label)
        .ok_or_else(|| TidyError::PresetNotFound {
            label: label.to_string(),
        })
}

fn check_duplicate_labels(presets: &[Preset]) -> Result<()> {
    let mut seen = HashSet::new();
    for preset in presets {
        if !seen.insert(preset.label.as_str()) {
            return Err(TidyError::ConfigError {
                message: format!("Duplicate preset label '{}'", preset.label),
            });
        }
    }
    Ok(())
}

/// 預設文案配置
pub fn default_presets() -> Vec<Preset> {
    fn preset(label: &str, kind: PresetKind, text: &str) -> Preset {
        Preset {
            label: label.to_string(),
            kind,
            text: text.to_string(),
        }
    }

    vec![
        preset(
            "AI 提示词",
            PresetKind::Mock,
            "请帮我设计截图对应的返回值参数\n返回多个参数名版本做选择",
        ),
        preset(
            "空返回",
            PresetKind::Mock,
            r#"{
    "code": 0,
    "message": "错误信息",
    "data": null
}"#,
        ),
        preset(
            "列表",
            PresetKind::Mock,
            r#"{
    "code": 0,
    "message": "错误信息",
    "data":{
        "list|5-20":[{
            "id": "@id",
            "name": "@cname",
        }],
        "pagination":{
            "totalItem": 100,
            "totalPage": 10,
            "currentPage": 1,
            "pageSize": 10,
        },
    },
}"#,
        ),
        preset(
            "详情",
            PresetKind::Mock,
            r#"{
    "code": 0,
    "message": "错误信息",
    "data":{
        "id": "@id",
        "name": "@cname",
    },
}"#,
        ),
        preset(
            "趋势图",
            PresetKind::Mock,
            r#"{
  "code": 0,
  "message": "错误信息",
  "data": {
    "chart|5": [
      {
        "key": "@word",
        "label": "@cname",
        "records|30": [
          {
            "date": "@datetime",
            "value": "@integer(50,500)"
          },
        ]
      }
    ]
  }
}"#,
        ),
        preset(
            "导出",
            PresetKind::Mock,
            r#"{
  "code": 0,
  "message": "错误信息",
  "data": {
      "id": 12
  }
}"#,
        ),
        preset("页大小", PresetKind::Param, "pageSize"),
        preset("当前页", PresetKind::Param, "currentPage"),
        preset("关键字", PresetKind::Param, "searchKey"),
        preset("排序字段", PresetKind::Param, "orderBy"),
        preset("排序方向", PresetKind::Param, "orderDirection"),
        preset("排序方向值", PresetKind::Value, "'asc' | 'desc'"),
        preset("时间类型", PresetKind::Param, "timeRangeType"),
        preset(
            "时间类型值",
            PresetKind::Value,
            "'today' | 'yesterday' | 'currentWeek' | 'lastWeek' | 'last7Day' | 'last30Day' | 'currentMonth' | 'lastMonth' | 'custom'",
        ),
        preset("开始时间", PresetKind::Param, "startTime"),
        preset("起止时间", PresetKind::Param, "endTime"),
        preset("时间值", PresetKind::Value, "2025-11-24 15:30:00"),
    ]
}
