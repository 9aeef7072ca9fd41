pub mod presets;

use crate::utils::error::{Result, TidyError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "yapi-tidy")]
#[command(about = "Sort YApi interface categories and copy preset snippets")]
pub struct Cli {
    /// YApi server base URL
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub server: String,

    /// Open-api token, appended to every request
    #[arg(long)]
    pub token: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sort one category's entries by subject and action priority
    Sort {
        /// Project id, or a project page URL to take the id from
        #[arg(long)]
        project: String,

        /// Category name, exactly as shown in the interface menu
        #[arg(long)]
        category: String,

        /// Compute and print the plan without writing it back
        #[arg(long)]
        dry_run: bool,

        /// Override the action keyword priority order
        #[arg(long, value_delimiter = ',')]
        action_keywords: Vec<String>,
    },

    /// List a project's categories and entry counts
    Categories {
        #[arg(long)]
        project: String,
    },

    /// List the configured preset snippets
    Presets {
        #[arg(long)]
        presets_file: Option<PathBuf>,
    },

    /// Copy a preset snippet to the clipboard
    Copy {
        /// Preset label
        label: String,

        #[arg(long)]
        presets_file: Option<PathBuf>,
    },
}

/// 接受數字 id 或項目頁 URL（/project/<id>/...）
pub fn parse_project_ref(value: &str) -> Result<u64> {
    if let Ok(id) = value.parse::<u64>() {
        return Ok(id);
    }

    let re = Regex::new(r"/project/(\d+)(?:/|$)").unwrap();
    if let Some(caps) = re.captures(value) {
        if let Ok(id) = caps[1].parse::<u64>() {
            return Ok(id);
        }
    }

    Err(TidyError::InvalidConfigValueError {
        field: "project".to_string(),
        value: value.to_string(),
        reason: "Expected a numeric project id or a /project/<id>/ URL".to_string(),
    })
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validate_url("server", &self.server)?;

        match &self.command {
            Command::Sort {
                project, category, ..
            } => {
                parse_project_ref(project)?;
                validate_non_empty_string("category", category)?;
            }
            Command::Categories { project } => {
                parse_project_ref(project)?;
            }
            Command::Copy { label, .. } => {
                validate_non_empty_string("label", label)?;
            }
            Command::Presets { .. } => {}
        }

        Ok(())
    }
}
