// Rendering subset of the GitHub repository payload.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub ssh_url: String,
    pub homepage: Option<String>,
    pub stargazers_count: u64,
    pub subscribers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub language: Option<String>,
    pub pushed_at: DateTime<Utc>,
    pub owner: Owner,
    pub license: Option<License>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub spdx_id: Option<String>,
}

impl Repo {
    pub fn display_language(&self) -> &str {
        self.language.as_deref().unwrap_or("Unknown language")
    }

    pub fn display_license(&self) -> &str {
        self.license
            .as_ref()
            .map_or("Unknown license", |license| license.name.as_str())
    }

    /// Last-push date as shown in the card footer.
    pub fn display_pushed_at(&self) -> String {
        format_pushed_at(self.pushed_at, Utc::now())
    }
}

/// `Mon D`, with the year appended only when it is not the current one.
pub fn format_pushed_at(pushed_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let day = pushed_at.format("%b %-d");
    if pushed_at.year() == now.year() {
        day.to_string()
    } else {
        format!("{day} {}", pushed_at.year())
    }
}

/// Abbreviate large counts the way the card displays them.
pub fn count_display(count: u64) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 100_000 {
        format!("{}k", (count as f64 / 1_000.0).round())
    } else if count < 1_000_000 {
        format!("{:.2}k", count as f64 / 1_000.0)
    } else if count < 1_000_000_000 {
        format!("{:.2}m", count as f64 / 1_000_000.0)
    } else {
        format!("{:.2}b", count as f64 / 1_000_000_000.0)
    }
}
