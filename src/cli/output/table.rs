//! Table output formatting for CLI commands
//!
//! Formats connection configs and check findings using comfy-table.

use crate::domain::models::ConnectionConfig;
use crate::services::{Finding, Severity};
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    pub fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// One row per party. Tokens stay hidden unless `reveal` is set.
    pub fn format_parties(&self, config: &ConnectionConfig, reveal: bool) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Party").add_attribute(Attribute::Bold),
            Cell::new("Party ID").add_attribute(Attribute::Bold),
            Cell::new("Token").add_attribute(Attribute::Bold),
        ]);

        for party in config.party_names() {
            let party_id = match (config.party_id(party), config.is_local()) {
                (Some(id), _) => Cell::new(id),
                (None, true) => Cell::new("(by name)"),
                (None, false) => self.placeholder_cell(),
            };
            let token = match config.token_for(party) {
                Some(token) if reveal => Cell::new(token),
                Some(token) => Cell::new(format!("[hidden, {} chars]", token.len())),
                None => self.placeholder_cell(),
            };
            table.add_row(vec![Cell::new(party), party_id, token]);
        }

        table.to_string()
    }

    pub fn format_findings(&self, findings: &[Finding]) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Severity").add_attribute(Attribute::Bold),
            Cell::new("Party").add_attribute(Attribute::Bold),
            Cell::new("Message").add_attribute(Attribute::Bold),
        ]);

        for finding in findings {
            let severity = Cell::new(finding.severity.to_string());
            let severity = if self.use_colors {
                severity.fg(severity_color(finding.severity))
            } else {
                severity
            };
            table.add_row(vec![
                severity,
                Cell::new(finding.party.as_deref().unwrap_or("-")),
                Cell::new(&finding.message),
            ]);
        }

        table.to_string()
    }

    fn placeholder_cell(&self) -> Cell {
        let cell = Cell::new("(placeholder)");
        if self.use_colors {
            cell.fg(Color::Yellow)
        } else {
            cell
        }
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
    }
}

/// Respects `NO_COLOR` and dumb terminals
fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }
    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn config() -> ConnectionConfig {
        ConnectionConfig {
            is_local_dev: None,
            continuous_update: false,
            tokens: BTreeMap::from([
                ("Alice".to_string(), "alice-token".to_string()),
                ("Bob".to_string(), String::new()),
            ]),
            parties: BTreeMap::from([
                ("Alice".to_string(), "Alice::1220".to_string()),
                ("Bob".to_string(), String::new()),
            ]),
        }
    }

    #[test]
    fn test_tokens_hidden_by_default() {
        let rendered = TableFormatter::with_config(false, None).format_parties(&config(), false);
        assert!(!rendered.contains("alice-token"));
        assert!(rendered.contains("[hidden, 11 chars]"));
        assert!(rendered.contains("Alice::1220"));
        assert!(rendered.contains("(placeholder)"));
    }

    #[test]
    fn test_reveal_shows_tokens() {
        let rendered = TableFormatter::with_config(false, None).format_parties(&config(), true);
        assert!(rendered.contains("alice-token"));
    }

    #[test]
    fn test_findings_table() {
        let findings = vec![Finding {
            severity: Severity::Warning,
            party: Some("Bob".to_string()),
            message: "token is an empty placeholder".to_string(),
        }];
        let rendered = TableFormatter::with_config(false, Some(120)).format_findings(&findings);
        assert!(rendered.contains("warning"));
        assert!(rendered.contains("Bob"));
    }
}
