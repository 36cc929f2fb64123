//! The fixed customer query and the rendering of its rows.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Lists customers from the `SH` sample schema shipped with Autonomous Database.
pub const CUSTOMER_QUERY: &str = "SELECT CUST_ID, CUST_FIRST_NAME, CUST_LAST_NAME, CUST_CITY, CUST_CREDIT_LIMIT
FROM SH.CUSTOMERS
WHERE ROWNUM < 20
ORDER BY CUST_ID";

/// Column titles, aligned with [`CustomerRow::to_table_line`].
pub const TABLE_HEADER: &str = "Customer Id First Name Last Name City                 Credit Limit";

/// Rule printed under [`TABLE_HEADER`].
pub const TABLE_RULE: &str = "------------------------------------------------------------------";

/// Rendering of SQL NULL in the table.
const NULL_TEXT: &str = "null";

/// One row of [`CUSTOMER_QUERY`]. Columns are fetched as text; SQL NULL is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CustomerRow {
    pub cust_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub credit_limit: Option<String>,
}

impl CustomerRow {
    /// Fixed-width table line: id right-aligned in 11 columns, then first
    /// name (10), last name (9), city (20) and credit limit (12) left-aligned.
    /// Longer values overflow their column rather than being cut.
    pub fn to_table_line(&self) -> String {
        fn text(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or(NULL_TEXT)
        }

        format!(
            "{:>11} {:<10} {:<9} {:<20} {:<12}",
            text(&self.cust_id),
            text(&self.first_name),
            text(&self.last_name),
            text(&self.city),
            text(&self.credit_limit),
        )
    }
}

/// How result rows are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width table through the log output
    #[default]
    Table,
    /// One JSON object per row on stdout
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{}' (expected 'table' or 'json')",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Rows fetched by one run of the query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub rows: Vec<CustomerRow>,
}

impl Report {
    /// Wraps fetched rows.
    pub fn new(rows: Vec<CustomerRow>) -> Self {
        Self { rows }
    }

    /// Header, rule and one line per row.
    pub fn table_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len().saturating_add(2));
        lines.push(TABLE_HEADER.to_string());
        lines.push(TABLE_RULE.to_string());
        lines.extend(self.rows.iter().map(CustomerRow::to_table_line));
        lines
    }

    /// One compact JSON document per row.
    ///
    /// # Errors
    /// Returns an error if a row cannot be serialized
    pub fn json_lines(&self) -> crate::Result<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                serde_json::to_string(row).map_err(|e| {
                    crate::error::AdbqError::configuration(format!(
                        "Failed to serialize row as JSON: {}",
                        e
                    ))
                })
            })
            .collect()
    }

    /// Renders the report in `format`.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails
    pub fn render(&self, format: OutputFormat) -> crate::Result<Vec<String>> {
        match format {
            OutputFormat::Table => Ok(self.table_lines()),
            OutputFormat::Json => self.json_lines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, first: &str, last: &str, city: &str, limit: &str) -> CustomerRow {
        CustomerRow {
            cust_id: Some(id.to_string()),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            city: Some(city.to_string()),
            credit_limit: Some(limit.to_string()),
        }
    }

    #[test]
    fn test_header_and_rule_width() {
        assert_eq!(TABLE_HEADER.len(), 66);
        assert_eq!(TABLE_RULE.len(), 66);
        assert!(TABLE_RULE.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_table_line_widths() {
        let line = row("49671", "Abigail", "Ruddy", "Ede", "1500").to_table_line();
        assert_eq!(
            line,
            "      49671 Abigail    Ruddy     Ede                  1500        "
        );
        assert_eq!(line.len(), 66);
    }

    #[test]
    fn test_table_line_null_columns() {
        let line = CustomerRow {
            cust_id: Some("7".to_string()),
            ..Default::default()
        }
        .to_table_line();
        assert!(line.starts_with("          7 null       null      null"));
    }

    #[test]
    fn test_table_line_does_not_truncate() {
        let line = row("1", "Maximiliana", "Schoenberger", "Llanfairpwllgwyngyll-on-Sea", "15000")
            .to_table_line();
        assert!(line.contains("Maximiliana Schoenberger Llanfairpwllgwyngyll-on-Sea 15000"));
    }

    #[test]
    fn test_report_table_lines() {
        let report = Report::new(vec![row("1", "A", "B", "C", "10"), row("2", "D", "E", "F", "20")]);
        let lines = report.render(OutputFormat::Table).unwrap();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], TABLE_HEADER);
        assert_eq!(lines[1], TABLE_RULE);
        assert!(lines[2].starts_with("          1 A"));
        assert!(lines[3].starts_with("          2 D"));
    }

    #[test]
    fn test_report_json_lines() {
        let report = Report::new(vec![CustomerRow {
            cust_id: Some("3".to_string()),
            city: Some("Ede".to_string()),
            ..Default::default()
        }]);
        let lines = report.render(OutputFormat::Json).unwrap();

        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["cust_id"], "3");
        assert_eq!(value["city"], "Ede");
        assert!(value["first_name"].is_null());
    }

    #[test]
    fn test_empty_report_still_has_header() {
        assert_eq!(Report::default().table_lines().len(), 2);
        assert!(Report::default().json_lines().unwrap().is_empty());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_query_targets_sample_schema() {
        assert!(CUSTOMER_QUERY.contains("FROM SH.CUSTOMERS"));
        assert!(CUSTOMER_QUERY.contains("ROWNUM < 20"));
        assert!(CUSTOMER_QUERY.ends_with("ORDER BY CUST_ID"));
    }
}
