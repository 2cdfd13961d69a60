//! CSV Import service
//!
//! Parses ledger files with a `Date, Type, Category, Amount, Description`
//! header into transactions. This is the validation gate in front of the
//! ledger store: every row is checked, every bad row is reported, and a file
//! with any bad row yields no transactions at all.

use std::fmt;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction, TransactionKind};

/// Header row of the ledger file format
pub const LEDGER_HEADERS: [&str; 5] = ["Date", "Type", "Category", "Amount", "Description"];

/// Fallback date formats tried after the configured one
const FALLBACK_DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%m-%d-%Y",
    "%d-%m-%Y",
];

/// Date-time layouts accepted when no date-only format matches; the time is dropped
const FALLBACK_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Largest amount a single record may carry
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// Parse a date using the primary format, then common alternatives
///
/// Date-time values (`2024-01-05 10:30:00`, `2024-01-05T10:30:00`, RFC 3339)
/// are accepted and truncated to their calendar date.
pub fn parse_date(s: &str, primary_format: &str) -> Result<NaiveDate, String> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
        return Ok(date);
    }

    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    for format in FALLBACK_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(datetime.date_naive());
    }

    Err(format!("Could not parse date: '{}'", s))
}

/// Parse a transaction amount; negative values and values above
/// [`MAX_AMOUNT`] are rejected
pub fn parse_amount(s: &str) -> Result<Money, String> {
    let amount =
        Money::parse(s).map_err(|e| format!("Could not parse amount '{}': {}", s.trim(), e))?;
    if amount.is_negative() {
        return Err(format!(
            "Amount must not be negative: '{}' (use Type to mark expenses)",
            s.trim()
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(format!(
            "Amount '{}' exceeds the maximum of {}",
            s.trim(),
            MAX_AMOUNT
        ));
    }
    Ok(amount)
}

/// Parse a category label; surrounding whitespace is dropped, casing kept
pub fn parse_category(s: &str) -> Result<String, String> {
    let category = s.trim();
    if category.is_empty() {
        return Err("Category is empty".to_string());
    }
    Ok(category.to_string())
}

/// Column positions located from the header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub type_column: usize,
    pub category_column: usize,
    pub amount_column: usize,
    /// Optional; rows get an empty description without it
    pub description_column: Option<usize>,
}

impl ColumnMapping {
    /// Locate columns by header name, case-insensitively
    pub fn from_headers(headers: &StringRecord) -> FinanceResult<Self> {
        let mut date = None;
        let mut kind = None;
        let mut category = None;
        let mut amount = None;
        let mut description = None;

        for (idx, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();

            if date.is_none() && h.contains("date") {
                date = Some(idx);
            } else if kind.is_none() && (h == "type" || h == "kind") {
                kind = Some(idx);
            } else if category.is_none() && h.contains("category") {
                category = Some(idx);
            } else if amount.is_none() && h.contains("amount") {
                amount = Some(idx);
            } else if description.is_none()
                && (h.contains("description") || h.contains("memo") || h.contains("note"))
            {
                description = Some(idx);
            }
        }

        let missing =
            |name: &str| FinanceError::Import(format!("Missing required column: {}", name));

        Ok(Self {
            date_column: date.ok_or_else(|| missing("Date"))?,
            type_column: kind.ok_or_else(|| missing("Type"))?,
            category_column: category.ok_or_else(|| missing("Category"))?,
            amount_column: amount.ok_or_else(|| missing("Amount"))?,
            description_column: description,
        })
    }
}

/// A row the gate refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the source file (the header is line 1)
    pub line: usize,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Outcome of parsing a whole file
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Rows that passed validation, in file order
    pub transactions: Vec<Transaction>,
    /// Rows that failed validation
    pub rejected: Vec<RowError>,
}

impl ImportReport {
    /// Whether every row passed validation
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// The parsed transactions, or an import error listing every bad row
    pub fn into_transactions(self) -> FinanceResult<Vec<Transaction>> {
        if self.rejected.is_empty() {
            return Ok(self.transactions);
        }

        let details: Vec<String> = self.rejected.iter().map(|e| e.to_string()).collect();
        Err(FinanceError::Import(format!(
            "{} invalid row(s); nothing was imported\n  {}",
            self.rejected.len(),
            details.join("\n  ")
        )))
    }
}

/// Service for CSV import
pub struct ImportService {
    date_format: String,
}

impl ImportService {
    /// Create a new import service; `date_format` is tried before the fallbacks
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// Parse a ledger file
    pub fn parse_file(&self, path: &Path) -> FinanceResult<ImportReport> {
        if !path.exists() {
            return Err(FinanceError::Import(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let file = std::fs::File::open(path).map_err(|e| {
            FinanceError::Import(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.parse_csv_from_reader(file)
    }

    /// Parse CSV text held in memory
    pub fn parse_str(&self, content: &str) -> FinanceResult<ImportReport> {
        self.parse_csv_from_reader(content.as_bytes())
    }

    /// Parse CSV from any reader; the first row must be a header
    pub fn parse_csv_from_reader<R: Read>(&self, reader: R) -> FinanceResult<ImportReport> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mapping = ColumnMapping::from_headers(&headers)?;
        debug!(?mapping, "detected column mapping");

        let mut report = ImportReport::default();
        for (idx, result) in reader.records().enumerate() {
            let fallback_line = idx + 2;
            match result {
                Ok(record) => {
                    let line = record
                        .position()
                        .map(|p| p.line() as usize)
                        .unwrap_or(fallback_line);
                    match self.parse_record(&record, &mapping) {
                        Ok(txn) => report.transactions.push(txn),
                        Err(message) => report.rejected.push(RowError { line, message }),
                    }
                }
                Err(e) => report.rejected.push(RowError {
                    line: fallback_line,
                    message: format!("Error reading CSV record: {}", e),
                }),
            }
        }

        if !report.is_clean() {
            warn!(
                rejected = report.rejected.len(),
                accepted = report.transactions.len(),
                "import has invalid rows"
            );
        }

        Ok(report)
    }

    /// Parse a single CSV record
    fn parse_record(
        &self,
        record: &StringRecord,
        mapping: &ColumnMapping,
    ) -> Result<Transaction, String> {
        let field = |col: usize, name: &str| {
            record
                .get(col)
                .ok_or_else(|| format!("Missing {} value", name))
        };

        let date = parse_date(field(mapping.date_column, "Date")?, &self.date_format)?;
        let kind: TransactionKind = field(mapping.type_column, "Type")?.parse()?;
        let category = parse_category(field(mapping.category_column, "Category")?)?;
        let amount = parse_amount(field(mapping.amount_column, "Amount")?)?;
        let description = mapping
            .description_column
            .and_then(|col| record.get(col))
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Ok(Transaction::new(date, kind, category, amount).with_description(description))
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new("%Y-%m-%d")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_simple_csv() {
        let csv_data = "Date,Type,Category,Amount,Description\n\
                        2024-01-05,Income,Salary,1000,January pay\n\
                        2024-01-07,Expense,Food,12.50,\n";
        let report = ImportService::default().parse_str(csv_data).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.transactions.len(), 2);

        let pay = &report.transactions[0];
        assert_eq!(pay.date, date(2024, 1, 5));
        assert_eq!(pay.kind, TransactionKind::Income);
        assert_eq!(pay.category, "Salary");
        assert_eq!(pay.amount, Money::from_units(1000));
        assert_eq!(pay.description, "January pay");

        let food = &report.transactions[1];
        assert_eq!(food.kind, TransactionKind::Expense);
        assert_eq!(food.amount, Money::from_cents(1250));
        assert!(food.description.is_empty());
    }

    #[test]
    fn test_columns_found_by_name() {
        let csv_data = "amount,description,category,type,date\n\
                        \"1,200.00\",Rent,Bills,expense,2024-02-01\n";
        let report = ImportService::default().parse_str(csv_data).unwrap();

        let txn = &report.transactions[0];
        assert_eq!(txn.amount, Money::from_units(1200));
        assert_eq!(txn.category, "Bills");
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.date, date(2024, 2, 1));
        assert_eq!(txn.description, "Rent");
    }

    #[test]
    fn test_description_column_optional() {
        let csv_data = "Date,Type,Category,Amount\n2024-01-05,Income,Salary,10\n";
        let report = ImportService::default().parse_str(csv_data).unwrap();
        assert!(report.transactions[0].description.is_empty());
    }

    #[test]
    fn test_missing_required_column() {
        let csv_data = "Date,Type,Category,Description\n2024-01-05,Income,Salary,pay\n";
        let err = ImportService::default().parse_str(csv_data).unwrap_err();
        assert!(err.is_import());
        assert!(err.to_string().contains("Missing required column: Amount"));
    }

    #[test]
    fn test_invalid_rows_reported_with_lines() {
        let csv_data = "Date,Type,Category,Amount,Description\n\
                        2024-01-05,Income,Salary,1000,ok\n\
                        not-a-date,Expense,Food,10,bad date\n\
                        2024-01-07,Transfer,Food,10,bad type\n\
                        2024-01-08,Expense,Food,abc,bad amount\n\
                        2024-01-09,Expense,Food,-5,negative\n\
                        2024-01-10,Expense,,5,no category\n";
        let report = ImportService::default().parse_str(csv_data).unwrap();

        assert_eq!(report.transactions.len(), 1);
        let lines: Vec<_> = report.rejected.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4, 5, 6, 7]);
        assert!(report.rejected[0].message.contains("Could not parse date"));
        assert!(report.rejected[1].message.contains("Invalid transaction type"));
        assert!(report.rejected[2].message.contains("Could not parse amount"));
        assert!(report.rejected[3].message.contains("must not be negative"));
        assert!(report.rejected[4].message.contains("Category is empty"));
    }

    #[test]
    fn test_gate_rejects_whole_file() {
        let csv_data = "Date,Type,Category,Amount\n\
                        2024-01-05,Income,Salary,1000\n\
                        2024-01-06,Expense,Food,oops\n";
        let report = ImportService::default().parse_str(csv_data).unwrap();
        let err = report.into_transactions().unwrap_err();

        assert!(err.is_import());
        assert!(err.to_string().contains("1 invalid row(s)"));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let csv_data = "Date,Type,Category,Amount\n2024-01-05,Income\n";
        let report = ImportService::default().parse_str(csv_data).unwrap();
        assert_eq!(report.rejected.len(), 1);
        assert!(report.rejected[0].message.contains("Missing Category value"));
    }

    #[test]
    fn test_header_only_file() {
        let report = ImportService::default()
            .parse_str("Date,Type,Category,Amount,Description\n")
            .unwrap();
        assert!(report.is_clean());
        assert!(report.into_transactions().unwrap().is_empty());
    }

    #[test]
    fn test_parse_various_date_formats() {
        assert_eq!(parse_date("2025-01-15", "%Y-%m-%d").unwrap(), date(2025, 1, 15));
        assert_eq!(parse_date("01/15/2025", "%Y-%m-%d").unwrap(), date(2025, 1, 15));
        assert_eq!(parse_date("2025/01/15", "%Y-%m-%d").unwrap(), date(2025, 1, 15));
        assert_eq!(parse_date("15.01.2025", "%d.%m.%Y").unwrap(), date(2025, 1, 15));
        assert!(parse_date("yesterday", "%Y-%m-%d").is_err());
    }

    #[test]
    fn test_parse_date_times() {
        assert_eq!(
            parse_date("2024-01-05 10:30:00", "%Y-%m-%d").unwrap(),
            date(2024, 1, 5)
        );
        assert_eq!(
            parse_date("2024-01-05T10:30:00", "%Y-%m-%d").unwrap(),
            date(2024, 1, 5)
        );
        assert_eq!(
            parse_date("2024-01-05 23:59", "%Y-%m-%d").unwrap(),
            date(2024, 1, 5)
        );
        assert_eq!(
            parse_date("2024-01-05T10:30:00.250", "%Y-%m-%d").unwrap(),
            date(2024, 1, 5)
        );
        assert_eq!(
            parse_date("2024-01-05T10:30:00+02:00", "%Y-%m-%d").unwrap(),
            date(2024, 1, 5)
        );
        assert!(parse_date("2024-01-05 25:00:00", "%Y-%m-%d").is_err());
    }

    #[test]
    fn test_datetime_column_imports() {
        let csv_data = "Date,Type,Category,Amount\n\
                        2024-01-05 10:30:00,Income,Salary,1000\n\
                        2024-01-06T08:00:00,Expense,Food,20\n";
        let report = ImportService::default().parse_str(csv_data).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.transactions[0].date, date(2024, 1, 5));
        assert_eq!(report.transactions[1].date, date(2024, 1, 6));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,000.00").unwrap(), Money::from_units(1000));
        assert_eq!(parse_amount("0").unwrap(), Money::zero());
        assert!(parse_amount("(5.00)").is_err());
        assert!(parse_amount("").is_err());
        assert_eq!(parse_amount("1000000000000").unwrap(), MAX_AMOUNT);
        let err = parse_amount("1000000000000.01").unwrap_err();
        assert!(err.contains("exceeds the maximum"));
        assert!(parse_amount("50000000000000000").is_err());
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Date,Type,Category,Amount,Description").unwrap();
        writeln!(file, "2024-03-01,Expense,Transport,45.10,Bus pass").unwrap();
        file.flush().unwrap();

        let report = ImportService::default().parse_file(file.path()).unwrap();
        assert_eq!(report.transactions.len(), 1);
        assert_eq!(report.transactions[0].amount, Money::from_cents(4510));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = ImportService::default()
            .parse_file(Path::new("/definitely/not/here.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
