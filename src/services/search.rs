//! Invoice search filter shared by the listing and page-count queries.
//!
//! A search is a list of clauses ORed together. Each clause is only added
//! when its parse guard holds: the amount clause needs an integral number,
//! the date clause a calendar date. Row and count queries render and bind
//! the same list, so both always agree on what matches.

use chrono::{DateTime, NaiveDate};
use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::Postgres;

/// Invoice/customer text column matched by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColumn {
    CustomerName,
    CustomerEmail,
    Status,
}

impl TextColumn {
    fn sql(self) -> &'static str {
        match self {
            Self::CustomerName => "c.name",
            Self::CustomerEmail => "c.email",
            Self::Status => "i.status::text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// Case-insensitive substring match. `pattern` is already a LIKE pattern.
    TextContains { column: TextColumn, pattern: String },
    /// Exact match on the amount in cents.
    NumberEquals(i32),
    /// Exact match on the issue date.
    DateEquals(NaiveDate),
}

impl FilterClause {
    fn render(&self, param: usize) -> String {
        match self {
            Self::TextContains { column, .. } => format!("{} ILIKE ${param}", column.sql()),
            Self::NumberEquals(_) => format!("i.amount = ${param}"),
            Self::DateEquals(_) => format!("i.date = ${param}"),
        }
    }
}

// Binds clause values in the order `where_clause` numbers them.
macro_rules! bind_clauses {
    ($query:expr, $clauses:expr) => {{
        let mut query = $query;
        for clause in $clauses {
            query = match clause {
                FilterClause::TextContains { pattern, .. } => query.bind(pattern.clone()),
                FilterClause::NumberEquals(amount) => query.bind(*amount),
                FilterClause::DateEquals(date) => query.bind(*date),
            };
        }
        query
    }};
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSearch {
    clauses: Vec<FilterClause>,
}

impl InvoiceSearch {
    /// Name, email, amount and status matching for `query`.
    pub fn primary(query: &str) -> Self {
        let pattern = contains_pattern(query);
        let mut clauses = vec![
            FilterClause::TextContains {
                column: TextColumn::CustomerName,
                pattern: pattern.clone(),
            },
            FilterClause::TextContains {
                column: TextColumn::CustomerEmail,
                pattern: pattern.clone(),
            },
        ];
        if let Some(amount) = parse_amount(query) {
            clauses.push(FilterClause::NumberEquals(amount));
        }
        clauses.push(FilterClause::TextContains {
            column: TextColumn::Status,
            pattern,
        });
        Self { clauses }
    }

    /// The primary search widened with date equality, or `None` when `query`
    /// is not a calendar date.
    pub fn date_fallback(query: &str) -> Option<Self> {
        let date = parse_date(query)?;
        let mut search = Self::primary(query);
        search.clauses.push(FilterClause::DateEquals(date));
        Some(search)
    }

    #[cfg(test)]
    fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    /// `WHERE` clause with positional parameters `$1..$n` in clause order.
    pub fn where_clause(&self) -> String {
        let conditions: Vec<String> = self
            .clauses
            .iter()
            .enumerate()
            .map(|(i, clause)| clause.render(i + 1))
            .collect();
        format!("WHERE {}", conditions.join(" OR "))
    }

    pub fn bind_rows<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        bind_clauses!(query, &self.clauses)
    }

    pub fn bind_scalar<'q, O>(
        &self,
        query: QueryScalar<'q, Postgres, O, PgArguments>,
    ) -> QueryScalar<'q, Postgres, O, PgArguments> {
        bind_clauses!(query, &self.clauses)
    }
}

/// LIKE pattern matching `query` literally anywhere in the value.
pub fn contains_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Amount in cents that `query` denotes, if it is an integral number that
/// fits the amount column. A blank query denotes zero.
pub fn parse_amount(query: &str) -> Option<i32> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Calendar date spelled by `query`, if any.
pub fn parse_date(query: &str) -> Option<NaiveDate> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn primary_text_query_has_no_amount_clause() {
        let search = InvoiceSearch::primary("lee");
        assert_eq!(search.clauses().len(), 3);
        assert!(!search
            .clauses()
            .iter()
            .any(|c| matches!(c, FilterClause::NumberEquals(_))));
        assert_eq!(
            search.where_clause(),
            "WHERE c.name ILIKE $1 OR c.email ILIKE $2 OR i.status::text ILIKE $3"
        );
    }

    #[test]
    fn primary_numeric_query_adds_amount_equality() {
        let search = InvoiceSearch::primary("15795");
        assert_eq!(search.clauses()[2], FilterClause::NumberEquals(15795));
        assert_eq!(
            search.where_clause(),
            "WHERE c.name ILIKE $1 OR c.email ILIKE $2 OR i.amount = $3 OR i.status::text ILIKE $4"
        );
    }

    #[test]
    fn empty_query_matches_everything_by_substring() {
        let search = InvoiceSearch::primary("");
        assert_eq!(search.clauses().len(), 4);
        assert_eq!(
            search.clauses()[0],
            FilterClause::TextContains {
                column: TextColumn::CustomerName,
                pattern: "%%".to_string(),
            }
        );
        assert_eq!(search.clauses()[2], FilterClause::NumberEquals(0));
    }

    #[test]
    fn blank_query_matches_zero_amounts() {
        let search = InvoiceSearch::primary("   ");
        assert_eq!(search.clauses()[2], FilterClause::NumberEquals(0));
        assert_eq!(
            search.where_clause(),
            "WHERE c.name ILIKE $1 OR c.email ILIKE $2 OR i.amount = $3 OR i.status::text ILIKE $4"
        );
        assert!(InvoiceSearch::date_fallback("   ").is_none());
    }

    #[test]
    fn fallback_appends_date_clause() {
        let search = InvoiceSearch::date_fallback("2024-02-05").unwrap();
        assert_eq!(
            search.clauses().last(),
            Some(&FilterClause::DateEquals(date(2024, 2, 5)))
        );
        assert!(search.where_clause().ends_with("OR i.date = $4"));
        assert_eq!(&search.clauses()[..3], InvoiceSearch::primary("2024-02-05").clauses());
    }

    #[test]
    fn no_fallback_for_non_dates() {
        assert!(InvoiceSearch::date_fallback("not-a-date-and-no-match").is_none());
        assert!(InvoiceSearch::date_fallback("").is_none());
        assert!(InvoiceSearch::date_fallback("pending").is_none());
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("lee"), "%lee%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn amount_guard() {
        assert_eq!(parse_amount("666"), Some(666));
        assert_eq!(parse_amount(" 42 "), Some(42));
        assert_eq!(parse_amount("1e3"), Some(1000));
        assert_eq!(parse_amount("12.0"), Some(12));
        assert_eq!(parse_amount("12.5"), None);
        assert_eq!(parse_amount(""), Some(0));
        assert_eq!(parse_amount(" \t "), Some(0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("99999999999"), None);
    }

    #[test]
    fn date_guard_accepts_common_spellings() {
        let expected = Some(date(2024, 2, 5));
        assert_eq!(parse_date("2024-02-05"), expected);
        assert_eq!(parse_date("2024/02/05"), expected);
        assert_eq!(parse_date("02/05/2024"), expected);
        assert_eq!(parse_date("02-05-2024"), expected);
        assert_eq!(parse_date("Feb 5, 2024"), expected);
        assert_eq!(parse_date("February 5, 2024"), expected);
        assert_eq!(parse_date("5 Feb 2024"), expected);
        assert_eq!(parse_date("2024-02-05T10:30:00Z"), expected);
    }

    #[test]
    fn date_guard_rejects_impossible_dates() {
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("12"), None);
    }
}
