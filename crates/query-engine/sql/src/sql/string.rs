//! Type definitions of a low-level SQL string representation.

/// A SQL statement under construction.
///
/// Values are interpolated into the text directly; there are no bound
/// parameters.
#[derive(Debug, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
}

impl Default for SQL {
    fn default() -> Self {
        Self::new()
    }
}

impl SQL {
    pub fn new() -> SQL {
        SQL { sql: String::new() }
    }
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }
    /// Append an identifier quoted with backticks.
    pub fn append_identifier(&mut self, sql: &str) {
        // TODO: escape backticks inside identifiers
        self.sql.push('`');
        self.sql.push_str(sql);
        self.sql.push('`');
    }
    /// Append a single-quoted string literal. Embedded quotes are not escaped.
    pub fn append_string_literal(&mut self, sql: &str) {
        self.sql.push('\'');
        self.sql.push_str(sql);
        self.sql.push('\'');
    }
}
