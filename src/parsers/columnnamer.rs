// src/parsers/columnnamer.rs

//! Implements a [`ColumnNamer`] which derives unique, SQL-safe column names
//! from the keys of parsed pairs.

use std::collections::HashMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Name given to a column whose key is empty.
pub const BUILTIN_COL: &str = "col";

/// Column names that always exist.
pub const BUILTIN_NAMES: [&str; 4] = [
    BUILTIN_COL,
    "log_time",
    "log_level",
    "log_opid",
];

/// SQL keywords, upper-case, sorted for binary search.
pub const SQL_KEYWORDS: [&str; 147] = [
    "ABORT",
    "ACTION",
    "ADD",
    "AFTER",
    "ALL",
    "ALTER",
    "ALWAYS",
    "ANALYZE",
    "AND",
    "AS",
    "ASC",
    "ATTACH",
    "AUTOINCREMENT",
    "BEFORE",
    "BEGIN",
    "BETWEEN",
    "BY",
    "CASCADE",
    "CASE",
    "CAST",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "COMMIT",
    "CONFLICT",
    "CONSTRAINT",
    "CREATE",
    "CROSS",
    "CURRENT",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "DATABASE",
    "DEFAULT",
    "DEFERRABLE",
    "DEFERRED",
    "DELETE",
    "DESC",
    "DETACH",
    "DISTINCT",
    "DO",
    "DROP",
    "EACH",
    "ELSE",
    "END",
    "ESCAPE",
    "EXCEPT",
    "EXCLUDE",
    "EXCLUSIVE",
    "EXISTS",
    "EXPLAIN",
    "FAIL",
    "FILTER",
    "FIRST",
    "FOLLOWING",
    "FOR",
    "FOREIGN",
    "FROM",
    "FULL",
    "GENERATED",
    "GLOB",
    "GROUP",
    "GROUPS",
    "HAVING",
    "IF",
    "IGNORE",
    "IMMEDIATE",
    "IN",
    "INDEX",
    "INDEXED",
    "INITIALLY",
    "INNER",
    "INSERT",
    "INSTEAD",
    "INTERSECT",
    "INTO",
    "IS",
    "ISNULL",
    "JOIN",
    "KEY",
    "LAST",
    "LEFT",
    "LIKE",
    "LIMIT",
    "MATCH",
    "MATERIALIZED",
    "NATURAL",
    "NO",
    "NOT",
    "NOTHING",
    "NOTNULL",
    "NULL",
    "NULLS",
    "OF",
    "OFFSET",
    "ON",
    "OR",
    "ORDER",
    "OTHERS",
    "OUTER",
    "OVER",
    "PARTITION",
    "PLAN",
    "PRAGMA",
    "PRECEDING",
    "PRIMARY",
    "QUERY",
    "RAISE",
    "RANGE",
    "RECURSIVE",
    "REFERENCES",
    "REGEXP",
    "REINDEX",
    "RELEASE",
    "RENAME",
    "REPLACE",
    "RESTRICT",
    "RETURNING",
    "RIGHT",
    "ROLLBACK",
    "ROW",
    "ROWS",
    "SAVEPOINT",
    "SELECT",
    "SET",
    "TABLE",
    "TEMP",
    "TEMPORARY",
    "THEN",
    "TIES",
    "TO",
    "TRANSACTION",
    "TRIGGER",
    "UNBOUNDED",
    "UNION",
    "UNIQUE",
    "UPDATE",
    "USING",
    "VACUUM",
    "VALUES",
    "VIEW",
    "VIRTUAL",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
    "WITHOUT",
];

/// Is `name` an SQL keyword? Case-insensitive.
pub fn is_sql_keyword(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();

    SQL_KEYWORDS
        .binary_search(&upper.as_str())
        .is_ok()
}

/// Hands out unique column names.
///
/// A name already taken, a builtin name, or an SQL keyword is given a
/// numeric suffix, e.g. the second `user` becomes `user_0` and the third
/// `user_1`.
#[derive(Debug, Default)]
pub struct ColumnNamer {
    /// names handed out so far
    names: Vec<String>,
    /// last suffix used per base name
    counters: HashMap<String, usize>,
}

impl ColumnNamer {
    pub fn new() -> ColumnNamer {
        ColumnNamer {
            names: Vec::with_capacity(8),
            counters: HashMap::with_capacity(8),
        }
    }

    /// Is `name` unavailable?
    pub fn existing_name(
        &self,
        name: &str,
    ) -> bool {
        is_sql_keyword(name)
            || BUILTIN_NAMES.contains(&name)
            || self.names.iter().any(|n| n == name)
    }

    /// Names handed out so far, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Return a unique name derived from `name` and record it.
    pub fn add_column(
        &mut self,
        name: &str,
    ) -> String {
        defn!("({:?})", name);
        let base: &str = if name.is_empty() { BUILTIN_COL } else { name };
        if !self.counters.contains_key(base) && !self.existing_name(base) {
            self.names.push(base.to_string());
            defx!("{:?}", base);
            return base.to_string();
        }
        let mut num: usize = match self.counters.get(base) {
            Some(last) => last + 1,
            None => 0,
        };
        let mut candidate = format!("{}_{}", base, num);
        while self.existing_name(&candidate) {
            num += 1;
            candidate = format!("{}_{}", base, num);
        }
        self.counters.insert(base.to_string(), num);
        self.names.push(candidate.clone());
        defx!("{:?}", candidate);

        candidate
    }
}
