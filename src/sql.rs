//! SQL statement shapes emitted into generated test scripts.
//!
//! Each statement is a typed value with a `Display` impl. Statements
//! render without the terminating semicolon; the script layer appends
//! it when the statement becomes a line.

use std::fmt::Display;

/// A SQL statement the generator can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `CREATE TABLE t (a BINARY(100))`
    CreateBinaryTable {
        table: String,
        column: String,
        width: u8,
    },
    /// `INSERT INTO t VALUES ('hi')`
    InsertValue { table: String, value: String },
    /// `CREATE TABLE ti LIKE t`
    CreateLike { table: String, source: String },
    /// `ALTER TABLE ti ENGINE=myisam`
    AlterEngine { table: String, engine: String },
    /// `INSERT INTO ti SELECT * FROM t`
    InsertSelect { table: String, source: String },
    /// `ALTER TABLE t CHANGE COLUMN a b BINARY(2)`
    ChangeColumn {
        table: String,
        /// Current column name.
        old: String,
        /// Name the column is renamed to.
        new: String,
        width: u8,
    },
    /// `DROP TABLE t`, `DROP TABLE IF EXISTS t,ti`
    DropTable { tables: Vec<String>, if_exists: bool },
    /// `SET SESSION DEFAULT_STORAGE_ENGINE="TokuDB"`
    SetSession {
        variable: String,
        value: SessionValue,
    },
}

/// Right-hand side of a `SET SESSION` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionValue {
    /// Rendered in double quotes.
    Str(String),
    Int(i64),
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::CreateBinaryTable {
                table,
                column,
                width,
            } => write!(f, "CREATE TABLE {table} ({column} BINARY({width}))"),
            Statement::InsertValue { table, value } => {
                write!(f, "INSERT INTO {table} VALUES ('{value}')")
            }
            Statement::CreateLike { table, source } => {
                write!(f, "CREATE TABLE {table} LIKE {source}")
            }
            Statement::AlterEngine { table, engine } => {
                write!(f, "ALTER TABLE {table} ENGINE={engine}")
            }
            Statement::InsertSelect { table, source } => {
                write!(f, "INSERT INTO {table} SELECT * FROM {source}")
            }
            Statement::ChangeColumn {
                table,
                old,
                new,
                width,
            } => write!(
                f,
                "ALTER TABLE {table} CHANGE COLUMN {old} {new} BINARY({width})"
            ),
            Statement::DropTable { tables, if_exists } => {
                f.write_str("DROP TABLE ")?;
                if *if_exists {
                    f.write_str("IF EXISTS ")?;
                }
                // No space after the comma, matching the suite's house style.
                f.write_str(&tables.join(","))
            }
            Statement::SetSession { variable, value } => {
                write!(f, "SET SESSION {variable}={value}")
            }
        }
    }
}

impl Display for SessionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionValue::Str(s) => write!(f, "\"{s}\""),
            SessionValue::Int(v) => write!(f, "{v}"),
        }
    }
}
