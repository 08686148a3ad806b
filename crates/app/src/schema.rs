//! Schema bootstrap.
//!
//! The schema ships as a fixed, ordered set of idempotent SQL files embedded at
//! build time. Each file runs as one multi-statement batch; a failing file is
//! logged and skipped so the remaining files still get a chance to apply.

use sqlx::{PgPool, raw_sql};
use tracing::{error, info};

/// An embedded schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaFile {
    pub name: &'static str,
    pub sql: &'static str,
}

pub const CREATE_BOOKS_TABLE: SchemaFile = SchemaFile {
    name: "001_create_books_table.sql",
    sql: include_str!("../../../migrations/001_create_books_table.sql"),
};

pub const ADD_BOOK_FIELDS: SchemaFile = SchemaFile {
    name: "002_add_book_fields_up.sql",
    sql: include_str!("../../../migrations/002_add_book_fields_up.sql"),
};

pub const INSERT_SAMPLE_BOOKS: SchemaFile = SchemaFile {
    name: "003_insert_sample_books.sql",
    sql: include_str!("../../../migrations/003_insert_sample_books.sql"),
};

/// Every schema file, in application order.
pub const SCHEMA_FILES: [SchemaFile; 3] = [CREATE_BOOKS_TABLE, ADD_BOOK_FIELDS, INSERT_SAMPLE_BOOKS];

/// Structural files only, without sample data.
pub const STRUCTURE_FILES: [SchemaFile; 2] = [CREATE_BOOKS_TABLE, ADD_BOOK_FIELDS];

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub applied: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

impl BootstrapReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Apply the given files in order, continuing past failures.
pub async fn apply(pool: &PgPool, files: &[SchemaFile]) -> BootstrapReport {
    let mut report = BootstrapReport::default();

    for file in files {
        match raw_sql(file.sql).execute(pool).await {
            Ok(_) => {
                info!(file = file.name, "schema file applied");

                report.applied.push(file.name);
            }
            Err(source) => {
                error!(file = file.name, error = %source, "schema file failed");

                report.failed.push(file.name);
            }
        }
    }

    report
}

/// Apply every schema file, sample data included.
pub async fn bootstrap(pool: &PgPool) -> BootstrapReport {
    apply(pool, &SCHEMA_FILES).await
}
