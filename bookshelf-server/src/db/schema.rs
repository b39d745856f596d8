//! Schema setup for the `Books` table
//!
//! Idempotent: safe to run on every start. Seed rows carry fixed ids, so a
//! second run skips them on primary-key conflict.

use super::pool::{Database, DbError, SqlParam};

/// Fixed rows inserted on first run: (id, title, author, comments)
pub const SEED_BOOKS: [(i32, &str, &str, &str); 3] = [
    (1, "Mrs. Bridge", "Evan S. Connell", "First in the series"),
    (2, "Mr. Bridge", "Evan S. Connell", "Second in the series"),
    (3, "L'ingénue libertine", "Colette", "Minne + Les égarements de Minne"),
];

const CREATE_BOOKS: &str = r#"
    CREATE TABLE IF NOT EXISTS Books (
        Book_ID SERIAL PRIMARY KEY,
        Title VARCHAR(100) NOT NULL,
        Author VARCHAR(100) NOT NULL,
        Comments TEXT
    )
"#;

const INSERT_SEEDS: &str = r#"
    INSERT INTO Books (Book_ID, Title, Author, Comments) VALUES
        ($1, $2, $3, $4),
        ($5, $6, $7, $8),
        ($9, $10, $11, $12)
    ON CONFLICT DO NOTHING
"#;

// Explicit ids bypass the serial sequence; move it past them so the next
// generated id is fresh. Never moves the sequence backwards.
const SYNC_SEQUENCE: &str = r#"
    WITH seq AS (SELECT pg_get_serial_sequence('books', 'book_id') AS name)
    SELECT setval(
        seq.name,
        GREATEST(COALESCE((SELECT MAX(Book_ID) FROM Books), 0), nextval(seq.name) - 1, 1)
    )
    FROM seq
"#;

/// Outcome of [`ensure_schema`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaReport {
    /// Seed rows inserted by this run (0 once the table is seeded)
    pub seeded: u64,
}

/// Create the `Books` table if missing and insert the seed rows.
pub async fn ensure_schema(db: &Database) -> Result<SchemaReport, DbError> {
    tracing::info!("Setting up the database...");

    db.execute(CREATE_BOOKS, &[]).await?;
    tracing::info!("Table 'Books' ready");

    let seeded = db.execute_count(INSERT_SEEDS, &seed_params()).await?;
    db.execute(SYNC_SEQUENCE, &[]).await?;
    tracing::info!(seeded, "Initial books data seeded");

    Ok(SchemaReport { seeded })
}

fn seed_params() -> Vec<SqlParam> {
    SEED_BOOKS
        .iter()
        .flat_map(|&(id, title, author, comments)| {
            [
                SqlParam::from(id),
                SqlParam::from(title),
                SqlParam::from(author),
                SqlParam::from(comments),
            ]
        })
        .collect()
}
