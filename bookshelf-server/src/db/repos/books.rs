//! Book repository
//!
//! - list: ordered by title (collation decides case handling)
//! - get: absent row is `None`, not an error
//! - update/delete: missing id is a no-op, reported as 0 rows affected

use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::db::pool::{Database, DbError, SqlParam};
use crate::models::{Book, BookForm};

const SELECT_ALL: &str =
    "SELECT Book_ID, Title, Author, Comments FROM Books ORDER BY Title";

const SELECT_ONE: &str =
    "SELECT Book_ID, Title, Author, Comments FROM Books WHERE Book_ID = $1";

const INSERT: &str =
    "INSERT INTO Books (Title, Author, Comments) VALUES ($1, $2, $3) RETURNING Book_ID";

const UPDATE: &str =
    "UPDATE Books SET Title = $1, Author = $2, Comments = $3 WHERE (Book_ID = $4)";

const DELETE: &str = "DELETE FROM Books WHERE Book_ID = $1";

/// Book repository
pub struct BookRepo<'a> {
    db: &'a Database,
}

impl<'a> BookRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All books, ascending by title.
    pub async fn list_all(&self) -> Result<Vec<Book>, DbError> {
        let rows = self.db.execute(SELECT_ALL, &[]).await?;
        rows.iter().map(decode).collect()
    }

    /// The book with `id`, or `None` when no row matches.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, DbError> {
        let rows = self.db.execute(SELECT_ONE, &[SqlParam::Int(id)]).await?;
        rows.first().map(decode).transpose()
    }

    /// Insert a new book and return its generated id.
    pub async fn create(&self, form: &BookForm) -> Result<i32, DbError> {
        let rows = self.db.execute(INSERT, &field_params(form)).await?;
        let row = rows
            .first()
            .ok_or(DbError::Query(sqlx::Error::RowNotFound))?;
        let id: i32 = row.try_get("book_id").map_err(DbError::Query)?;

        tracing::debug!(id, "book created");
        Ok(id)
    }

    /// Overwrite every field of book `id`. Returns rows affected (0 or 1).
    pub async fn update_by_id(&self, id: i32, form: &BookForm) -> Result<u64, DbError> {
        let mut params = field_params(form).to_vec();
        params.push(SqlParam::Int(id));

        let affected = self.db.execute_count(UPDATE, &params).await?;
        tracing::debug!(id, affected, "book updated");
        Ok(affected)
    }

    /// Delete book `id`. Returns rows affected (0 or 1).
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, DbError> {
        let affected = self.db.execute_count(DELETE, &[SqlParam::Int(id)]).await?;
        tracing::debug!(id, affected, "book deleted");
        Ok(affected)
    }
}

fn field_params(form: &BookForm) -> [SqlParam; 3] {
    [
        SqlParam::Text(form.title.clone()),
        SqlParam::Text(form.author.clone()),
        SqlParam::Text(form.comments.clone()),
    ]
}

fn decode(row: &PgRow) -> Result<Book, DbError> {
    Book::from_row(row).map_err(DbError::Query)
}
