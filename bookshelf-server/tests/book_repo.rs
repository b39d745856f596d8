//! Repository and schema tests against a live database
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p bookshelf-server -- --ignored

mod common;

use bookshelf_server::db::schema::SEED_BOOKS;
use bookshelf_server::{ensure_schema, BookForm, BookRepo};

use common::TestDb;

#[tokio::test]
#[ignore = "requires database"]
async fn schema_setup_is_idempotent() {
    let test_db = TestDb::new().await;

    let first = ensure_schema(&test_db.db).await.unwrap();
    assert_eq!(first.seeded, 3);

    let second = ensure_schema(&test_db.db).await.unwrap();
    assert_eq!(second.seeded, 0);

    let books = BookRepo::new(&test_db.db).list_all().await.unwrap();
    assert_eq!(books.len(), SEED_BOOKS.len());

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_is_ordered_by_title() {
    let test_db = TestDb::new().await;
    ensure_schema(&test_db.db).await.unwrap();
    let repo = BookRepo::new(&test_db.db);

    repo.create(&BookForm::new("Chéri", "Colette", "")).await.unwrap();
    repo.create(&BookForm::new("Gigi", "Colette", "")).await.unwrap();

    let titles: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles[..3], ["Chéri", "Gigi", "L'ingénue libertine"]);
    assert_eq!(titles[3..], ["Mr. Bridge", "Mrs. Bridge"]);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_assigns_fresh_id_after_seeds() {
    let test_db = TestDb::new().await;
    ensure_schema(&test_db.db).await.unwrap();
    let repo = BookRepo::new(&test_db.db);

    let before = repo.list_all().await.unwrap();
    let id = repo.create(&BookForm::new("Foo", "Bar", "")).await.unwrap();
    let after = repo.list_all().await.unwrap();

    assert!(before.iter().all(|b| b.id != id));
    assert_eq!(after.len(), before.len() + 1);
    let created: Vec<_> = after.iter().filter(|b| b.id == id).collect();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].title, "Foo");
    assert_eq!(created[0].author, "Bar");
    assert_eq!(created[0].comments.as_deref(), Some(""));

    // Re-running setup must not rewind the sequence
    ensure_schema(&test_db.db).await.unwrap();
    let next = repo.create(&BookForm::new("Baz", "Qux", "")).await.unwrap();
    assert!(next > id);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_then_get() {
    let test_db = TestDb::new().await;
    ensure_schema(&test_db.db).await.unwrap();
    let repo = BookRepo::new(&test_db.db);

    let affected = repo
        .update_by_id(1, &BookForm::new("Mrs. Bridge", "Evan S. Connell", "Re-read"))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let book = repo.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(book.id, 1);
    assert_eq!(book.comments.as_deref(), Some("Re-read"));

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn absent_comments_are_stored_as_null() {
    let test_db = TestDb::new().await;
    ensure_schema(&test_db.db).await.unwrap();
    let repo = BookRepo::new(&test_db.db);

    let form = BookForm {
        title: Some("Foo".into()),
        author: Some("Bar".into()),
        comments: None,
    };
    let id = repo.create(&form).await.unwrap();
    assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().comments, None);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_then_get_is_none() {
    let test_db = TestDb::new().await;
    ensure_schema(&test_db.db).await.unwrap();
    let repo = BookRepo::new(&test_db.db);

    assert_eq!(repo.delete_by_id(2).await.unwrap(), 1);
    assert!(repo.get_by_id(2).await.unwrap().is_none());
    assert_eq!(repo.delete_by_id(2).await.unwrap(), 0);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_id_writes_are_no_ops() {
    let test_db = TestDb::new().await;
    ensure_schema(&test_db.db).await.unwrap();
    let repo = BookRepo::new(&test_db.db);

    let affected = repo
        .update_by_id(999, &BookForm::new("X", "Y", ""))
        .await
        .unwrap();
    assert_eq!(affected, 0);
    assert_eq!(repo.delete_by_id(999).await.unwrap(), 0);
    assert_eq!(repo.list_all().await.unwrap().len(), 3);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn storage_enforces_not_null_and_length() {
    let test_db = TestDb::new().await;
    ensure_schema(&test_db.db).await.unwrap();
    let repo = BookRepo::new(&test_db.db);

    let no_title = BookForm {
        title: None,
        ..BookForm::new("", "Bar", "")
    };
    assert!(repo.create(&no_title).await.is_err());

    let long_title = "x".repeat(101);
    assert!(repo.create(&BookForm::new(&long_title, "Bar", "")).await.is_err());

    test_db.cleanup().await;
}
