//! HTML views
//!
//! Plain string rendering; every interpolated value goes through [`escape`].

use axum::response::Html;

use crate::models::{Book, BookForm};

/// Model behind the `/data` demo page
#[derive(Debug, Clone)]
pub struct DataModel {
    pub title: String,
    pub items: Vec<String>,
}

impl Default for DataModel {
    fn default() -> Self {
        Self {
            title: "Test".to_owned(),
            items: vec!["one".into(), "two".into(), "three".into()],
        }
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
  <nav><a href="/">Home</a> | <a href="/about">About</a> | <a href="/data">Data</a> | <a href="/books">Books</a></nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

pub fn index() -> Html<String> {
    layout("Home", "<h1>Home</h1>\n<p>A small catalogue of books.</p>")
}

pub fn about() -> Html<String> {
    layout(
        "About",
        "<h1>About</h1>\n<p>Lists, creates, edits and deletes books stored in PostgreSQL.</p>",
    )
}

pub fn data(model: &DataModel) -> Html<String> {
    let mut body = format!("<h1>{}</h1>\n<ul>\n", escape(&model.title));
    for item in &model.items {
        body.push_str(&format!("  <li>{}</li>\n", escape(item)));
    }
    body.push_str("</ul>");
    layout("Data", &body)
}

/// Table of books in the order given.
pub fn books(books: &[Book]) -> Html<String> {
    let mut body = String::from(
        "<h1>Books</h1>\n<p><a href=\"/create\">Add a book</a></p>\n<table>\n  <thead><tr><th>Title</th><th>Author</th><th>Comments</th><th></th></tr></thead>\n  <tbody>\n",
    );
    for book in books {
        body.push_str(&format!(
            "    <tr data-id=\"{id}\"><td>{title}</td><td>{author}</td><td>{comments}</td><td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
            id = book.id,
            title = escape(&book.title),
            author = escape(&book.author),
            comments = escape(book.comments.as_deref().unwrap_or_default()),
        ));
    }
    body.push_str("  </tbody>\n</table>");
    layout("Books", &body)
}

fn form_fields(form: &BookForm, readonly: bool) -> String {
    let ro = if readonly { " readonly" } else { "" };
    let value = |field: &Option<String>| escape(field.as_deref().unwrap_or_default());
    format!(
        r#"  <p><label>Title <input name="title" maxlength="100" value="{title}"{ro}></label></p>
  <p><label>Author <input name="author" maxlength="100" value="{author}"{ro}></label></p>
  <p><label>Comments <textarea name="comments"{ro}>{comments}</textarea></label></p>
"#,
        title = value(&form.title),
        author = value(&form.author),
        comments = value(&form.comments),
    )
}

/// Blank (or default-filled) form posting to `/create`.
pub fn create_form(form: &BookForm) -> Html<String> {
    let body = format!(
        "<h1>Add a book</h1>\n<form method=\"post\" action=\"/create\">\n{}  <button type=\"submit\">Save</button> <a href=\"/books\">Cancel</a>\n</form>",
        form_fields(form, false),
    );
    layout("Add a book", &body)
}

/// Form pre-filled from `book`, posting to `/edit/{id}`.
pub fn edit_form(book: &Book) -> Html<String> {
    let body = format!(
        "<h1>Edit book #{id}</h1>\n<form method=\"post\" action=\"/edit/{id}\">\n{fields}  <button type=\"submit\">Save</button> <a href=\"/books\">Cancel</a>\n</form>",
        id = book.id,
        fields = form_fields(&BookForm::from(book), false),
    );
    layout("Edit book", &body)
}

/// Read-only view of `book` with a confirm button posting to `/delete/{id}`.
pub fn delete_confirm(book: &Book) -> Html<String> {
    let body = format!(
        "<h1>Delete book #{id}?</h1>\n<form method=\"post\" action=\"/delete/{id}\">\n{fields}  <button type=\"submit\">Delete</button> <a href=\"/books\">Cancel</a>\n</form>",
        id = book.id,
        fields = form_fields(&BookForm::from(book), true),
    );
    layout("Delete book", &body)
}

pub fn not_found(message: &str) -> Html<String> {
    let body = format!(
        "<h1>Not Found</h1>\n<p>{}</p>\n<p><a href=\"/books\">Back to the list</a></p>",
        escape(message)
    );
    layout("Not Found", &body)
}

/// 4xx page headed by the status reason, e.g. "Bad Request".
pub fn client_error(reason: &str, message: &str) -> Html<String> {
    let body = format!("<h1>{}</h1>\n<p>{}</p>", escape(reason), escape(message));
    layout(reason, &body)
}

pub fn server_error() -> Html<String> {
    layout("Error", "<h1>Internal Server Error</h1>")
}
