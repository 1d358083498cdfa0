//! Read-only access to the course catalog.
//!
//! - `GET /api/classes?q=...`: classes whose name or code contains every word
//!   of the query, sorted by name. An empty query returns no classes.
//! - `GET /api/classes/{code}`: one class, with the merged records of the
//!   professors who teach it. Codes are compared ignoring case and spaces.

mod detail;
mod search;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/classes";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(search::process))
        .route("/{code}", get().to(detail::process))
}
