//! Read-only access to the merged professors document.
//!
//! - `GET /api/professors`: the document as last written by a merge run.
//! - `GET /api/professors/{slug}`: one professor by catalog name
//!   (`"Last, First"`), with the classes that list them, their average grade and
//!   their merged record.

mod list;
mod profile;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/professors";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{slug}", get().to(profile::process))
}
