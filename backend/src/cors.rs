//! Permissive cross-origin access: every response may be read from any
//! origin, and `OPTIONS` preflights are answered directly with `204`.

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::middleware::{DefaultHeaders, Next};
use actix_web::{Error, HttpResponse};

/// Headers added to every response, preflight answers included.
pub fn headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// Middleware function answering preflights before routing, which would
/// otherwise reply `404`/`405` to `OPTIONS`.
pub async fn answer_preflight<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    if req.method() == Method::OPTIONS {
        let res = req.into_response(HttpResponse::NoContent().finish());
        return Ok(res.map_into_right_body());
    }
    next.call(req).await.map(ServiceResponse::map_into_left_body)
}
