use actix_web::{get, HttpRequest, HttpResponse};

/// Diagnostic: logs the query string, answers with an empty body.
#[get("/")]
pub async fn index(req: HttpRequest) -> HttpResponse {
    tracing::info!(query = req.query_string(), "root requested");
    HttpResponse::Ok().finish()
}
