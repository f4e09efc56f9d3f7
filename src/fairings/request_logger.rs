use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status, StatusClass};
use rocket::{Data, Request, Response};
use std::time::Instant;
use uuid::Uuid;

pub(crate) const REQUEST_ID_HEADER: &str = "X-Request-Id";
const MAX_REQUEST_ID_LEN: usize = 128;

/// Per-request bookkeeping kept in the request-local cache.
struct RequestMeta {
    start: Instant,
    request_id: String,
    span: tracing::Span,
}

impl RequestMeta {
    fn begin(req: &Request<'_>) -> Self {
        let request_id = request_id_from(req.headers().get_one(REQUEST_ID_HEADER));
        let span = tracing::info_span!(
            "request",
            method = %req.method(),
            uri = %req.uri(),
            request_id = %request_id,
        );
        span.in_scope(|| tracing::info!("request started"));

        Self {
            start: Instant::now(),
            request_id,
            span,
        }
    }

    /// Stand-in when the logger fairing is not attached.
    fn detached() -> Self {
        Self {
            start: Instant::now(),
            request_id: "unknown".to_string(),
            span: tracing::Span::none(),
        }
    }

    fn finish(&self, status: Status) {
        let duration_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        let code = status.code;
        let _entered = self.span.enter();

        match status.class() {
            StatusClass::ServerError => {
                tracing::error!(status = code, duration_ms, "request completed")
            }
            StatusClass::ClientError => {
                tracing::warn!(status = code, duration_ms, "request completed")
            }
            _ => tracing::info!(status = code, duration_ms, "request completed"),
        }
    }
}

/// Opens a span per request and logs its outcome.
pub struct RequestLogger;

/// Keeps a caller-supplied id when it is safe to echo back, otherwise mints one.
fn request_id_from(header: Option<&str>) -> String {
    header
        .map(str::trim)
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.is_ascii()
                && !id.chars().any(|c| c.is_control())
        })
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub(crate) fn request_span_for(req: &Request<'_>) -> tracing::Span {
    req.local_cache(RequestMeta::detached).span.clone()
}

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        let meta = RequestMeta::begin(req);
        req.local_cache(|| meta);
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let meta = req.local_cache(RequestMeta::detached);
        meta.finish(res.status());
        res.set_header(Header::new(REQUEST_ID_HEADER, meta.request_id.clone()));
    }
}
