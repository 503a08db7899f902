use reqwest::{header::HeaderMap, StatusCode};

/// Status, headers and parsed payload of one completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct Response<T> {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<T>,
    error_body: Option<String>,
}

impl<T> Response<T> {
    pub(crate) fn success(status: StatusCode, headers: HeaderMap, body: T) -> Response<T> {
        Response {
            status,
            headers,
            body: Some(body),
            error_body: None,
        }
    }

    pub(crate) fn empty(status: StatusCode, headers: HeaderMap) -> Response<T> {
        Response {
            status,
            headers,
            body: None,
            error_body: None,
        }
    }

    pub(crate) fn failure(
        status: StatusCode,
        headers: HeaderMap,
        error_body: Option<String>,
    ) -> Response<T> {
        Response {
            status,
            headers,
            body: None,
            error_body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    pub fn error_body(&self) -> Option<&str> {
        self.error_body.as_deref()
    }

    pub fn into_body(self) -> Option<T> {
        self.body
    }
}
