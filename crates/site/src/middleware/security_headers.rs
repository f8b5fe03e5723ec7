//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! The page embeds third-party videos, so the CSP admits the video SDK
//! script and player frames and nothing else from outside the origin.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

/// Content Security Policy for the site and its API.
const CSP: &str = "default-src 'self'; \
     script-src 'self' https://connect.facebook.net; \
     style-src 'self' 'unsafe-inline'; \
     font-src 'self' data:; \
     img-src 'self' data: https:; \
     connect-src 'self'; \
     frame-src https://www.facebook.com https://web.facebook.com; \
     object-src 'none'; \
     base-uri 'self'; \
     form-action 'self'; \
     frame-ancestors 'none'";

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: strict-origin-when-cross-origin` - Embeds still see the origin
/// - `Content-Security-Policy` - See [`CSP`]
/// - `Permissions-Policy` - Media features only for the video player
/// - `Cross-Origin-Opener-Policy: same-origin-allow-popups` - Share dialogs still open
/// - `Cache-Control: no-store` - API responses only
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let is_api = request.uri().path().starts_with("/api/");
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(CONTENT_SECURITY_POLICY, HeaderValue::from_static(CSP));

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "autoplay=(self \"https://www.facebook.com\"), \
             encrypted-media=(self \"https://www.facebook.com\"), \
             fullscreen=(self \"https://www.facebook.com\"), \
             picture-in-picture=(self \"https://www.facebook.com\"), \
             camera=(), \
             microphone=(), \
             geolocation=(), \
             payment=(), \
             usb=(), \
             interest-cohort=()",
        ),
    );

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin-allow-popups"),
    );

    // Listings change whenever content is edited; static assets keep their own caching.
    if is_api {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http::Request as HttpRequest, routing::get};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/api/content", get(|| async { "[]" }))
            .route("/index.html", get(|| async { "<html></html>" }))
            .layer(axum::middleware::from_fn(security_headers_middleware))
    }

    #[tokio::test]
    async fn test_api_responses_are_not_cached() {
        let response = app()
            .oneshot(HttpRequest::get("/api/content").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let headers = response.headers();
        assert_eq!(headers[X_FRAME_OPTIONS], "DENY");
        assert_eq!(headers[CACHE_CONTROL], "no-store, max-age=0");
        assert!(
            headers[CONTENT_SECURITY_POLICY]
                .to_str()
                .unwrap()
                .contains("frame-src https://www.facebook.com")
        );
    }

    #[tokio::test]
    async fn test_pages_keep_cacheability() {
        let response = app()
            .oneshot(HttpRequest::get("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().get(CACHE_CONTROL).is_none());
        assert_eq!(response.headers()[X_CONTENT_TYPE_OPTIONS], "nosniff");
    }
}
