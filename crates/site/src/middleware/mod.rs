//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Request ID (add unique ID to each request)
//! 4. API access log (one line per `/api` request)
//! 5. Security headers (CSP, frame, referrer policies)
//! 6. Rate limiting (governor, contact form only)

pub mod api_log;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use api_log::api_log_middleware;
pub use rate_limit::contact_rate_limiter;
pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
