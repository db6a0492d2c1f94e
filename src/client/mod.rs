//! HTTP client for the finder chart endpoint.
//!
//! The wizard hands a [`ChartRequest`] to a [`ChartTransport`]; the
//! production transport posts it as `multipart/form-data` with reqwest.

mod error;
mod http;
mod request;

pub use error::TransportError;
pub use http::{ChartTransport, HttpTransport, endpoint_url};
pub use request::{ChartRequest, ChartResponse, FormPayload, FormValue};
