//! Terminal wizard for requesting astronomical finder charts.
//!
//! - [`model`]: modes, FITS sources and the server's error map.
//! - [`wizard`]: the tab/form state controller.
//! - [`client`]: the HTTP transport for the finder chart endpoint.
//! - [`tui`]: screens, widgets and the event loop.

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod tui;
pub mod wizard;
