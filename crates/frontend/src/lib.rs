//! Browser glue for the Faqdesk admin panel
//!
//! WASM-side implementations of the session capabilities (localStorage
//! persistence, address-bar access, the optional `BX24` host bridge)
//! plus the process-wide API client. Panel pages call [`init`] once on
//! page readiness, then reach the API through
//! [`client::create_client`] or the services.

pub mod client;
pub mod host;
pub mod location;
pub mod services;
pub mod storage;

pub use client::{create_client, session};
pub use host::Bx24Host;
pub use location::BrowserLocation;
pub use services::AuthService;
pub use storage::BrowserStorage;

use tracing_subscriber::prelude::*;

/// Page-readiness entry point. Installs the console tracing
/// subscriber and panic hook, then runs the one-time token bootstrap
/// check. Call exactly once per page load.
pub fn init() {
    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(fmt_layer).init();

    session().startup_check();
}
