//! Address-bar location capability

use faqdesk_session::{LocationBackend, SessionError, SessionResult};
use wasm_bindgen::JsValue;

/// Location backend over `window.location` and `history.replaceState`
pub struct BrowserLocation;

fn location_error(err: JsValue) -> SessionError {
    SessionError::location(format!("{err:?}"))
}

impl LocationBackend for BrowserLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        params.get(name)
    }

    fn strip_query(&self) -> SessionResult<()> {
        let window =
            web_sys::window().ok_or_else(|| SessionError::location("no window object"))?;
        let location = window.location();

        let pathname = location.pathname().map_err(location_error)?;
        let hash = location.hash().map_err(location_error)?;
        let clean = format!("{pathname}{hash}");

        // replaceState keeps the page in place, no navigation, no reload
        window
            .history()
            .map_err(location_error)?
            .replace_state_with_url(&JsValue::NULL, "", Some(&clean))
            .map_err(location_error)
    }
}
