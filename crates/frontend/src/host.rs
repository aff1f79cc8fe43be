//! Bitrix24 embedding-host bridge

use faqdesk_session::HostBridge;
use wasm_bindgen::{JsCast, JsValue};

/// Host bridge over the `BX24` global injected by the Bitrix24
/// application frame
pub struct Bx24Host;

impl Bx24Host {
    /// Detect the Bitrix24 frame. Returns `None` when the panel runs
    /// as a plain page (local development, direct browser access).
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let bx24 = js_sys::Reflect::get(&window, &JsValue::from_str("BX24")).ok()?;

        if bx24.is_undefined() || bx24.is_null() {
            return None;
        }

        Some(Self)
    }

    fn bx24_global() -> Option<JsValue> {
        let window = web_sys::window()?;
        let bx24 = js_sys::Reflect::get(&window, &JsValue::from_str("BX24")).ok()?;

        if bx24.is_undefined() || bx24.is_null() {
            return None;
        }

        Some(bx24)
    }
}

impl HostBridge for Bx24Host {
    fn close_application(&self) {
        let Some(bx24) = Self::bx24_global() else {
            return;
        };
        let Ok(close) = js_sys::Reflect::get(&bx24, &JsValue::from_str("closeApplication")) else {
            return;
        };

        if let Some(close) = close.dyn_ref::<js_sys::Function>() {
            if let Err(err) = close.call0(&bx24) {
                tracing::warn!("BX24.closeApplication failed: {err:?}");
            }
        }
    }
}
