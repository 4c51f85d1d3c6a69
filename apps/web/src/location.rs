use project_board::AddressBar;
use tracing::warn;
use web_sys::Window;

use crate::describe_js_error;

/// The browser address bar, rewritten through `history.replaceState`
pub struct BrowserAddressBar {
    window: Window,
}

impl BrowserAddressBar {
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl AddressBar for BrowserAddressBar {
    fn search(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn replace_search(&mut self, query: &str) {
        let pathname = self.window.location().pathname().unwrap_or_default();
        let url = format!("{pathname}?{query}");

        let replaced = self.window.history().and_then(|history| {
            history.replace_state_with_url(&js_sys::Object::new(), "", Some(&url))
        });
        if let Err(err) = replaced {
            warn!(error = %describe_js_error(&err), url = %url, "Failed to update address");
        }
    }
}
