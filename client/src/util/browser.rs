//! Location, dialog, and local-date access through `window`.
//!
//! Client-side (csr) only; native builds see an empty path, ignore
//! redirects, auto-confirm, and use UTC for the local date.

use session::Navigator;

/// `window.location` as a `session::Navigator`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    log::error!("failed to navigate to {path}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}

/// Today's date in the browser's local time zone.
pub fn today() -> Option<time::Date> {
    use session::Clock as _;

    let now = session::SystemClock.now_millis();
    #[cfg(feature = "csr")]
    #[allow(clippy::cast_possible_truncation)]
    let offset_minutes = js_sys::Date::new_0().get_timezone_offset() as i64;
    #[cfg(not(feature = "csr"))]
    let offset_minutes = 0_i64;
    // getTimezoneOffset is UTC minus local.
    session::validation::utc_date(now - offset_minutes * 60_000)
}
