use contracts::domain::a002_cart::UserPrompt;
use web_sys::window;

/// `window.confirm` / `window.alert`. Both block the page until dismissed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(w) = window() {
            let _ = w.alert_with_message(message);
        }
    }
}
