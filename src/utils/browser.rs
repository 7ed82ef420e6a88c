use web_sys::window;

/// Native confirmation dialog; false when the window is unavailable.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
