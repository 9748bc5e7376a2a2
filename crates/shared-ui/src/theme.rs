use dioxus::prelude::*;

/// Shared theme state provided as context.
///
/// The sidebar's dark/light toggle writes this signal and calls
/// [`ThemeState::apply`] to update the document.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Apply the current mode to the document.
    pub fn apply(&self) {
        set_theme(resolve_mode(*self.is_dark.read()));
    }
}

/// Resolve a dark-mode flag to the CSS `data-theme` attribute value.
pub fn resolve_mode(is_dark: bool) -> &'static str {
    if is_dark {
        "dark"
    } else {
        "light"
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document root.
/// Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        // Read theme cookie and apply data-theme attribute to <html>
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'dark';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
///
/// Uses BroadcastChannel to sync across tabs when available.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
            try {{
                var bc = new BroadcastChannel('theme-sync');
                bc.postMessage('{theme}');
                bc.close();
            }} catch(e) {{}}
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dark_flag_resolves_to_dark() {
        assert_eq!(resolve_mode(true), "dark");
        assert_eq!(resolve_mode(false), "light");
    }
}
