use serde::{Deserialize, Serialize};

// the single storage key the preference is persisted under
pub const STORAGE_KEY: &str = "theme";

pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    // stored preference wins, then the system preference
    pub fn initial(stored: Option<Theme>, prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // value of the data-theme attribute on the document element
    pub fn as_attr(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }

    // assets come in pairs, `logo.svg` and `logo-dark.svg`
    pub fn themed_asset(&self, path: &str) -> String {
        if *self == Theme::Light {
            return path.to_owned();
        }

        let file_start = path.rfind('/').map_or(0, |i| i + 1);

        match path[file_start..].rfind('.') {
            Some(dot) => {
                let dot = file_start + dot;
                format!("{}-dark{}", &path[..dot], &path[dot..])
            }
            None => format!("{path}-dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins() {
        assert_eq!(Theme::initial(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::initial(None, true), Theme::Dark);
        assert_eq!(Theme::initial(None, false), Theme::Light);
    }

    #[test]
    fn dark_assets_get_suffix() {
        assert_eq!(Theme::Light.themed_asset("images/logo.svg"), "images/logo.svg");
        assert_eq!(Theme::Dark.themed_asset("images/logo.svg"), "images/logo-dark.svg");
        assert_eq!(Theme::Dark.themed_asset("v1.2/hero"), "v1.2/hero-dark");
        assert_eq!(Theme::Dark.themed_asset("a.b.png"), "a.b-dark.png");
    }

    #[test]
    fn stored_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
