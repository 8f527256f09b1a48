use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::config::key::{Key, KeyBinding};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalKeybindings {
    pub quit: KeyBinding,
    pub settings: KeyBinding,
    pub back: KeyBinding,
}

impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            // Plain 'q' only reaches the app when no text input consumed it.
            quit: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('q')),
                Key::with_ctrl(KeyCode::Char('q')),
            ]),
            settings: Key::with_ctrl(KeyCode::Char('s')).into(),
            back: Key::new(KeyCode::Esc).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationKeybindings {
    pub next_screen: KeyBinding,
    pub prev_screen: KeyBinding,
}

impl Default for NavigationKeybindings {
    fn default() -> Self {
        Self {
            next_screen: Key::with_ctrl(KeyCode::Char('n')).into(),
            prev_screen: Key::with_ctrl(KeyCode::Char('p')).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchKeybindings {
    pub copy: KeyBinding,
}

impl Default for SearchKeybindings {
    fn default() -> Self {
        Self {
            copy: Key::with_ctrl(KeyCode::Char('y')).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogKeybindings {
    pub dismiss: KeyBinding,
}

impl Default for DialogKeybindings {
    fn default() -> Self {
        Self {
            dismiss: KeyBinding::multiple(vec![
                Key::new(KeyCode::Enter),
                Key::new(KeyCode::Esc),
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub global: GlobalKeybindings,
    #[serde(default)]
    pub navigation: NavigationKeybindings,
    #[serde(default)]
    pub search: SearchKeybindings,
    #[serde(default)]
    pub dialog: DialogKeybindings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keybindings_deserialize_from_toml() {
        let config: KeybindingsConfig = toml::from_str(
            r#"
            [global]
            quit = "ctrl+q"
            settings = "F2"
            back = "Esc"

            [search]
            copy = ["ctrl+y", "F8"]
            "#,
        )
        .unwrap();

        assert_eq!(config.global.settings.display(), "F2");
        assert_eq!(config.search.copy.display(), "ctrl+y/F8");
        // Unspecified sections fall back to defaults.
        assert_eq!(config.navigation.next_screen.display(), "ctrl+n");
    }
}
