use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use crate::config::{DARK_ROOT_CLASS, THEME_STORAGE_KEY};
use crate::interaction::media::{media_query_matches, DARK_SCHEME_QUERY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// Where the theme choice survives reloads.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// The document root whose class list switches the whole page's palette.
pub trait RootClasses {
    fn set_dark(&self, dark: bool);
}

pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
            .flatten()
    }

    fn save(&self, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(THEME_STORAGE_KEY, value).is_err() {
                    debug!("theme preference not persisted");
                }
            }
        }
    }
}

pub struct DocumentRoot;

impl RootClasses for DocumentRoot {
    fn set_dark(&self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = if dark {
            classes.add_1(DARK_ROOT_CLASS)
        } else {
            classes.remove_1(DARK_ROOT_CLASS)
        };
    }
}

/// The single owner of the theme preference.
pub struct ThemeStore<S, R> {
    storage: S,
    root: R,
    current: Theme,
}

impl<S: PreferenceStore, R: RootClasses> ThemeStore<S, R> {
    /// A stored choice wins over the OS preference. Nothing is written to
    /// storage until the user toggles.
    pub fn init(storage: S, root: R, os_prefers_dark: bool) -> Self {
        let current = storage
            .load()
            .and_then(|saved| Theme::parse(&saved))
            .unwrap_or(if os_prefers_dark { Theme::Dark } else { Theme::Light });
        root.set_dark(current.is_dark());
        Self {
            storage,
            root,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.root.set_dark(self.current.is_dark());
        self.storage.save(self.current.as_str());
        self.current
    }
}

pub type BrowserThemeStore = ThemeStore<LocalStorage, DocumentRoot>;

impl BrowserThemeStore {
    pub fn from_browser() -> Self {
        Self::init(LocalStorage, DocumentRoot, media_query_matches(DARK_SCHEME_QUERY))
    }
}

/// What sections see of the theme: the current value and the only way to change it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = use_mut_ref(BrowserThemeStore::from_browser);
    let theme = use_state_eq(|| store.borrow().current());

    let toggle = {
        let store: Rc<RefCell<BrowserThemeStore>> = store.clone();
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = store.borrow_mut().toggle();
            info!("Theme switched to {}", next.as_str());
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<Option<String>>>);

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }
        fn save(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }
    }

    #[derive(Clone, Default)]
    struct FakeRoot(Rc<Cell<bool>>);

    impl RootClasses for FakeRoot {
        fn set_dark(&self, dark: bool) {
            self.0.set(dark);
        }
    }

    #[test]
    fn toggling_persists_and_applies_root_class() {
        let storage = MemoryStore::default();
        let root = FakeRoot::default();
        let mut store = ThemeStore::init(storage.clone(), root.clone(), false);
        assert_eq!(store.current(), Theme::Light);
        assert!(!root.0.get());

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.load().as_deref(), Some("dark"));
        assert!(root.0.get());

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(storage.load().as_deref(), Some("light"));
        assert!(!root.0.get());
    }

    #[test]
    fn stored_choice_beats_os_preference() {
        let storage = MemoryStore::default();
        storage.save("light");
        let root = FakeRoot::default();
        let store = ThemeStore::init(storage, root.clone(), true);
        assert_eq!(store.current(), Theme::Light);
        assert!(!root.0.get());
    }

    #[test]
    fn os_preference_applies_without_writing_storage() {
        let storage = MemoryStore::default();
        let root = FakeRoot::default();
        let store = ThemeStore::init(storage.clone(), root.clone(), true);
        assert_eq!(store.current(), Theme::Dark);
        assert!(root.0.get());
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_os() {
        let storage = MemoryStore::default();
        storage.save("sepia");
        let store = ThemeStore::init(storage, FakeRoot::default(), false);
        assert_eq!(store.current(), Theme::Light);
    }
}
