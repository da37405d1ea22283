//! View port
//!
//! The controller never touches the terminal directly. It reads and writes
//! text and class membership through [`ViewPort`]; the renderer paints
//! whatever the [`Screen`] holds on the next frame.

use std::collections::{HashMap, HashSet};

use crate::model::{Class, Element, Field, Slot};

/// Label of the refresh control when idle
pub const REFRESH_IDLE_LABEL: &str = "⟳ Refresh Data";

/// Label of the refresh control while a manual refresh is in flight
pub const REFRESH_BUSY_LABEL: &str = "⟳ Refreshing...";

/// Text shown in fields before the first load completes
pub const LOADING_TEXT: &str = "Loading...";

pub trait ViewPort {
    fn set_text(&mut self, slot: Slot, text: &str);
    fn text(&self, slot: Slot) -> &str;
    fn add_class(&mut self, element: Element, class: Class);
    fn remove_class(&mut self, element: Element, class: Class);
    fn has_class(&self, element: Element, class: Class) -> bool;
}

/// In-memory screen state painted by the renderer
#[derive(Debug, Clone)]
pub struct Screen {
    texts: HashMap<Slot, String>,
    classes: HashMap<Element, HashSet<Class>>,
}

impl Screen {
    pub fn new() -> Self {
        let mut texts = HashMap::new();
        for field in Field::ALL {
            texts.insert(Slot::Field(field), LOADING_TEXT.to_string());
        }
        texts.insert(Slot::RefreshLabel, REFRESH_IDLE_LABEL.to_string());
        texts.insert(Slot::ThemeIcon, String::new());

        Self {
            texts,
            classes: HashMap::new(),
        }
    }

    /// All classes currently on `element`
    pub fn classes(&self, element: Element) -> impl Iterator<Item = Class> + '_ {
        self.classes
            .get(&element)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewPort for Screen {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn text(&self, slot: Slot) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or("")
    }

    fn add_class(&mut self, element: Element, class: Class) {
        self.classes.entry(element).or_default().insert(class);
    }

    fn remove_class(&mut self, element: Element, class: Class) {
        if let Some(set) = self.classes.get_mut(&element) {
            set.remove(&class);
            if set.is_empty() {
                self.classes.remove(&element);
            }
        }
    }

    fn has_class(&self, element: Element, class: Class) -> bool {
        self.classes
            .get(&element)
            .is_some_and(|set| set.contains(&class))
    }
}
