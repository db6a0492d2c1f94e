//! Tab bar and the content panels the tabs switch between.

use std::collections::HashMap;

use super::form::Form;

/// One tab, naming the content panel it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    id: String,
    target: String,
    label: String,
    active: bool,
}

impl Tab {
    pub fn new(id: impl Into<String>, target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            label: label.into(),
            active: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the content panel this tab shows.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The ordered set of tabs, at most one of which is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabBar {
    tabs: Vec<Tab>,
}

impl TabBar {
    /// Creates a tab bar with no active tab.
    pub fn new(tabs: Vec<Tab>) -> Self {
        let tabs = tabs
            .into_iter()
            .map(|tab| Tab {
                active: false,
                ..tab
            })
            .collect();
        Self { tabs }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Deactivates every tab, then activates the one at `index`.
    ///
    /// Returns the newly active tab, or `None` (leaving the bar untouched) if
    /// `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<&Tab> {
        if index >= self.tabs.len() {
            return None;
        }
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.active = i == index;
        }
        self.tabs.get(index)
    }

    /// Returns the active tab.
    pub fn active(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.active)
    }

    /// Returns the index of the active tab.
    pub fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.active)
    }

    /// Index of the tab after the active one, wrapping around.
    pub fn next_index(&self) -> Option<usize> {
        let len = self.tabs.len();
        self.active_index().map(|i| (i + 1) % len)
    }

    /// Index of the tab before the active one, wrapping around.
    pub fn prev_index(&self) -> Option<usize> {
        let len = self.tabs.len();
        self.active_index().map(|i| (i + len - 1) % len)
    }
}

/// Holds every content panel and tracks which one is shown.
///
/// Hidden panels are kept intact so their inputs survive while another tab
/// is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentSwitcher {
    panels: HashMap<String, Form>,
    shown: Option<String>,
}

impl ContentSwitcher {
    pub fn new(panels: impl IntoIterator<Item = (String, Form)>) -> Self {
        Self {
            panels: panels.into_iter().collect(),
            shown: None,
        }
    }

    /// Shows the panel with id `id` and hides all others.
    ///
    /// An unknown id hides everything and returns `false`.
    pub fn show(&mut self, id: &str) -> bool {
        if self.panels.contains_key(id) {
            self.shown = Some(id.to_string());
            true
        } else {
            self.shown = None;
            false
        }
    }

    /// Id of the shown panel.
    pub fn shown_id(&self) -> Option<&str> {
        self.shown.as_deref()
    }

    pub fn shown(&self) -> Option<&Form> {
        self.shown.as_ref().and_then(|id| self.panels.get(id))
    }

    pub fn shown_mut(&mut self) -> Option<&mut Form> {
        self.shown.as_ref().and_then(|id| self.panels.get_mut(id))
    }

    /// Returns a panel by id, shown or not.
    pub fn panel(&self, id: &str) -> Option<&Form> {
        self.panels.get(id)
    }
}
