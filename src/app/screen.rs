// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Tab;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Records,
    Submit,
    Settings,
}

impl Screen {
    /// The navbar tab representing this screen.
    #[must_use]
    pub fn tab(self) -> Tab {
        match self {
            Screen::Dashboard => Tab::Dashboard,
            Screen::Records => Tab::Records,
            Screen::Submit => Tab::Submit,
            Screen::Settings => Tab::Settings,
        }
    }
}

impl From<Tab> for Screen {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Dashboard => Screen::Dashboard,
            Tab::Records => Screen::Records,
            Tab::Submit => Screen::Submit,
            Tab::Settings => Screen::Settings,
        }
    }
}
