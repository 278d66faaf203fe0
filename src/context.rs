//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Participant;

/// Bottom tab bar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    List(Participant),
    #[default]
    Battle,
}

impl Tab {
    /// Display order in the tab bar
    pub const ALL: [Tab; 3] = [
        Tab::List(Participant::Boy),
        Tab::Battle,
        Tab::List(Participant::Girl),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::List(Participant::Boy) => "남자",
            Tab::List(Participant::Girl) => "여자",
            Tab::Battle => "배틀",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::List(_) => "👤",
            Tab::Battle => "📊",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Selected tab - read
    pub active_tab: ReadSignal<Tab>,
    /// Selected tab - write
    set_active_tab: WriteSignal<Tab>,
}

impl AppContext {
    pub fn new(active_tab: (ReadSignal<Tab>, WriteSignal<Tab>)) -> Self {
        Self {
            active_tab: active_tab.0,
            set_active_tab: active_tab.1,
        }
    }

    pub fn select_tab(&self, tab: Tab) {
        if self.active_tab.get_untracked() != tab {
            log::debug!("[APP] Switching to tab {:?}", tab);
            self.set_active_tab.set(tab);
        }
    }
}
