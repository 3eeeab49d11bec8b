//! Client-local view state.
//!
//! The server keeps no session or identity, so everything here — the current
//! page, the display name, the "already voted" flag — exists only inside one
//! running client.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Vote,
    Results,
}

pub struct App {
    pub page: Page,
    pub display_name: String,
    pub tallies: HashMap<String, u32>,
    pub has_voted: bool,
    pub is_loading: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            page: Page::Login,
            display_name: String::new(),
            tallies: HashMap::new(),
            has_voted: false,
            is_loading: true,
        }
    }

    /// Leaves the login page with a trimmed, non-blank name. Login is
    /// entered once; no later transition returns here.
    pub fn login(&mut self, name: &str) -> bool {
        if self.page != Page::Login {
            return false;
        }

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.display_name = trimmed.to_string();
        self.page = Page::Vote;

        true
    }

    /// The selectable options, in stable display order.
    pub fn options(&self) -> Vec<String> {
        let mut options: Vec<String> = self.tallies.keys().cloned().collect();
        options.sort();

        options
    }

    pub fn can_vote(&self) -> bool {
        self.page == Page::Vote && !self.has_voted
    }

    pub fn mark_voted(&mut self) {
        self.has_voted = true;
    }

    pub fn show_results(&mut self) {
        if self.page == Page::Vote {
            self.page = Page::Results;
        }
    }

    pub fn back_to_vote(&mut self) {
        if self.page == Page::Results {
            self.page = Page::Vote;
        }
    }

    pub fn set_tallies(&mut self, tallies: HashMap<String, u32>) {
        self.tallies = tallies;
        self.is_loading = false;
    }
}
