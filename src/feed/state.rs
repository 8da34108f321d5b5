use crate::model::prompt::Prompt;

use super::filter::{filter_by_tag, filter_prompts};

/// Identifies one scheduled search. Only the most recent ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Everything the feed owns between mount and unmount.
///
/// The visible list is `filtered` while a search text or an active tag is in
/// effect and `all` otherwise. `filtered` is a cache: it only changes when a
/// search runs, a tag is clicked, or the filter is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    all: Vec<Prompt>,
    search_text: String,
    active_tag: Option<String>,
    filtered: Vec<Prompt>,
    search_generation: u64,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, prompts: Vec<Prompt>) {
        self.all = prompts;
    }

    /// Records a keystroke. The returned ticket must be passed to
    /// [`FeedState::run_search`] once the quiet period has elapsed.
    pub fn search_input(&mut self, raw: impl Into<String>) -> SearchTicket {
        self.search_text = raw.into();
        self.active_tag = None;
        self.search_generation += 1;
        SearchTicket(self.search_generation)
    }

    /// Recomputes `filtered` from the current search text. Returns false and
    /// leaves the state untouched when the ticket has been superseded.
    pub fn run_search(&mut self, ticket: SearchTicket) -> bool {
        if ticket.0 != self.search_generation {
            return false;
        }
        self.filtered = filter_prompts(&self.all, &self.search_text);
        true
    }

    pub fn tag_click(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        self.search_text.clear();
        // A search scheduled before the click must not overwrite its result.
        self.search_generation += 1;
        self.filtered = filter_by_tag(&self.all, &tag);
        self.active_tag = Some(tag);
    }

    pub fn clear_filter(&mut self) {
        self.active_tag = None;
        self.filtered.clear();
    }

    pub fn visible(&self) -> &[Prompt] {
        if !self.search_text.is_empty() || self.active_tag.is_some() {
            &self.filtered
        } else {
            &self.all
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }
}
