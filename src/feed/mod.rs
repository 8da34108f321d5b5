pub mod debounce;
pub mod filter;
pub mod state;

pub use debounce::{CancelTimer, Debounce, SEARCH_DEBOUNCE};
pub use filter::{filter_by_tag, filter_prompts};
pub use state::{FeedState, SearchTicket};
