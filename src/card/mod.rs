pub mod access;
pub mod copy;

pub use access::{CardContext, OWN_PROFILE_PATH};
pub use copy::{CopyIndicator, COPY_FEEDBACK};
