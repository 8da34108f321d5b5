pub mod active_tag;
pub mod feed;
pub mod layout;
pub mod prompt_card;
pub mod prompt_card_list;
pub mod search_bar;
pub mod tag_chip;
