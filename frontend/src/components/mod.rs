pub mod event_card;
pub mod event_list;
pub mod filter_controls;
pub mod header;
