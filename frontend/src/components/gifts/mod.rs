pub mod comments_panel;
pub mod gift_status_modal;
pub mod gift_table;

pub use gift_table::GiftTable;
