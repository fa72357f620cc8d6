pub mod toggle_like;

pub use toggle_like::toggle_like_handler;
