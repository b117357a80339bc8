//! Presentational components

pub mod button;
pub mod card;
pub mod search;

pub use button::labeled_button;
pub use card::product_card;
pub use search::SearchBar;
