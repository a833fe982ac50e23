pub mod product_card;
pub mod search_input;

pub use product_card::ProductCard;
pub use search_input::SearchInput;
