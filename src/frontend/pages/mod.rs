mod dish_detail;
mod product_detail;
mod search;

pub use dish_detail::DishDetail;
pub use product_detail::ProductDetail;
pub use search::Search;
