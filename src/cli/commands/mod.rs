pub mod dish;
pub mod product;

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;
