pub mod cart;
pub mod product_client;
