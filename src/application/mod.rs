pub mod customer_service;
pub mod order_service;
