pub mod customers;
pub mod orders;
