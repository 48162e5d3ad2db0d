pub mod layout;
pub mod revenue;
pub mod sales;
