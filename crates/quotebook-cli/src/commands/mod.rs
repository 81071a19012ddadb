pub mod browse;
pub mod edit;
pub mod session;
pub mod transfer;
