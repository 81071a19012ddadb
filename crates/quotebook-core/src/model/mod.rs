pub mod quote;
pub mod seed;

pub use quote::Quote;
pub use seed::seed_collection;
