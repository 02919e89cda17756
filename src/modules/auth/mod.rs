pub mod api;
pub mod credentials;
pub mod token;
pub mod types;
