pub mod client;
pub mod in_flight;
pub mod response;

pub use client::ApiClient;
pub use in_flight::Action;
