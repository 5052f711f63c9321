pub mod claims;
pub mod session;
pub mod token_store;

pub use claims::CurrentUser;
pub use session::Session;
pub use token_store::TokenStore;
