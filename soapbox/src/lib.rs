pub mod errors;
pub mod store;
pub mod utils;
pub mod wallet;

pub use store::SocialStore;
