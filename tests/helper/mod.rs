pub mod listing;
pub mod server;

pub use listing::{bucket_listing, nostalgia_feed};
pub use server::ListingServer;
