// REST module - HTTP store client
pub mod client;

pub use client::RestStoreClient;
