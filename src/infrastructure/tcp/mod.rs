// TCP module - Line-framed notification transport
pub mod client;

pub use client::TcpLineTransport;
