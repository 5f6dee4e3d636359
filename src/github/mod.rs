pub mod client;

pub use client::{ApiRepo, GitHub};
