mod client;
pub mod response;

pub use client::{PracticumClient, StatusSource};
