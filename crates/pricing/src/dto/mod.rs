pub mod calculation;
pub mod combined;
pub mod config;
pub mod payment;
