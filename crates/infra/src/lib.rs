pub mod db;
pub mod filter;
pub mod memory;
pub mod models;
pub mod repos;
