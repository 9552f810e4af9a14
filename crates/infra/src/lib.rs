pub mod db;
pub mod models;
pub mod repos;
pub mod rewards;
