pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;

pub static AMOUNT_MAX_DIGITS: u32 = 10;
pub static AMOUNT_DECIMAL_PLACES: u32 = 2;
