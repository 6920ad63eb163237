pub mod problem;
pub mod rest;
