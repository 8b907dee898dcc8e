pub mod healthcheck;
pub mod pages;
pub mod session_start;
