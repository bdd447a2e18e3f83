pub mod cors;
pub mod errors;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
