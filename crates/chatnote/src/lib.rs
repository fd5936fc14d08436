pub mod annotations;
pub mod errors;
pub mod models;
pub mod stream;
