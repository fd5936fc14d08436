pub mod select;
pub mod sources;
