pub mod plot;
pub mod writer;
