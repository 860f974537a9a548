pub mod emit;
pub mod keys;
pub mod parser;
pub mod schema;
