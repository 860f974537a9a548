pub mod cli;
pub mod youtube;
