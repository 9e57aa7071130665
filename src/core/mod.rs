pub mod cli;
pub mod models;
pub mod selection;
pub mod types;

#[cfg(test)]
mod tests;
