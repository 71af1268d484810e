pub mod controller;
pub mod participant_search;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;
