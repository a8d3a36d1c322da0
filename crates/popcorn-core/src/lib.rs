pub mod config;
pub mod detail;
pub mod error;
pub mod fetch;
pub mod models;
pub mod search;
pub mod selection;
pub mod view;
pub mod watched;

#[cfg(test)]
mod test_support;
