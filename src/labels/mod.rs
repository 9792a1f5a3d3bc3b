mod writer;

pub use writer::{format_labels, write_labels};

#[cfg(test)]
pub mod unit_test;
