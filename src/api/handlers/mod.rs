mod projects;
mod system;

#[cfg(test)]
mod system_test;

pub use projects::*;
pub use system::*;
