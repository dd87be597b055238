pub mod reports;
pub mod sampler;
pub mod tester;

pub use tester::*;
