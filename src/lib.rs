pub mod bignum;
pub mod engine;
pub mod options;

pub use engine::{compute_factorial, parse_input, FactorialError, MAX_N};
pub use options::Options;
