pub mod runtime;

pub use runtime::{block_on, GLOBAL_RUNTIME};
