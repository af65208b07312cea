pub mod errors;
pub mod profiling;
pub mod thread;
