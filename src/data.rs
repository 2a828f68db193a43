mod task;
pub use task::*;
