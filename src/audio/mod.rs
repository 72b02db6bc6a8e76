mod mixer;
mod speaker;

pub use mixer::*;
pub use speaker::*;
