mod board;
mod cell;
mod mark;

pub use board::*;
pub use cell::*;
pub use mark::*;
