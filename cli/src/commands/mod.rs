mod common;
mod decode;
mod tables;

pub use common::*;
pub use decode::*;
pub use tables::*;
