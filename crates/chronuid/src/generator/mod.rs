mod sequence;
mod v6;
mod v7;
mod v8;

pub use sequence::*;
pub use v6::*;
pub use v7::*;
pub use v8::*;
