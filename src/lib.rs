#![doc = include_str!("../readme.md")]

pub mod assembly;
pub mod external;
pub mod options;
pub mod primitives;

#[doc(inline)]
pub use assembly::{TraceRouter, TraceSolution};
#[doc(inline)]
pub use assembly::error::AssemblyError;
