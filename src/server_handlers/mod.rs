pub mod allocate;
pub mod docs;

pub use allocate::*;
pub use docs::*;
