#![deny(clippy::unwrap_used)]

//! Rewrites the `<$if>`/`<$else-if>`/`<$else>`, `<$for>`, and `<$let>`
//! pseudo elements of an ESTree JSX program into plain expressions, and
//! disables the compiler's reference checks for those names.

pub mod debug;
pub mod diagnostics;
mod elements;
mod rewrite;
mod synth;

pub use diagnostics::{Message, SOURCE};
pub use rewrite::rewrite;

pub use jsx_estree as estree;
