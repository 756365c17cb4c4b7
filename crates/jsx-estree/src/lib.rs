#![deny(clippy::unwrap_used)]

//! ESTree-shaped JSX trees, with a post-order rewriting walker and a
//! source renderer for diagnostics and debug output.

pub mod ast;
pub mod unparse;
pub mod walk;

pub use ast::{AttrItem, AttrValue, JsxAttr, JsxOpening, Lit, Node, Position, Span, TagName};
pub use unparse::{opening_source, to_source};
pub use walk::{Cursor, ParentInfo, Visitor, walk, walk_children};
