use jsx_estree::Span;
use serde::Serialize;

/// Source tag stamped on every message this crate raises.
pub const SOURCE: &str = "jsx-if-for";

/// A fatal rewrite diagnostic. `Display` is the bare message text; the
/// serialized form matches the upstream message schema.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct Message {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<Span>,
    /// Serialized as `source`; the error derive reserves that field name
    /// for cause chains, so the Rust field is `origin`.
    #[serde(rename = "source")]
    pub origin: &'static str,
    pub fatal: bool,
}

/// Build a fatal message placed at the innermost known span. `context`
/// lists candidate spans from outermost to innermost; synthesized nodes
/// contribute `None` and are skipped.
pub(crate) fn fail(message: impl Into<String>, context: &[Option<Span>]) -> Message {
    Message {
        message: message.into(),
        place: context.iter().rev().find_map(|span| *span),
        origin: SOURCE,
        fatal: true,
    }
}
