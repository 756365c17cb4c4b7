use std::path::Path;

use jsx_estree::{Cursor, Lit, Node, Visitor, to_source, walk};

use crate::debug::{Channels, channels};
use crate::diagnostics::Message;
use crate::elements::{ControlTag, control_tag, orphan_branch};

/// Helper the upstream compiler emits to check every referenced component
/// name. Its checks for the control names must be disabled once those
/// elements are rewritten away.
pub(crate) const MISSING_REFERENCE_HELPER: &str = "_missingMdxReference";

/// Rewrite every control construct in `program`, bottom-up. `path` names
/// the file in debug dumps only. The first fault stops the pass with the
/// tree mid-rewrite; callers should discard it.
pub fn rewrite(program: &mut Node, path: &Path) -> Result<(), Message> {
    let channels = channels();
    if channels.file {
        eprintln!(
            "[jsx-if-for] OLD {}\n{}",
            path.display(),
            to_source(program)
        );
    }
    if channels.tree {
        eprintln!("[jsx-if-for] OLD {}\n{}", path.display(), tree_dump(program));
    }
    walk(program, &mut Rewriter { channels })?;
    if channels.file {
        eprintln!(
            "[jsx-if-for] NEW {}\n{}",
            path.display(),
            to_source(program)
        );
    }
    if channels.tree {
        eprintln!("[jsx-if-for] NEW {}\n{}", path.display(), tree_dump(program));
    }
    Ok(())
}

fn tree_dump(program: &Node) -> String {
    serde_json::to_string_pretty(program)
        .unwrap_or_else(|error| format!("tree not dumpable: {error}"))
}

pub(crate) struct Rewriter {
    pub(crate) channels: Channels,
}

impl Visitor for Rewriter {
    type Error = Message;

    fn leave(&mut self, cursor: &mut Cursor<'_>) -> Result<(), Message> {
        match control_tag(cursor.node()) {
            Some(ControlTag::For) => return self.rewrite_for(cursor),
            Some(ControlTag::If) => return self.rewrite_if_chain(cursor),
            Some(ControlTag::ElseIf | ControlTag::Else) => return Err(orphan_branch(cursor)),
            Some(ControlTag::Let) => return self.rewrite_let(cursor),
            None => {}
        }
        let disable = match cursor.node() {
            Node::ExpressionStatement { expression, .. } => is_reference_guard(expression),
            _ => false,
        };
        if disable {
            if self.channels.rewrite {
                eprintln!("[jsx-if-for] disabling {}", to_source(cursor.node()));
            }
            cursor.replace(Node::EmptyStatement { loc: None });
        }
        Ok(())
    }
}

/// True for `_missingMdxReference("$tag", …)` calls that name one of the
/// control elements.
fn is_reference_guard(expression: &Node) -> bool {
    let Node::CallExpression {
        callee, arguments, ..
    } = expression
    else {
        return false;
    };
    let Node::Identifier { name, .. } = callee.as_ref() else {
        return false;
    };
    name == MISSING_REFERENCE_HELPER
        && matches!(
            arguments.first(),
            Some(Node::Literal {
                value: Lit::Str(tag),
                ..
            }) if ControlTag::from_name(tag).is_some()
        )
}
