use jsx_estree::{Node, ParentInfo, Span, to_source};

use crate::diagnostics::{Message, fail};

/// Wrap a synthesized expression for the slot a control element vacated.
/// Markup parents take an expression container; expression parents take a
/// one-child fragment so the result is still a legal markup value.
pub(crate) fn wrap_for_parent(expression: Node, parent: Option<ParentInfo>) -> Node {
    let container = Node::JsxExpressionContainer {
        expression: Box::new(expression),
        loc: None,
    };
    match parent {
        Some(parent) if parent.markup => container,
        _ => Node::JsxFragment {
            children: vec![container],
            loc: None,
        },
    }
}

/// Collapse an element body into the expression it evaluates to. A sole
/// plain-expression child passes through bare; anything else keeps its
/// markup shape inside a fragment.
pub(crate) fn body_from_children(mut children: Vec<Node>) -> Node {
    if children.len() == 1 && !children[0].is_markup() {
        children.remove(0)
    } else {
        Node::JsxFragment {
            children,
            loc: None,
        }
    }
}

/// Check a binding expression is a plain identifier usable as a function
/// parameter, and pass it through.
pub(crate) fn identifier_pattern(
    expression: Node,
    context: &[Option<Span>],
) -> Result<Node, Message> {
    if matches!(expression, Node::Identifier { .. }) {
        Ok(expression)
    } else {
        let mut context = context.to_vec();
        context.push(expression.loc());
        Err(fail(
            format!("Bad variable pattern {}", to_source(&expression)),
            &context,
        ))
    }
}
