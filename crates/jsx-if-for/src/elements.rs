use jsx_estree::{
    AttrItem, AttrValue, Cursor, JsxAttr, Lit, Node, Span, TagName, opening_source, walk_children,
};

use crate::diagnostics::{Message, fail};
use crate::rewrite::Rewriter;
use crate::synth::{body_from_children, identifier_pattern, wrap_for_parent};

/// The recognized control pseudo-elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlTag {
    For,
    If,
    ElseIf,
    Else,
    Let,
}

impl ControlTag {
    pub(crate) fn from_name(name: &str) -> Option<ControlTag> {
        match name {
            "$for" => Some(ControlTag::For),
            "$if" => Some(ControlTag::If),
            "$else-if" => Some(ControlTag::ElseIf),
            "$else" => Some(ControlTag::Else),
            "$let" => Some(ControlTag::Let),
            _ => None,
        }
    }
}

/// Tag of `node` when it is a control element. Only elements with a plain
/// identifier name participate; `<a.b>` never dispatches.
pub(crate) fn control_tag(node: &Node) -> Option<ControlTag> {
    let Node::JsxElement { opening, .. } = node else {
        return None;
    };
    let TagName::Ident { name, .. } = &opening.name else {
        return None;
    };
    ControlTag::from_name(name)
}

struct SplitAttrs<const N: usize> {
    /// Attributes matched by name, in `names` order. Later duplicates win.
    found: [Option<JsxAttr>; N],
    /// Span of the first attribute that matched no name. Spread
    /// attributes are never expected.
    unexpected: Option<Option<Span>>,
}

fn split_attrs<const N: usize>(attributes: Vec<AttrItem>, names: [&str; N]) -> SplitAttrs<N> {
    let mut found: [Option<JsxAttr>; N] = std::array::from_fn(|_| None);
    let mut unexpected = None;
    for item in attributes {
        match item {
            AttrItem::Attribute(attr) => {
                if let Some(slot) = names.iter().position(|name| attr.name == *name) {
                    found[slot] = Some(attr);
                } else if unexpected.is_none() {
                    unexpected = Some(attr.loc);
                }
            }
            AttrItem::Spread { loc, .. } => {
                if unexpected.is_none() {
                    unexpected = Some(loc);
                }
            }
        }
    }
    SplitAttrs { found, unexpected }
}

/// Unwrap an attribute that must carry a `={expression}` value, yielding
/// the expression and the attribute's span.
fn require_expr(
    attr: Option<JsxAttr>,
    what: &str,
    open_src: &str,
    context: &[Option<Span>],
) -> Result<(Node, Option<Span>), Message> {
    match attr {
        Some(JsxAttr {
            value: Some(AttrValue::Container { expression, .. }),
            loc,
            ..
        }) => Ok((*expression, loc)),
        _ => Err(fail(format!("Need {what} in {open_src}"), context)),
    }
}

fn with_loc(context: &[Option<Span>], loc: Option<Span>) -> Vec<Option<Span>> {
    let mut context = context.to_vec();
    context.push(loc);
    context
}

impl Rewriter {
    /// `<$for var={x} of={xs}>…</$for>` becomes `xs.map((x) => …)`.
    pub(crate) fn rewrite_for(&mut self, cursor: &mut Cursor<'_>) -> Result<(), Message> {
        let parent = cursor.parent();
        let node_loc = cursor.node().loc();
        let Node::JsxElement {
            opening, children, ..
        } = cursor.take()
        else {
            unreachable!("dispatched on a control element");
        };
        let open_src = opening_source(&opening);
        let context = [parent.and_then(|info| info.loc), node_loc, opening.loc];
        if self.channels.rewrite {
            eprintln!("[jsx-if-for] rewriting {open_src}");
        }
        let split = split_attrs(opening.attributes, ["var", "of"]);
        let [var, of] = split.found;
        let (var_expr, var_loc) = require_expr(var, "var={name}", &open_src, &context)?;
        let (of_expr, _) = require_expr(of, "of={expression}", &open_src, &context)?;
        if let Some(loc) = split.unexpected {
            return Err(fail(
                format!("Bad attribute in {open_src}"),
                &with_loc(&context, loc),
            ));
        }
        let param = identifier_pattern(var_expr, &with_loc(&context, var_loc))?;
        let map_items = Node::CallExpression {
            callee: Box::new(Node::MemberExpression {
                object: Box::new(of_expr),
                property: Box::new(Node::Identifier {
                    name: "map".to_string(),
                    loc: None,
                }),
                computed: false,
                loc: None,
            }),
            arguments: vec![Node::ArrowFunctionExpression {
                params: vec![param],
                body: Box::new(body_from_children(children)),
                loc: None,
            }],
            loc: None,
        };
        cursor.replace(wrap_for_parent(map_items, parent));
        Ok(())
    }

    /// `<$let var={x} value={v}>…</$let>` becomes `((x) => …)(v)`.
    pub(crate) fn rewrite_let(&mut self, cursor: &mut Cursor<'_>) -> Result<(), Message> {
        let parent = cursor.parent();
        let node_loc = cursor.node().loc();
        let Node::JsxElement {
            opening, children, ..
        } = cursor.take()
        else {
            unreachable!("dispatched on a control element");
        };
        let open_src = opening_source(&opening);
        let context = [parent.and_then(|info| info.loc), node_loc, opening.loc];
        if self.channels.rewrite {
            eprintln!("[jsx-if-for] rewriting {open_src}");
        }
        let split = split_attrs(opening.attributes, ["var", "value"]);
        let [var, value] = split.found;
        let (var_expr, var_loc) = require_expr(var, "var={name}", &open_src, &context)?;
        let (value_expr, _) = require_expr(value, "value={expression}", &open_src, &context)?;
        if let Some(loc) = split.unexpected {
            return Err(fail(
                format!("Bad attribute in {open_src}"),
                &with_loc(&context, loc),
            ));
        }
        let param = identifier_pattern(var_expr, &with_loc(&context, var_loc))?;
        let bind_value = Node::CallExpression {
            callee: Box::new(Node::ArrowFunctionExpression {
                params: vec![param],
                body: Box::new(body_from_children(children)),
                loc: None,
            }),
            arguments: vec![value_expr],
            loc: None,
        };
        cursor.replace(wrap_for_parent(bind_value, parent));
        Ok(())
    }

    /// `<$if test={a}>…</$if>` plus any directly following `<$else-if>`
    /// and `<$else>` siblings become one conditional expression, seeded
    /// with `null` when no `<$else>` seals the chain.
    pub(crate) fn rewrite_if_chain(&mut self, cursor: &mut Cursor<'_>) -> Result<(), Message> {
        let parent = cursor.parent();
        let parent_loc = parent.and_then(|info| info.loc);
        // The chain is the run of $else-if siblings directly after this
        // element, sealed by at most one $else. Anything else between,
        // whitespace text included, ends it.
        let run = {
            let following = cursor.following();
            let mut run = 0;
            while let Some(tag) = following.get(run).and_then(control_tag) {
                match tag {
                    ControlTag::ElseIf => run += 1,
                    ControlTag::Else => {
                        run += 1;
                        break;
                    }
                    _ => break,
                }
            }
            run
        };
        let mut chain = vec![cursor.take()];
        chain.extend(cursor.splice_following(run));
        // The outer walk never reached the spliced continuations; settle
        // their subtrees before folding them in.
        for continuation in chain.iter_mut().skip(1) {
            walk_children(continuation, self)?;
        }
        if self.channels.rewrite {
            let openings: Vec<String> = chain
                .iter()
                .filter_map(|branch| match branch {
                    Node::JsxElement { opening, .. } => Some(opening_source(opening)),
                    _ => None,
                })
                .collect();
            eprintln!("[jsx-if-for] rewriting chain {}", openings.join(" "));
        }
        let mut folded = Node::Literal {
            value: Lit::Null,
            loc: None,
        };
        for branch in chain.into_iter().rev() {
            folded = self.fold_branch(branch, parent_loc, folded)?;
        }
        cursor.replace(wrap_for_parent(folded, parent));
        Ok(())
    }

    fn fold_branch(
        &mut self,
        branch: Node,
        parent_loc: Option<Span>,
        alternate: Node,
    ) -> Result<Node, Message> {
        let branch_loc = branch.loc();
        let Node::JsxElement {
            opening, children, ..
        } = branch
        else {
            unreachable!("chain collection keeps only control elements");
        };
        let tag = match &opening.name {
            TagName::Ident { name, .. } => ControlTag::from_name(name),
            TagName::Member { .. } => None,
        };
        let open_src = opening_source(&opening);
        let context = [parent_loc, branch_loc, opening.loc];
        let split = split_attrs(opening.attributes, ["test"]);
        let [test] = split.found;
        if let Some(loc) = split.unexpected {
            return Err(fail(
                format!("Bad attribute in {open_src}"),
                &with_loc(&context, loc),
            ));
        }
        match tag {
            Some(ControlTag::If | ControlTag::ElseIf) => {
                let (test_expr, _) = require_expr(test, "test={expression}", &open_src, &context)?;
                Ok(Node::ConditionalExpression {
                    test: Box::new(test_expr),
                    consequent: Box::new(body_from_children(children)),
                    alternate: Box::new(alternate),
                    loc: None,
                })
            }
            Some(ControlTag::Else) => {
                if test.is_some() {
                    return Err(fail(format!("Unexpected test=... in {open_src}"), &context));
                }
                Ok(body_from_children(children))
            }
            _ => unreachable!("chain collection keeps only chain elements"),
        }
    }
}

/// Fault for an `<$else-if>` or `<$else>` the chain collection never
/// claimed.
pub(crate) fn orphan_branch(cursor: &Cursor<'_>) -> Message {
    let Node::JsxElement { opening, .. } = cursor.node() else {
        unreachable!("dispatched on a control element");
    };
    fail(
        format!("Need preceding <$if> for {}", opening_source(opening)),
        &[
            cursor.parent().and_then(|info| info.loc),
            cursor.node().loc(),
            opening.loc,
        ],
    )
}
