use crate::ast::{AttrItem, AttrValue, JsxOpening, Node, Span};

/// What `leave` may know about the parent without aliasing it: whether it
/// is a markup-kind node, and its source span.
#[derive(Debug, Clone, Copy)]
pub struct ParentInfo {
    pub markup: bool,
    pub loc: Option<Span>,
}

impl ParentInfo {
    fn of(node: &Node) -> Self {
        ParentInfo {
            markup: node.is_markup(),
            loc: node.loc(),
        }
    }
}

/// Post-order visitor: `leave` runs once per node, after the node's own
/// subtrees are settled. Replacements written through the cursor are not
/// re-descended into.
pub trait Visitor {
    type Error;

    fn leave(&mut self, cursor: &mut Cursor<'_>) -> Result<(), Self::Error>;
}

enum Place<'a> {
    Slot(&'a mut Node),
    Item { list: &'a mut Vec<Node>, index: usize },
}

/// Mutable view of the node being left: the node itself, where it sits in
/// its parent, and the replace/splice operations rewrite handlers need.
pub struct Cursor<'a> {
    parent: Option<ParentInfo>,
    key: Option<&'static str>,
    place: Place<'a>,
}

impl Cursor<'_> {
    pub fn node(&self) -> &Node {
        match &self.place {
            Place::Slot(node) => node,
            Place::Item { list, index } => &list[*index],
        }
    }

    fn node_mut(&mut self) -> &mut Node {
        match &mut self.place {
            Place::Slot(node) => node,
            Place::Item { list, index } => &mut list[*index],
        }
    }

    /// Move the visited node out, leaving a placeholder behind until
    /// `replace` writes the substitute.
    pub fn take(&mut self) -> Node {
        std::mem::replace(self.node_mut(), Node::EmptyStatement { loc: None })
    }

    /// Write `node` into the slot the visited node occupies.
    pub fn replace(&mut self, node: Node) {
        *self.node_mut() = node;
    }

    pub fn parent(&self) -> Option<ParentInfo> {
        self.parent
    }

    /// Name of the field this node occupies in its parent; `None` at the
    /// tree root.
    pub fn slot_key(&self) -> Option<&'static str> {
        self.key
    }

    /// Index within an array slot; `None` for single-node fields.
    pub fn index(&self) -> Option<usize> {
        match &self.place {
            Place::Item { index, .. } => Some(*index),
            Place::Slot(_) => None,
        }
    }

    /// The not-yet-visited siblings after this node in an array slot;
    /// empty for single-node fields.
    pub fn following(&self) -> &[Node] {
        match &self.place {
            Place::Item { list, index } => &list[*index + 1..],
            Place::Slot(_) => &[],
        }
    }

    /// Remove and return the `count` siblings immediately following this
    /// node. The walker will not visit them; the caller owns them now.
    pub fn splice_following(&mut self, count: usize) -> Vec<Node> {
        match &mut self.place {
            Place::Item { list, index } => list.drain(*index + 1..*index + 1 + count).collect(),
            Place::Slot(_) => Vec::new(),
        }
    }
}

/// Walk the whole tree post-order, leaving every node including `root`
/// (the root cursor has no parent and no slot key).
pub fn walk<V: Visitor>(root: &mut Node, visitor: &mut V) -> Result<(), V::Error> {
    walk_children(root, visitor)?;
    visitor.leave(&mut Cursor {
        parent: None,
        key: None,
        place: Place::Slot(root),
    })
}

/// Walk the subtrees below `node` without leaving `node` itself. Handlers
/// that splice out not-yet-visited siblings use this to settle them.
pub fn walk_children<V: Visitor>(node: &mut Node, visitor: &mut V) -> Result<(), V::Error> {
    let parent = ParentInfo::of(node);
    match node {
        Node::Program { body, .. } => walk_list(parent, "body", body, visitor),
        Node::ExpressionStatement { expression, .. } => {
            walk_slot(parent, "expression", expression, visitor)
        }
        Node::EmptyStatement { .. }
        | Node::Identifier { .. }
        | Node::Literal { .. }
        | Node::JsxText { .. } => Ok(()),
        Node::BinaryExpression { left, right, .. } => {
            walk_slot(parent, "left", left, visitor)?;
            walk_slot(parent, "right", right, visitor)
        }
        Node::MemberExpression {
            object, property, ..
        } => {
            walk_slot(parent, "object", object, visitor)?;
            walk_slot(parent, "property", property, visitor)
        }
        Node::CallExpression {
            callee, arguments, ..
        } => {
            walk_slot(parent, "callee", callee, visitor)?;
            walk_list(parent, "arguments", arguments, visitor)
        }
        Node::ArrowFunctionExpression { params, body, .. } => {
            walk_list(parent, "params", params, visitor)?;
            walk_slot(parent, "body", body, visitor)
        }
        Node::ConditionalExpression {
            test,
            consequent,
            alternate,
            ..
        } => {
            walk_slot(parent, "test", test, visitor)?;
            walk_slot(parent, "consequent", consequent, visitor)?;
            walk_slot(parent, "alternate", alternate, visitor)
        }
        Node::JsxElement {
            opening, children, ..
        } => {
            walk_opening(opening, visitor)?;
            walk_list(parent, "children", children, visitor)
        }
        Node::JsxFragment { children, .. } => walk_list(parent, "children", children, visitor),
        Node::JsxExpressionContainer { expression, .. } => {
            walk_slot(parent, "expression", expression, visitor)
        }
    }
}

fn walk_opening<V: Visitor>(opening: &mut JsxOpening, visitor: &mut V) -> Result<(), V::Error> {
    for item in &mut opening.attributes {
        match item {
            AttrItem::Attribute(attr) => {
                if let Some(AttrValue::Container { expression, loc }) = &mut attr.value {
                    let parent = ParentInfo {
                        markup: true,
                        loc: *loc,
                    };
                    walk_slot(parent, "expression", expression, visitor)?;
                }
            }
            AttrItem::Spread { argument, loc } => {
                let parent = ParentInfo {
                    markup: true,
                    loc: *loc,
                };
                walk_slot(parent, "argument", argument, visitor)?;
            }
        }
    }
    Ok(())
}

fn walk_slot<V: Visitor>(
    parent: ParentInfo,
    key: &'static str,
    node: &mut Node,
    visitor: &mut V,
) -> Result<(), V::Error> {
    walk_children(node, visitor)?;
    visitor.leave(&mut Cursor {
        parent: Some(parent),
        key: Some(key),
        place: Place::Slot(node),
    })
}

fn walk_list<V: Visitor>(
    parent: ParentInfo,
    key: &'static str,
    list: &mut Vec<Node>,
    visitor: &mut V,
) -> Result<(), V::Error> {
    let mut index = 0;
    while index < list.len() {
        walk_children(&mut list[index], visitor)?;
        visitor.leave(&mut Cursor {
            parent: Some(parent),
            key: Some(key),
            place: Place::Item {
                list: &mut *list,
                index,
            },
        })?;
        index += 1;
    }
    Ok(())
}
