use serde::Serialize;

/// One end of a source span. Lines are 1-based and columns 0-based,
/// matching the upstream parser; `offset` is the byte offset when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Literal payload. Serialized untagged so dumps read like source literals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Lit {
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
}

/// One node of the program-and-markup tree. The variant set is the closed
/// dialect this engine consumes and synthesizes; serialization is tagged
/// with the upstream `type` names. `loc` is absent on synthesized nodes and
/// skipped in dumps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    Program {
        body: Vec<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
    ExpressionStatement {
        expression: Box<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
    EmptyStatement {
        #[serde(skip)]
        loc: Option<Span>,
    },
    Identifier {
        name: String,
        #[serde(skip)]
        loc: Option<Span>,
    },
    Literal {
        value: Lit,
        #[serde(skip)]
        loc: Option<Span>,
    },
    BinaryExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        computed: bool,
        #[serde(skip)]
        loc: Option<Span>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
    /// Expression-bodied arrow; the dialect has no statement-bodied form.
    ArrowFunctionExpression {
        params: Vec<Node>,
        body: Box<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
    #[serde(rename = "JSXElement")]
    JsxElement {
        opening: JsxOpening,
        children: Vec<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
    #[serde(rename = "JSXFragment")]
    JsxFragment {
        children: Vec<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
    #[serde(rename = "JSXExpressionContainer")]
    JsxExpressionContainer {
        expression: Box<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
    #[serde(rename = "JSXText")]
    JsxText {
        value: String,
        #[serde(skip)]
        loc: Option<Span>,
    },
}

impl Node {
    /// Source span of this node, when the upstream parser recorded one.
    pub fn loc(&self) -> Option<Span> {
        match self {
            Node::Program { loc, .. }
            | Node::ExpressionStatement { loc, .. }
            | Node::EmptyStatement { loc }
            | Node::Identifier { loc, .. }
            | Node::Literal { loc, .. }
            | Node::BinaryExpression { loc, .. }
            | Node::MemberExpression { loc, .. }
            | Node::CallExpression { loc, .. }
            | Node::ArrowFunctionExpression { loc, .. }
            | Node::ConditionalExpression { loc, .. }
            | Node::JsxElement { loc, .. }
            | Node::JsxFragment { loc, .. }
            | Node::JsxExpressionContainer { loc, .. }
            | Node::JsxText { loc, .. } => *loc,
        }
    }

    /// True for the markup-flavored kinds (the `JSX`-prefixed `type`s).
    pub fn is_markup(&self) -> bool {
        matches!(
            self,
            Node::JsxElement { .. }
                | Node::JsxFragment { .. }
                | Node::JsxExpressionContainer { .. }
                | Node::JsxText { .. }
        )
    }
}

/// Opening tag of a markup element: `<name attrs…>` or `<name attrs… />`.
/// Closing tags carry no information of their own and are reconstructed
/// from the tag name when the tree is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxOpening {
    pub name: TagName,
    pub attributes: Vec<AttrItem>,
    pub self_closing: bool,
    #[serde(skip)]
    pub loc: Option<Span>,
}

/// Element tag: a literal identifier or a computed `a.b` path. Only
/// literal names participate in pseudo-element dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TagName {
    #[serde(rename = "JSXIdentifier")]
    Ident {
        name: String,
        #[serde(skip)]
        loc: Option<Span>,
    },
    #[serde(rename = "JSXMemberExpression")]
    Member {
        object: Box<TagName>,
        property: String,
        #[serde(skip)]
        loc: Option<Span>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AttrItem {
    #[serde(rename = "JSXAttribute")]
    Attribute(JsxAttr),
    #[serde(rename = "JSXSpreadAttribute")]
    Spread {
        argument: Box<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
}

/// Named attribute. `value: None` is a bare boolean attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsxAttr {
    pub name: String,
    pub value: Option<AttrValue>,
    #[serde(skip)]
    pub loc: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AttrValue {
    #[serde(rename = "Literal")]
    Str {
        value: String,
        #[serde(skip)]
        loc: Option<Span>,
    },
    #[serde(rename = "JSXExpressionContainer")]
    Container {
        expression: Box<Node>,
        #[serde(skip)]
        loc: Option<Span>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span {
            start: Position {
                line: 2,
                column: 4,
                offset: Some(17),
            },
            end: Position {
                line: 2,
                column: 9,
                offset: Some(22),
            },
        }
    }

    #[test]
    fn dumps_use_upstream_type_tags() {
        let node = Node::JsxElement {
            opening: JsxOpening {
                name: TagName::Ident {
                    name: "$for".to_string(),
                    loc: None,
                },
                attributes: vec![AttrItem::Attribute(JsxAttr {
                    name: "of".to_string(),
                    value: Some(AttrValue::Container {
                        expression: Box::new(Node::Identifier {
                            name: "items".to_string(),
                            loc: Some(span()),
                        }),
                        loc: None,
                    }),
                    loc: None,
                })],
                self_closing: true,
                loc: Some(span()),
            },
            children: vec![],
            loc: Some(span()),
        };
        let value = serde_json::to_value(&node).expect("tree serializes");
        assert_eq!(value["type"], "JSXElement");
        assert_eq!(value["opening"]["name"]["type"], "JSXIdentifier");
        assert_eq!(
            value["opening"]["attributes"][0]["value"]["type"],
            "JSXExpressionContainer"
        );
        assert_eq!(value["opening"]["selfClosing"], true);
    }

    #[test]
    fn dumps_suppress_position_metadata() {
        let node = Node::Identifier {
            name: "x".to_string(),
            loc: Some(span()),
        };
        let value = serde_json::to_value(&node).expect("tree serializes");
        assert!(value.get("loc").is_none());
        assert_eq!(value["name"], "x");
    }

    #[test]
    fn null_literal_serializes_as_null() {
        let node = Node::Literal {
            value: Lit::Null,
            loc: None,
        };
        let value = serde_json::to_value(&node).expect("tree serializes");
        assert!(value["value"].is_null());
    }

    #[test]
    fn markup_kinds_are_the_jsx_prefixed_ones() {
        let container = Node::JsxExpressionContainer {
            expression: Box::new(Node::Literal {
                value: Lit::Null,
                loc: None,
            }),
            loc: None,
        };
        assert!(container.is_markup());
        assert!(
            !Node::Identifier {
                name: "x".to_string(),
                loc: None
            }
            .is_markup()
        );
    }
}
