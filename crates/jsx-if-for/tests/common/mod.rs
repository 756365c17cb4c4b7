//! Builders for the tree shapes the rewrite tests feed in. Spans go only
//! where a test asserts on them.

use jsx_if_for::estree::{
    AttrItem, AttrValue, JsxAttr, JsxOpening, Lit, Node, Position, Span, TagName,
};

pub fn span(line: usize, column: usize, width: usize) -> Span {
    Span {
        start: Position {
            line,
            column,
            offset: None,
        },
        end: Position {
            line,
            column: column + width,
            offset: None,
        },
    }
}

pub fn program(body: Vec<Node>) -> Node {
    Node::Program { body, loc: None }
}

pub fn stmt(expression: Node) -> Node {
    Node::ExpressionStatement {
        expression: Box::new(expression),
        loc: None,
    }
}

pub fn ident(name: &str) -> Node {
    Node::Identifier {
        name: name.to_string(),
        loc: None,
    }
}

pub fn num(value: f64) -> Node {
    Node::Literal {
        value: Lit::Num(value),
        loc: None,
    }
}

pub fn string(value: &str) -> Node {
    Node::Literal {
        value: Lit::Str(value.to_string()),
        loc: None,
    }
}

pub fn boolean(value: bool) -> Node {
    Node::Literal {
        value: Lit::Bool(value),
        loc: None,
    }
}

pub fn member(object: Node, property: &str) -> Node {
    Node::MemberExpression {
        object: Box::new(object),
        property: Box::new(ident(property)),
        computed: false,
        loc: None,
    }
}

pub fn member_at(object: Node, property: &str, loc: Span) -> Node {
    Node::MemberExpression {
        object: Box::new(object),
        property: Box::new(ident(property)),
        computed: false,
        loc: Some(loc),
    }
}

pub fn call(callee: Node, arguments: Vec<Node>) -> Node {
    Node::CallExpression {
        callee: Box::new(callee),
        arguments,
        loc: None,
    }
}

pub fn binary(operator: &str, left: Node, right: Node) -> Node {
    Node::BinaryExpression {
        operator: operator.to_string(),
        left: Box::new(left),
        right: Box::new(right),
        loc: None,
    }
}

pub fn text(value: &str) -> Node {
    Node::JsxText {
        value: value.to_string(),
        loc: None,
    }
}

pub fn container(expression: Node) -> Node {
    Node::JsxExpressionContainer {
        expression: Box::new(expression),
        loc: None,
    }
}

pub fn expr_attr(name: &str, expression: Node) -> AttrItem {
    AttrItem::Attribute(JsxAttr {
        name: name.to_string(),
        value: Some(AttrValue::Container {
            expression: Box::new(expression),
            loc: None,
        }),
        loc: None,
    })
}

pub fn expr_attr_at(name: &str, expression: Node, loc: Span) -> AttrItem {
    AttrItem::Attribute(JsxAttr {
        name: name.to_string(),
        value: Some(AttrValue::Container {
            expression: Box::new(expression),
            loc: None,
        }),
        loc: Some(loc),
    })
}

pub fn string_attr(name: &str, value: &str) -> AttrItem {
    AttrItem::Attribute(JsxAttr {
        name: name.to_string(),
        value: Some(AttrValue::Str {
            value: value.to_string(),
            loc: None,
        }),
        loc: None,
    })
}

pub fn spread_attr(argument: Node) -> AttrItem {
    AttrItem::Spread {
        argument: Box::new(argument),
        loc: None,
    }
}

pub fn element(tag: &str, attributes: Vec<AttrItem>, children: Vec<Node>) -> Node {
    Node::JsxElement {
        opening: JsxOpening {
            name: TagName::Ident {
                name: tag.to_string(),
                loc: None,
            },
            attributes,
            self_closing: children.is_empty(),
            loc: None,
        },
        children,
        loc: None,
    }
}

pub fn element_at(
    tag: &str,
    attributes: Vec<AttrItem>,
    children: Vec<Node>,
    node_span: Span,
    open_span: Span,
) -> Node {
    Node::JsxElement {
        opening: JsxOpening {
            name: TagName::Ident {
                name: tag.to_string(),
                loc: None,
            },
            attributes,
            self_closing: children.is_empty(),
            loc: Some(open_span),
        },
        children,
        loc: Some(node_span),
    }
}
