//! Renders trees back to JavaScript/JSX source for diagnostics and debug
//! dumps. Output favors unambiguous over minimal.

use crate::ast::{AttrItem, AttrValue, JsxOpening, Lit, Node, TagName};

/// Render a whole tree. Statements end with `;`, a program joins its
/// statements with newlines.
pub fn to_source(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

/// Render an opening tag, attributes included, e.g. `<$for var={x} of={xs}>`.
pub fn opening_source(opening: &JsxOpening) -> String {
    let mut out = String::new();
    write_opening(&mut out, opening);
    out
}

fn precedence(node: &Node) -> u8 {
    match node {
        Node::ArrowFunctionExpression { .. } => 3,
        Node::ConditionalExpression { .. } => 4,
        Node::BinaryExpression { .. } => 11,
        Node::CallExpression { .. } | Node::MemberExpression { .. } => 17,
        _ => 20,
    }
}

fn write_node(out: &mut String, node: &Node, min: u8) {
    let wrap = precedence(node) < min;
    if wrap {
        out.push('(');
    }
    match node {
        Node::Program { body, .. } => {
            for (index, statement) in body.iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                }
                write_node(out, statement, 0);
            }
        }
        Node::ExpressionStatement { expression, .. } => {
            write_node(out, expression, 0);
            out.push(';');
        }
        Node::EmptyStatement { .. } => out.push(';'),
        Node::Identifier { name, .. } => out.push_str(name),
        Node::Literal { value, .. } => write_lit(out, value),
        Node::BinaryExpression {
            operator,
            left,
            right,
            ..
        } => {
            // Operator strings carry no precedence table, so nested binary
            // operands always parenthesize.
            write_node(out, left, 12);
            out.push(' ');
            out.push_str(operator);
            out.push(' ');
            write_node(out, right, 12);
        }
        Node::MemberExpression {
            object,
            property,
            computed,
            ..
        } => {
            write_node(out, object, 17);
            if *computed {
                out.push('[');
                write_node(out, property, 0);
                out.push(']');
            } else {
                out.push('.');
                write_node(out, property, 2);
            }
        }
        Node::CallExpression {
            callee, arguments, ..
        } => {
            write_node(out, callee, 17);
            out.push('(');
            for (index, argument) in arguments.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_node(out, argument, 2);
            }
            out.push(')');
        }
        Node::ArrowFunctionExpression { params, body, .. } => {
            out.push('(');
            for (index, param) in params.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_node(out, param, 2);
            }
            out.push_str(") => ");
            write_node(out, body, 3);
        }
        Node::ConditionalExpression {
            test,
            consequent,
            alternate,
            ..
        } => {
            write_node(out, test, 5);
            out.push_str(" ? ");
            write_node(out, consequent, 4);
            out.push_str(" : ");
            write_node(out, alternate, 4);
        }
        Node::JsxElement {
            opening, children, ..
        } => {
            write_opening(out, opening);
            if !opening.self_closing {
                write_children(out, children);
                out.push_str("</");
                write_tag_name(out, &opening.name);
                out.push('>');
            }
        }
        Node::JsxFragment { children, .. } => {
            out.push_str("<>");
            write_children(out, children);
            out.push_str("</>");
        }
        Node::JsxExpressionContainer { expression, .. } => {
            out.push('{');
            write_node(out, expression, 0);
            out.push('}');
        }
        Node::JsxText { value, .. } => out.push_str(value),
    }
    if wrap {
        out.push(')');
    }
}

fn write_children(out: &mut String, children: &[Node]) {
    for child in children {
        if child.is_markup() {
            write_node(out, child, 0);
        } else {
            // Plain expressions sit in braces when they appear as children.
            out.push('{');
            write_node(out, child, 0);
            out.push('}');
        }
    }
}

fn write_opening(out: &mut String, opening: &JsxOpening) {
    out.push('<');
    write_tag_name(out, &opening.name);
    for item in &opening.attributes {
        out.push(' ');
        match item {
            AttrItem::Attribute(attr) => {
                out.push_str(&attr.name);
                match &attr.value {
                    None => {}
                    Some(AttrValue::Str { value, .. }) => {
                        out.push('=');
                        write_str(out, value);
                    }
                    Some(AttrValue::Container { expression, .. }) => {
                        out.push_str("={");
                        write_node(out, expression, 0);
                        out.push('}');
                    }
                }
            }
            AttrItem::Spread { argument, .. } => {
                out.push_str("{...");
                write_node(out, argument, 2);
                out.push('}');
            }
        }
    }
    if opening.self_closing {
        out.push_str(" />");
    } else {
        out.push('>');
    }
}

fn write_tag_name(out: &mut String, name: &TagName) {
    match name {
        TagName::Ident { name, .. } => out.push_str(name),
        TagName::Member {
            object, property, ..
        } => {
            write_tag_name(out, object);
            out.push('.');
            out.push_str(property);
        }
    }
}

fn write_lit(out: &mut String, value: &Lit) {
    match value {
        Lit::Null => out.push_str("null"),
        Lit::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        Lit::Num(number) => out.push_str(&number.to_string()),
        Lit::Str(text) => write_str(out, text),
    }
}

fn write_str(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
}
