use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    node::{
        node::{Node, NodePropArg},
        types::NodeType,
    },
};

use super::parser::{current_token_text, illegal_error, Parser};

/// Parses one node: optional type annotation, name, property/argument list,
/// optional child block.
///
/// The node ends at a semicolon, a line break (unless escaped by a
/// backslash), a closing brace left for the enclosing block, the end of its
/// child block, or the end of the stream.
pub fn parse_node(parser: &mut Parser) -> Result<Node, Error> {
    let ty = if parser.current_token_kind() == Some(TokenKind::OpenParen) {
        Some(parse_type_annotation(parser)?)
    } else {
        None
    };

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: current_token_text(parser),
            message: String::from("expected a node name"),
        },
        parser.get_position(),
    );
    let name = parser
        .expect_error(TokenKind::Identifier, Some(error))?
        .value
        .to_string();

    let mut node = Node::new(name);
    node.ty = ty;

    loop {
        match parser.current_token_kind() {
            None => break,
            Some(TokenKind::Semicolon) | Some(TokenKind::EndOfLine) => {
                parser.advance();
                break;
            }
            // The enclosing child block consumes its own closing brace
            Some(TokenKind::CloseCurly) => break,
            Some(TokenKind::Backslash) => {
                if parser.peek_nth_kind(1) == Some(TokenKind::EndOfLine) {
                    // Line continuation: the logical line goes on
                    parser.advance();
                    parser.advance();
                } else {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedTokenDetailed {
                            token: current_token_text(parser),
                            message: String::from(
                                "a line continuation must be followed by a line break",
                            ),
                        },
                        parser.get_position(),
                    ));
                }
            }
            Some(TokenKind::Identifier) => {
                let entry = parse_prop_arg(parser, None)?;
                node.push_prop_arg(entry);
            }
            Some(TokenKind::OpenParen) => {
                let entry_ty = parse_type_annotation(parser)?;

                if parser.current_token_kind() != Some(TokenKind::Identifier) {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedTokenDetailed {
                            token: current_token_text(parser),
                            message: String::from("expected a value after a type annotation"),
                        },
                        parser.get_position(),
                    ));
                }

                let entry = parse_prop_arg(parser, Some(entry_ty))?;
                node.push_prop_arg(entry);
            }
            Some(TokenKind::OpenCurly) => {
                let children = parse_children(parser)?;
                node.set_children(children);
                break;
            }
            Some(TokenKind::Illegal) => return Err(illegal_error(parser)),
            Some(_) => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: current_token_text(parser),
                    },
                    parser.get_position(),
                ));
            }
        }
    }

    Ok(node)
}

/// Parses one property/argument entry starting at an identifier.
///
/// `identifier = identifier` forms a property; in every other case the
/// identifier is collected as a positional value and nothing further is
/// consumed. The decision needs the two-token peek because a bare value may
/// be directly followed by another entry's key.
fn parse_prop_arg(parser: &mut Parser, ty: Option<NodeType>) -> Result<NodePropArg, Error> {
    let first = parser.expect(TokenKind::Identifier)?;

    if parser.current_token_kind() == Some(TokenKind::Equals)
        && parser.peek_nth_kind(1) == Some(TokenKind::Identifier)
    {
        parser.advance();
        let value = parser.expect(TokenKind::Identifier)?;

        return Ok(NodePropArg::Property {
            key: first.value.to_string(),
            ty,
            value: value.value.to_string(),
        });
    }

    Ok(NodePropArg::Value {
        ty,
        value: first.value.to_string(),
    })
}

/// Parses a `(type)` annotation and resolves it against the closed type set.
/// Resolution failure is a hard error, never a silent fallback to "no type".
fn parse_type_annotation(parser: &mut Parser) -> Result<NodeType, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: current_token_text(parser),
            message: String::from("expected a type name inside the annotation"),
        },
        parser.get_position(),
    );
    let ident = parser.expect_error(TokenKind::Identifier, Some(error))?;

    let ty = match NodeType::from_ident(ident.value) {
        Some(ty) => ty,
        None => {
            return Err(Error::new(
                ErrorImpl::UnknownNodeType {
                    type_: ident.value.to_string(),
                },
                ident.span.start.clone(),
            ))
        }
    };

    parser.expect(TokenKind::CloseParen)?;

    Ok(ty)
}

/// Parses a `{ ... }` child block, applying the node grammar one level
/// deeper. The closing brace is consumed; reaching the end of the stream
/// first is an error.
fn parse_children(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    let open = parser.expect(TokenKind::OpenCurly)?;
    let mut children = Vec::new();

    loop {
        match parser.current_token_kind() {
            None => {
                return Err(Error::new(
                    ErrorImpl::UnterminatedChildBlock,
                    open.span.start.clone(),
                ));
            }
            Some(TokenKind::CloseCurly) => {
                parser.advance();
                return Ok(children);
            }
            Some(TokenKind::EndOfLine) | Some(TokenKind::Semicolon) => {
                parser.advance();
            }
            Some(TokenKind::Illegal) => return Err(illegal_error(parser)),
            Some(_) => {
                children.push(parse_node(parser)?);
            }
        }
    }
}
