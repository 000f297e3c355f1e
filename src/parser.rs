use crate::lexer::{Lexer, Op, Token};
use crate::number::Number;

/// Expression tree built by one parse, discarded after evaluation.
///
/// Grammar (recursive descent):
///
/// ```text
/// expression  := term (("+" | "-") term)*
/// term        := negation (("/" | "*") negation)*
/// negation    := ("-" negation) | literal
/// literal     := INT | FLOAT | VAR | "(" expression ")"
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Num(Number),
    Var,
    Neg(Box<Node>),
    BinOp(Op, Box<Node>, Box<Node>),
}

// Syntax failures never leave the parser as errors; they collapse to the
// absent result in `parse`.
struct ParseError;

fn parse_literal(lexer: &mut Lexer) -> Result<Node, ParseError> {
    match lexer.next() {
        Token::Int(x) => Ok(Node::Num(Number::Int(x))),
        Token::Float(x) => Ok(Node::Num(Number::Float(x))),
        Token::Var => Ok(Node::Var),
        Token::LeftParen => {
            let expr = parse_expression(lexer)?;

            match lexer.next() {
                Token::RightParen => Ok(expr),
                _ => Err(ParseError),
            }
        }
        _ => Err(ParseError),
    }
}

fn parse_negation(lexer: &mut Lexer) -> Result<Node, ParseError> {
    if lexer.peek() == Token::Operator(Op::Sub) {
        lexer.next();
        let arg = parse_negation(lexer)?;
        return Ok(Node::Neg(Box::new(arg)));
    }

    parse_literal(lexer)
}

fn parse_term(lexer: &mut Lexer) -> Result<Node, ParseError> {
    let mut lhs = parse_negation(lexer)?;

    loop {
        match lexer.peek() {
            Token::Operator(op) if op == Op::Mul || op == Op::Div => {
                lexer.next();
                let rhs = parse_negation(lexer)?;
                lhs = Node::BinOp(op, Box::new(lhs), Box::new(rhs));
            }
            _ => break Ok(lhs),
        }
    }
}

fn parse_expression(lexer: &mut Lexer) -> Result<Node, ParseError> {
    let mut lhs = parse_term(lexer)?;

    loop {
        match lexer.peek() {
            Token::Operator(op) if op == Op::Add || op == Op::Sub => {
                lexer.next();
                let rhs = parse_term(lexer)?;
                lhs = Node::BinOp(op, Box::new(lhs), Box::new(rhs));
            }
            _ => break Ok(lhs),
        }
    }
}

/// Parses one expression out of the token sequence. `None` covers every
/// syntax problem, including the empty sequence a scan failure leaves
/// behind. Tokens left over after the top-level expression are ignored
/// rather than rejected.
pub fn parse(mut lexer: Lexer) -> Option<Node> {
    if lexer.is_empty() {
        return None;
    }

    parse_expression(&mut lexer).ok()
}
