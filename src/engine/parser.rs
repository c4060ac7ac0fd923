use log::trace;
use logos::Logos;

use crate::{
    ast::{BinaryOperator, Node},
    engine::{
        evaluator::{EvalResult, SENTINEL, missing_operand, priority},
        lexer::Token,
    },
    error::EvalError,
};

/// Builds an AST [`Node`] tree from a textual formula.
///
/// The parser consumes the lexer's token stream once, keeping a stack of
/// pending subtrees where the direct evaluator keeps numeric values, plus
/// the same operator and function-name stacks. Both strategies share one
/// priority table and fold equal-priority operators left to right, so they
/// agree on every input both can express.
///
/// An identifier directly followed by `(` names a function; any other
/// identifier becomes a variable reference resolved when the tree is
/// evaluated. A `-` at the start of the expression, after `(` or after
/// another operator negates its operand by folding it under a synthetic
/// zero constant.
///
/// # Parameters
/// - `expression`: The formula text.
///
/// # Returns
/// The root of the parsed tree.
///
/// # Errors
/// - `MalformedExpression` for unmatched parentheses, dangling operators,
///   unrecognized characters or empty input.
/// - `IllegalOperator` if an unrecognized operator reaches a fold.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use varcalc::engine::parser::parse;
///
/// let tree = parse("x ^ 2 - 1").unwrap();
/// let bindings = HashMap::from([("x".to_string(), 3.0)]);
///
/// assert_eq!(tree.evaluate(&bindings).unwrap(), 8.0);
/// ```
pub fn parse(expression: &str) -> EvalResult<Node> {
    let mut tokens = Token::lexer(expression).peekable();

    let mut nodes: Vec<Node> = Vec::new();
    let mut operators: Vec<char> = vec![SENTINEL];
    let mut functions: Vec<String> = Vec::new();

    let mut can_negate = true;

    while let Some(token) = tokens.next() {
        let token = token.map_err(|()| EvalError::MalformedExpression {
                             details: "unrecognized character in expression".to_string(),
                         })?;

        match token {
            Token::Number(value) => {
                can_negate = false;
                nodes.push(Node::Constant(value));
            },

            Token::Identifier(name) => {
                // A name directly followed by `(` is a function; anything
                // else reads as a variable.
                if let Some(Ok(Token::LParen)) = tokens.peek() {
                    functions.push(name);
                } else {
                    can_negate = false;
                    nodes.push(Node::Variable(name));
                }
            },

            Token::LParen => {
                can_negate = true;
                operators.push('(');
            },

            Token::RParen => {
                can_negate = false;
                loop {
                    match operators.pop() {
                        Some('(') => break,
                        Some(op) if op != SENTINEL => fold(&mut nodes, op)?,
                        _ => {
                            return Err(EvalError::MalformedExpression {
                                details: "unmatched closing parenthesis".to_string(),
                            });
                        },
                    }
                }
                if let Some(name) = functions.pop() {
                    let argument = nodes.pop().ok_or_else(|| missing_argument(&name))?;
                    nodes.push(Node::FunctionCall { name,
                                                    argument: Box::new(argument) });
                }
            },

            token => {
                let Some(op) = token.operator_char() else {
                    // `Ignored` is skipped by the lexer; only operator
                    // tokens remain.
                    unreachable!("non-operator token {token:?}");
                };
                if can_negate && op == '-' {
                    // Negation is folded under a synthetic zero constant.
                    nodes.push(Node::Constant(0.0));
                    operators.push(op);
                    continue;
                }
                can_negate = true;
                let incoming = priority(op)?;
                while let Some(&top) = operators.last()
                    && incoming <= priority(top)?
                {
                    operators.pop();
                    fold(&mut nodes, top)?;
                }
                operators.push(op);
            },
        }
    }

    while let Some(&top) = operators.last()
        && top != SENTINEL
    {
        operators.pop();
        if top == '(' {
            return Err(EvalError::MalformedExpression {
                details: "unmatched opening parenthesis".to_string(),
            });
        }
        fold(&mut nodes, top)?;
    }

    trace!("parsed {expression:?}");

    nodes.pop().ok_or_else(|| EvalError::MalformedExpression {
                   details: "empty expression".to_string(),
               })
}

/// Pops the two most recent subtrees and wraps them in the node for `op`.
///
/// `^` produces a [`Node::Power`]; the five arithmetic operators produce a
/// [`Node::BinaryOp`].
fn fold(nodes: &mut Vec<Node>, op: char) -> EvalResult<()> {
    let right = nodes.pop().ok_or_else(|| missing_operand(op))?;
    let left = nodes.pop().ok_or_else(|| missing_operand(op))?;

    let node = if op == '^' {
        Node::Power { left:  Box::new(left),
                      right: Box::new(right), }
    } else {
        Node::BinaryOp { op:    BinaryOperator::from_char(op)?,
                         left:  Box::new(left),
                         right: Box::new(right), }
    };

    nodes.push(node);
    Ok(())
}

/// Builds the error for a function whose parentheses produced no value.
fn missing_argument(name: &str) -> EvalError {
    EvalError::MalformedExpression { details: format!("function '{name}' is missing its argument") }
}
