use std::collections::HashMap;

use crate::{
    engine::{evaluator::EvalResult, functions::apply_function},
    error::EvalError,
};

/// Caller-supplied mapping from variable names to numeric values.
///
/// The map is read at evaluation time and never mutated by the engine.
pub type VariableMap = HashMap<String, f64>;

/// Represents a binary arithmetic operator.
///
/// Exponentiation is not included; it is represented by the dedicated
/// [`Node::Power`] variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Maps an operator character to its [`BinaryOperator`].
    ///
    /// # Parameters
    /// - `op`: The operator character.
    ///
    /// # Returns
    /// The corresponding operator.
    ///
    /// # Errors
    /// Returns `EvalError::IllegalOperator` for any other character,
    /// including `^`.
    pub const fn from_char(op: char) -> EvalResult<Self> {
        match op {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            '%' => Ok(Self::Mod),
            _ => Err(EvalError::IllegalOperator { op }),
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division by zero and similar numeric edge cases propagate IEEE-754
    /// infinities and NaN rather than being trapped.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Mod => left % right,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing a parsed formula.
///
/// A tree is built once by [`crate::parse`] and may then be evaluated any
/// number of times against different variable bindings. Each non-leaf node
/// exclusively owns its children, so every tree is finite and acyclic.
/// Nodes are immutable after construction, which makes a built tree safe to
/// share across threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric constant; ignores the variable map.
    Constant(f64),
    /// Reference to a variable by name, resolved at evaluation time.
    Variable(String),
    /// A binary operation covering `+`, `-`, `*`, `/` and `%`.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },
    /// Exponentiation; the exponent may be any subtree.
    Power {
        /// The base.
        left:  Box<Node>,
        /// The exponent.
        right: Box<Node>,
    },
    /// Single-argument function application, such as `sqrt(x)`.
    FunctionCall {
        /// Name of the function being applied.
        name:     String,
        /// The argument subtree.
        argument: Box<Node>,
    },
}

impl Node {
    /// Evaluates the tree against a variable mapping.
    ///
    /// Evaluation is a pure function of the tree and the supplied map:
    /// no node carries state between calls, and the same tree evaluated
    /// twice with the same map produces the same result.
    ///
    /// # Parameters
    /// - `variables`: Mapping from variable names to their values.
    ///
    /// # Returns
    /// The numeric result.
    ///
    /// # Errors
    /// - `UndefinedVariable` if a referenced name is absent from the map.
    /// - `UnknownFunction` if a function name matches no table entry.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// let tree = varcalc::parse("base * 2 + sqrt(bonus)").unwrap();
    ///
    /// let bindings = HashMap::from([("base".to_string(), 5.0),
    ///                               ("bonus".to_string(), 16.0)]);
    ///
    /// assert_eq!(tree.evaluate(&bindings).unwrap(), 14.0);
    /// ```
    pub fn evaluate(&self, variables: &VariableMap) -> EvalResult<f64> {
        match self {
            Self::Constant(value) => Ok(*value),

            Self::Variable(name) => {
                variables.get(name)
                         .copied()
                         .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() })
            },

            Self::BinaryOp { op, left, right } => {
                Ok(op.apply(left.evaluate(variables)?, right.evaluate(variables)?))
            },

            Self::Power { left, right } => {
                Ok(left.evaluate(variables)?.powf(right.evaluate(variables)?))
            },

            Self::FunctionCall { name, argument } => {
                apply_function(name, argument.evaluate(variables)?)
            },
        }
    }
}
