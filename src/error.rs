#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating or parsing an
/// expression.
///
/// Every variant is unrecoverable at the point of detection: the current
/// `evaluate` or `parse` call aborts with no partial result. Numeric edge
/// cases such as division by zero are not errors; they propagate IEEE-754
/// infinities and NaN instead.
pub enum EvalError {
    /// An operator character reached the fold step that is not one of the
    /// recognized operators.
    IllegalOperator {
        /// The offending character.
        op: char,
    },
    /// A scanned identifier was applied as a function name but matches no
    /// entry in the function table.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A variable reference names a variable absent from the supplied
    /// variable map.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The expression is structurally broken: unmatched parentheses, an
    /// operator with a missing operand, or empty input.
    MalformedExpression {
        /// Details about the structural problem.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalOperator { op } => {
                write!(f, "Illegal operator '{op}'.")
            },

            Self::UnknownFunction { name } => {
                write!(f, "Unknown function '{name}'.")
            },

            Self::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{name}'.")
            },

            Self::MalformedExpression { details } => {
                write!(f, "Malformed expression: {details}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
