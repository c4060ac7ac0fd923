use crate::{engine::evaluator::EvalResult, error::EvalError};

/// Type alias for entries in the function table.
///
/// Every recognized function takes the single scalar value produced by its
/// parenthesized argument and returns a scalar.
type MathFn = fn(f64) -> f64;

/// Defines the named functions by generating a lookup table and a name list.
///
/// Each entry provides a lowercase name and the implementation applied to
/// the argument value.
///
/// The macro produces:
/// - `FunctionDef` (internal metadata),
/// - `FUNCTION_TABLE` (static table for lookup),
/// - `FUNCTION_NAMES` (public list of recognized names).
macro_rules! math_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct FunctionDef {
            name: &'static str,
            func: MathFn,
        }
        static FUNCTION_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, func: $func },
            )*
        ];
        /// Names recognized by [`apply_function`], in table order.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

math_functions! {
    // Trigonometry over degrees.
    "sin"    => |x: f64| x.to_radians().sin(),
    "cos"    => |x: f64| x.to_radians().cos(),
    "tan"    => |x: f64| x.to_radians().tan(),
    // Inverse trigonometry, reported in degrees.
    "asin"   => |x: f64| x.asin().to_degrees(),
    "arcsin" => |x: f64| x.asin().to_degrees(),
    "acos"   => |x: f64| x.acos().to_degrees(),
    "arccos" => |x: f64| x.acos().to_degrees(),
    "atan"   => |x: f64| x.atan().to_degrees(),
    "arctan" => |x: f64| x.atan().to_degrees(),
    // Radian-input variants.
    "sinr"   => f64::sin,
    "cosr"   => f64::cos,
    "tanr"   => f64::tan,
    // Logarithms.
    "log"    => f64::log10,
    "ln"     => f64::ln,
    "log2"   => f64::log2,
    // Roots, magnitude and rounding.
    "sqrt"   => f64::sqrt,
    "cbrt"   => f64::cbrt,
    "abs"    => f64::abs,
    "ceil"   => f64::ceil,
    "floor"  => f64::floor,
    "round"  => f64::round,
    // Exponentials.
    "exp"    => f64::exp,
    "sq"     => |x: f64| x * x,
}

/// Applies a named function to the value produced by its argument.
///
/// Lookup is case-insensitive. Out-of-domain arguments (negative `sqrt`,
/// out-of-range `asin`, ...) are not trapped; they produce NaN or infinity
/// per standard floating-point semantics.
///
/// # Parameters
/// - `name`: Function name as scanned from the expression.
/// - `value`: The evaluated argument.
///
/// # Returns
/// The function result.
///
/// # Errors
/// Returns `EvalError::UnknownFunction` if the name matches no table entry.
///
/// # Example
/// ```
/// use varcalc::engine::functions::apply_function;
///
/// assert_eq!(apply_function("sqrt", 16.0).unwrap(), 4.0);
/// assert_eq!(apply_function("ABS", -3.0).unwrap(), 3.0);
/// assert!(apply_function("foo", 1.0).is_err());
/// ```
pub fn apply_function(name: &str, value: f64) -> EvalResult<f64> {
    let lowered = name.to_ascii_lowercase();

    FUNCTION_TABLE.iter()
                  .find(|function| function.name == lowered)
                  .map(|function| (function.func)(value))
                  .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })
}
