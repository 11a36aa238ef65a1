use crate::{
    error::eval_error::EvalResult,
    interpreter::{evaluator::stack::ValueStack, symbol::core::Function},
};

/// Registers builtin functions by generating the static function table.
///
/// Each entry maps a name to a [`FunctionRule`](super::core::FunctionRule).
/// The macro produces `BUILTIN_FUNCTIONS`, the table the standard symbol
/// table is seeded from.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:path
        ),* $(,)?
    ) => {
        /// Every builtin function, in registration order.
        pub static BUILTIN_FUNCTIONS: &[Function] = &[
            $(
                Function::new($name, $func),
            )*
        ];
    };
}

builtin_functions! {
    "sin"   => sin,
    "cos"   => cos,
    "tan"   => tan,
    "sinh"  => sinh,
    "cosh"  => cosh,
    "tanh"  => tanh,
    "exp"   => exp,
    "ln"    => ln,
    "sqrt"  => sqrt,
    "abs"   => abs,
    "floor" => floor,
    "ceil"  => ceil,
    "round" => round,
    "pow"   => pow,
    "log"   => log,
    "min"   => min,
    "max"   => max,
    "hypot" => hypot,
}

/// Defines a builtin pulling one operand and applying the matching `f64`
/// method to it.
///
/// # Example
/// ```
/// use stackeval::interpreter::{evaluator::stack::ValueStack, symbol::builtin::sin};
///
/// let mut values = ValueStack::new();
/// values.push(std::f64::consts::FRAC_PI_2);
///
/// assert_eq!(sin(&mut values).unwrap(), 1.0);
/// ```
macro_rules! unary_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            pub fn $fname(values: &mut ValueStack) -> EvalResult<f64> {
                Ok(values.pull()?.$real_fn())
            }
        )*
    };
}

unary_builtin! {
    sin => sin,
    cos => cos,
    tan => tan,
    sinh => sinh,
    cosh => cosh,
    tanh => tanh,
    exp => exp,
    ln => ln,
    sqrt => sqrt,
    abs => abs,
    floor => floor,
    ceil => ceil,
    round => round,
}

/// Raises a base to a power: `pow(base, degree)`.
///
/// The degree is on top of the stack, so it is pulled first.
///
/// # Example
/// ```
/// use stackeval::interpreter::{evaluator::stack::ValueStack, symbol::builtin::pow};
///
/// let mut values = ValueStack::new();
/// values.push(2.0);
/// values.push(10.0);
///
/// assert_eq!(pow(&mut values).unwrap(), 1024.0);
/// ```
pub fn pow(values: &mut ValueStack) -> EvalResult<f64> {
    let degree = values.pull()?;
    let base = values.pull()?;
    Ok(base.powf(degree))
}

/// Logarithm of a value in an arbitrary base: `log(x, base)`.
pub fn log(values: &mut ValueStack) -> EvalResult<f64> {
    let base = values.pull()?;
    let x = values.pull()?;
    Ok(x.log(base))
}

pub fn min(values: &mut ValueStack) -> EvalResult<f64> {
    let right = values.pull()?;
    let left = values.pull()?;
    Ok(left.min(right))
}

pub fn max(values: &mut ValueStack) -> EvalResult<f64> {
    let right = values.pull()?;
    let left = values.pull()?;
    Ok(left.max(right))
}

/// Length of the hypotenuse: `hypot(a, b)`.
pub fn hypot(values: &mut ValueStack) -> EvalResult<f64> {
    let right = values.pull()?;
    let left = values.pull()?;
    Ok(left.hypot(right))
}
