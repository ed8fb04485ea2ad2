use std::collections::HashMap;

use crate::{
    ast::{FunctionDef, Fragment},
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            function::{builtin, input, log, now, random, round},
        },
        parser::core::parse_fragment,
        value::Value,
    },
};

/// Deepest nesting of user function calls before evaluation gives up with
/// `RecursionLimit`.
pub const MAX_CALL_DEPTH: usize = 64;

/// Type alias for builtin function handlers.
///
/// A builtin receives the session (for the random source and the input
/// capability), a slice of evaluated argument values and the offset of the
/// call.
type BuiltinFn = fn(&mut Session, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin functions, in the order they are listed to
        /// interactive users.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"     => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"     => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"     => { arity: Arity::Exact(1), func: builtin::tan },
    "sqrt"    => { arity: Arity::Exact(1), func: builtin::sqrt },
    "log"     => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "exp"     => { arity: Arity::Exact(1), func: builtin::exp },
    "abs"     => { arity: Arity::Exact(1), func: builtin::abs },
    "round"   => { arity: Arity::OneOf(&[1, 2]), func: round::round },
    "ceil"    => { arity: Arity::Exact(1), func: builtin::ceil },
    "floor"   => { arity: Arity::Exact(1), func: builtin::floor },
    "randint" => { arity: Arity::Exact(2), func: random::randint },
    "random"  => { arity: Arity::Exact(0), func: random::random },
    "choice"  => { arity: Arity::Exact(1), func: random::choice },
    "now"     => { arity: Arity::Exact(0), func: now::now },
    "input"   => { arity: Arity::OneOf(&[0, 1]), func: input::input },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(arr) => {
                let counts = arr.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
        }
    }
}

impl Session {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it verifies arity and executes the builtin.
    /// Otherwise it delegates to user-defined function handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    /// - `offset`: Offset of the call for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub(crate) fn eval_function(&mut self,
                                name: &str,
                                args: &[Value],
                                offset: usize)
                                -> EvalResult<Value> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if !builtin.arity.check(args.len()) {
                return Err(EvalError::ArityMismatch { name: name.to_string(),
                                                      expected: builtin.arity.to_string(),
                                                      found: args.len(),
                                                      offset }.into());
            }
            return (builtin.func)(self, args, offset);
        }

        self.call_user_defined_function(name, args, offset)
    }

    /// Executes a user-defined function.
    ///
    /// The function is retrieved from the environment by name. Its parameter
    /// count must match the number of supplied arguments. The body text is
    /// parsed now, on every call, and evaluated with the parameters bound in
    /// a scope that shadows the globals of the same name.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - Lexing or parsing errors in the body. Their offsets refer to the
    ///   body text.
    /// - Calls nested deeper than [`MAX_CALL_DEPTH`].
    fn call_user_defined_function(&mut self,
                                  name: &str,
                                  args: &[Value],
                                  offset: usize)
                                  -> EvalResult<Value> {
        let func: FunctionDef =
            self.environment
                .get_function(name)
                .cloned()
                .ok_or_else(|| EvalError::UndefinedFunction { name: name.to_string(),
                                                              offset })?;

        if args.len() != func.params.len() {
            return Err(EvalError::ArityMismatch { name: name.to_string(),
                                                  expected: func.params.len().to_string(),
                                                  found: args.len(),
                                                  offset }.into());
        }

        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(EvalError::RecursionLimit { name: name.to_string(),
                                                   offset }.into());
        }

        let body = parse_fragment(Fragment::new(&func.body))?;

        let bindings = func.params
                           .iter()
                           .cloned()
                           .zip(args.iter().cloned())
                           .collect::<HashMap<_, _>>();

        self.call_depth += 1;
        let result = self.eval(&body, Some(&bindings));
        self.call_depth -= 1;

        result
    }
}
