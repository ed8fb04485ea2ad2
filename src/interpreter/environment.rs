use std::collections::HashMap;

use crate::{ast::FunctionDef, interpreter::value::Value};

/// The variable and function store of one session.
///
/// There is a single global scope. Function calls bind their parameters in a
/// separate map layered over it (see the evaluator), so nothing here ever
/// needs a scope stack.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
    functions: HashMap<String, FunctionDef>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// # Example
    /// ```
    /// use jpp::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("x", Value::Number(5.0));
    /// env.set_variable("x", Value::Number(10.0));
    ///
    /// assert_eq!(env.get_variable("x"), Some(&Value::Number(10.0)));
    /// ```
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Stores a function definition, replacing any previous definition with
    /// the same name.
    pub fn define_function(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.clone(), def);
    }

    /// Looks up a function definition.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Returns the number of defined functions.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}
