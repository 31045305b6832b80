//! API to control the interpreter.

use std::error::Error;
use std::fmt;
use std::io::prelude::*;
use std::rc::Rc;

use log::debug;

use crate::ctx::Context;
use crate::env::Env;
use crate::eval::Evaluator;
use crate::parser::Parser;
use crate::value::Value;

/// A tree-walk interpreter session.
///
/// The global environment persists across [`Interpreter::eval`] calls, so a
/// REPL can define a binding on one line and use it on the next.
///
/// # Example
///
/// ```
/// # use sprig::interpreter::Interpreter;
///
/// let mut output: Vec<u8> = Vec::new();
/// let mut interp = Interpreter::new(&mut output);
///
/// let func_def = r#"
///     let max = fn(x, y) {
///         if (x > y) { x } else { y }
///     };
/// "#;
/// interp.eval(func_def).expect("parse error");
///
/// let value = interp.eval("max(10, 20)").expect("parse error");
/// assert_eq!(value.to_string(), "20");
/// ```
#[derive(Debug)]
pub struct Interpreter<'t, W: Write> {
    ctx: Rc<Context>,
    globals: Rc<Env>,
    evaluator: Evaluator<'t, W>,
}

/// The syntax errors collected while parsing one source text.
///
/// Evaluation errors are not represented here: they are [`Value::Error`]
/// values and come back through the `Ok` side of [`Interpreter::eval`].
#[derive(Debug)]
pub struct ParseErrors(Vec<String>);

impl ParseErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse errors:")?;
        for msg in &self.0 {
            write!(f, "\n\t{}", msg)?;
        }
        Ok(())
    }
}

impl Error for ParseErrors {}

impl<'t, W: Write> Interpreter<'t, W> {
    /// Creates a session writing `puts` output to `output`.
    pub fn new(output: &'t mut W) -> Interpreter<'t, W> {
        Interpreter {
            ctx: Context::new(),
            globals: Env::new(),
            evaluator: Evaluator::new(output),
        }
    }

    /// Lex, parse, and evaluate `source` in the session's global environment.
    ///
    /// A non-empty parse error list suppresses evaluation.  Runtime errors do
    /// not: they are values and are returned as such.
    pub fn eval(&mut self, source: &str) -> Result<Value, ParseErrors> {
        let mut parser = Parser::new(source, self.ctx.clone());
        let prg = parser.parse_program();
        if !parser.errors().is_empty() {
            return Err(ParseErrors(parser.into_errors()));
        }
        debug!("parsed {} statements", prg.len());
        Ok(self.evaluator.eval_program(&prg, self.globals.clone()))
    }
}
