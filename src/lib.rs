//! A tree-walking interpreter for the sprig scripting language.
//!
//! Source text flows through three stages: a hand-written one-character-
//! lookahead scanner produces tokens, a Pratt parser turns them into an
//! abstract syntax tree, and a recursive evaluator walks the tree over
//! lexically nested environments.  Functions are first-class closures,
//! `return` unwinds through nested blocks, and runtime errors are ordinary
//! values that propagate to the program boundary.
//!
//! # Examples
//!
//! See [`crate::interpreter::Interpreter`].
//!
//! # Limitations
//!
//! - Evaluation is implicit recursion on the host stack; deeply nested
//!   expressions or runaway recursion can exhaust it.
//! - A recursive top-level binding forms a reference cycle between the
//!   closure and its environment, which leaks for the process lifetime.

#![warn(rust_2018_idioms)]
#![warn(missing_debug_implementations)]

pub mod interpreter;
pub mod value;

mod ast;
mod ctx;
mod env;
mod eval;
mod interner;
mod lexer;
mod parser;
mod token;
