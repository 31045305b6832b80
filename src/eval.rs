//! The tree-walking evaluator.
//!
//! Errors are values, not `Err` results: every combinator checks its
//! sub-results and returns the first error encountered, which preserves
//! strict left-to-right evaluation order.  `return` rides a wrapper value
//! that blocks pass through untouched; only the program and function-call
//! boundaries unwrap it.

use std::collections::HashMap;
use std::io::prelude::*;
use std::rc::Rc;

use crate::ast::{Block, Expr, InfixOp, PrefixOp, Stmt};
use crate::env::Env;
use crate::interner::Symbol;
use crate::value::{Builtin, Function, Value};

#[derive(Debug)]
pub struct Evaluator<'a, W: Write> {
    output: &'a mut W,
}

impl<'a, W: Write> Evaluator<'a, W> {
    /// Creates an evaluator writing `puts` output to `output`.
    pub fn new(output: &'a mut W) -> Evaluator<'a, W> {
        Evaluator { output }
    }

    /// Evaluate a whole program.  A `return` here exits the program with the
    /// returned value; an error stops evaluation of the remaining statements.
    pub fn eval_program(&mut self, stmts: &[Stmt], env: Rc<Env>) -> Value {
        let mut result = Value::Null;
        for stmt in stmts {
            match self.eval_stmt(stmt, env.clone()) {
                Value::Return(value) => return *value,
                err @ Value::Error(_) => return err,
                value => result = value,
            }
        }
        result
    }

    /// Evaluate a block.  Unlike [`Evaluator::eval_program`] this keeps a
    /// return marker wrapped, so it can climb through nested blocks to the
    /// enclosing call.
    fn eval_block(&mut self, block: &Block, env: Rc<Env>) -> Value {
        let mut result = Value::Null;
        for stmt in &block.0 {
            match self.eval_stmt(stmt, env.clone()) {
                out @ (Value::Return(_) | Value::Error(_)) => return out,
                value => result = value,
            }
        }
        result
    }

    fn eval_stmt(&mut self, stmt: &Stmt, env: Rc<Env>) -> Value {
        match stmt {
            Stmt::Expr(expr) => self.eval_expr(expr, env),
            Stmt::Let(name, value) => {
                let value = self.eval_expr(value, env.clone());
                if value.is_error() {
                    return value;
                }
                env.set(name, value);
                Value::Null
            }
            Stmt::Return(expr) => {
                let value = self.eval_expr(expr, env);
                if value.is_error() {
                    return value;
                }
                Value::Return(Box::new(value))
            }
        }
    }

    fn eval_expr(&mut self, expr: &Expr, env: Rc<Env>) -> Value {
        match expr {
            Expr::Int(n) => Value::Integer(*n),
            Expr::Str(s) => Value::Str(Rc::from(s.as_str())),
            Expr::Bool(b) => Value::Bool(*b),
            Expr::Ident(sym) => eval_ident(sym, &env),
            Expr::Prefix(op, right) => {
                let right = self.eval_expr(right, env);
                if right.is_error() {
                    return right;
                }
                eval_prefix(*op, right)
            }
            Expr::Infix(op, left, right) => {
                let left = self.eval_expr(left, env.clone());
                if left.is_error() {
                    return left;
                }
                let right = self.eval_expr(right, env);
                if right.is_error() {
                    return right;
                }
                eval_infix(*op, left, right)
            }
            Expr::If(cond, cons, alt) => {
                let cond = self.eval_expr(cond, env.clone());
                if cond.is_error() {
                    return cond;
                }
                if cond.is_truthy() {
                    self.eval_block(cons, env)
                } else if let Some(alt) = alt {
                    self.eval_block(alt, env)
                } else {
                    Value::Null
                }
            }
            Expr::Function(params, body) => Value::Function(Rc::new(Function {
                params: params.clone(),
                body: body.clone(),
                env,
            })),
            Expr::Call(callee, args) => {
                let callee = self.eval_expr(callee, env.clone());
                if callee.is_error() {
                    return callee;
                }
                match self.eval_expressions(args, env) {
                    Ok(args) => self.apply(callee, args),
                    Err(err) => err,
                }
            }
            Expr::Array(elems) => match self.eval_expressions(elems, env) {
                Ok(elems) => Value::Array(Rc::new(elems)),
                Err(err) => err,
            },
            Expr::Index(left, index) => {
                let left = self.eval_expr(left, env.clone());
                if left.is_error() {
                    return left;
                }
                let index = self.eval_expr(index, env);
                if index.is_error() {
                    return index;
                }
                eval_index(left, index)
            }
            Expr::Hash(pairs) => self.eval_hash(pairs, env),
        }
    }

    /// Evaluate expressions left to right, stopping at the first error.
    fn eval_expressions(&mut self, exprs: &[Expr], env: Rc<Env>) -> Result<Vec<Value>, Value> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            let value = self.eval_expr(expr, env.clone());
            if value.is_error() {
                return Err(value);
            }
            values.push(value);
        }
        Ok(values)
    }

    fn eval_hash(&mut self, pairs: &[(Expr, Expr)], env: Rc<Env>) -> Value {
        let mut map = HashMap::new();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expr(key_expr, env.clone());
            if key.is_error() {
                return key;
            }
            let key = match key.hash_key() {
                Some(k) => k,
                None => {
                    return Value::Error(format!("unusable as hash key: {}", key.type_name()));
                }
            };
            let value = self.eval_expr(value_expr, env.clone());
            if value.is_error() {
                return value;
            }
            // Duplicate keys: last write wins.
            map.insert(key, value);
        }
        Value::Hash(Rc::new(map))
    }

    fn apply(&mut self, callee: Value, args: Vec<Value>) -> Value {
        match callee {
            Value::Function(func) => {
                if args.len() != func.params.len() {
                    return Value::Error(format!(
                        "wrong number of arguments. got={}, want={}",
                        args.len(),
                        func.params.len()
                    ));
                }
                // A fresh scope under the captured environment, not the
                // caller's.
                let call_env = Env::with_parent(func.env.clone());
                for (param, arg) in func.params.iter().zip(args) {
                    call_env.set(param, arg);
                }
                match self.eval_block(&func.body, call_env) {
                    Value::Return(value) => *value,
                    value => value,
                }
            }
            Value::Builtin(builtin) => self.apply_builtin(builtin, args),
            v => Value::Error(format!("not a function: {}", v.type_name())),
        }
    }

    fn apply_builtin(&mut self, builtin: Builtin, args: Vec<Value>) -> Value {
        match builtin {
            Builtin::Len => builtin_len(&args),
            Builtin::First => builtin_first(&args),
            Builtin::Last => builtin_last(&args),
            Builtin::Rest => builtin_rest(&args),
            Builtin::Push => builtin_push(args),
            Builtin::Puts => self.builtin_puts(&args),
        }
    }

    /// Each argument's display form on its own line.
    fn builtin_puts(&mut self, args: &[Value]) -> Value {
        for arg in args {
            if let Err(e) = writeln!(self.output, "{}", arg) {
                return Value::Error(format!("could not write output: {}", e));
            }
        }
        Value::Null
    }
}

fn eval_ident(sym: &Symbol, env: &Rc<Env>) -> Value {
    if let Some(value) = env.get(sym) {
        value
    } else if let Some(builtin) = Builtin::lookup(sym.name()) {
        Value::Builtin(builtin)
    } else {
        Value::Error(format!("identifier not found: {}", sym))
    }
}

fn eval_prefix(op: PrefixOp, right: Value) -> Value {
    match op {
        PrefixOp::Not => Value::Bool(!right.is_truthy()),
        PrefixOp::Neg => match right {
            // A fresh value: canonical instances are never mutated.
            Value::Integer(n) => Value::Integer(n.wrapping_neg()),
            v => Value::Error(format!("unknown operator: -{}", v.type_name())),
        },
    }
}

fn eval_infix(op: InfixOp, left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, l, r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(op, &l, &r),
        (Value::Bool(l), Value::Bool(r)) => match op {
            InfixOp::Eq => Value::Bool(l == r),
            InfixOp::NotEq => Value::Bool(l != r),
            _ => Value::Error(format!("unknown operator: BOOLEAN {} BOOLEAN", op)),
        },
        (Value::Null, Value::Null) => match op {
            InfixOp::Eq => Value::Bool(true),
            InfixOp::NotEq => Value::Bool(false),
            _ => Value::Error(format!("unknown operator: NULL {} NULL", op)),
        },
        (l, r) if l.type_name() != r.type_name() => Value::Error(format!(
            "type mismatch: {} {} {}",
            l.type_name(),
            op,
            r.type_name()
        )),
        (l, r) => Value::Error(format!(
            "unknown operator: {} {} {}",
            l.type_name(),
            op,
            r.type_name()
        )),
    }
}

fn eval_integer_infix(op: InfixOp, l: i64, r: i64) -> Value {
    match op {
        InfixOp::Add => Value::Integer(l.wrapping_add(r)),
        InfixOp::Sub => Value::Integer(l.wrapping_sub(r)),
        InfixOp::Mul => Value::Integer(l.wrapping_mul(r)),
        InfixOp::Div => {
            if r == 0 {
                Value::Error("division by zero".to_string())
            } else {
                Value::Integer(l.wrapping_div(r))
            }
        }
        InfixOp::Eq => Value::Bool(l == r),
        InfixOp::NotEq => Value::Bool(l != r),
        InfixOp::Less => Value::Bool(l < r),
        InfixOp::Greater => Value::Bool(l > r),
    }
}

fn eval_string_infix(op: InfixOp, l: &Rc<str>, r: &Rc<str>) -> Value {
    match op {
        InfixOp::Add => Value::Str(Rc::from(format!("{}{}", l, r).as_str())),
        InfixOp::Eq => Value::Bool(l == r),
        InfixOp::NotEq => Value::Bool(l != r),
        _ => Value::Error(format!("unknown operator: STRING {} STRING", op)),
    }
}

fn eval_index(left: Value, index: Value) -> Value {
    match (&left, &index) {
        (Value::Array(elems), Value::Integer(i)) => usize::try_from(*i)
            .ok()
            .and_then(|i| elems.get(i))
            .cloned()
            .unwrap_or(Value::Null),
        (Value::Hash(map), _) => match index.hash_key() {
            Some(key) => map.get(&key).cloned().unwrap_or(Value::Null),
            None => Value::Error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => Value::Error(format!(
            "index operator not supported: {}",
            left.type_name()
        )),
    }
}

fn builtin_len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return Value::Error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Value::Str(s) => Value::Integer(s.len() as i64),
        Value::Array(elems) => Value::Integer(elems.len() as i64),
        v => Value::Error(format!(
            "argument to `len` not supported, got {}",
            v.type_name()
        )),
    }
}

fn builtin_first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return Value::Error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Value::Array(elems) => elems.first().cloned().unwrap_or(Value::Null),
        v => Value::Error(format!(
            "argument to `first` not supported, got {}",
            v.type_name()
        )),
    }
}

fn builtin_last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return Value::Error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Value::Array(elems) => elems.last().cloned().unwrap_or(Value::Null),
        v => Value::Error(format!(
            "argument to `last` not supported, got {}",
            v.type_name()
        )),
    }
}

fn builtin_rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return Value::Error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }
    match &args[0] {
        Value::Array(elems) => {
            if elems.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(elems[1..].to_vec()))
            }
        }
        v => Value::Error(format!(
            "argument to `rest` not supported, got {}",
            v.type_name()
        )),
    }
}

fn builtin_push(mut args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return Value::Error(format!(
            "wrong number of arguments. got={}, want=2",
            args.len()
        ));
    }
    let value = args.pop().expect("checked length above");
    match &args[0] {
        Value::Array(elems) => {
            let mut extended = elems.as_ref().clone();
            extended.push(value);
            Value::Array(Rc::new(extended))
        }
        v => Value::Error(format!(
            "argument to `push` not supported, got {}",
            v.type_name()
        )),
    }
}
