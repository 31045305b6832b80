//! Syntactic analysis.
//!
//! The parser is a Pratt-style recursive descent parser: a prefix rule keyed
//! on the current token produces the left-hand expression, then an infix loop
//! extends it while the next token binds tighter than the caller.  Malformed
//! input never aborts parsing; errors accumulate as human-readable strings
//! and the (untrusted) tree is still returned for diagnostics.

use std::rc::Rc;

use crate::ast::{Block, Expr, InfixOp, PrefixOp, Stmt};
use crate::ctx::Context;
use crate::interner::Symbol;
use crate::lexer::Lexer;
use crate::token::Token;

/// Binding strength, lowest to highest.  Left associativity falls out of the
/// strict `<` comparison in the infix loop.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
enum Precedence {
    Lowest,
    Equals,      // == and !=
    LessGreater, // < and >
    Sum,         // + and -
    Product,     // * and /
    Prefix,      // !x and -x
    Call,        // f(x) and a[i]
}

fn token_precedence(token: &Token) -> Precedence {
    match token {
        Token::EqualEqual | Token::BangEqual => Precedence::Equals,
        Token::Less | Token::Greater => Precedence::LessGreater,
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Star | Token::Slash => Precedence::Product,
        Token::LeftParen | Token::LeftBracket => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

// TODO: track source positions in the lexer so errors can point at a line
pub struct Parser<'s> {
    lexer: Lexer<'s>,
    cur: Token,
    peek: Token,
    errors: Vec<String>,
}

impl<'s> Parser<'s> {
    pub fn new(input: &'s str, ctx: Rc<Context>) -> Parser<'s> {
        let mut parser = Parser {
            lexer: Lexer::new(input, ctx),
            cur: Token::Eof,
            peek: Token::Eof,
            errors: vec![],
        };
        // Prime both lookahead slots.
        parser.advance();
        parser.advance();
        parser
    }

    /// Parse statements until end of input.
    ///
    /// Check [`Parser::errors`] afterwards: a non-empty list means the
    /// returned tree is incomplete.
    pub fn parse_program(&mut self) -> Vec<Stmt> {
        let mut prg = vec![];
        while self.cur != Token::Eof {
            if let Some(stmt) = self.parse_statement() {
                prg.push(stmt);
            }
            self.advance();
        }
        prg
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    fn advance(&mut self) {
        self.cur = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    fn expect_peek(&mut self, expected: Token) -> bool {
        if self.peek == expected {
            self.advance();
            true
        } else {
            self.peek_error(expected.kind());
            false
        }
    }

    fn peek_error(&mut self, expected: &str) {
        self.errors.push(format!(
            "expected next token to be {}, got {}",
            expected,
            self.peek.kind()
        ));
    }

    fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let IDENT = EXPR ;`  Current token is `let`.
    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let name = match self.peek.clone() {
            Token::Ident(sym) => {
                self.advance();
                sym
            }
            _ => {
                self.peek_error("IDENT");
                return None;
            }
        };

        if !self.expect_peek(Token::Equal) {
            return None;
        }

        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }
        Some(Stmt::Let(name, Box::new(value)))
    }

    /// `return EXPR ;`  Current token is `return`.
    fn parse_return_statement(&mut self) -> Option<Stmt> {
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }
        Some(Stmt::Return(Box::new(value)))
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }
        Some(Stmt::Expr(Box::new(expr)))
    }

    /// The Pratt core.  On return the current token is the last token of the
    /// parsed expression.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while self.peek != Token::Semicolon && precedence < token_precedence(&self.peek) {
            left = match self.peek {
                Token::LeftParen => {
                    self.advance();
                    self.parse_call(left)?
                }
                Token::LeftBracket => {
                    self.advance();
                    self.parse_index(left)?
                }
                _ => {
                    self.advance();
                    self.parse_infix(left)?
                }
            };
        }
        Some(left)
    }

    /// Prefix dispatch: the current token decides which rule produces the
    /// left-hand expression.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur.clone() {
            Token::Ident(sym) => Some(Expr::Ident(sym)),
            Token::Int(lit) => self.parse_integer(&lit),
            Token::Str(s) => Some(Expr::Str(s)),
            Token::True => Some(Expr::Bool(true)),
            Token::False => Some(Expr::Bool(false)),
            Token::Bang => self.parse_prefix_op(PrefixOp::Not),
            Token::Minus => self.parse_prefix_op(PrefixOp::Neg),
            Token::LeftParen => self.parse_grouped(),
            Token::If => self.parse_if(),
            Token::Fn => self.parse_function(),
            Token::LeftBracket => {
                let elems = self.parse_expression_list(Token::RightBracket)?;
                Some(Expr::Array(elems))
            }
            Token::LeftCurly => self.parse_hash(),
            t => {
                self.errors
                    .push(format!("no prefix parse function for {} found", t.kind()));
                None
            }
        }
    }

    fn parse_integer(&mut self, literal: &str) -> Option<Expr> {
        match literal.parse::<i64>() {
            Ok(n) => Some(Expr::Int(n)),
            Err(_) => {
                self.errors
                    .push(format!("could not parse {} as integer", literal));
                None
            }
        }
    }

    fn parse_prefix_op(&mut self, op: PrefixOp) -> Option<Expr> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix(op, Box::new(right)))
    }

    /// Current token is the infix operator; the left operand is already
    /// parsed.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let op = match self.cur {
            Token::Plus => InfixOp::Add,
            Token::Minus => InfixOp::Sub,
            Token::Star => InfixOp::Mul,
            Token::Slash => InfixOp::Div,
            Token::EqualEqual => InfixOp::Eq,
            Token::BangEqual => InfixOp::NotEq,
            Token::Less => InfixOp::Less,
            Token::Greater => InfixOp::Greater,
            // token_precedence() admits only the tokens above into the infix
            // loop
            _ => unreachable!("token {} has no infix rule", self.cur),
        };
        let precedence = token_precedence(&self.cur);
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix(op, Box::new(left), Box::new(right)))
    }

    /// `( EXPR )`  Grouping produces no node of its own.
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RightParen) {
            return None;
        }
        Some(expr)
    }

    /// `if ( COND ) { CONS }` with optional `else { ALT }`.
    fn parse_if(&mut self) -> Option<Expr> {
        if !self.expect_peek(Token::LeftParen) {
            return None;
        }
        self.advance();
        let cond = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RightParen) {
            return None;
        }
        if !self.expect_peek(Token::LeftCurly) {
            return None;
        }
        let cons = self.parse_block();

        let alt = if self.peek == Token::Else {
            self.advance();
            if !self.expect_peek(Token::LeftCurly) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If(Box::new(cond), cons, alt))
    }

    /// Statements up to the closing `}` (or end of input).  Current token is
    /// `{` on entry and `}` on exit.
    fn parse_block(&mut self) -> Block {
        let mut stmts = vec![];
        self.advance();
        while self.cur != Token::RightCurly && self.cur != Token::Eof {
            if let Some(stmt) = self.parse_statement() {
                stmts.push(stmt);
            }
            self.advance();
        }
        Block(stmts)
    }

    /// `fn ( PARAMS ) { BODY }`  Current token is `fn`.
    fn parse_function(&mut self) -> Option<Expr> {
        if !self.expect_peek(Token::LeftParen) {
            return None;
        }
        let params = self.parse_params()?;
        if !self.expect_peek(Token::LeftCurly) {
            return None;
        }
        let body = self.parse_block();
        Some(Expr::Function(params, body))
    }

    fn parse_params(&mut self) -> Option<Vec<Symbol>> {
        let mut params = vec![];
        if self.peek == Token::RightParen {
            self.advance();
            return Some(params);
        }

        loop {
            match self.peek.clone() {
                Token::Ident(sym) => {
                    self.advance();
                    params.push(sym);
                }
                _ => {
                    self.peek_error("IDENT");
                    return None;
                }
            }
            if self.peek == Token::Comma {
                self.advance();
            } else {
                break;
            }
        }

        if !self.expect_peek(Token::RightParen) {
            return None;
        }
        Some(params)
    }

    /// `CALLEE ( ARGS )`  Current token is `(`.
    fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(Token::RightParen)?;
        Some(Expr::Call(Box::new(callee), args))
    }

    /// Comma-separated expressions up to `end`, which is consumed.  Shared by
    /// call arguments and array literals.
    fn parse_expression_list(&mut self, end: Token) -> Option<Vec<Expr>> {
        let mut list = vec![];
        if self.peek == end {
            self.advance();
            return Some(list);
        }

        self.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek == Token::Comma {
            self.advance();
            self.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }

    /// `COLLECTION [ EXPR ]`  Current token is `[`.
    fn parse_index(&mut self, left: Expr) -> Option<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Token::RightBracket) {
            return None;
        }
        Some(Expr::Index(Box::new(left), Box::new(index)))
    }

    /// `{ KEY : VALUE, … }`  Current token is `{`.
    fn parse_hash(&mut self) -> Option<Expr> {
        let mut pairs = vec![];
        while self.peek != Token::RightCurly {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            if !self.expect_peek(Token::Colon) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.peek != Token::RightCurly && !self.expect_peek(Token::Comma) {
                return None;
            }
        }
        if !self.expect_peek(Token::RightCurly) {
            return None;
        }
        Some(Expr::Hash(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<Stmt> {
        let ctx = Context::new();
        parse_with_ctx(ctx, input)
    }

    fn parse_with_ctx(ctx: Rc<Context>, input: &str) -> Vec<Stmt> {
        let mut parser = Parser::new(input, ctx);
        let prg = parser.parse_program();
        assert_eq!(parser.errors(), &[] as &[String], "input: {}", input);
        prg
    }

    fn parse_errors(input: &str) -> Vec<String> {
        let ctx = Context::new();
        let mut parser = Parser::new(input, ctx);
        parser.parse_program();
        parser.into_errors()
    }

    /// Single-expression-statement helper.
    fn parse_expr(input: &str) -> Expr {
        parse_expr_with_ctx(Context::new(), input)
    }

    fn parse_expr_with_ctx(ctx: Rc<Context>, input: &str) -> Expr {
        let prg = parse_with_ctx(ctx, input);
        assert_eq!(prg.len(), 1, "input: {}", input);
        match prg.into_iter().next().unwrap() {
            Stmt::Expr(e) => *e,
            s => panic!("unexpected output: {:?}", s),
        }
    }

    fn render(input: &str) -> String {
        parse(input).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn let_statements() {
        let ctx = Context::new();
        assert_eq!(
            parse_with_ctx(ctx.clone(), "let x = 5; let y = x;"),
            vec![
                Stmt::Let(ctx.symbol("x"), Box::new(Expr::Int(5))),
                Stmt::Let(ctx.symbol("y"), Box::new(Expr::Ident(ctx.symbol("x")))),
            ]
        );
    }

    #[test]
    fn let_without_trailing_semicolon() {
        let ctx = Context::new();
        assert_eq!(
            parse_with_ctx(ctx.clone(), "let x = 5"),
            vec![Stmt::Let(ctx.symbol("x"), Box::new(Expr::Int(5)))]
        );
    }

    #[test]
    fn return_statement() {
        assert_eq!(
            parse("return 10;"),
            vec![Stmt::Return(Box::new(Expr::Int(10)))]
        );
    }

    #[test]
    fn expression_statement() {
        assert_eq!(parse("5;"), vec![Stmt::Expr(Box::new(Expr::Int(5)))]);
    }

    #[test]
    fn identifier_expression() {
        let ctx = Context::new();
        assert_eq!(
            parse_expr_with_ctx(ctx.clone(), "foobar;"),
            Expr::Ident(ctx.symbol("foobar"))
        );
    }

    #[test]
    fn string_literal() {
        assert_eq!(
            parse_expr("\"hello world\";"),
            Expr::Str("hello world".to_string())
        );
    }

    #[test]
    fn bool_literals() {
        assert_eq!(parse_expr("true;"), Expr::Bool(true));
        assert_eq!(parse_expr("false;"), Expr::Bool(false));
    }

    #[test]
    fn prefix_expressions() {
        assert_eq!(
            parse_expr("!5;"),
            Expr::Prefix(PrefixOp::Not, Box::new(Expr::Int(5)))
        );
        assert_eq!(
            parse_expr("-15;"),
            Expr::Prefix(PrefixOp::Neg, Box::new(Expr::Int(15)))
        );
    }

    #[test]
    fn infix_expressions() {
        let cases = [
            ("5 + 5;", InfixOp::Add),
            ("5 - 5;", InfixOp::Sub),
            ("5 * 5;", InfixOp::Mul),
            ("5 / 5;", InfixOp::Div),
            ("5 < 5;", InfixOp::Less),
            ("5 > 5;", InfixOp::Greater),
            ("5 == 5;", InfixOp::Eq),
            ("5 != 5;", InfixOp::NotEq),
        ];
        for (input, op) in cases {
            assert_eq!(
                parse_expr(input),
                Expr::Infix(op, Box::new(Expr::Int(5)), Box::new(Expr::Int(5))),
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn operator_precedence_rendering() {
        let cases = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a + b * c", "(a + (b * c))"),
            ("a + b / c", "(a + (b / c))"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
            ("true == true", "(true == true)"),
            ("!(true == true)", "(!(true == true))"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
            ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
            ("add(a * b[2], b[1], 2 * [1, 2][1])", "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
        ];
        for (input, expected) in cases {
            assert_eq!(render(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn rendering_reparses_to_the_same_tree() {
        let ctx = Context::new();
        for input in ["-a * b + c", "!(a == b)", "add(a, b)[0]"] {
            let first = parse_with_ctx(ctx.clone(), input);
            let rendered = first.iter().map(ToString::to_string).collect::<String>();
            let second = parse_with_ctx(ctx.clone(), &rendered);
            assert_eq!(first, second, "input: {}", input);
        }
    }

    #[test]
    fn if_expression() {
        let ctx = Context::new();
        let (x, y) = (ctx.symbol("x"), ctx.symbol("y"));
        assert_eq!(
            parse_expr_with_ctx(ctx, "if (x < y) { x }"),
            Expr::If(
                Box::new(Expr::Infix(
                    InfixOp::Less,
                    Box::new(Expr::Ident(x.clone())),
                    Box::new(Expr::Ident(y))
                )),
                Block(vec![Stmt::Expr(Box::new(Expr::Ident(x)))]),
                None
            )
        );
    }

    #[test]
    fn if_else_expression() {
        let ctx = Context::new();
        let (x, y) = (ctx.symbol("x"), ctx.symbol("y"));
        assert_eq!(
            parse_expr_with_ctx(ctx, "if (x < y) { x } else { y }"),
            Expr::If(
                Box::new(Expr::Infix(
                    InfixOp::Less,
                    Box::new(Expr::Ident(x.clone())),
                    Box::new(Expr::Ident(y.clone()))
                )),
                Block(vec![Stmt::Expr(Box::new(Expr::Ident(x)))]),
                Some(Block(vec![Stmt::Expr(Box::new(Expr::Ident(y)))]))
            )
        );
    }

    #[test]
    fn function_literal() {
        let ctx = Context::new();
        let (x, y) = (ctx.symbol("x"), ctx.symbol("y"));
        assert_eq!(
            parse_expr_with_ctx(ctx, "fn(x, y) { x + y; }"),
            Expr::Function(
                vec![x.clone(), y.clone()],
                Block(vec![Stmt::Expr(Box::new(Expr::Infix(
                    InfixOp::Add,
                    Box::new(Expr::Ident(x)),
                    Box::new(Expr::Ident(y))
                )))])
            )
        );
    }

    #[test]
    fn function_parameter_lists() {
        let ctx = Context::new();
        let cases: [(&str, Vec<Symbol>); 3] = [
            ("fn() {};", vec![]),
            ("fn(x) {};", vec![ctx.symbol("x")]),
            (
                "fn(x, y, z) {};",
                vec![ctx.symbol("x"), ctx.symbol("y"), ctx.symbol("z")],
            ),
        ];
        for (input, params) in cases {
            match parse_expr_with_ctx(ctx.clone(), input) {
                Expr::Function(got, _) => assert_eq!(got, params, "input: {}", input),
                e => panic!("unexpected output: {:?}", e),
            }
        }
    }

    #[test]
    fn call_expression() {
        let ctx = Context::new();
        assert_eq!(
            parse_expr_with_ctx(ctx.clone(), "add(1, 2 * 3);"),
            Expr::Call(
                Box::new(Expr::Ident(ctx.symbol("add"))),
                vec![
                    Expr::Int(1),
                    Expr::Infix(InfixOp::Mul, Box::new(Expr::Int(2)), Box::new(Expr::Int(3))),
                ]
            )
        );
    }

    #[test]
    fn call_without_arguments() {
        let ctx = Context::new();
        assert_eq!(
            parse_expr_with_ctx(ctx.clone(), "f();"),
            Expr::Call(Box::new(Expr::Ident(ctx.symbol("f"))), vec![])
        );
    }

    #[test]
    fn array_literal() {
        assert_eq!(
            parse_expr("[1, 2 * 2]"),
            Expr::Array(vec![
                Expr::Int(1),
                Expr::Infix(InfixOp::Mul, Box::new(Expr::Int(2)), Box::new(Expr::Int(2))),
            ])
        );
    }

    #[test]
    fn empty_array_literal() {
        assert_eq!(parse_expr("[]"), Expr::Array(vec![]));
    }

    #[test]
    fn index_expression() {
        let ctx = Context::new();
        assert_eq!(
            parse_expr_with_ctx(ctx.clone(), "myArray[1 + 1]"),
            Expr::Index(
                Box::new(Expr::Ident(ctx.symbol("myArray"))),
                Box::new(Expr::Infix(
                    InfixOp::Add,
                    Box::new(Expr::Int(1)),
                    Box::new(Expr::Int(1))
                ))
            )
        );
    }

    #[test]
    fn hash_literal_with_string_keys() {
        assert_eq!(
            parse_expr("{\"one\": 1, \"two\": 2}"),
            Expr::Hash(vec![
                (Expr::Str("one".to_string()), Expr::Int(1)),
                (Expr::Str("two".to_string()), Expr::Int(2)),
            ])
        );
    }

    #[test]
    fn empty_hash_literal() {
        assert_eq!(parse_expr("{}"), Expr::Hash(vec![]));
    }

    #[test]
    fn hash_literal_with_expression_values() {
        assert_eq!(
            parse_expr("{\"one\": 0 + 1}"),
            Expr::Hash(vec![(
                Expr::Str("one".to_string()),
                Expr::Infix(InfixOp::Add, Box::new(Expr::Int(0)), Box::new(Expr::Int(1))),
            )])
        );
    }

    #[test]
    fn missing_let_identifier() {
        match parse_errors("let = 5;").as_slice() {
            [msg, ..] if msg == "expected next token to be IDENT, got =" => (),
            r => panic!("unexpected output: {:?}", r),
        }
    }

    #[test]
    fn missing_let_assign() {
        match parse_errors("let x 5;").as_slice() {
            [msg, ..] if msg == "expected next token to be =, got INT" => (),
            r => panic!("unexpected output: {:?}", r),
        }
    }

    #[test]
    fn missing_right_paren() {
        match parse_errors("(1").as_slice() {
            [msg] if msg == "expected next token to be ), got EOF" => (),
            r => panic!("unexpected output: {:?}", r),
        }
    }

    #[test]
    fn missing_prefix_rule() {
        match parse_errors("+ 5;").as_slice() {
            [msg, ..] if msg == "no prefix parse function for + found" => (),
            r => panic!("unexpected output: {:?}", r),
        }
    }

    #[test]
    fn integer_out_of_range() {
        match parse_errors("92233720368547758080;").as_slice() {
            [msg, ..] if msg == "could not parse 92233720368547758080 as integer" => (),
            r => panic!("unexpected output: {:?}", r),
        }
    }

    #[test]
    fn errors_accumulate_across_statements() {
        let errors = parse_errors("let x 5; let = 10; let 838383;");
        // Recovery resumes at the offending token, so the stray `=` also
        // trips the missing-prefix-rule check.
        assert_eq!(
            errors,
            vec![
                "expected next token to be =, got INT",
                "expected next token to be IDENT, got =",
                "no prefix parse function for = found",
                "expected next token to be IDENT, got INT",
            ]
        );
    }

    #[test]
    fn malformed_input_still_returns_remaining_statements() {
        let ctx = Context::new();
        let mut parser = Parser::new("let x 5; let y = 7;", ctx.clone());
        let prg = parser.parse_program();
        assert!(!parser.errors().is_empty());
        // The broken `let` is dropped; its dangling `5` reparses as an
        // expression statement and the next statement is intact.
        assert_eq!(
            prg,
            vec![
                Stmt::Expr(Box::new(Expr::Int(5))),
                Stmt::Let(ctx.symbol("y"), Box::new(Expr::Int(7))),
            ]
        );
    }
}
