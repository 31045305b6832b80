//! End-to-end scenarios run through the public interpreter API.

use sprig::interpreter::Interpreter;
use sprig::value::Value;

fn run(src: &str) -> (Value, String) {
    let mut raw_output: Vec<u8> = Vec::new();
    let mut interp = Interpreter::new(&mut raw_output);
    let value = interp.eval(src).expect("parse error");
    drop(interp);
    let output = String::from_utf8(raw_output).expect("output is not UTF-8");
    (value, output)
}

fn assert_value(src: &str, expected: &str) {
    let (value, _) = run(src);
    assert_eq!(value.to_string(), expected, "source: {}", src);
}

fn assert_output(src: &str, expected: &str) {
    let (_, output) = run(src);
    assert_eq!(output, expected, "source: {}", src);
}

#[test]
fn arithmetic() {
    assert_value("5 + 5 + 5 + 5 - 10", "10");
    assert_value("(2 + 8) / 5 - 10", "-8");
}

#[test]
fn return_escapes_nested_blocks() {
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
}

#[test]
fn function_application() {
    assert_value("let add = fn(x, y) { x + y }; add(5 + 5, add(5, 5));", "20");
}

#[test]
fn closures() {
    assert_value(
        "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);",
        "5",
    );
}

#[test]
fn first_error_wins() {
    assert_value("5 + true; 5;", "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn unknown_identifier() {
    assert_value("foobar", "ERROR: identifier not found: foobar");
}

#[test]
fn string_concatenation() {
    assert_value("\"hello\" + \" \" + \"world\"", "hello world");
}

#[test]
fn array_builtins() {
    assert_value("len([1, 2, 3])", "3");
    assert_value("first([1, 2, 3])", "1");
    assert_value("rest([1, 2, 3])", "[2, 3]");
    assert_value("push([1, 2], 3)", "[1, 2, 3]");
}

#[test]
fn hash_lookup() {
    assert_value(
        "let pages = {\"home\": 1, \"about\": 2}; pages[\"about\"]",
        "2",
    );
}

#[test]
fn puts_output() {
    assert_output("puts(\"hello\"); puts(1 + 2);", "hello\n3\n");
}

#[test]
fn map_over_an_array_with_recursion() {
    let src = r#"
        let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))));
                }
            };
            iter(arr, []);
        };
        map([1, 2, 3], fn(x) { x * 2 });
    "#;
    assert_value(src, "[2, 4, 6]");
}

#[test]
fn reduce_over_an_array() {
    let src = r#"
        let reduce = fn(arr, initial, f) {
            let iter = fn(arr, result) {
                if (len(arr) == 0) {
                    result
                } else {
                    iter(rest(arr), f(result, first(arr)));
                }
            };
            iter(arr, initial);
        };
        reduce([1, 2, 3, 4], 0, fn(sum, el) { sum + el });
    "#;
    assert_value(src, "10");
}

#[test]
fn function_display_form() {
    assert_value("fn(x, y) { x + y; }", "fn(x, y) {\n(x + y)\n}");
}

#[test]
fn fib_demo_script() {
    assert_output(
        include_str!("../demos/fib.sprig"),
        "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n",
    );
}

#[test]
fn inventory_demo_script() {
    assert_output(
        include_str!("../demos/inventory.sprig"),
        "apples: in stock\nplums: out of stock\n3\napples\nplums\n",
    );
}

#[test]
fn parse_error_list_is_returned() {
    let mut raw_output: Vec<u8> = Vec::new();
    let mut interp = Interpreter::new(&mut raw_output);
    let errors = interp.eval("let a 46;").unwrap_err();
    assert_eq!(
        errors.messages(),
        ["expected next token to be =, got INT"]
    );
}
