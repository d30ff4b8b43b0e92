use std::fs;

use calcpad::{
    error::ParseError,
    evaluate,
    interpreter::{
        evaluator::core::evaluate_postfix,
        lexer::tokenize,
        parser::core::{infix_to_postfix, to_postfix},
    },
    token::{Operator, Token, join},
    try_evaluate,
};
use walkdir::WalkDir;

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            let actual = evaluate(&expression);
            assert!(same_value(actual, expected),
                    "Case {expression:?} in {path:?} evaluated to {actual}, expected {expected}");
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, f64)> {
    content.lines()
           .filter(|line| !line.trim_start().starts_with('#'))
           .filter_map(|line| line.split_once("=>"))
           .map(|(expression, expected)| {
               let expected = expected.trim()
                                      .parse()
                                      .unwrap_or_else(|e| panic!("Bad expectation {expected:?}: {e}"));
               (expression.to_string(), expected)
           })
           .collect()
}

fn same_value(actual: f64, expected: f64) -> bool {
    if expected.is_nan() {
        actual.is_nan()
    } else {
        actual == expected
    }
}

fn assert_evaluates(src: &str, expected: f64) {
    let actual = evaluate(src);
    assert!(same_value(actual, expected), "{src:?} evaluated to {actual}, expected {expected}");
}

fn assert_postfix(src: &str, expected: &str) {
    match to_postfix(src) {
        Ok(postfix) => assert_eq!(join(&postfix), expected, "postfix of {src:?}"),
        Err(e) => panic!("Conversion of {src:?} failed: {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_evaluates("2+3*4", 14.0);
    assert_evaluates("(2+3)*4", 20.0);
    assert_evaluates("2-3-4", -5.0);
    assert_evaluates("5%2", 1.0);
}

#[test]
fn exponentiation_is_left_associative() {
    assert_evaluates("2^3^2", 64.0);
    assert_postfix("2^3^2", "2 3 ^ 2 ^");
}

#[test]
fn empty_and_whitespace_input() {
    assert_evaluates("", 0.0);
    assert_evaluates("   ", 0.0);
    assert!(tokenize(" \t\n").unwrap().is_empty());
    assert!(to_postfix("").unwrap().is_empty());
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert!(evaluate("10/0").is_infinite());
    assert!(evaluate("10/0") > 0.0);
    assert!(evaluate("0/0").is_nan());
    assert!(try_evaluate("1/0").is_ok());
}

#[test]
fn unmatched_closing_paren_is_reported() {
    assert_evaluates("2+3)", 0.0);
    assert_eq!(to_postfix("2+3)"), Err(ParseError::UnbalancedParen { index: 3 }));
    assert_eq!(try_evaluate(")1"), Err(ParseError::UnbalancedParen { index: 0 }));
}

#[test]
fn unmatched_opening_paren_is_flushed() {
    assert_postfix("(1+2", "1 2 + (");
    assert_postfix("2*(3", "2 3 ( *");
    assert_evaluates("2*(3", 6.0);
}

#[test]
fn malformed_literals_fall_back_to_zero() {
    assert_evaluates("1.2.3+4", 0.0);
    assert_evaluates("abc", 0.0);
    assert_eq!(try_evaluate("3+.").unwrap_err(),
               ParseError::MalformedNumber { literal: ".".to_string() });
}

#[test]
fn whitespace_never_separates_digits() {
    assert_eq!(tokenize("1 2").unwrap(), vec![Token::Operand(12.0)]);
    assert_evaluates(" 1 0 / 4 ", 2.5);
}

#[test]
fn tokens_are_split_around_symbols() {
    let tokens = tokenize("3.5^(2%1)").unwrap();
    assert_eq!(tokens,
               vec![Token::Operand(3.5),
                    Token::Operator(Operator::Pow),
                    Token::Open,
                    Token::Operand(2.0),
                    Token::Operator(Operator::Mod),
                    Token::Operand(1.0),
                    Token::Close]);
    assert_eq!(tokens.iter().filter(|t| t.is_operand()).count(), 3);
}

#[test]
fn conversion_is_repeatable() {
    for src in ["2+3*4", "(1+2)*(3-4)/5", "2^3^2%7", "((1))"] {
        assert_eq!(to_postfix(src), to_postfix(src), "conversion of {src:?}");
    }
}

#[test]
fn equal_precedence_pops_before_push() {
    assert_postfix("8/4*2", "8 4 / 2 *");
    assert_postfix("8%3*2", "8 3 % 2 *");
    assert_evaluates("8/4*2", 4.0);
    assert_postfix("1+2*3^2-4", "1 2 3 2 ^ * + 4 -");
}

#[test]
fn operators_with_missing_operands_use_zero() {
    assert_evaluates("-5", -5.0);
    assert_evaluates("+", 0.0);
    assert_evaluates("2^", 0.0);
    let postfix = infix_to_postfix([Token::Operator(Operator::Sub)]).unwrap();
    assert_eq!(evaluate_postfix(&postfix), 0.0);
}

#[test]
fn left_operand_is_pushed_first() {
    let postfix = [Token::Operand(2.0), Token::Operand(10.0), Token::Operator(Operator::Pow)];
    assert_eq!(evaluate_postfix(&postfix), 1024.0);
    let postfix = [Token::Operand(7.0), Token::Operand(2.0), Token::Operator(Operator::Sub)];
    assert_eq!(evaluate_postfix(&postfix), 5.0);
}

#[test]
fn evaluate_never_fails_on_keypad_alphabet() {
    let alphabet = ['1', '0', '.', '+', '-', '*', '/', '(', ')', '%', '^'];
    for a in alphabet {
        for b in alphabet {
            for c in alphabet {
                let src: String = [a, b, c].iter().collect();
                let value = evaluate(&src);
                if try_evaluate(&src).is_err() {
                    assert_eq!(value, 0.0, "{src:?} should fall back to 0.0");
                }
            }
        }
    }
}
