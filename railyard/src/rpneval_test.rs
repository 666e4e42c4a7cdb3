use crate::deque::Deque;
use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::{eval, EvalErr};
use tokens::{BinOpKind, FuncKind, Symbol, Token};

fn evalstr(expr: &str) -> Result<i64, EvalErr> {
    eval(&ShuntingParser::parse_str(expr).unwrap())
}

fn rpn(tokens: Vec<Token>) -> RPNExpr {
    RPNExpr(tokens.into_iter().collect())
}

#[test]
fn precedence() {
    assert_eq!(evalstr("2 + 3 * 4"), Ok(14));
    assert_eq!(evalstr("2 * 3 + 4 * 5"), Ok(26));
}

#[test]
fn left_associativity() {
    assert_eq!(evalstr("8 - 3 - 2"), Ok(3));
    assert_eq!(evalstr("100 / 5 / 2"), Ok(10));
}

#[test]
fn parens_override_precedence() {
    assert_eq!(evalstr("( 2 + 3 ) * 4"), Ok(20));
}

#[test]
fn min_max_functions() {
    assert_eq!(evalstr("min ( 3 , 7 )"), Ok(3));
    assert_eq!(evalstr("max ( 3 , 7 )"), Ok(7));
    assert_eq!(evalstr("max ( min ( 5 , 2 ) , 4 )"), Ok(4));
    assert_eq!(evalstr("min ( 2 + 3 , 10 ) * max ( 1 , 4 )"), Ok(20));
}

#[test]
fn operands_apply_left_to_right() {
    // 10 3 - is 10 - 3, the deepest operand is the left one
    let expr = rpn(vec![
        Token::Number(10),
        Token::Number(3),
        Token::BinOp(BinOpKind::Minus),
    ]);
    assert_eq!(eval(&expr), Ok(7));
}

#[test]
fn function_args_keep_positional_order() {
    let expr = rpn(vec![
        Token::Number(10),
        Token::Number(3),
        Token::Function(FuncKind::Min),
    ]);
    assert_eq!(eval(&expr), Ok(3));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(evalstr("7 / 2"), Ok(3));
    // negative literals don't tokenize, build the RPN by hand
    let expr = rpn(vec![
        Token::Number(-7),
        Token::Number(2),
        Token::BinOp(BinOpKind::Divide),
    ]);
    assert_eq!(eval(&expr), Ok(-3));
}

#[test]
fn division_by_zero() {
    assert_eq!(evalstr("5 / 0"), Err(EvalErr::DivisionByZero));
}

#[test]
fn operator_underflow() {
    let expr = rpn(vec![Token::Number(1), Token::BinOp(BinOpKind::Plus)]);
    assert_eq!(eval(&expr), Err(EvalErr::StackUnderflow));

    let expr = rpn(vec![Token::Function(FuncKind::Max)]);
    assert_eq!(eval(&expr), Err(EvalErr::StackUnderflow));
}

#[test]
fn symbols_never_reach_eval() {
    let expr = rpn(vec![Token::Number(1), Token::Symbol(Symbol::OParen)]);
    assert_eq!(eval(&expr), Err(EvalErr::BadToken("(".to_string())));
}

#[test]
fn leftover_operands_are_malformed() {
    assert_eq!(evalstr("1 2"), Err(EvalErr::MalformedExpr));
}

#[test]
fn empty_rpn_is_malformed() {
    let expr = RPNExpr(Deque::new());
    assert_eq!(eval(&expr), Err(EvalErr::MalformedExpr));
}

#[test]
fn single_number_evaluates_to_itself() {
    assert_eq!(evalstr("42"), Ok(42));
}
