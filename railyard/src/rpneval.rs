use crate::deque::Deque;
use crate::parser::RPNExpr;
use tokens::{BinOpKind, FuncKind, Token};

#[derive(Debug, PartialEq)]
pub enum EvalErr {
    DivisionByZero,
    StackUnderflow,
    BadToken(String),
    MalformedExpr,
}

/// Reduce an RPN token sequence to a single integer.
pub fn eval(rpn: &RPNExpr) -> Result<i64, EvalErr> {
    let mut operands = Deque::new();

    for token in rpn.iter() {
        match *token {
            Token::Number(num) => operands.push_back(num),
            Token::BinOp(op) => {
                let mut args = take_args(&mut operands, op.arity())?;
                operands.push_back(eval_binop(op, &mut args)?);
            }
            Token::Function(func) => {
                let mut args = take_args(&mut operands, func.arity())?;
                operands.push_back(eval_fn(func, &mut args)?);
            }
            // structural symbols never survive into well-formed RPN
            Token::Symbol(_) => return Err(EvalErr::BadToken(token.to_string())),
        }
    }
    let result = operands.pop_back().ok_or(EvalErr::MalformedExpr)?;
    if !operands.is_empty() {
        return Err(EvalErr::MalformedExpr);
    }
    Ok(result)
}

// operands pop off deepest-last, push_front restores left-to-right order
fn take_args(operands: &mut Deque<i64>, arity: usize) -> Result<Deque<i64>, EvalErr> {
    let mut args = Deque::with_capacity(arity);
    for _ in 0..arity {
        match operands.pop_back() {
            Some(num) => args.push_front(num),
            None => return Err(EvalErr::StackUnderflow),
        }
    }
    Ok(args)
}

fn eval_binop(op: BinOpKind, args: &mut Deque<i64>) -> Result<i64, EvalErr> {
    let lhs = args.pop_front().ok_or(EvalErr::StackUnderflow)?;
    let rhs = args.pop_front().ok_or(EvalErr::StackUnderflow)?;
    match op {
        BinOpKind::Plus => Ok(lhs + rhs),
        BinOpKind::Minus => Ok(lhs - rhs),
        BinOpKind::Times => Ok(lhs * rhs),
        BinOpKind::Divide if rhs == 0 => Err(EvalErr::DivisionByZero),
        // native division truncates toward zero
        BinOpKind::Divide => Ok(lhs / rhs),
    }
}

fn eval_fn(func: FuncKind, args: &mut Deque<i64>) -> Result<i64, EvalErr> {
    let lhs = args.pop_front().ok_or(EvalErr::StackUnderflow)?;
    let rhs = args.pop_front().ok_or(EvalErr::StackUnderflow)?;
    match func {
        FuncKind::Min => Ok(lhs.min(rhs)),
        FuncKind::Max => Ok(lhs.max(rhs)),
    }
}
