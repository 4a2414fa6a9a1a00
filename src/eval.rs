// eval.rs

use crate::error::CalcError;
use crate::history::History;
use crate::parser::{parse_line, BinaryOp, Expr, UnaryOp};

/// Parse one input line and evaluate it against the current history.
/// The history is read-only here; the caller appends the result.
pub fn eval_line(line: &str, history: &History) -> Result<i64, CalcError> {
    let expr = parse_line(line)?;
    evaluate(&expr, history)
}

pub fn evaluate(expr: &Expr, history: &History) -> Result<i64, CalcError> {
    match expr {
        Expr::Literal(n) => Ok(*n),
        Expr::HistoryRef(index) => history.get(*index).ok_or(CalcError::IndexOutOfRange {
            index: *index,
            len: history.len(),
        }),
        Expr::Unary { op, operand } => {
            let value = evaluate(operand, history)?;
            apply_unary(*op, value)
        }
        Expr::Binary { op, left, right } => {
            let lhs = evaluate(left, history)?;
            let rhs = evaluate(right, history)?;
            apply_binary(*op, lhs, rhs)
        }
    }
}

// Division truncates toward zero: / -7 2 is -3.
fn apply_binary(op: BinaryOp, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
    match op {
        BinaryOp::Add => lhs.checked_add(rhs).ok_or(CalcError::Overflow),
        BinaryOp::Sub => lhs.checked_sub(rhs).ok_or(CalcError::Overflow),
        BinaryOp::Mul => lhs.checked_mul(rhs).ok_or(CalcError::Overflow),
        BinaryOp::Div => {
            if rhs == 0 {
                Err(CalcError::DivisionByZero)
            } else {
                lhs.checked_div(rhs).ok_or(CalcError::Overflow)
            }
        }
    }
}

fn apply_unary(op: UnaryOp, value: i64) -> Result<i64, CalcError> {
    match op {
        UnaryOp::Abs => value.checked_abs().ok_or(CalcError::Overflow),
        UnaryOp::Fact => factorial(value),
        UnaryOp::Neg => value.checked_neg().ok_or(CalcError::Overflow),
        UnaryOp::Pred => value.checked_sub(1).ok_or(CalcError::Overflow),
        UnaryOp::Sgn => Ok(value.signum()),
        UnaryOp::Succ => value.checked_add(1).ok_or(CalcError::Overflow),
    }
}

fn factorial(n: i64) -> Result<i64, CalcError> {
    if n < 0 {
        return Err(CalcError::NegativeFactorial(n));
    }
    let mut product: i64 = 1;
    for factor in 2..=n {
        product = product.checked_mul(factor).ok_or(CalcError::Overflow)?;
    }
    Ok(product)
}
