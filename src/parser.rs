// parser.rs

use std::str::FromStr;

use itertools::Itertools;

use crate::error::CalcError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for BinaryOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(BinaryOp::Add),
            "-" => Ok(BinaryOp::Sub),
            "*" => Ok(BinaryOp::Mul),
            "/" => Ok(BinaryOp::Div),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnaryOp {
    Abs,
    Fact,
    Neg,
    Pred,
    Sgn,
    Succ,
}

impl FromStr for UnaryOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abs" => Ok(UnaryOp::Abs),
            "fact" | "!" => Ok(UnaryOp::Fact),
            "neg" => Ok(UnaryOp::Neg),
            "pred" => Ok(UnaryOp::Pred),
            "sgn" => Ok(UnaryOp::Sgn),
            "succ" => Ok(UnaryOp::Succ),
            _ => Err(()),
        }
    }
}

/// One prefix-notation expression. A whole input line reduces to exactly
/// one of these.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    Literal(i64),
    HistoryRef(usize),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// Split a line into raw tokens on whitespace. Never fails; malformed
/// content is caught while parsing.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse a full input line into a single expression, rejecting anything
/// left over after it.
pub fn parse_line(line: &str) -> Result<Expr, CalcError> {
    let tokens = tokenize(line);
    let mut iter = tokens.iter().copied();
    let expr = parse_expr(&mut iter)?;
    let rest: Vec<&str> = iter.collect();
    if !rest.is_empty() {
        return Err(CalcError::TrailingInput(rest.iter().format(" ").to_string()));
    }
    Ok(expr)
}

// Recursive descent over the token stream: one token decides the node
// kind, operands are consumed left to right, no backtracking.
fn parse_expr<'a, I>(iter: &mut I) -> Result<Expr, CalcError>
where
    I: Iterator<Item = &'a str>,
{
    let Some(token) = iter.next() else {
        return Err(CalcError::MissingOperand);
    };
    if let Ok(op) = token.parse::<BinaryOp>() {
        let left = Box::new(parse_expr(iter)?);
        let right = Box::new(parse_expr(iter)?);
        Ok(Expr::Binary { op, left, right })
    } else if let Ok(op) = token.parse::<UnaryOp>() {
        let operand = Box::new(parse_expr(iter)?);
        Ok(Expr::Unary { op, operand })
    } else if let Some(suffix) = token.strip_prefix('$') {
        let index = suffix
            .parse::<usize>()
            .map_err(|_| CalcError::InvalidReference(token.to_string()))?;
        Ok(Expr::HistoryRef(index))
    } else {
        token
            .parse::<i64>()
            .map(Expr::Literal)
            .map_err(|_| CalcError::NotANumber(token.to_string()))
    }
}
