use super::Var;
use crate::error;
use crate::lang::ast::{Expression, Relation};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

impl Expression {
    /// Integer arithmetic wraps on overflow; division truncates toward zero.
    pub fn eval(&self, var: &Var) -> Result<i32> {
        use Expression::*;
        Ok(match self {
            Integer(n) => *n,
            Expression::Var(name) => var.fetch(name)?,
            Negation(expr) => expr.eval(var)?.wrapping_neg(),
            Add(lhs, rhs) => lhs.eval(var)?.wrapping_add(rhs.eval(var)?),
            Subtract(lhs, rhs) => lhs.eval(var)?.wrapping_sub(rhs.eval(var)?),
            Multiply(lhs, rhs) => lhs.eval(var)?.wrapping_mul(rhs.eval(var)?),
            Divide(lhs, rhs) => {
                let dividend = lhs.eval(var)?;
                match rhs.eval(var)? {
                    0 => return Err(error!(DivisionByZero)),
                    divisor => dividend.wrapping_div(divisor),
                }
            }
        })
    }
}

impl Relation {
    pub fn holds(self, lhs: i32, rhs: i32) -> bool {
        use Relation::*;
        match self {
            Equal => lhs == rhs,
            NotEqual => lhs != rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
        }
    }
}
