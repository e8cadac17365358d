use super::LineNumber;
use std::rc::Rc;

/// One statement, as stored in the parse cache or built for direct mode.
/// Each variant owns its expression trees outright.
#[derive(Debug, PartialEq)]
pub enum Statement {
    Rem,
    Let(Rc<str>, Expression),
    Print(Expression),
    Input(Rc<str>),
    End,
    Goto(LineNumber),
    If(Expression, Relation, Expression, LineNumber),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(i32),
    Var(Rc<str>),
    Negation(Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
}
