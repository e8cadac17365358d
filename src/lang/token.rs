use super::{Error, LineNumber};
use crate::error;
use std::convert::TryFrom;
use std::str::FromStr;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Number(String),
    Word(String),
    Operator(Operator),
}

impl Token {
    /// The keyword this token spells, in any letter case.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Token::Word(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        if let Token::Number(s) = token {
            if let Ok(line) = s.parse::<LineNumber>() {
                return Ok(line);
            }
            return Err(error!(SyntaxError; "LINE NUMBER OUT OF RANGE"));
        }
        Err(error!(SyntaxError; "EXPECTED LINE NUMBER"))
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    Less,
    Greater,
    LParen,
    RParen,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '=' => Some(Equal),
            '<' => Some(Less),
            '>' => Some(Greater),
            '(' => Some(LParen),
            ')' => Some(RParen),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Keyword {
    Clear,
    End,
    Goto,
    If,
    Input,
    Let,
    List,
    Print,
    Quit,
    Rem,
    Run,
    Then,
}

impl FromStr for Keyword {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Keyword::*;
        Ok(match s.to_ascii_uppercase().as_str() {
            "CLEAR" => Clear,
            "END" => End,
            "GOTO" => Goto,
            "IF" => If,
            "INPUT" => Input,
            "LET" => Let,
            "LIST" => List,
            "PRINT" => Print,
            "QUIT" => Quit,
            "REM" => Rem,
            "RUN" => Run,
            "THEN" => Then,
            _ => return Err(()),
        })
    }
}
