use super::{ast::*, lex::Scanner, token::*, Error, LineNumber};
use crate::error;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Builds the statement that starts at the scanner's next token,
/// which must be a statement keyword.
pub fn parse(scanner: &mut Scanner) -> Result<Statement> {
    match scanner.next_token().as_ref().and_then(Token::keyword) {
        Some(keyword) => Statement::for_keyword(scanner, keyword),
        None => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
    }
}

/// Parses everything left in the scanner as a single expression.
pub fn parse_expression(scanner: &mut Scanner) -> Result<Expression> {
    let mut parse = Parser { scanner };
    let expr = parse.expression()?;
    parse.end()?;
    Ok(expr)
}

struct Parser<'a> {
    scanner: &'a mut Scanner,
}

impl<'a> Parser<'a> {
    fn next(&mut self) -> Option<Token> {
        self.scanner.next_token()
    }

    fn peek(&mut self) -> Option<Token> {
        let token = self.scanner.next_token()?;
        self.scanner.save_token(token.clone());
        Some(token)
    }

    fn save(&mut self, token: Token) {
        self.scanner.save_token(token)
    }

    fn end(&mut self) -> Result<()> {
        if self.scanner.has_more_tokens() {
            Err(error!(SyntaxError; "UNEXPECTED TOKEN"))
        } else {
            Ok(())
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::Operator(Operator::LParen)) => {
                    let expr = parse(this, 0)?;
                    this.expect(Operator::RParen)?;
                    expr
                }
                Some(Token::Operator(Operator::Minus)) => {
                    Expression::Negation(Box::new(parse(this, Expression::UNARY_PRECEDENCE)?))
                }
                Some(Token::Word(s)) => Expression::Var(s.into()),
                Some(Token::Number(s)) => match s.parse::<i32>() {
                    Ok(n) => Expression::Integer(n),
                    Err(_) => return Err(error!(SyntaxError; "NUMBER OUT OF RANGE")),
                },
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            while let Some(Token::Operator(op)) = this.peek() {
                let op_precedence = match Expression::op_precedence(op) {
                    Some(p) => p,
                    None => break,
                };
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let rhs = parse(this, op_precedence + 1)?;
                lhs = Expression::for_binary_op(op, lhs, rhs);
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn ident(&mut self) -> Result<Rc<str>> {
        match self.next() {
            Some(Token::Word(s)) => Ok(s.into()),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        match self.next() {
            Some(token) => LineNumber::try_from(&token),
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn expect(&mut self, op: Operator) -> Result<()> {
        if let Some(Token::Operator(t)) = self.next() {
            if t == op {
                return Ok(());
            }
        }
        Err(error!(SyntaxError;
            match op {
                Operator::Equal => "EXPECTED EQUALS",
                Operator::RParen => "EXPECTED RIGHT PARENTHESIS",
                _ => "EXPECTED OPERATOR",
            }
        ))
    }
}

impl Expression {
    const UNARY_PRECEDENCE: usize = 30;

    fn for_binary_op(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        match op {
            Plus => Expression::Add(Box::new(lhs), Box::new(rhs)),
            Minus => Expression::Subtract(Box::new(lhs), Box::new(rhs)),
            Multiply => Expression::Multiply(Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(Box::new(lhs), Box::new(rhs)),
            Equal | Less | Greater | LParen | RParen => unreachable!(),
        }
    }

    fn op_precedence(op: Operator) -> Option<usize> {
        use Operator::*;
        match op {
            Plus | Minus => Some(10),
            Multiply | Divide => Some(20),
            Equal | Less | Greater | LParen | RParen => None,
        }
    }
}

impl Statement {
    pub fn for_keyword(scanner: &mut Scanner, keyword: Keyword) -> Result<Statement> {
        let mut parse = Parser { scanner };
        use Keyword::*;
        match keyword {
            Rem => Self::r#rem(&mut parse),
            Let => Self::r#let(&mut parse),
            Print => Self::r#print(&mut parse),
            Input => Self::r#input(&mut parse),
            End => Self::r#end(&mut parse),
            Goto => Self::r#goto(&mut parse),
            If => Self::r#if(&mut parse),
            Clear | List | Quit | Run | Then => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#rem(parse: &mut Parser) -> Result<Statement> {
        parse.scanner.skip_rest();
        Ok(Statement::Rem)
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Operator::Equal)?;
        let expr = parse.expression()?;
        parse.end()?;
        Ok(Statement::Let(ident, expr))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        let expr = parse.expression()?;
        parse.end()?;
        Ok(Statement::Print(expr))
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        // A bare number is accepted as a variable name here.
        let ident: Rc<str> = match parse.next() {
            Some(Token::Word(s)) | Some(Token::Number(s)) => s.into(),
            _ => return Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        };
        parse.end()?;
        Ok(Statement::Input(ident))
    }

    fn r#end(parse: &mut Parser) -> Result<Statement> {
        parse.end()?;
        Ok(Statement::End)
    }

    fn r#goto(parse: &mut Parser) -> Result<Statement> {
        let target = parse.line_number()?;
        parse.end()?;
        Ok(Statement::Goto(target))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let mut lhs: Vec<Token> = vec![];
        let relation = loop {
            match parse.next() {
                None => return Err(error!(SyntaxError; "EXPECTED RELATIONAL OPERATOR")),
                Some(Token::Operator(Operator::Equal)) => break Relation::Equal,
                Some(Token::Operator(Operator::Less)) => {
                    break match parse.next() {
                        Some(Token::Operator(Operator::Equal)) => Relation::LessEqual,
                        Some(Token::Operator(Operator::Greater)) => Relation::NotEqual,
                        Some(token) => {
                            parse.save(token);
                            Relation::Less
                        }
                        None => Relation::Less,
                    }
                }
                Some(Token::Operator(Operator::Greater)) => {
                    break match parse.next() {
                        Some(Token::Operator(Operator::Equal)) => Relation::GreaterEqual,
                        Some(token) => {
                            parse.save(token);
                            Relation::Greater
                        }
                        None => Relation::Greater,
                    }
                }
                Some(token) => lhs.push(token),
            }
        };
        let mut rhs: Vec<Token> = vec![];
        loop {
            match parse.next() {
                None => return Err(error!(SyntaxError; "EXPECTED THEN")),
                Some(token) if token.keyword() == Some(Keyword::Then) => break,
                Some(token) => rhs.push(token),
            }
        }
        let target = parse.line_number()?;
        parse.end()?;
        let lhs = parse_expression(&mut Scanner::from(lhs))?;
        let rhs = parse_expression(&mut Scanner::from(rhs))?;
        Ok(Statement::If(lhs, relation, rhs, target))
    }
}
