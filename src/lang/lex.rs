use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    BasicLexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.chars().next();
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Number(s))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !(is_basic_alphabetic(*pk) || is_basic_digit(*pk) || *pk == '_') {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Word(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        match Operator::from_char(ch) {
            Some(op) => Some(Token::Operator(op)),
            None => Some(Token::Unknown(ch.to_string())),
        }
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        let pk = *self.chars.peek()?;
        if is_basic_digit(pk) {
            return self.number();
        }
        if is_basic_alphabetic(pk) {
            return self.alphabetic();
        }
        self.minutia()
    }
}

/// ## Restartable token stream
///
/// A line is lexed up front. Tokens handed back with `save_token`
/// are returned again, most recent first, before the stream resumes.
#[derive(Debug)]
pub struct Scanner {
    tokens: std::vec::IntoIter<Token>,
    saved: Vec<Token>,
}

impl Scanner {
    pub fn new(s: &str) -> Scanner {
        Scanner::from(lex(s))
    }

    pub fn set_input(&mut self, s: &str) {
        self.tokens = lex(s).into_iter();
        self.saved.clear();
    }

    pub fn has_more_tokens(&self) -> bool {
        !self.saved.is_empty() || self.tokens.len() > 0
    }

    pub fn next_token(&mut self) -> Option<Token> {
        match self.saved.pop() {
            Some(t) => Some(t),
            None => self.tokens.next(),
        }
    }

    pub fn save_token(&mut self, token: Token) {
        self.saved.push(token);
    }

    /// Discards whatever is left on the line.
    pub fn skip_rest(&mut self) {
        while self.next_token().is_some() {}
    }
}

impl From<Vec<Token>> for Scanner {
    fn from(tokens: Vec<Token>) -> Scanner {
        Scanner {
            tokens: tokens.into_iter(),
            saved: vec![],
        }
    }
}
