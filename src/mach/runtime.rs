use super::{Console, Program, Var};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::token::{Keyword, Token};
use crate::lang::{parse, Error, LineNumber, Scanner};
use std::convert::TryFrom;
use std::rc::Rc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Written before every attempt to read an INPUT value.
pub const PROMPT: &str = " ? ";

/// Written when an INPUT value is not a 32-bit signed integer.
pub const INVALID_NUMBER: &str = "INVALID NUMBER";

/// ## Events for the terminal
///
/// `Runtime::execute` returns one of these each time it is called.
/// Nothing else is dispatched while `Input` is outstanding.

#[derive(Debug)]
pub enum Event {
    Print(String),
    Input(String),
    Error(Error),
    Running,
    Stopped,
    Quit,
}

#[derive(Debug)]
enum State {
    Stopped,
    Running(LineNumber),
    Input(Rc<str>, Option<LineNumber>),
    Quit,
}

impl Default for State {
    fn default() -> State {
        State::Stopped
    }
}

/// ## Interpreter
///
/// Owns the program, the variables and everything queued for the
/// terminal. Lines go in through `enter`; results come out of `execute`.

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    var: Var,
    console: Console,
    state: State,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    #[cfg(test)]
    pub(crate) fn program(&self) -> &Program {
        &self.program
    }

    /// Accepts one line from the terminal. While INPUT is waiting the
    /// line is the answer, otherwise it is a program line or a direct
    /// command. Returns true when the line is worth keeping in history.
    pub fn enter(&mut self, s: &str) -> bool {
        let s = s.trim_end_matches(&['\r', '\n'][..]);
        if let State::Input(..) = self.state {
            self.input(s);
            return false;
        }
        if s.trim().is_empty() {
            return false;
        }
        if let Err(error) = self.direct(s) {
            self.report(error);
        }
        true
    }

    /// Ends a pending INPUT without a value, as on end of input.
    pub fn cancel_input(&mut self) {
        if let State::Input(_, resume) = std::mem::take(&mut self.state) {
            debug!("input cancelled");
            self.resume(resume);
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.console.pop() {
            return event;
        }
        for _ in 0..cycles {
            let line_number = match self.state {
                State::Running(line_number) => line_number,
                State::Stopped => return Event::Stopped,
                State::Input(..) => return Event::Input(PROMPT.to_string()),
                State::Quit => return Event::Quit,
            };
            match self.step(line_number) {
                Ok(state) => self.state = state,
                Err(error) => self.report(error.or_in_line_number(line_number)),
            }
            if let Some(event) = self.console.pop() {
                return event;
            }
        }
        Event::Running
    }

    fn report(&mut self, error: Error) {
        debug!(?error, "unwinding");
        self.state = State::Stopped;
        self.console.error(error);
    }

    fn run(&mut self, line_number: LineNumber) {
        debug!(line_number, "run");
        self.program.reset_control();
        self.state = State::Running(line_number);
    }

    fn step(&mut self, line_number: LineNumber) -> Result<State> {
        let statement = self.statement(line_number)?;
        statement.execute(&mut self.var, &mut self.program, &mut self.console)?;
        if let Some(var_name) = self.console.take_input_request() {
            return Ok(State::Input(var_name, Some(line_number)));
        }
        self.advance(line_number)
    }

    fn advance(&mut self, line_number: LineNumber) -> Result<State> {
        if self.program.stop_requested() {
            debug!(line_number, "stopped");
            return Ok(State::Stopped);
        }
        if let Some(target) = self.program.consume_jump() {
            trace!(line_number, target, "jump");
            if self.program.line(target).is_none() {
                return Err(error!(UndefinedLine; "NO SUCH LINE"));
            }
            return Ok(State::Running(target));
        }
        Ok(match self.program.next_line(line_number) {
            Some(next) => State::Running(next),
            None => {
                debug!(line_number, "ran off the end");
                State::Stopped
            }
        })
    }

    /// The cached statement for a line, parsing the stored text first
    /// if an edit dropped it.
    fn statement(&mut self, line_number: LineNumber) -> Result<Rc<Statement>> {
        if let Some(statement) = self.program.parsed(line_number) {
            return Ok(statement);
        }
        trace!(line_number, "parse cache miss");
        let mut scanner = match self.program.line(line_number) {
            Some(text) => Scanner::new(text),
            None => return Err(error!(UndefinedLine; "NO SUCH LINE")),
        };
        match scanner.next_token() {
            Some(Token::Number(_)) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
        let statement = parse(&mut scanner)?;
        self.program.set_parsed(line_number, statement)?;
        match self.program.parsed(line_number) {
            Some(statement) => Ok(statement),
            None => Err(error!(InternalError; "PARSE CACHE")),
        }
    }

    fn input(&mut self, s: &str) {
        let s = s.trim();
        let value = match s.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                self.console.println(INVALID_NUMBER);
                return;
            }
        };
        if let State::Input(var_name, resume) = std::mem::take(&mut self.state) {
            self.console.println(s);
            self.var.store(&var_name, value);
            self.resume(resume);
        }
    }

    fn resume(&mut self, resume: Option<LineNumber>) {
        self.state = State::Stopped;
        if let Some(line_number) = resume {
            match self.advance(line_number) {
                Ok(state) => self.state = state,
                Err(error) => self.report(error.or_in_line_number(line_number)),
            }
        }
    }

    fn direct(&mut self, s: &str) -> Result<()> {
        let mut scanner = Scanner::new(s);
        let first = match scanner.next_token() {
            Some(token) => token,
            None => return Ok(()),
        };
        match &first {
            Token::Number(_) => {
                let line_number = LineNumber::try_from(&first)?;
                self.program_line(line_number, s, &mut scanner)
            }
            Token::Word(_) => match first.keyword() {
                Some(keyword) => self.command(keyword, &mut scanner),
                None => Err(error!(SyntaxError; "UNKNOWN COMMAND")),
            },
            Token::Operator(_) | Token::Unknown(_) => Err(error!(SyntaxError; "UNKNOWN COMMAND")),
        }
    }

    fn program_line(&mut self, line_number: LineNumber, s: &str, scanner: &mut Scanner) -> Result<()> {
        if !scanner.has_more_tokens() {
            trace!(line_number, "delete");
            self.program.remove_line(line_number);
            return Ok(());
        }
        self.program.set_line(line_number, s);
        let statement = parse(scanner).map_err(|e| e.in_line_number(line_number))?;
        self.program.set_parsed(line_number, statement)
    }

    fn command(&mut self, keyword: Keyword, scanner: &mut Scanner) -> Result<()> {
        use Keyword::*;
        match keyword {
            Let | Print | Input => {
                let statement = Statement::for_keyword(scanner, keyword)?;
                statement.execute(&mut self.var, &mut self.program, &mut self.console)?;
                if let Some(var_name) = self.console.take_input_request() {
                    self.state = State::Input(var_name, None);
                }
            }
            Rem => scanner.skip_rest(),
            List => {
                end_of_line(scanner)?;
                for line in self.program.lines() {
                    self.console.println(line);
                }
            }
            Clear => {
                end_of_line(scanner)?;
                self.program.clear();
                self.var.clear();
            }
            Run => {
                end_of_line(scanner)?;
                if let Some(line_number) = self.program.first_line() {
                    self.run(line_number);
                }
            }
            Goto => {
                let target = match scanner.next_token() {
                    Some(token) => LineNumber::try_from(&token)?,
                    None => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
                };
                end_of_line(scanner)?;
                if self.program.line(target).is_none() {
                    return Err(error!(UndefinedLine; "NO SUCH LINE"));
                }
                self.run(target);
            }
            If => {
                let statement = Statement::for_keyword(scanner, keyword)?;
                self.program.reset_control();
                statement.execute(&mut self.var, &mut self.program, &mut self.console)?;
                if let Some(target) = self.program.consume_jump() {
                    self.run(target);
                }
            }
            End => end_of_line(scanner)?,
            Quit => {
                end_of_line(scanner)?;
                self.state = State::Quit;
            }
            Then => return Err(error!(SyntaxError; "UNKNOWN COMMAND")),
        }
        Ok(())
    }
}

fn end_of_line(scanner: &Scanner) -> Result<()> {
    if scanner.has_more_tokens() {
        Err(error!(SyntaxError; "UNEXPECTED TOKEN"))
    } else {
        Ok(())
    }
}
