use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, LineNumber};
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Source text keyed by line number, a parse cache that may lag
/// behind it, and the jump and stop registers a run reads after
/// every statement. A cached statement never outlives its line.

#[derive(Debug, Default)]
pub struct Program {
    source: BTreeMap<LineNumber, String>,
    parsed: HashMap<LineNumber, Rc<Statement>>,
    jump: Option<LineNumber>,
    stop: bool,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        self.source.clear();
        self.parsed.clear();
        self.reset_control();
    }

    pub fn set_line(&mut self, line_number: LineNumber, text: &str) {
        self.source.insert(line_number, text.to_string());
        self.parsed.remove(&line_number);
    }

    pub fn remove_line(&mut self, line_number: LineNumber) {
        self.source.remove(&line_number);
        self.parsed.remove(&line_number);
    }

    pub fn line(&self, line_number: LineNumber) -> Option<&str> {
        self.source.get(&line_number).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.source.values().map(String::as_str)
    }

    pub fn first_line(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    pub fn next_line(&self, line_number: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(line_number), Unbounded))
            .next()
            .map(|(n, _)| *n)
    }

    pub fn parsed(&self, line_number: LineNumber) -> Option<Rc<Statement>> {
        self.parsed.get(&line_number).cloned()
    }

    pub fn set_parsed(&mut self, line_number: LineNumber, statement: Statement) -> Result<()> {
        if !self.source.contains_key(&line_number) {
            return Err(error!(UndefinedLine, line_number; "NO SOURCE FOR STATEMENT"));
        }
        self.parsed.insert(line_number, Rc::new(statement));
        Ok(())
    }

    pub fn request_jump(&mut self, line_number: LineNumber) {
        self.jump = Some(line_number);
    }

    pub fn has_jump(&self) -> bool {
        self.jump.is_some()
    }

    pub fn consume_jump(&mut self) -> Option<LineNumber> {
        self.jump.take()
    }

    pub fn request_stop(&mut self) {
        self.stop = true;
    }

    pub fn stop_requested(&self) -> bool {
        self.stop
    }

    pub fn reset_control(&mut self) {
        self.jump = None;
        self.stop = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_ordering() {
        let mut p = Program::new();
        p.set_line(30, "30 END");
        p.set_line(10, "10 REM");
        p.set_line(20, "20 PRINT 1");
        assert_eq!(p.first_line(), Some(10));
        assert_eq!(p.next_line(10), Some(20));
        assert_eq!(p.next_line(15), Some(20));
        assert_eq!(p.next_line(30), None);
        assert_eq!(p.lines().collect::<Vec<_>>(), vec!["10 REM", "20 PRINT 1", "30 END"]);
    }

    #[test]
    fn test_edit_drops_parse() {
        let mut p = Program::new();
        p.set_line(10, "10 END");
        p.set_parsed(10, Statement::End).unwrap();
        assert_eq!(p.parsed(10).as_deref(), Some(&Statement::End));
        p.set_line(10, "10 REM");
        assert!(p.parsed(10).is_none());
        assert_eq!(p.line(10), Some("10 REM"));
    }

    #[test]
    fn test_parse_needs_source() {
        let mut p = Program::new();
        let e = p.set_parsed(10, Statement::End).unwrap_err();
        assert!(e.is(ErrorCode::UndefinedLine));
        assert!(p.parsed(10).is_none());
        p.set_line(10, "10 END");
        p.set_parsed(10, Statement::End).unwrap();
        p.remove_line(10);
        assert!(p.parsed(10).is_none());
        assert!(p.line(10).is_none());
        p.remove_line(10);
    }

    #[test]
    fn test_control_registers() {
        let mut p = Program::new();
        assert!(!p.has_jump());
        p.request_jump(40);
        assert!(p.has_jump());
        assert_eq!(p.consume_jump(), Some(40));
        assert_eq!(p.consume_jump(), None);
        p.request_stop();
        p.request_jump(50);
        assert!(p.stop_requested());
        p.reset_control();
        assert!(!p.stop_requested());
        assert!(!p.has_jump());
    }

    #[test]
    fn test_clear() {
        let mut p = Program::new();
        p.set_line(10, "10 END");
        p.set_parsed(10, Statement::End).unwrap();
        p.request_stop();
        p.clear();
        assert!(p.line(10).is_none());
        assert!(p.parsed(10).is_none());
        assert!(!p.stop_requested());
        assert_eq!(p.first_line(), None);
    }
}
