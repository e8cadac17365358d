use super::{Console, Program, Var};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

impl Statement {
    /// Runs the statement once. Control transfer is only ever requested
    /// on the program; the caller decides what happens next.
    pub fn execute(&self, var: &mut Var, program: &mut Program, console: &mut Console) -> Result<()> {
        use Statement::*;
        match self {
            Rem => {}
            Let(name, expr) => {
                let value = expr.eval(var)?;
                var.store(name, value);
            }
            Print(expr) => {
                let value = expr.eval(var)?;
                console.println(value);
            }
            Input(name) => console.request_input(name.clone()),
            End => program.request_stop(),
            Goto(target) => jump(program, *target)?,
            If(lhs, relation, rhs, target) => {
                let lhs = lhs.eval(var)?;
                let rhs = rhs.eval(var)?;
                if relation.holds(lhs, rhs) {
                    jump(program, *target)?;
                }
            }
        }
        Ok(())
    }
}

fn jump(program: &mut Program, target: LineNumber) -> Result<()> {
    if program.line(target).is_none() {
        return Err(error!(UndefinedLine; "NO SUCH LINE"));
    }
    program.request_jump(target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{parse, ErrorCode, Scanner};
    use crate::mach::Event;

    struct Machine {
        var: Var,
        program: Program,
        console: Console,
    }

    impl Machine {
        fn new() -> Machine {
            Machine {
                var: Var::new(),
                program: Program::new(),
                console: Console::default(),
            }
        }

        fn exec(&mut self, s: &str) -> Result<()> {
            let statement = parse(&mut Scanner::new(s))?;
            statement.execute(&mut self.var, &mut self.program, &mut self.console)
        }
    }

    #[test]
    fn test_let_and_print() {
        let mut m = Machine::new();
        m.exec("LET A = 6 * 7").unwrap();
        m.exec("PRINT A - 2").unwrap();
        match m.console.pop() {
            Some(Event::Print(s)) => assert_eq!(s, "40\n"),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_end_requests_stop() {
        let mut m = Machine::new();
        m.exec("END").unwrap();
        assert!(m.program.stop_requested());
        assert!(!m.program.has_jump());
    }

    #[test]
    fn test_goto_checks_target_when_taken() {
        let mut m = Machine::new();
        let e = m.exec("GOTO 50").unwrap_err();
        assert!(e.is(ErrorCode::UndefinedLine));
        assert!(!m.program.has_jump());
        m.program.set_line(50, "50 END");
        m.exec("GOTO 50").unwrap();
        assert_eq!(m.program.consume_jump(), Some(50));
    }

    #[test]
    fn test_if_false_never_checks_target() {
        let mut m = Machine::new();
        m.exec("IF 1 > 2 THEN 999").unwrap();
        assert!(!m.program.has_jump());
        let e = m.exec("IF 2 > 1 THEN 999").unwrap_err();
        assert!(e.is(ErrorCode::UndefinedLine));
    }

    #[test]
    fn test_if_every_relation() {
        let mut m = Machine::new();
        m.program.set_line(10, "10 REM");
        for (relation, a, b, fires) in &[
            ("=", -1, -1, true),
            ("=", -1, 1, false),
            ("<", -2, 1, true),
            ("<", 1, 1, false),
            (">", 1, -2, true),
            (">", -2, 1, false),
            ("<=", 1, 1, true),
            ("<=", 2, 1, false),
            (">=", 1, 1, true),
            (">=", -1, 1, false),
            ("<>", 0, 1, true),
            ("<>", 1, 1, false),
        ] {
            m.exec(&format!("LET A = {}", a)).unwrap();
            m.exec(&format!("LET B = {}", b)).unwrap();
            m.exec(&format!("IF A {} B THEN 10", relation)).unwrap();
            assert_eq!(
                m.program.consume_jump().is_some(),
                *fires,
                "{} {} {}",
                a,
                relation,
                b
            );
        }
    }

    #[test]
    fn test_input_only_requests() {
        let mut m = Machine::new();
        m.exec("INPUT N").unwrap();
        assert_eq!(m.console.take_input_request().as_deref(), Some("N"));
        assert!(m.console.pop().is_none());
    }
}
