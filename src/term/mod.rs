extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use basic::mach::{Event, Runtime};
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::io::{self, BufRead, IsTerminal, Write};

/// Statements run between checks on the terminal.
const CYCLES: usize = 5000;

pub fn main() {
    init_tracing();
    let result = if io::stdin().is_terminal() {
        Interactive::new().and_then(|mut session| main_loop(&mut session))
    } else {
        main_loop(&mut Piped::new(io::stdin().lock(), io::stdout()))
    };
    if let Err(error) = result {
        eprintln!("{}", error);
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    // stdout belongs to the program, so diagnostics only when asked for
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

trait Session {
    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
    fn print(&mut self, s: &str) -> io::Result<()>;
    fn print_error(&mut self, s: &str) -> io::Result<()>;
    fn add_history(&mut self, _line: String) {}
}

fn main_loop<S: Session>(session: &mut S) -> io::Result<()> {
    let mut runtime = Runtime::default();
    loop {
        match runtime.execute(CYCLES) {
            Event::Stopped => match session.read_line("")? {
                Some(string) => {
                    if runtime.enter(&string) {
                        session.add_history(string);
                    }
                }
                None => break,
            },
            Event::Input(prompt) => match session.read_line(&prompt)? {
                Some(string) => {
                    runtime.enter(&string);
                }
                None => runtime.cancel_input(),
            },
            Event::Print(s) => session.print(&s)?,
            Event::Error(error) => session.print_error(&error.to_string())?,
            Event::Running => {}
            Event::Quit => break,
        }
    }
    Ok(())
}

struct Interactive {
    interface: Interface<DefaultTerminal>,
}

impl Interactive {
    fn new() -> io::Result<Interactive> {
        Ok(Interactive {
            interface: Interface::new("BASIC")?,
        })
    }
}

impl Session for Interactive {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.interface.set_prompt(prompt)?;
        match self.interface.read_line()? {
            ReadResult::Input(string) => Ok(Some(string)),
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }

    fn print(&mut self, s: &str) -> io::Result<()> {
        self.interface.write_fmt(format_args!("{}", s))
    }

    fn print_error(&mut self, s: &str) -> io::Result<()> {
        self.interface
            .write_fmt(format_args!("{}\n", Style::new().bold().paint(s)))
    }

    fn add_history(&mut self, line: String) {
        self.interface.add_history_unique(line);
    }
}

struct Piped<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Piped<R, W> {
    fn new(input: R, output: W) -> Piped<R, W> {
        Piped { input, output }
    }
}

impl<R: BufRead, W: Write> Session for Piped<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.print(prompt)?;
        let mut line = vec![];
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        // Bad bytes become U+FFFD and the line is dispatched as usual.
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    fn print(&mut self, s: &str) -> io::Result<()> {
        self.output.write_all(s.as_bytes())?;
        self.output.flush()
    }

    fn print_error(&mut self, s: &str) -> io::Result<()> {
        self.print(&format!("{}\n", s))
    }
}
