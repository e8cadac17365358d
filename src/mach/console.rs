use super::Event;
use crate::lang::Error;
use std::collections::VecDeque;
use std::rc::Rc;

/// ## Queued terminal traffic
///
/// Statements write here instead of to a terminal. The runtime
/// hands the queue out one `Event` at a time.

#[derive(Debug, Default)]
pub struct Console {
    events: VecDeque<Event>,
    input: Option<Rc<str>>,
}

impl Console {
    pub fn print(&mut self, s: String) {
        self.events.push_back(Event::Print(s));
    }

    pub fn println<T: std::fmt::Display>(&mut self, t: T) {
        self.print(format!("{}\n", t));
    }

    pub fn error(&mut self, error: Error) {
        self.events.push_back(Event::Error(error));
    }

    pub fn request_input(&mut self, var_name: Rc<str>) {
        debug_assert!(self.input.is_none());
        self.input = Some(var_name);
    }

    pub fn take_input_request(&mut self) -> Option<Rc<str>> {
        self.input.take()
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}
