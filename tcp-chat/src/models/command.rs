use super::session::SessionId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Unknown,
    Name,
    Msg,
    Acc,
    Login,
    Passwd,
    Info,
    Who,
    Quit,
}

impl Verb {
    pub fn parse(verb: &str) -> Self {
        match verb {
            "name" => Verb::Name,
            "msg" => Verb::Msg,
            "acc" => Verb::Acc,
            "login" => Verb::Login,
            "passwd" => Verb::Passwd,
            "info" => Verb::Info,
            "who" => Verb::Who,
            "quit" => Verb::Quit,
            _ => Verb::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Unknown => "unknown",
            Verb::Name => "name",
            Verb::Msg => "msg",
            Verb::Acc => "acc",
            Verb::Login => "login",
            Verb::Passwd => "passwd",
            Verb::Info => "info",
            Verb::Who => "who",
            Verb::Quit => "quit",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub session_id: SessionId,
    pub verb: Verb,
    pub arguments: Vec<String>,
}

impl Command {
    pub fn new(session_id: SessionId, verb: Verb, arguments: Vec<String>) -> Self {
        Command {
            session_id,
            verb,
            arguments,
        }
    }

    /// Issued on behalf of a client whose connection went away.
    pub fn quit(session_id: SessionId) -> Self {
        Command::new(session_id, Verb::Quit, Vec::new())
    }
}
