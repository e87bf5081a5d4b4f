//! Line-oriented dashboard session.
//!
//! # Design
//! `Session` is the container view: it owns the `UserStore`, runs fetches
//! through a `Transport`, and turns typed commands into store actions. Input
//! and output are generic so a scripted session can drive it in tests.
//! Local edits are never sent anywhere; only `refresh` talks to the server.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};
use users_core::{DashboardView, FetchOutcome, FormField, UserForm, UserStore, UserTable, UsersClient};

use crate::transport::Transport;

const HELP: &str = "\
Commands:
  list           show the dashboard
  refresh        fetch the user list again (also: retry)
  add            create a user
  edit <id>      edit a user; press Enter to keep a value, '-' to clear it
  delete <id>    delete a user
  help           show this help
  quit           leave (also: exit)
In a form, a line with a single '.' cancels.";

const CANCEL: &str = ".";
const CLEAR: &str = "-";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{0}")]
    FetchFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    Add,
    Edit(u64),
    Delete(u64),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let id = words.next().map(str::parse::<u64>);
        if words.next().is_some() {
            return Err(format!("too many arguments: {s}"));
        }
        match (verb, id) {
            ("list" | "ls", None) => Ok(Command::List),
            ("refresh" | "retry", None) => Ok(Command::Refresh),
            ("add" | "new", None) => Ok(Command::Add),
            ("edit", Some(Ok(id))) => Ok(Command::Edit(id)),
            ("delete" | "rm", Some(Ok(id))) => Ok(Command::Delete(id)),
            ("help" | "?", None) => Ok(Command::Help),
            ("quit" | "exit", None) => Ok(Command::Quit),
            ("edit" | "delete" | "rm", None) => Err(format!("{verb} needs a user id")),
            (_, Some(Err(_))) => Err(format!("not a user id: {s}")),
            ("list" | "ls" | "refresh" | "retry" | "add" | "new" | "help" | "?" | "quit" | "exit", Some(Ok(_))) => {
                Err(format!("{verb} takes no arguments"))
            }
            _ => Err(format!("unknown command: {verb}")),
        }
    }
}

pub struct Session<T> {
    store: UserStore,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(client: UsersClient, transport: T) -> Self {
        Self {
            store: UserStore::new(client),
            transport,
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// One full fetch-all: loading, round-trip, then exactly one outcome.
    pub fn refresh(&mut self) -> FetchOutcome {
        let request = self.store.begin_fetch();
        let response = self.transport.execute(request);
        self.store.complete_fetch(response)
    }

    pub fn render<W: Write>(&self, output: &mut W) -> io::Result<()> {
        write!(output, "{}", DashboardView::from_state(self.store.state()))
    }

    /// Fetch, render, and report a failed fetch as an error.
    pub fn fetch_and_render<W: Write>(&mut self, output: &mut W) -> Result<(), SessionError> {
        let outcome = self.refresh();
        self.render(output)?;
        match outcome {
            FetchOutcome::Succeeded(_) => Ok(()),
            FetchOutcome::Failed(message) => Err(SessionError::FetchFailed(message)),
        }
    }

    /// Initial fetch and render, then commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        self.refresh();
        self.render(&mut output)?;

        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = read_line(&mut input)? else {
                writeln!(output)?;
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.execute(command, &mut input, &mut output)?,
                Err(message) => writeln!(output, "{message} (type 'help')")?,
            }
        }
    }

    fn execute<R: BufRead, W: Write>(&mut self, command: Command, input: &mut R, output: &mut W) -> io::Result<()> {
        match command {
            Command::List => self.render(output),
            Command::Refresh => {
                if let FetchOutcome::Failed(message) = self.refresh() {
                    warn!(%message, "refresh failed");
                }
                self.render(output)
            }
            Command::Add => self.open_form(UserForm::create(), input, output),
            Command::Edit(id) => match self.store.state().find(id) {
                Some(user) => {
                    let form = UserForm::edit(user);
                    self.open_form(form, input, output)
                }
                None => writeln!(output, "No user with id {id}"),
            },
            Command::Delete(id) => self.delete(id, input, output),
            Command::Help => writeln!(output, "{HELP}"),
            Command::Quit => Ok(()),
        }
    }

    fn open_form<R: BufRead, W: Write>(&mut self, mut form: UserForm, input: &mut R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", form.title())?;
        let mut fields: Vec<FormField> = FormField::ALL.to_vec();

        loop {
            for field in &fields {
                // Brackets only where Enter keeps the value.
                let current = form.value(*field);
                if form.is_editing() && !current.is_empty() {
                    write!(output, "{} [{current}]: ", field.label())?;
                } else {
                    write!(output, "{} ({}): ", field.label(), field.placeholder())?;
                }
                output.flush()?;

                let Some(line) = read_line(input)? else {
                    return writeln!(output, "\nCancelled");
                };
                if line == CANCEL {
                    return writeln!(output, "Cancelled");
                }
                if line == CLEAR {
                    form.set(*field, "");
                } else if !(line.is_empty() && form.is_editing()) {
                    form.set(*field, line);
                }
            }

            match form.submit() {
                Ok(action) => {
                    info!(?action, "form submitted");
                    self.store.dispatch(action);
                    writeln!(output, "{}: done", form.submit_label())?;
                    return self.render(output);
                }
                Err(errors) => {
                    for (field, message) in errors.iter() {
                        writeln!(output, "  {}: {message}", field.label())?;
                    }
                    fields = errors.iter().map(|(field, _)| field).collect();
                }
            }
        }
    }

    fn delete<R: BufRead, W: Write>(&mut self, id: u64, input: &mut R, output: &mut W) -> io::Result<()> {
        if self.store.state().find(id).is_none() {
            return writeln!(output, "No user with id {id}");
        }

        let mut answer = Ok(false);
        let action = UserTable::request_delete(id, |prompt| {
            answer = ask_yes_no(input, output, prompt);
            matches!(answer, Ok(true))
        });
        answer?;

        match action {
            Some(action) => {
                self.store.dispatch(action);
                self.render(output)
            }
            None => writeln!(output, "Kept user {id}"),
        }
    }
}

fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<bool> {
    write!(output, "{prompt} [y/N]: ")?;
    output.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Next line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
