//! The interactive loop: render, read a command, act, repeat.
//!
//! # Design
//! `Session` is generic over its input and output so tests can script a
//! whole interaction against a live server. Every action goes through
//! `UserManager`; failures are already reported on the page through its
//! notification, so the loop only logs them. The delete confirmation reads
//! the next input line; anything but `y`/`yes` declines.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::debug;
use users_core::{ActionError, Transport, User, UserId, UserManager};

use crate::command::{Command, HELP};
use crate::view::{self, CONFIRM_DELETE};

pub struct Session<T, R, W> {
    manager: UserManager,
    transport: T,
    input: R,
    output: W,
}

impl<T, R, W> Session<T, R, W>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    pub fn new(manager: UserManager, transport: T, input: R, output: W) -> Self {
        Self {
            manager,
            transport,
            input,
            output,
        }
    }

    pub fn manager(&self) -> &UserManager {
        &self.manager
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let initial = self.manager.refresh(&mut self.transport);
        log_outcome("initial load", initial);

        loop {
            self.manager.clear_expired(Instant::now());
            write!(self.output, "{}", view::render(&self.manager))?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                break;
            };
            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.handle(command)?,
                Ok(None) => {}
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    fn handle(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Name(name) => self.manager.set_name(name),
            Command::Email(email) => self.manager.set_email(email),
            Command::Submit => {
                let outcome = self.manager.submit(&mut self.transport);
                log_outcome("submit", outcome);
            }
            Command::Edit(position) => {
                if let Some(id) = self.id_at(position)? {
                    let outcome = self.manager.begin_edit(&id);
                    log_outcome("edit", outcome);
                }
            }
            Command::Cancel => self.manager.cancel_edit(),
            Command::Delete(position) => {
                if let Some(id) = self.id_at(position)? {
                    let Self {
                        manager,
                        transport,
                        input,
                        output,
                    } = self;
                    let outcome = manager.delete(transport, &id, |user| confirm(input, output, user));
                    log_outcome("delete", outcome);
                }
            }
            Command::Refresh => {
                let outcome = self.manager.refresh(&mut self.transport);
                log_outcome("refresh", outcome);
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Map a 1-based list position to an id, complaining when out of range.
    fn id_at(&mut self, position: usize) -> io::Result<Option<UserId>> {
        let id = position
            .checked_sub(1)
            .and_then(|i| self.manager.users().get(i))
            .map(|u| u.id.clone());
        if id.is_none() {
            writeln!(self.output, "There is no user #{position}.")?;
        }
        Ok(id)
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask before deleting. I/O trouble counts as "no".
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, user: &User) -> bool {
    let asked = write!(output, "{CONFIRM_DELETE} ({} / {}) [y/N] ", user.name, user.email)
        .and_then(|()| output.flush());
    if asked.is_err() {
        return false;
    }
    matches!(
        read_line(input).map(|line| line.map(|l| l.trim().to_ascii_lowercase())),
        Ok(Some(answer)) if answer == "y" || answer == "yes"
    )
}

fn log_outcome(action: &str, outcome: Result<(), ActionError>) {
    if let Err(err) = outcome {
        debug!(action, %err, "action did not apply");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn confirm_accepts_yes_variants() {
        let user = User {
            id: UserId::new("1"),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        };
        for (answer, expected) in [("y\n", true), ("YES\n", true), ("n\n", false), ("\n", false), ("", false)] {
            let mut out = Vec::new();
            let got = confirm(&mut Cursor::new(answer), &mut out, &user);
            assert_eq!(got, expected, "answer {answer:?}");
            assert!(String::from_utf8(out).unwrap().contains(CONFIRM_DELETE));
        }
    }
}
