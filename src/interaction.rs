//! The menu-driven command loop.

use std::io;
use std::path::PathBuf;

use log::debug;

use crate::console::{Command, Console};
use crate::persistence;
use crate::record_store::RecordStore;

const NO_FILE: &str = "No CD inventory file to load.";
const INVALID_ID: &str = "ID must be an integer.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    AwaitingCommand,
    Exit,
}

/// Everything a session mutates: the inventory file and the loaded table.
#[derive(Debug)]
pub struct Session {
    pub path: PathBuf,
    pub store: RecordStore,
}

impl Session {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store: RecordStore::new(),
        }
    }
}

pub struct InteractionLoop<C> {
    console: C,
    session: Session,
    state: State,
}

impl<C: Console> InteractionLoop<C> {
    pub fn new(console: C, session: Session) -> Self {
        Self {
            console,
            session,
            state: State::AwaitingCommand,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Load the inventory file once, then serve commands until exit.
    pub fn run(&mut self) -> io::Result<()> {
        self.start()?;
        while self.state == State::AwaitingCommand {
            self.console.render_menu()?;
            let command = self.console.read_command()?;
            self.step(command)?;
        }
        Ok(())
    }

    /// The implicit load at startup. A missing or unreadable file leaves the
    /// table empty.
    pub fn start(&mut self) -> io::Result<()> {
        match persistence::load(&self.session.path) {
            Ok(records) => {
                self.session.store.replace(records);
                self.console.notify("CD inventory file loaded to data.")
            }
            Err(_) => self.console.notify(NO_FILE),
        }
    }

    /// Perform a single command and return the resulting state.
    pub fn step(&mut self, command: Command) -> io::Result<State> {
        debug!("Processing {command:?}");
        match command {
            Command::Exit => self.state = State::Exit,
            Command::Load => self.reload()?,
            Command::Add => self.add()?,
            Command::Display => self.show()?,
            Command::Delete => self.delete()?,
            Command::Save => self.save()?,
        }
        Ok(self.state)
    }

    fn show(&mut self) -> io::Result<()> {
        self.console.render_table(self.session.store.all())
    }

    fn reload(&mut self) -> io::Result<()> {
        self.console.notify(
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.",
        )?;
        let answer = self
            .console
            .prompt_text("type 'yes' to continue and reload from file. otherwise reload will be canceled")?;
        if !answer.eq_ignore_ascii_case("yes") {
            self.console.pause(
                "canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.",
            )?;
            return self.show();
        }

        self.console.notify("looking for file...")?;
        match persistence::load(&self.session.path) {
            Ok(records) => {
                self.session.store.replace(records);
                self.console.notify("File found. reloading...")?;
                self.show()
            }
            Err(_) => self.console.notify(NO_FILE),
        }
    }

    fn add(&mut self) -> io::Result<()> {
        let id = self.console.prompt_integer("Enter ID: ")?;
        let title = self.console.prompt_text("What is the CD's title? ")?;
        let artist = self.console.prompt_text("What is the Artist's name? ")?;
        match id {
            Ok(id) => self.session.store.add(id, title, artist),
            Err(_) => self.console.notify(INVALID_ID)?,
        }
        self.show()
    }

    fn delete(&mut self) -> io::Result<()> {
        self.show()?;
        let id = match self.console.prompt_integer("Which ID would you like to delete? ")? {
            Ok(id) => id,
            Err(_) => {
                self.console.notify(INVALID_ID)?;
                return self.show();
            }
        };
        if self.session.store.delete_by_id(id) {
            self.console.notify("The CD was removed")?;
        } else {
            self.console.notify("Could not find this CD!")?;
        }
        self.show()
    }

    fn save(&mut self) -> io::Result<()> {
        self.show()?;
        let answer = self.console.prompt_text("Save this inventory to file? [y/n] ")?;
        if !answer.eq_ignore_ascii_case("y") {
            return self.console.pause(
                "The inventory was NOT saved to file. Press [ENTER] to return to the menu.",
            );
        }

        match persistence::save(&self.session.path, self.session.store.all()) {
            Ok(()) => self.console.notify("Inventory saved to file."),
            Err(err) => self.console.notify(&err.to_string()),
        }
    }
}
