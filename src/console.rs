//! Text rendering and prompting for the interactive loop.

use std::io::{self, BufRead, Write};

use crate::error::{parse_integer, InventoryResult};
use crate::record::Record;

const MENU: &str = "Menu\n\n\
    [l] load Inventory from file\n\
    [a] Add CD\n\
    [i] Display Current Inventory\n\
    [d] delete CD from Inventory\n\
    [s] Save Inventory to file\n\
    [x] exit\n";

const COMMAND_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";

/// A menu selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

impl Command {
    /// Map a menu key to its command, ignoring case and surrounding whitespace.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim().to_lowercase().as_str() {
            "l" => Some(Self::Load),
            "a" => Some(Self::Add),
            "i" => Some(Self::Display),
            "d" => Some(Self::Delete),
            "s" => Some(Self::Save),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The narrow I/O surface the interaction loop talks to.
pub trait Console {
    fn render_menu(&mut self) -> io::Result<()>;

    /// Keep asking until the user picks a valid command.
    fn read_command(&mut self) -> io::Result<Command>;

    fn render_table(&mut self, records: &[Record]) -> io::Result<()>;

    /// Show `prompt` and return the trimmed reply.
    fn prompt_text(&mut self, prompt: &str) -> io::Result<String>;

    fn notify(&mut self, message: &str) -> io::Result<()>;

    fn prompt_integer(&mut self, prompt: &str) -> io::Result<InventoryResult<i64>> {
        let text = self.prompt_text(prompt)?;
        Ok(parse_integer(&text))
    }

    /// Show `prompt` and wait for the user to hit ENTER.
    fn pause(&mut self, prompt: &str) -> io::Result<()> {
        self.prompt_text(prompt).map(drop)
    }
}

/// Line-oriented console over any reader and writer, normally stdin/stdout.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn render_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{MENU}")
    }

    fn read_command(&mut self) -> io::Result<Command> {
        loop {
            write!(self.output, "{COMMAND_PROMPT}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(Command::Exit);
            };
            if let Some(command) = Command::from_choice(&line) {
                writeln!(self.output)?;
                return Ok(command);
            }
        }
    }

    fn render_table(&mut self, records: &[Record]) -> io::Result<()> {
        writeln!(self.output, "======= The Current Inventory: =======")?;
        writeln!(self.output, "ID\tCD Title (by: Artist)\n")?;
        for record in records {
            writeln!(self.output, "{record}")?;
        }
        writeln!(self.output, "======================================")
    }

    fn prompt_text(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let line = self.read_line()?.unwrap_or_default();
        Ok(line.trim().to_string())
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::InventoryError;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(terminal: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(terminal.into_output()).expect("utf-8 output")
    }

    #[test]
    fn command_keys() {
        assert_eq!(Command::from_choice("l"), Some(Command::Load));
        assert_eq!(Command::from_choice(" A \n"), Some(Command::Add));
        assert_eq!(Command::from_choice("i"), Some(Command::Display));
        assert_eq!(Command::from_choice("D"), Some(Command::Delete));
        assert_eq!(Command::from_choice("s"), Some(Command::Save));
        assert_eq!(Command::from_choice("x"), Some(Command::Exit));
        assert_eq!(Command::from_choice("q"), None);
        assert_eq!(Command::from_choice("load"), None);
        assert_eq!(Command::from_choice(""), None);
    }

    #[test]
    fn read_command_repeats_until_valid() {
        let mut terminal = terminal("q\n\nsave\nS\n");
        assert_eq!(terminal.read_command().unwrap(), Command::Save);
        assert_eq!(output(terminal).matches(COMMAND_PROMPT).count(), 4);
    }

    #[test]
    fn read_command_exits_on_end_of_input() {
        let mut terminal = terminal("nope\n");
        assert_eq!(terminal.read_command().unwrap(), Command::Exit);
    }

    #[test]
    fn renders_table() {
        let mut terminal = terminal("");
        terminal
            .render_table(&[
                Record::new(1, "Abbey Road", "The Beatles"),
                Record::new(2, "Blue", "Joni Mitchell"),
            ])
            .unwrap();
        assert_eq!(
            output(terminal),
            "======= The Current Inventory: =======\n\
             ID\tCD Title (by: Artist)\n\n\
             1\tAbbey Road (by:The Beatles)\n\
             2\tBlue (by:Joni Mitchell)\n\
             ======================================\n"
        );
    }

    #[test]
    fn renders_menu() {
        let mut terminal = terminal("");
        terminal.render_menu().unwrap();
        let text = output(terminal);
        assert!(text.starts_with("Menu\n\n[l] load Inventory from file\n"));
        assert!(text.ends_with("[x] exit\n\n"));
    }

    #[test]
    fn prompt_text_trims_reply() {
        let mut terminal = terminal("  Abbey Road \r\n");
        assert_eq!(terminal.prompt_text("Title? ").unwrap(), "Abbey Road");
        assert_eq!(output(terminal), "Title? ");
    }

    #[test]
    fn prompt_text_is_empty_at_end_of_input() {
        let mut terminal = terminal("");
        assert_eq!(terminal.prompt_text("Title? ").unwrap(), "");
    }

    #[test]
    fn prompt_integer_reports_invalid_input() {
        let mut terminal = terminal("12\ntwelve\n");
        assert_eq!(terminal.prompt_integer("ID? ").unwrap().unwrap(), 12);
        assert!(matches!(
            terminal.prompt_integer("ID? ").unwrap(),
            Err(InventoryError::InvalidInteger(text)) if text == "twelve"
        ));
    }
}
