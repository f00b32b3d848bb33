//! Interactive loop wiring stdin commands to the widget.

use crate::command::{parse_line, Command, USAGE};
use crate::terminal::TerminalPort;
use log::debug;
use notelist_core::{
    display_note_list, LoggingError, NoteWidget, RenderError, RenderPort, SharedPort, ViewError,
};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::rc::Rc;

#[derive(Debug)]
pub enum CliError {
    Logging(LoggingError),
    View(ViewError),
    Render(RenderError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "logging setup failed: {err}"),
            Self::View(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "input failed: {err}"),
            Self::Json(err) => write!(f, "json output failed: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::View(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<ViewError> for CliError {
    fn from(value: ViewError) -> Self {
        Self::View(value)
    }
}

impl From<RenderError> for CliError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Displays a fresh widget on `port` and processes `input` until EOF or
/// `quit`.
pub fn run<R, W>(input: R, port: Rc<RefCell<TerminalPort<W>>>) -> Result<(), CliError>
where
    R: BufRead,
    W: Write + 'static,
{
    let shared: SharedPort = port.clone();
    let widget = display_note_list(shared)?;

    for line in input.lines() {
        let line = line?;
        let Some(parsed) = parse_line(&line) else {
            continue;
        };
        match parsed {
            Ok(Command::Quit) => break,
            Ok(command) => execute(&widget, &port, command)?,
            Err(err) => port
                .borrow_mut()
                .write_line(&format!("{err}; {USAGE}"))?,
        }
    }
    Ok(())
}

fn execute<W: Write>(
    widget: &NoteWidget,
    port: &RefCell<TerminalPort<W>>,
    command: Command,
) -> Result<(), CliError> {
    match command {
        Command::Add(content) => {
            if let Err(err) = widget.add_view.submit(&content) {
                debug!("event=cli_add module=cli status=error reason={err}");
            }
        }
        Command::Remove(id) => {
            if let Err(err) = widget.list_view.remove_clicked(id) {
                debug!("event=cli_remove module=cli status=error reason={err}");
            }
        }
        Command::List => {
            let notes = widget.controller.snapshot();
            port.borrow_mut().render_list(&notes)?;
        }
        Command::Json => {
            let json = serde_json::to_string_pretty(&widget.controller.snapshot())?;
            port.borrow_mut().write_line(&json)?;
        }
        Command::Help => port.borrow_mut().write_line(USAGE)?,
        Command::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::terminal::TerminalPort;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session(script: &str) -> String {
        let port = Rc::new(RefCell::new(TerminalPort::new(Vec::new())));
        run(script.as_bytes(), Rc::clone(&port)).expect("session should run");
        let port = Rc::try_unwrap(port)
            .ok()
            .expect("widget dropped with session")
            .into_inner();
        String::from_utf8(port.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn buy_milk_session() {
        let output = session("add Buy milk\nadd\nrm 1\nquit\nadd ignored\n");
        assert_eq!(
            output,
            "new note: add <text>    remove: rm <id>\n\
             notes:\n  No notes yet.\n\
             notes:\n    [1] Buy milk\n\
             > Buy milk is added.\n\
             > Note content cannot be empty.\n\
             notes:\n  No notes yet.\n\
             > Buy milk is removed.\n"
        );
    }

    #[test]
    fn json_lists_current_notes() {
        let output = session("add a\njson\n");
        assert!(output.contains("\"id\": 1"));
        assert!(output.contains("\"content\": \"a\""));
    }

    #[test]
    fn bad_commands_keep_the_loop_alive() {
        let output = session("frob\nrm x\nadd b\n");
        assert!(output.contains("unknown command `frob`"));
        assert!(output.contains("note id must be an integer, got `x`"));
        assert!(output.contains("> b is added."));
    }

    #[test]
    fn second_add_appends_row() {
        let output = session("add a\nadd b\nrm 7\n");
        assert!(output.contains("  + [2] b\n"));
        assert!(output.contains("> Note is not found.\n"));
    }
}
