//! Interactive menu session.
//!
//! Reads one answer per line from any [`BufRead`] and writes prompts and
//! results to any [`Write`], so the whole menu can be driven from tests.
//! Lines that are not UTF-8 are decoded lossily and go through the same
//! validation as any other answer.

use crate::cli::commands::{
    AddOutcome, AddRequest, cmd_add, cmd_remove, cmd_show_expired, cmd_show_oldest,
};
use crate::cli::output::{
    OutputFormat, format_category_menu, format_menu, format_storage_menu,
};
use crate::core::{Clock, Location, StorageKind};
use crate::error::{InputError, IoError, Result};
use crate::input::{
    MenuChoice, parse_category, parse_date, parse_menu_choice, parse_positive, parse_storage,
    parse_text,
};
use crate::inventory::Inventory;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const SHELF_FULL: &str = "Shelf has been full. Try to add the item to another shelf or another fridge. You can also try removing an item from this shelf";

/// Whether the menu loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// An interactive inventory session.
///
/// # Examples
///
/// ```
/// use larder::cli::{OutputFormat, Session};
/// use larder::core::{CalendarDate, FixedClock};
///
/// let input = "1\nbutter\n2020-01-01\n3\n1\n1\n1\n4\n5\n".as_bytes();
/// let mut output = Vec::new();
/// let clock = Box::new(FixedClock(CalendarDate::new(2025, 1, 15)));
///
/// let mut session = Session::new(input, &mut output, clock, OutputFormat::Text);
/// session.run().unwrap();
/// assert_eq!(session.into_inventory().len(), 1);
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("Expired Item Names:\nbutter\n"));
/// ```
pub struct Session<R, W> {
    inventory: Inventory,
    clock: Box<dyn Clock>,
    format: OutputFormat,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over an empty inventory.
    pub fn new(input: R, output: W, clock: Box<dyn Clock>, format: OutputFormat) -> Self {
        Self::with_inventory(Inventory::new(), input, output, clock, format)
    }

    /// Creates a session over an existing inventory.
    pub fn with_inventory(
        inventory: Inventory,
        input: R,
        output: W,
        clock: Box<dyn Clock>,
        format: OutputFormat,
    ) -> Self {
        Self {
            inventory,
            clock,
            format,
            input,
            output,
        }
    }

    /// The inventory managed by this session.
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Ends the session, handing back the inventory.
    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Runs the menu loop until Exit is chosen or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input, writing output or rendering a
    /// JSON report fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write(&format_menu())?;
            self.write("Enter your choice: ")?;
            let flow = match self.read_line()? {
                None => Flow::EndOfInput,
                Some(answer) => match parse_menu_choice(&answer) {
                    Ok(choice) => self.dispatch(choice)?,
                    Err(err) => {
                        debug!(%err, "menu choice rejected");
                        self.write("Invalid choice. Please try again.\n")?;
                        Flow::Continue
                    }
                },
            };
            match flow {
                Flow::Continue => self.write("\n")?,
                Flow::Exit | Flow::EndOfInput => return self.finish(flow),
            }
        }
    }

    fn finish(&mut self, flow: Flow) -> Result<()> {
        if flow == Flow::EndOfInput {
            self.write("\n")?;
        }
        self.write("Exiting the program...\n")?;
        debug!(items = self.inventory.len(), "session finished");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::AddItem => self.add_item(),
            MenuChoice::RemoveItem => {
                let Some(name) = self.prompt_line("Enter the item name to remove: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                cmd_remove(&mut self.inventory, name.trim());
                Ok(Flow::Continue)
            }
            MenuChoice::ShowOldest => {
                let report = cmd_show_oldest(&self.inventory, self.clock.as_ref(), self.format)?;
                self.write(&report)?;
                Ok(Flow::Continue)
            }
            MenuChoice::ShowExpired => {
                let report = cmd_show_expired(&self.inventory, self.clock.as_ref(), self.format)?;
                self.write(&report)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn add_item(&mut self) -> Result<Flow> {
        let Some(request) = self.read_add_request()? else {
            return Ok(Flow::EndOfInput);
        };

        match cmd_add(&mut self.inventory, request, self.clock.as_ref())? {
            AddOutcome::Added => {}
            AddOutcome::ShelfFull => {
                warn!("shelf full, item not added");
                self.write(SHELF_FULL)?;
                self.write("\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Collects the add form. `None` means input ended part-way.
    fn read_add_request(&mut self) -> Result<Option<AddRequest>> {
        let Some(name) = self.prompt_until(
            "Enter the item name: ",
            "Item name cannot be empty. Please enter the item name: ",
            |s| parse_text(s, "item name"),
        )?
        else {
            return Ok(None);
        };

        let Some(use_by) = self.prompt_until(
            "Enter the item use by date (YYYY-MM-DD): ",
            "Invalid date format. Please enter the date in the format (YYYY-MM-DD): ",
            parse_date,
        )?
        else {
            return Ok(None);
        };

        self.write(&format_category_menu())?;
        let Some(category) = self.prompt_until(
            "Enter the category number: ",
            "Invalid category number. Please enter a number from 1 to 4: ",
            parse_category,
        )?
        else {
            return Ok(None);
        };

        self.write(&format_storage_menu())?;
        let Some(storage) = self.prompt_until(
            "Enter the storage number: ",
            "Invalid storage number. Please enter 1 or 2: ",
            parse_storage,
        )?
        else {
            return Ok(None);
        };

        let location = match storage {
            StorageKind::Fridge => {
                let Some(fridge_number) = self.prompt_until(
                    "Enter the fridge number: ",
                    "Invalid fridge number. Please enter a positive whole number: ",
                    parse_positive,
                )?
                else {
                    return Ok(None);
                };
                let Some(shelf_number) = self.prompt_until(
                    "Enter the shelf number: ",
                    "Invalid shelf number. Please enter a positive whole number: ",
                    parse_positive,
                )?
                else {
                    return Ok(None);
                };
                Location::fridge(fridge_number, shelf_number)
            }
            StorageKind::Freezer => {
                let Some(position) = self.prompt_until(
                    "Enter the freezer position: ",
                    "Position cannot be empty. Please enter the freezer position: ",
                    |s| parse_text(s, "freezer position"),
                )?
                else {
                    return Ok(None);
                };
                Location::freezer(position)
            }
        };

        Ok(Some(AddRequest {
            name,
            use_by,
            category: Some(category),
            location,
        }))
    }

    /// Prompts until `parse` accepts the answer. `None` at end of input.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> std::result::Result<T, InputError>,
    ) -> Result<Option<T>> {
        let mut message = prompt;
        loop {
            let Some(answer) = self.prompt_line(message)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(%err, "answer rejected");
                    message = retry;
                }
            }
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt)?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(|e| IoError::ReadFailed {
                reason: e.to_string(),
            })?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| {
                if e.kind() == io::ErrorKind::BrokenPipe {
                    IoError::OutputClosed
                } else {
                    IoError::WriteFailed {
                        reason: e.to_string(),
                    }
                }
            })?;
        Ok(())
    }
}
