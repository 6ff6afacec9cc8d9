//! The menu loop.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use chrono::{Local, NaiveDate};

use faststock_core::DomainResult;
use faststock_inventory::Inventory;
use faststock_products::{
    KindTag, Product, ProductDraft, parse_id, parse_kind, parse_name,
};

use crate::menu::MenuChoice;
use crate::output::Output;

/// `Break` when the operator asked to exit or input ran out.
type Flow = ControlFlow<()>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Clear between screens and wait for Enter after each action.
    pub interactive: bool,
    /// Print list/search results as JSON.
    pub json: bool,
    /// Echo a newline after each answer, for input that is not a terminal.
    pub echo: bool,
    /// Fixed "today" for expiration checks; the local date when `None`.
    pub today: Option<NaiveDate>,
}

/// One run of the menu. The inventory lives and dies with it.
#[derive(Debug)]
pub struct Session<R, W> {
    inventory: Inventory,
    input: R,
    out: Output<W>,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: Output<W>, options: SessionOptions) -> Self {
        Self {
            inventory: Inventory::new(),
            input,
            out,
            options,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_output(self) -> Output<W> {
        self.out
    }

    /// Run until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.out.clear()?;
            self.show_menu()?;

            let Some(selection) = self.ask("Choose an option: ")? else {
                return Ok(());
            };

            let flow = match MenuChoice::parse(&selection) {
                Some(MenuChoice::Exit) => {
                    self.farewell()?;
                    return Ok(());
                }
                Some(choice) => {
                    tracing::debug!(?choice, "menu selection");
                    self.out.clear()?;
                    self.dispatch(choice)?
                }
                None => {
                    tracing::debug!(selection = selection.as_str(), "invalid menu selection");
                    self.out.error("invalid option.")?;
                    Flow::Continue(())
                }
            };

            if flow.is_break() || self.pause()?.is_break() {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::RemoveByName => self.remove_by_name(),
            MenuChoice::RemoveById => self.remove_by_id(),
            MenuChoice::List => self.list(),
            MenuChoice::Search => self.search(),
            MenuChoice::Exit => Ok(Flow::Break(())),
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.out.header("Inventory System")?;
        for choice in MenuChoice::ALL {
            self.out
                .line(format!("{} - {}", choice.number(), choice.label()))?;
        }
        self.out.rule()
    }

    fn add(&mut self) -> io::Result<Flow> {
        self.out.header("Add Product")?;

        let Some(kind) = self.ask("Product kind (electronic/food): ")? else {
            return Ok(Flow::Break(()));
        };
        let Some(kind) = self.check(parse_kind(&kind))? else {
            return Ok(Flow::Continue(()));
        };

        let Some(name) = self.ask("Product name: ")? else {
            return Ok(Flow::Break(()));
        };
        let Some(price) = self.ask("Product price: ")? else {
            return Ok(Flow::Break(()));
        };

        let draft = match kind {
            KindTag::Electronic => {
                let Some(warranty) = self.ask("Warranty (months): ")? else {
                    return Ok(Flow::Break(()));
                };
                ProductDraft::electronic(&name, &price, &warranty)
            }
            KindTag::Food => {
                let Some(expiration) = self.ask("Expiration date (e.g. 20/08/2030): ")? else {
                    return Ok(Flow::Break(()));
                };
                ProductDraft::food(&name, &price, &expiration, self.today())
            }
        };
        let Some(draft) = self.check(draft)? else {
            return Ok(Flow::Continue(()));
        };

        let product = self.inventory.register(draft);
        let msg = format!("Product '{}' added with id {}.", product.name(), product.id_typed());
        self.out.success(&msg)?;
        Ok(Flow::Continue(()))
    }

    fn remove_by_name(&mut self) -> io::Result<Flow> {
        self.out.header("Remove Product")?;
        let Some(name) = self.ask("Name of the product to remove: ")? else {
            return Ok(Flow::Break(()));
        };
        let Some(name) = self.check(parse_name(&name))? else {
            return Ok(Flow::Continue(()));
        };
        let removed = self.inventory.remove_by_name(&name);
        self.report_removal(removed)
    }

    fn remove_by_id(&mut self) -> io::Result<Flow> {
        self.out.header("Remove Product")?;
        let Some(id) = self.ask("Id of the product to remove: ")? else {
            return Ok(Flow::Break(()));
        };
        let Some(id) = self.check(parse_id(&id))? else {
            return Ok(Flow::Continue(()));
        };
        let removed = self.inventory.remove_by_id(id);
        self.report_removal(removed)
    }

    fn report_removal(&mut self, removed: DomainResult<Product>) -> io::Result<Flow> {
        if let Some(product) = self.check(removed)? {
            self.out
                .success(&format!("Product '{}' removed.", product.name()))?;
        }
        Ok(Flow::Continue(()))
    }

    fn list(&mut self) -> io::Result<Flow> {
        if self.options.json {
            self.out.json(&self.inventory.list_all())?;
            return Ok(Flow::Continue(()));
        }

        self.out.header("Product List")?;
        if self.inventory.is_empty() {
            self.out.notice("Inventory is empty.")?;
        } else {
            self.out.notice("Products in inventory")?;
            for product in self.inventory.list_all() {
                self.out.line(product)?;
            }
        }
        self.out.rule()?;
        Ok(Flow::Continue(()))
    }

    fn search(&mut self) -> io::Result<Flow> {
        if !self.options.json {
            self.out.header("Search Products")?;
        }
        let Some(term) = self.ask("Search term (id or name): ")? else {
            return Ok(Flow::Break(()));
        };

        let found = self.inventory.search(term.trim());
        if self.options.json {
            self.out.json(&found)?;
        } else if found.is_empty() {
            self.out
                .notice(&format!("No products matched '{}'.", term.trim()))?;
        } else {
            for product in found {
                self.out.line(product)?;
            }
        }
        Ok(Flow::Continue(()))
    }

    fn farewell(&mut self) -> io::Result<()> {
        self.out.clear()?;
        self.out.header("Inventory System")?;
        self.out.notice("Thanks for using FastStock. See you soon!")
    }

    fn pause(&mut self) -> io::Result<Flow> {
        if !self.options.interactive {
            return Ok(Flow::Continue(()));
        }
        match self.ask("Press Enter to continue...")? {
            Some(_) => Ok(Flow::Continue(())),
            None => Ok(Flow::Break(())),
        }
    }

    /// Print `msg` and read one line. `None` at end of input.
    fn ask(&mut self, msg: &str) -> io::Result<Option<String>> {
        self.out.prompt(msg)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if self.options.echo {
            self.out.line("")?;
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Unwrap a domain result, reporting the error to the operator.
    fn check<T>(&mut self, result: DomainResult<T>) -> io::Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(error = %err, "operation rejected");
                self.out.error(&err)?;
                Ok(None)
            }
        }
    }

    fn today(&self) -> NaiveDate {
        self.options
            .today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
