// src/model/room.rs
use std::{fmt, io};

use super::machine::{Machine, MachineKind};
use crate::error::Result;
use crate::scrape::LaundryClient;

/// One laundry room as of the moment its status page was fetched.
///
/// Washers and dryers keep the order they had on the page. There is no refresh:
/// fetch a new `Room` for newer state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    identifier: String,
    name: String,
    washers: Vec<Machine>,
    dryers: Vec<Machine>,
}

impl Room {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            washers: Vec::new(),
            dryers: Vec::new(),
        }
    }

    pub fn from_machines(
        identifier: impl Into<String>,
        name: impl Into<String>,
        machines: impl IntoIterator<Item = Machine>,
    ) -> Self {
        let mut room = Self::new(identifier, name);
        for m in machines {
            room.push(m);
        }
        room
    }

    /// Fetch and parse the status page for `identifier`.
    pub fn fetch(client: &LaundryClient, identifier: &str) -> Result<Self> {
        client.room(identifier)
    }

    /// Route a machine to the washer or dryer list by its kind.
    pub fn push(&mut self, machine: Machine) {
        match machine.kind() {
            MachineKind::Washer => self.washers.push(machine),
            MachineKind::Dryer => self.dryers.push(machine),
        }
    }

    pub fn identifier(&self) -> &str { &self.identifier }
    pub fn name(&self) -> &str { &self.name }
    pub fn washers(&self) -> &[Machine] { &self.washers }
    pub fn dryers(&self) -> &[Machine] { &self.dryers }

    pub fn available_washers(&self) -> Vec<&Machine> {
        self.washers.iter().filter(|m| m.is_available()).collect()
    }

    pub fn available_dryers(&self) -> Vec<&Machine> {
        self.dryers.iter().filter(|m| m.is_available()).collect()
    }

    /// Per-machine listing, washers first.
    pub fn write_info<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Washers:")?;
        for washer in &self.washers {
            writeln!(out, "\t{washer}")?;
        }
        writeln!(out, "Dryers")?;
        for dryer in &self.dryers {
            writeln!(out, "\t{dryer}")?;
        }
        Ok(())
    }

    pub fn info(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_info(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// One-line summary: `<name>: a/b open washers, c/d open dryers`.
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} open washers, {}/{} open dryers",
            self.name,
            self.available_washers().len(),
            self.washers.len(),
            self.available_dryers().len(),
            self.dryers.len(),
        )
    }
}
