// src/model/machine.rs
use std::{fmt, str::FromStr, time::Duration};

use crate::config::consts::{AVAILABLE_STATUS, DRYER_LABEL, REMAINING_THRESHOLD_MINUTES, WASHER_LABEL};
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MachineKind {
    Washer,
    Dryer,
}

impl MachineKind {
    pub fn label(&self) -> &'static str {
        match self { MachineKind::Washer => WASHER_LABEL, MachineKind::Dryer => DRYER_LABEL }
    }
}

impl fmt::Display for MachineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exact, case-sensitive match on the label the status page prints.
impl FromStr for MachineKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            WASHER_LABEL => Ok(MachineKind::Washer),
            DRYER_LABEL => Ok(MachineKind::Dryer),
            other => Err(Error::UnknownMachineType(s!(other))),
        }
    }
}

/// One washer or dryer as seen on a single scrape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    name: String,
    kind: MachineKind,
    status: String,
    remaining: Duration,
}

impl Machine {
    pub fn new(
        name: impl Into<String>,
        kind: MachineKind,
        status: impl Into<String>,
        remaining: Duration,
    ) -> Self {
        Self { name: name.into(), kind, status: status.into(), remaining }
    }

    pub fn with_minutes(
        name: impl Into<String>,
        kind: MachineKind,
        status: impl Into<String>,
        minutes: u64,
    ) -> Self {
        Self::new(name, kind, status, Duration::from_secs(minutes.saturating_mul(60)))
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn kind(&self) -> MachineKind { self.kind }
    pub fn status(&self) -> &str { &self.status }
    pub fn remaining_time(&self) -> Duration { self.remaining }

    /// Whole minutes left; seconds are dropped.
    pub fn remaining_minutes(&self) -> u64 { self.remaining.as_secs() / 60 }

    pub fn is_washer(&self) -> bool { self.kind == MachineKind::Washer }
    pub fn is_dryer(&self) -> bool { self.kind == MachineKind::Dryer }
    pub fn is_available(&self) -> bool { self.status == AVAILABLE_STATUS }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.remaining > Duration::from_secs(REMAINING_THRESHOLD_MINUTES * 60) {
            write!(f, "{} ({}) has {} minutes remaining", self.name, self.kind, self.remaining_minutes())
        } else {
            write!(f, "{} ({}) is {}", self.name, self.kind, self.status)
        }
    }
}
