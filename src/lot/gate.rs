//! Entry and exit gates

use crate::types::{GateId, GateType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directional entry or exit point of the lot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    /// Unique identifier for the gate
    pub id: GateId,
    /// Gate number; the floor selection strategy hashes on it
    pub number: u32,
    /// Whether vehicles enter or leave through this gate
    pub gate_type: GateType,
}

impl Gate {
    /// Create a new gate
    pub fn new(id: GateId, number: u32, gate_type: GateType) -> Self {
        Self { id, number, gate_type }
    }

    /// Create an entry gate
    pub fn entry(id: GateId, number: u32) -> Self {
        Self::new(id, number, GateType::Entry)
    }

    /// Create an exit gate
    pub fn exit(id: GateId, number: u32) -> Self {
        Self::new(id, number, GateType::Exit)
    }

    /// Check if vehicles enter through this gate
    pub fn is_entry(&self) -> bool {
        self.gate_type == GateType::Entry
    }

    /// Check if vehicles leave through this gate
    pub fn is_exit(&self) -> bool {
        self.gate_type == GateType::Exit
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{}, {})", self.id, self.number, self.gate_type)
    }
}
