//! Procedure transaction identity allocation, TS 24.501 style.

use thiserror::Error;

const MIN_PTI: u8 = 1;
const MAX_PTI: u8 = 254;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no free procedure transaction identity")]
pub struct PtiExhausted;

#[derive(Debug, Clone, Copy)]
pub struct ProcedureTransaction {
    pub pti: u8,
}

/// Tracks which procedure transaction identities are in use.
///
/// Identities run from 1 to 254; 0 and 255 are reserved on the wire.
#[derive(Debug)]
pub struct ProcedureTransactionTable {
    slots: Vec<Option<ProcedureTransaction>>,
}

impl Default for ProcedureTransactionTable {
    fn default() -> Self {
        ProcedureTransactionTable {
            slots: vec![None; (MAX_PTI - MIN_PTI + 1) as usize],
        }
    }
}

impl ProcedureTransactionTable {
    /// Allocates the lowest free identity.
    pub fn allocate(&mut self) -> Result<u8, PtiExhausted> {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                let pti = MIN_PTI + index as u8;
                *slot = Some(ProcedureTransaction { pti });
                return Ok(pti);
            }
        }
        Err(PtiExhausted)
    }

    /// Releases an identity.  Releasing one that is already free (or out
    /// of range) does nothing.
    pub fn release(&mut self, pti: u8) {
        if (MIN_PTI..=MAX_PTI).contains(&pti) {
            self.slots[(pti - MIN_PTI) as usize] = None;
        }
    }

    pub fn is_in_use(&self, pti: u8) -> bool {
        (MIN_PTI..=MAX_PTI).contains(&pti) && self.slots[(pti - MIN_PTI) as usize].is_some()
    }
}
