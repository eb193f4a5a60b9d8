use anchor_lang::prelude::*;

use crate::FusionError;

/// Phases of a single `craft` execution. Any failure moves to `Aborted`, at
/// which point the runtime discards every effect of the transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CraftPhase {
    Idle,
    Validating,
    Consuming,
    Dispensing,
    Committed,
    Aborted,
}

impl CraftPhase {
    fn next(self) -> Option<CraftPhase> {
        match self {
            CraftPhase::Idle => Some(CraftPhase::Validating),
            CraftPhase::Validating => Some(CraftPhase::Consuming),
            CraftPhase::Consuming => Some(CraftPhase::Dispensing),
            CraftPhase::Dispensing => Some(CraftPhase::Committed),
            CraftPhase::Committed | CraftPhase::Aborted => None,
        }
    }
}

#[derive(Debug)]
pub struct CraftSession {
    phase: CraftPhase,
}

impl Default for CraftSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CraftSession {
    pub fn new() -> Self {
        Self {
            phase: CraftPhase::Idle,
        }
    }

    pub fn phase(&self) -> CraftPhase {
        self.phase
    }

    /// Moves to `to` if it directly follows the current phase.
    pub fn advance(&mut self, to: CraftPhase) -> Result<()> {
        if self.phase.next() != Some(to) {
            msg!("illegal craft transition {:?} -> {:?}", self.phase, to);
            self.phase = CraftPhase::Aborted;
            return err!(FusionError::InvalidPhaseTransition);
        }
        msg!("craft: {:?} -> {:?}", self.phase, to);
        self.phase = to;
        Ok(())
    }

    /// Runs `step` and marks the session aborted when it fails.
    pub fn run<T>(&mut self, step: impl FnOnce() -> Result<T>) -> Result<T> {
        step().map_err(|err| {
            msg!("craft aborted during {:?}", self.phase);
            self.phase = CraftPhase::Aborted;
            err
        })
    }
}
