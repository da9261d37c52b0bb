//! Action tables
//!
//! Custom, simulate and emulate entries do not carry function references themselves; they hold an
//! index into an action table supplied by the caller for the instruction set being decoded.

use std::fmt;

use crate::{InsnVerdict, ProbeInsn, ProbeRegs};

/// Runs when the probe fires. Receives the original instruction word, the decoded probe and the
/// register file of the probed context.
pub type InsnHandler = fn(u32, &ProbeInsn, &mut ProbeRegs);

/// Decodes an instruction family the generic matcher cannot express. Receives the prepared
/// instruction word and the same action table the driver was given.
pub type CustomDecoder = fn(u32, &mut ProbeInsn, &[ProbeAction]) -> InsnVerdict;

/// One slot of an action table
#[derive(Copy, Clone)]
pub enum ProbeAction {
    Decoder(CustomDecoder),
    Handler(InsnHandler),
}

impl ProbeAction {
    pub fn decoder(&self) -> Option<CustomDecoder> {
        match *self {
            ProbeAction::Decoder(d) => Some(d),
            ProbeAction::Handler(_) => None,
        }
    }

    pub fn handler(&self) -> Option<InsnHandler> {
        match *self {
            ProbeAction::Handler(h) => Some(h),
            ProbeAction::Decoder(_) => None,
        }
    }
}

impl fmt::Debug for ProbeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeAction::Decoder(d) => write!(f, "Decoder({:#x})", *d as usize),
            ProbeAction::Handler(h) => write!(f, "Handler({:#x})", *h as usize),
        }
    }
}
