//! Table-driven instruction decoder
//!
//! [`probes_decode_insn`] classifies one instruction word against a set of decode tables and
//! reports whether a probe can be placed on it:
//!
//! * [`InsnVerdict::Rejected`]: no entry matched, a register field violated its constraint, a
//!   reject entry matched, or a custom decoder refused the instruction.
//! * [`InsnVerdict::GoodNoSlot`]: a simulate entry matched. The handler computes the effect of
//!   the instruction from the register file, so no slot is needed.
//! * [`InsnVerdict::Good`]: an emulate entry matched. The rewritten instruction has been
//!   committed to the slot, followed by a return sequence.
//!
//! Decoding touches nothing but the [`ProbeInsn`] it is given, so the same inputs always produce
//! the same verdict and the same slot contents.

use std::fmt;

use serde::Serialize;

use crate::{
    check_al, decode_regs, prepare_emulated_insn, set_emulated_insn, ArmReturn, CheckCc,
    DecodeEntry, DecodeTables, InsnHandler, InsnSlot, ProbeAction, ProbeRegs, TableId,
};

/// Instruction set of the word being decoded
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum InsnSet {
    #[default]
    Arm,
    /// 16-bit or 32-bit Thumb, a 32-bit encoding carrying its first halfword in bits 31..16
    Thumb,
}

/// Result of decoding one instruction
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsnVerdict {
    Rejected,
    GoodNoSlot,
    Good,
}

impl InsnVerdict {
    pub fn is_good(self) -> bool {
        self != InsnVerdict::Rejected
    }
}

impl fmt::Display for InsnVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsnVerdict::Rejected => write!(f, "rejected"),
            InsnVerdict::GoodNoSlot => write!(f, "good (no slot)"),
            InsnVerdict::Good => write!(f, "good (slot prepared)"),
        }
    }
}

/// Lifecycle of the slot held by a [`ProbeInsn`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SlotState {
    #[default]
    Unprepared,
    /// Return sequence staged, decode in progress
    Preprocessed,
    Rejected,
    MatchedNoSlot,
    MatchedWithSlot,
}

impl From<InsnVerdict> for SlotState {
    fn from(verdict: InsnVerdict) -> Self {
        match verdict {
            InsnVerdict::Rejected => SlotState::Rejected,
            InsnVerdict::GoodNoSlot => SlotState::MatchedNoSlot,
            InsnVerdict::Good => SlotState::MatchedWithSlot,
        }
    }
}

/// Decoded probe: the out-parameter of [`probes_decode_insn`]
#[derive(Clone)]
pub struct ProbeInsn {
    pub slot: InsnSlot,
    pub handler: Option<InsnHandler>,
    /// Index of the action table slot `handler` was taken from
    pub action: Option<usize>,
    /// Condition the probed instruction executes under; set by the instruction set front-end
    pub check_cc: CheckCc,
    pub arm_return: ArmReturn,
    pub state: SlotState,
}

impl Default for ProbeInsn {
    fn default() -> Self {
        Self::new(ArmReturn::default())
    }
}

impl ProbeInsn {
    pub fn new(arm_return: ArmReturn) -> Self {
        Self {
            slot: InsnSlot::new(),
            handler: None,
            action: None,
            check_cc: check_al,
            arm_return,
            state: SlotState::Unprepared,
        }
    }

    /// Whether decoding attached the handler of action slot `action`
    pub fn has_action(&self, action: usize) -> bool {
        self.handler.is_some() && self.action == Some(action)
    }

    /// Steps the probed instruction as the host framework would when the probe fires: PC moves
    /// past the instruction, then the handler runs if the condition holds.
    pub fn step(&self, insn: u32, regs: &mut ProbeRegs) {
        let width = if regs.is_thumb() && !crate::is_wide_instruction(insn) { 2 } else { 4 };
        let condition_holds = (self.check_cc)(regs.cpsr);
        regs.set_pc(regs.pc().wrapping_add(width));
        if !condition_holds {
            return;
        }
        if let Some(handler) = self.handler {
            handler(insn, self, regs);
        }
    }

    fn finish(&mut self, verdict: InsnVerdict) -> InsnVerdict {
        if verdict == InsnVerdict::Rejected {
            self.handler = None;
            self.action = None;
        }
        self.state = verdict.into();
        verdict
    }
}

impl fmt::Debug for ProbeInsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeInsn")
            .field("slot", &self.slot)
            .field("handler", &self.handler.map(|h| h as usize))
            .field("action", &self.action)
            .field("arm_return", &self.arm_return)
            .field("state", &self.state)
            .finish()
    }
}

/// Whether the next entry must pass its own mask test
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MatchState {
    Scanning,
    /// An or entry matched; the following entry is taken without testing its mask
    ContinuingDisjunction,
}

/// Decodes `insn` against `tables`, starting at table `root`.
///
/// On a good verdict `asi.handler` holds the handler from `actions` and `asi.action` its index,
/// and for
/// [`InsnVerdict::Good`] `asi.slot` holds the instruction followed by its return sequence.
pub fn probes_decode_insn(
    insn: u32,
    asi: &mut ProbeInsn,
    tables: &DecodeTables<'_>,
    root: TableId,
    mode: InsnSet,
    actions: &[ProbeAction],
) -> InsnVerdict {
    asi.slot.clear();
    asi.handler = None;
    asi.action = None;
    let mut insn = prepare_emulated_insn(insn, &mut asi.slot, mode, asi.arm_return);
    asi.state = SlotState::Preprocessed;

    let mut table = root;
    let mut index = 0usize;
    let mut state = MatchState::Scanning;

    loop {
        let Some(entry) = tables.entry(table, index) else {
            tracing::trace!("probes_decode_insn() ran off table {} at entry {index}", table.0);
            return asi.finish(InsnVerdict::Rejected);
        };

        let Some(header) = entry.header() else {
            tracing::trace!("probes_decode_insn() no match for {insn:#010x} in table {}", table.0);
            return asi.finish(InsnVerdict::Rejected);
        };

        index += 1;

        if state == MatchState::Scanning && !header.matches(insn) {
            continue;
        }
        state = MatchState::Scanning;

        if !decode_regs(&mut insn, header.regs) {
            return asi.finish(InsnVerdict::Rejected);
        }

        match *entry {
            DecodeEntry::Table { table: next, .. } => {
                table = next;
                index = 0;
            }

            DecodeEntry::Custom { action, .. } => {
                let Some(decoder) = actions.get(action).and_then(ProbeAction::decoder) else {
                    tracing::debug!("probes_decode_insn() action {action} is not a decoder");
                    return asi.finish(InsnVerdict::Rejected);
                };
                let verdict = decoder(insn, asi, actions);
                tracing::trace!("probes_decode_insn() custom action {action} -> {verdict}");
                return asi.finish(verdict);
            }

            DecodeEntry::Simulate { action, .. } => {
                let Some(handler) = actions.get(action).and_then(ProbeAction::handler) else {
                    tracing::debug!("probes_decode_insn() action {action} is not a handler");
                    return asi.finish(InsnVerdict::Rejected);
                };
                asi.handler = Some(handler);
                asi.action = Some(action);
                return asi.finish(InsnVerdict::GoodNoSlot);
            }

            DecodeEntry::Emulate { action, .. } => {
                let Some(handler) = actions.get(action).and_then(ProbeAction::handler) else {
                    tracing::debug!("probes_decode_insn() action {action} is not a handler");
                    return asi.finish(InsnVerdict::Rejected);
                };
                asi.handler = Some(handler);
                asi.action = Some(action);
                set_emulated_insn(insn, &mut asi.slot, mode);
                return asi.finish(InsnVerdict::Good);
            }

            DecodeEntry::Or { .. } => state = MatchState::ContinuingDisjunction,

            DecodeEntry::Reject { .. } | DecodeEntry::End => {
                return asi.finish(InsnVerdict::Rejected);
            }
        }
    }
}
