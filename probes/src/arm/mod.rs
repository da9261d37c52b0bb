//! ARM (A32) instruction set front-end
//!
//! Ties the generic decoder to the ARM decode tables: [`ArmAction`] names the action slots the
//! tables refer to, [`arm_actions`] fills them, and [`arm_decode_insn`] decodes one word.
//!
//! Simulated instructions are handled entirely by this module. Emulated instructions need their
//! slot executed out of line, which only the caller can do, so every emulation slot of the action
//! table receives the same caller-supplied handler.

mod ldmstm;
mod simulate;
mod table;

pub use ldmstm::*;
pub use simulate::*;
pub use table::*;

use crate::{
    condition_check, probes_decode_insn, InsnHandler, InsnSet, InsnVerdict, ProbeAction,
    ProbeInsn, TableId,
};

/// Action slots referenced by the ARM decode tables
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum ArmAction {
    PreloadImm,
    PreloadReg,
    BranchImm,
    Mrs,
    BranchReg,
    Clz,
    SaturatingArithmetic,
    Mul1,
    Mul2,
    Swp,
    LdrStrd,
    LoadExtra,
    Load,
    StoreExtra,
    Store,
    MovIpSp,
    DataProcessingReg,
    DataProcessingImm,
    MovHalfword,
    Sev,
    Wfe,
    Saturate,
    Rev,
    Mmi,
    Pack,
    Extend,
    ExtendAdd,
    MulAddLong,
    MulAdd,
    Bitfield,
    Branch,
    LdmStm,
    /// Handler installed by [`decode_ldmstm`] for block transfers it rewrote into a slot
    BlockTransfer,
}

impl ArmAction {
    pub const COUNT: usize = 33;

    pub const ALL: [ArmAction; ArmAction::COUNT] = [
        ArmAction::PreloadImm,
        ArmAction::PreloadReg,
        ArmAction::BranchImm,
        ArmAction::Mrs,
        ArmAction::BranchReg,
        ArmAction::Clz,
        ArmAction::SaturatingArithmetic,
        ArmAction::Mul1,
        ArmAction::Mul2,
        ArmAction::Swp,
        ArmAction::LdrStrd,
        ArmAction::LoadExtra,
        ArmAction::Load,
        ArmAction::StoreExtra,
        ArmAction::Store,
        ArmAction::MovIpSp,
        ArmAction::DataProcessingReg,
        ArmAction::DataProcessingImm,
        ArmAction::MovHalfword,
        ArmAction::Sev,
        ArmAction::Wfe,
        ArmAction::Saturate,
        ArmAction::Rev,
        ArmAction::Mmi,
        ArmAction::Pack,
        ArmAction::Extend,
        ArmAction::ExtendAdd,
        ArmAction::MulAddLong,
        ArmAction::MulAdd,
        ArmAction::Bitfield,
        ArmAction::Branch,
        ArmAction::LdmStm,
        ArmAction::BlockTransfer,
    ];

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    pub fn from_idx(idx: usize) -> Option<ArmAction> {
        Self::ALL.get(idx).copied()
    }

    /// Whether the action runs the instruction from a slot
    pub const fn is_emulated(self) -> bool {
        !matches!(
            self,
            ArmAction::PreloadImm
                | ArmAction::PreloadReg
                | ArmAction::BranchImm
                | ArmAction::Mrs
                | ArmAction::BranchReg
                | ArmAction::MovIpSp
                | ArmAction::Wfe
                | ArmAction::Branch
                | ArmAction::LdmStm
        )
    }
}

/// Builds the ARM action table. `emulate` runs slot instructions out of line.
pub fn arm_actions(emulate: InsnHandler) -> [ProbeAction; ArmAction::COUNT] {
    ArmAction::ALL.map(|action| match action {
        ArmAction::PreloadImm | ArmAction::PreloadReg | ArmAction::Wfe => {
            ProbeAction::Handler(simulate_nop)
        }
        ArmAction::BranchImm => ProbeAction::Handler(simulate_blx1),
        ArmAction::Mrs => ProbeAction::Handler(simulate_mrs),
        ArmAction::BranchReg => ProbeAction::Handler(simulate_blx2bx),
        ArmAction::MovIpSp => ProbeAction::Handler(simulate_mov_ipsp),
        ArmAction::Branch => ProbeAction::Handler(simulate_bbl),
        ArmAction::LdmStm => ProbeAction::Decoder(decode_ldmstm),
        _ => ProbeAction::Handler(emulate),
    })
}

/// Decodes an ARM instruction word against [`ARM_DECODE_TABLES`].
///
/// The condition check is taken from the word's condition field before the decoder makes the
/// slot copy unconditional.
pub fn arm_decode_insn(insn: u32, asi: &mut ProbeInsn, actions: &[ProbeAction]) -> InsnVerdict {
    asi.check_cc = condition_check(insn);
    let verdict =
        probes_decode_insn(insn, asi, &ARM_DECODE_TABLES, TableId::ROOT, InsnSet::Arm, actions);
    tracing::debug!("arm_decode_insn() {insn:#010x} -> {verdict}");
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_indices_are_dense() {
        for (i, action) in ArmAction::ALL.iter().enumerate() {
            assert_eq!(action.idx(), i);
            assert_eq!(ArmAction::from_idx(i), Some(*action));
        }
        assert_eq!(ArmAction::from_idx(ArmAction::COUNT), None);
    }

    #[test]
    fn test_action_kinds() {
        fn emulate(_insn: u32, _asi: &ProbeInsn, _regs: &mut crate::ProbeRegs) {}
        let actions = arm_actions(emulate);

        assert!(actions[ArmAction::LdmStm.idx()].decoder().is_some());
        for action in ArmAction::ALL {
            if action == ArmAction::LdmStm {
                continue;
            }
            assert!(actions[action.idx()].handler().is_some(), "{action:?}");
        }
    }
}
