//! Custom decoder for LDM and STM
//!
//! Block transfers name their registers in a bit list instead of nibbles, so they cannot go
//! through register field validation. The slot copy instead gets its base register and list
//! shifted down together, keeping SP and PC out of it, and the emulation handler later maps the
//! slot registers back onto the probed context by the same distance.

use super::ArmAction;
use crate::{set_emulated_insn, InsnSet, InsnVerdict, ProbeAction, ProbeInsn};

/// How far [`decode_ldmstm`] shifted the registers of a block transfer
pub fn ldmstm_register_shift(insn: u32) -> Option<u32> {
    let reglist = insn & 0xffff;
    let rn = (insn >> 16) & 0xf;
    let is_ldm = insn & (1 << 20) != 0;

    if rn == 15 {
        None
    } else if rn <= 12 && reglist & 0xe000 == 0 {
        // r0..r12 only
        Some(0)
    } else if rn >= 2 && reglist & 0x8003 == 0 {
        // r2..r14, shifted down to r0..r12
        Some(2)
    } else if rn >= 3 && reglist & 0x0007 == 0 && is_ldm && reglist & 0x8000 != 0 {
        // r3..r15 on a load, shifted down to r0..r12
        Some(3)
    } else {
        None
    }
}

/// Prepares the slot of an LDM or STM whose registers fit in 13 consecutive registers
pub fn decode_ldmstm(insn: u32, asi: &mut ProbeInsn, actions: &[ProbeAction]) -> InsnVerdict {
    let Some(shift) = ldmstm_register_shift(insn) else {
        tracing::trace!("decode_ldmstm() register list of {insn:#010x} does not fit a slot");
        return InsnVerdict::Rejected;
    };
    let Some(handler) = actions.get(ArmAction::BlockTransfer.idx()).and_then(|a| a.handler())
    else {
        return InsnVerdict::Rejected;
    };

    let rn = ((insn >> 16) & 0xf) - shift;
    let reglist = (insn & 0xffff) >> shift;
    set_emulated_insn((insn & 0xfff0_0000) | (rn << 16) | reglist, &mut asi.slot, InsnSet::Arm);
    asi.handler = Some(handler);
    asi.action = Some(ArmAction::BlockTransfer.idx());
    InsnVerdict::Good
}
