//! Instruction slots
//!
//! An emulated instruction is executed out of line from a small slot: the (possibly rewritten)
//! instruction followed by a return to the caller. The slot is prepared in two steps. The return
//! sequence is staged before decoding starts, and the instruction itself is committed only when
//! an emulate entry matches.
//!
//! ```text
//!  ARM                          Thumb
//!  word 0   insn                halfword 0   insn (or first half of a wide insn)
//!  word 1   return              halfword 1   bx lr (or second half of a wide insn)
//!                               halfword 2   bx lr
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::InsnSet;

/// Slot size in 32-bit words
pub const MAX_INSN_SIZE: usize = 2;

/// `bx lr` in Thumb
pub const THUMB_BX_LR: u16 = 0x4770;

/// `mov pc, lr` in ARM
pub const ARM_MOV_PC_LR: u32 = 0xe1a0_f00e;

/// `bx lr` in ARM
pub const ARM_BX_LR: u32 = 0xe12f_ff1e;

/// Condition field value meaning "always"
pub const COND_AL: u32 = 0xe;

/// Return instruction appended to ARM slots
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ArmReturn {
    /// `mov pc, lr`, for kernels that never interwork with Thumb
    #[default]
    MovPcLr,
    /// `bx lr`, required when the caller may be Thumb code
    BxLr,
}

impl ArmReturn {
    pub const fn encoding(self) -> u32 {
        match self {
            ArmReturn::MovPcLr => ARM_MOV_PC_LR,
            ArmReturn::BxLr => ARM_BX_LR,
        }
    }
}

impl FromStr for ArmReturn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mov-pc-lr" => Ok(ArmReturn::MovPcLr),
            "bx-lr" => Ok(ArmReturn::BxLr),
            _ => Err(format!("'{}' is not a valid ARM return, expected mov-pc-lr or bx-lr", s)),
        }
    }
}

impl Display for ArmReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmReturn::MovPcLr => write!(f, "mov-pc-lr"),
            ArmReturn::BxLr => write!(f, "bx-lr"),
        }
    }
}

/// Out-of-line execution buffer
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct InsnSlot {
    words: [u32; MAX_INSN_SIZE],
}

impl InsnSlot {
    pub const fn new() -> Self {
        Self { words: [0; MAX_INSN_SIZE] }
    }

    #[inline(always)]
    pub fn words(&self) -> &[u32; MAX_INSN_SIZE] {
        &self.words
    }

    #[inline(always)]
    pub fn word(&self, n: usize) -> u32 {
        self.words[n]
    }

    #[inline(always)]
    pub fn set_word(&mut self, n: usize, value: u32) {
        self.words[n] = value;
    }

    /// Halfword `n`, in instruction stream order
    #[inline(always)]
    pub fn halfword(&self, n: usize) -> u16 {
        (self.words[n / 2] >> ((n % 2) * 16)) as u16
    }

    #[inline(always)]
    pub fn set_halfword(&mut self, n: usize, value: u16) {
        let shift = (n % 2) * 16;
        let word = &mut self.words[n / 2];
        *word = (*word & !(0xffff << shift)) | ((value as u32) << shift);
    }

    pub fn clear(&mut self) {
        self.words = [0; MAX_INSN_SIZE];
    }
}

/// 32-bit Thumb encodings start with a first halfword of 0xe800 or above
#[inline(always)]
pub fn is_wide_instruction(insn: u32) -> bool {
    insn >= 0xe800
}

/// Forces the condition field of an ARM instruction to "always". Words already in the
/// unconditional space (0xF) are left alone.
#[inline(always)]
pub fn make_unconditional(insn: u32) -> u32 {
    if insn >> 28 < COND_AL {
        (insn & 0x0fff_ffff) | (COND_AL << 28)
    } else {
        insn
    }
}

/// Stages the return sequence in `slot` and returns the instruction in the form it will be
/// committed with.
///
/// ARM instructions are made unconditional: the caller evaluates the condition before the
/// handler ever runs.
pub fn prepare_emulated_insn(
    insn: u32,
    slot: &mut InsnSlot,
    mode: InsnSet,
    arm_return: ArmReturn,
) -> u32 {
    match mode {
        InsnSet::Thumb => {
            slot.set_halfword(1, THUMB_BX_LR);
            slot.set_halfword(2, THUMB_BX_LR);
            insn
        }
        InsnSet::Arm => {
            slot.set_word(1, arm_return.encoding());
            make_unconditional(insn)
        }
    }
}

/// Writes a (probably modified) instruction into a slot staged by [`prepare_emulated_insn`]
pub fn set_emulated_insn(insn: u32, slot: &mut InsnSlot, mode: InsnSet) {
    match mode {
        InsnSet::Thumb => {
            if is_wide_instruction(insn) {
                slot.set_halfword(0, (insn >> 16) as u16);
                slot.set_halfword(1, insn as u16);
            } else {
                slot.set_halfword(0, insn as u16);
            }
        }
        InsnSet::Arm => slot.set_word(0, insn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_unconditional() {
        assert_eq!(make_unconditional(0x0a00_0010), 0xea00_0010);
        assert_eq!(make_unconditional(0xd1a0_0001), 0xe1a0_0001);
        assert_eq!(make_unconditional(0xe1a0_0001), 0xe1a0_0001);
        assert_eq!(make_unconditional(0xfa00_0000), 0xfa00_0000);
    }

    #[test]
    fn test_prepare_arm_slot() {
        let mut slot = InsnSlot::new();
        let insn = prepare_emulated_insn(0x1081_0002, &mut slot, InsnSet::Arm, ArmReturn::MovPcLr);
        assert_eq!(insn, 0xe081_0002);
        assert_eq!(slot.words(), &[0, ARM_MOV_PC_LR]);

        set_emulated_insn(insn, &mut slot, InsnSet::Arm);
        assert_eq!(slot.words(), &[0xe081_0002, ARM_MOV_PC_LR]);

        let mut slot = InsnSlot::new();
        prepare_emulated_insn(0xe081_0002, &mut slot, InsnSet::Arm, ArmReturn::BxLr);
        assert_eq!(slot.word(1), ARM_BX_LR);
    }

    #[test]
    fn test_prepare_thumb_narrow_slot() {
        let mut slot = InsnSlot::new();
        let insn = prepare_emulated_insn(0x1c08, &mut slot, InsnSet::Thumb, ArmReturn::MovPcLr);
        assert_eq!(insn, 0x1c08);
        set_emulated_insn(insn, &mut slot, InsnSet::Thumb);

        assert_eq!(slot.halfword(0), 0x1c08);
        assert_eq!(slot.halfword(1), THUMB_BX_LR);
        assert_eq!(slot.halfword(2), THUMB_BX_LR);
        assert_eq!(slot.halfword(3), 0);
    }

    #[test]
    fn test_prepare_thumb_wide_slot() {
        let mut slot = InsnSlot::new();
        // add.w r0, r1, r2
        let insn = prepare_emulated_insn(0xeb01_0002, &mut slot, InsnSet::Thumb, ArmReturn::BxLr);
        assert_eq!(insn, 0xeb01_0002);
        set_emulated_insn(insn, &mut slot, InsnSet::Thumb);

        assert_eq!(slot.halfword(0), 0xeb01);
        assert_eq!(slot.halfword(1), 0x0002);
        assert_eq!(slot.halfword(2), THUMB_BX_LR);
    }

    #[test]
    fn test_arm_return_names() {
        assert_eq!("bx-lr".parse::<ArmReturn>(), Ok(ArmReturn::BxLr));
        assert_eq!("MOV-PC-LR".parse::<ArmReturn>(), Ok(ArmReturn::MovPcLr));
        assert!("ret".parse::<ArmReturn>().is_err());
        assert_eq!(ArmReturn::BxLr.to_string(), "bx-lr");
    }

    #[test]
    fn test_halfword_accessors() {
        let mut slot = InsnSlot::new();
        slot.set_halfword(1, 0xbeef);
        slot.set_halfword(0, 0xdead);
        slot.set_halfword(3, 0x1234);
        assert_eq!(slot.words(), &[0xbeef_dead, 0x1234_0000]);

        slot.clear();
        assert_eq!(slot, InsnSlot::default());
    }
}
