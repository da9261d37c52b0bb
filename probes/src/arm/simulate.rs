//! Simulation handlers for ARM instructions
//!
//! Handlers run after the probe framework has advanced PC past the probed instruction, so the
//! instruction address is `pc - 4` and the architectural PC value it reads is `pc + 4`.

use super::ArmAction;
use crate::{ProbeInsn, ProbeRegs, PSR_T_BIT, REG_IP, REG_SP};

/// Flag, mode and state bits MRS may observe
const MRS_CPSR_MASK: u32 = 0xf8ff_03df;

/// Name of the simulator [`arm_actions`](super::arm_actions) installs for `action`, or `None`
/// when the action is emulated or decoded by a custom decoder
pub const fn simulator_name(action: ArmAction) -> Option<&'static str> {
    match action {
        ArmAction::PreloadImm | ArmAction::PreloadReg | ArmAction::Wfe => Some("simulate_nop"),
        ArmAction::BranchImm => Some("simulate_blx1"),
        ArmAction::Mrs => Some("simulate_mrs"),
        ArmAction::BranchReg => Some("simulate_blx2bx"),
        ArmAction::MovIpSp => Some("simulate_mov_ipsp"),
        ArmAction::Branch => Some("simulate_bbl"),
        _ => None,
    }
}

/// Byte offset of a B, BL or BLX (immediate) instruction
#[inline(always)]
fn branch_displacement(insn: u32) -> i32 {
    ((insn as i32) << 8) >> 6
}

/// PLD, PLI, NOP and WFE: nothing observable to do
pub fn simulate_nop(_insn: u32, _asi: &ProbeInsn, _regs: &mut ProbeRegs) {}

/// B and BL
pub fn simulate_bbl(insn: u32, _asi: &ProbeInsn, regs: &mut ProbeRegs) {
    let iaddr = regs.pc().wrapping_sub(4);
    let disp = branch_displacement(insn);

    if insn & (1 << 24) != 0 {
        regs.set_lr(iaddr.wrapping_add(4));
    }
    regs.set_pc(iaddr.wrapping_add(8).wrapping_add_signed(disp));
}

/// BLX (immediate), always switching to Thumb
pub fn simulate_blx1(insn: u32, _asi: &ProbeInsn, regs: &mut ProbeRegs) {
    let iaddr = regs.pc().wrapping_sub(4);
    let disp = branch_displacement(insn);
    // H bit selects the halfword of the target
    let half = (insn >> 23) & 0x2;

    regs.set_lr(iaddr.wrapping_add(4));
    regs.set_pc(iaddr.wrapping_add(8).wrapping_add_signed(disp).wrapping_add(half));
    regs.cpsr |= PSR_T_BIT;
}

/// BX and BLX (register)
pub fn simulate_blx2bx(insn: u32, _asi: &ProbeInsn, regs: &mut ProbeRegs) {
    let rm = (insn & 0xf) as usize;
    let target = regs.reg(rm);

    if insn & (1 << 5) != 0 {
        regs.set_lr(regs.pc());
    }
    regs.set_pc(target & !1);
    regs.cpsr &= !PSR_T_BIT;
    if target & 1 != 0 {
        regs.cpsr |= PSR_T_BIT;
    }
}

/// MRS Rd, CPSR
pub fn simulate_mrs(insn: u32, _asi: &ProbeInsn, regs: &mut ProbeRegs) {
    let rd = ((insn >> 12) & 0xf) as usize;
    regs.set_reg(rd, regs.cpsr & MRS_CPSR_MASK);
}

/// mov ip, sp
pub fn simulate_mov_ipsp(_insn: u32, _asi: &ProbeInsn, regs: &mut ProbeRegs) {
    regs.set_reg(REG_IP, regs.reg(REG_SP));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{REG_LR, REG_PC};

    const ADDR: u32 = 0x8000;

    /// Registers as a handler sees them for an ARM instruction at `ADDR`
    fn regs_after_fetch() -> ProbeRegs {
        ProbeRegs::new(ADDR + 4, 0x6000_0013)
    }

    #[test]
    fn test_bbl_forward_and_backward() {
        let asi = ProbeInsn::default();

        // b .+16
        let mut regs = regs_after_fetch();
        simulate_bbl(0xea00_0002, &asi, &mut regs);
        assert_eq!(regs.pc(), ADDR + 16);
        assert_eq!(regs.lr(), 0);

        // bl .-8
        let mut regs = regs_after_fetch();
        simulate_bbl(0xebff_fffc, &asi, &mut regs);
        assert_eq!(regs.pc(), ADDR - 8);
        assert_eq!(regs.lr(), ADDR + 4);
    }

    #[test]
    fn test_blx1_sets_thumb() {
        let asi = ProbeInsn::default();
        let mut regs = regs_after_fetch();

        // blx .+10: H bit set
        simulate_blx1(0xfb00_0000, &asi, &mut regs);
        assert_eq!(regs.pc(), ADDR + 10);
        assert_eq!(regs.lr(), ADDR + 4);
        assert!(regs.is_thumb());
    }

    #[test]
    fn test_blx2bx() {
        let asi = ProbeInsn::default();

        // bx lr into Thumb code
        let mut regs = regs_after_fetch();
        regs.set_lr(0x9001);
        simulate_blx2bx(0xe12f_ff1e, &asi, &mut regs);
        assert_eq!(regs.pc(), 0x9000);
        assert!(regs.is_thumb());

        // blx lr reads the target before linking
        let mut regs = regs_after_fetch();
        regs.cpsr |= PSR_T_BIT;
        regs.set_lr(0xa000);
        simulate_blx2bx(0xe12f_ff3e, &asi, &mut regs);
        assert_eq!(regs.pc(), 0xa000);
        assert_eq!(regs.reg(REG_LR), ADDR + 4);
        assert!(!regs.is_thumb());
    }

    #[test]
    fn test_mrs_masks_cpsr() {
        let asi = ProbeInsn::default();
        let mut regs = regs_after_fetch();
        regs.cpsr = 0xffff_ffff;

        // mrs r7, cpsr
        simulate_mrs(0xe10f_7000, &asi, &mut regs);
        assert_eq!(regs.reg(7), MRS_CPSR_MASK);
        assert_eq!(regs.reg(REG_PC), ADDR + 4);
    }

    #[test]
    fn test_mov_ipsp() {
        let asi = ProbeInsn::default();
        let mut regs = regs_after_fetch();
        regs.set_reg(REG_SP, 0x7fff_0000);
        simulate_mov_ipsp(0xe1a0_c00d, &asi, &mut regs);
        assert_eq!(regs.reg(REG_IP), 0x7fff_0000);
    }

    #[test]
    fn test_simulator_names() {
        assert_eq!(simulator_name(ArmAction::Branch), Some("simulate_bbl"));
        assert_eq!(simulator_name(ArmAction::MovIpSp), Some("simulate_mov_ipsp"));
        assert_eq!(simulator_name(ArmAction::Wfe), Some("simulate_nop"));
        assert_eq!(simulator_name(ArmAction::LdmStm), None);

        for action in ArmAction::ALL {
            if action != ArmAction::LdmStm {
                assert_eq!(simulator_name(action).is_none(), action.is_emulated(), "{action:?}");
            }
        }
    }

    #[test]
    fn test_nop() {
        let asi = ProbeInsn::default();
        let mut regs = regs_after_fetch();
        let before = regs;
        simulate_nop(0xf5d0_f000, &asi, &mut regs);
        assert_eq!(regs, before);
    }
}
