//! ARM condition code checks
//!
//! A conditional instruction is only stepped when its condition holds for the CPSR of the probed
//! context. The decode driver makes slot instructions unconditional, so the check has to be made
//! by the caller before the handler runs; [`CONDITION_CHECKS`] provides it, indexed by the
//! instruction's top nibble.

pub const PSR_N_BIT: u32 = 0x8000_0000;
pub const PSR_Z_BIT: u32 = 0x4000_0000;
pub const PSR_C_BIT: u32 = 0x2000_0000;
pub const PSR_V_BIT: u32 = 0x1000_0000;
pub const PSR_T_BIT: u32 = 0x0000_0020;

/// Returns true when the condition holds for the given CPSR
pub type CheckCc = fn(u32) -> bool;

fn check_eq(cpsr: u32) -> bool {
    cpsr & PSR_Z_BIT != 0
}

fn check_ne(cpsr: u32) -> bool {
    cpsr & PSR_Z_BIT == 0
}

fn check_cs(cpsr: u32) -> bool {
    cpsr & PSR_C_BIT != 0
}

fn check_cc(cpsr: u32) -> bool {
    cpsr & PSR_C_BIT == 0
}

fn check_mi(cpsr: u32) -> bool {
    cpsr & PSR_N_BIT != 0
}

fn check_pl(cpsr: u32) -> bool {
    cpsr & PSR_N_BIT == 0
}

fn check_vs(cpsr: u32) -> bool {
    cpsr & PSR_V_BIT != 0
}

fn check_vc(cpsr: u32) -> bool {
    cpsr & PSR_V_BIT == 0
}

// C set and Z clear. Z sits one bit above C.
fn check_hi(cpsr: u32) -> bool {
    (cpsr & !(cpsr >> 1)) & PSR_C_BIT != 0
}

fn check_ls(cpsr: u32) -> bool {
    !check_hi(cpsr)
}

// N == V. V sits three bits below N.
fn check_ge(cpsr: u32) -> bool {
    (cpsr ^ (cpsr << 3)) & PSR_N_BIT == 0
}

fn check_lt(cpsr: u32) -> bool {
    !check_ge(cpsr)
}

// Z clear and N == V
fn check_gt(cpsr: u32) -> bool {
    let temp = (cpsr ^ (cpsr << 3)) | (cpsr << 1);
    temp & PSR_N_BIT == 0
}

fn check_le(cpsr: u32) -> bool {
    !check_gt(cpsr)
}

pub fn check_al(_cpsr: u32) -> bool {
    true
}

/// Condition checks indexed by condition code. 0xF (the unconditional space) always passes.
pub const CONDITION_CHECKS: [CheckCc; 16] = [
    check_eq, check_ne, check_cs, check_cc, check_mi, check_pl, check_vs, check_vc, check_hi,
    check_ls, check_ge, check_lt, check_gt, check_le, check_al, check_al,
];

/// Condition check for an ARM instruction word
#[inline(always)]
pub fn condition_check(insn: u32) -> CheckCc {
    CONDITION_CHECKS[(insn >> 28) as usize]
}
