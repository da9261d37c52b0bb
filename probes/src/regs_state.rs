//! Register file of a probed context, as seen by simulation handlers

use crate::PSR_T_BIT;

pub const REG_IP: usize = 12;
pub const REG_SP: usize = 13;
pub const REG_LR: usize = 14;
pub const REG_PC: usize = 15;

/// General purpose registers r0..r15 plus CPSR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeRegs {
    pub uregs: [u32; 16],
    pub cpsr: u32,
}

impl ProbeRegs {
    pub fn new(pc: u32, cpsr: u32) -> Self {
        let mut regs = Self { uregs: [0; 16], cpsr };
        regs.set_pc(pc);
        regs
    }

    #[inline(always)]
    pub fn reg(&self, n: usize) -> u32 {
        self.uregs[n & 0xf]
    }

    #[inline(always)]
    pub fn set_reg(&mut self, n: usize, value: u32) {
        self.uregs[n & 0xf] = value;
    }

    #[inline(always)]
    pub fn sp(&self) -> u32 {
        self.uregs[REG_SP]
    }

    #[inline(always)]
    pub fn lr(&self) -> u32 {
        self.uregs[REG_LR]
    }

    #[inline(always)]
    pub fn set_lr(&mut self, value: u32) {
        self.uregs[REG_LR] = value;
    }

    #[inline(always)]
    pub fn pc(&self) -> u32 {
        self.uregs[REG_PC]
    }

    #[inline(always)]
    pub fn set_pc(&mut self, value: u32) {
        self.uregs[REG_PC] = value;
    }

    /// True when the context executes Thumb code
    pub fn is_thumb(&self) -> bool {
        self.cpsr & PSR_T_BIT != 0
    }
}
