use probes_decoder::{ProbeInsn, ProbeRegs};

/// Condition field mnemonics, indexed by bits 31..28
pub const CONDITION_NAMES: [&str; 16] = [
    "eq", "ne", "cs", "cc", "mi", "pl", "vs", "vc", "hi", "ls", "ge", "lt", "gt", "le", "al",
    "unconditional",
];

pub const OUT_OF_LINE: &str = "out-of-line";

/// Emulation handler installed by the CLI. Slots are only displayed, never run.
pub fn out_of_line(insn: u32, _asi: &ProbeInsn, _regs: &mut ProbeRegs) {
    tracing::warn!("Slot for {insn:#010x} cannot be executed by probe-decode");
}

pub fn condition_name(insn: u32) -> &'static str {
    CONDITION_NAMES[(insn >> 28) as usize]
}
