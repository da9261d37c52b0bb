//! ARM decode tables
//!
//! Bit patterns in the comments use `c` for condition bits and `x` for bits the entry ignores.

use super::ArmAction;
use crate::{
    decode_custom, decode_emulate, decode_emulatex, decode_or, decode_reject, decode_simulate,
    decode_simulatex, decode_table, regs, DecodeEntry, DecodeTables, RegType, TableId,
    DECODE_END,
};
use RegType::{Any, NoPc, NoPcWb, NoPcX};

const __: RegType = RegType::None;

const UNCONDITIONAL: TableId = TableId(1);
const MISC: TableId = TableId(2);
const HALFWORD_MUL: TableId = TableId(3);
const MUL: TableId = TableId(4);
const SYNC: TableId = TableId(5);
const EXTRA_LOAD_STORE: TableId = TableId(6);
const DATA_PROCESSING_REG: TableId = TableId(7);
const DATA_PROCESSING_IMM: TableId = TableId(8);
const MEDIA_0110: TableId = TableId(9);
const MEDIA_0111: TableId = TableId(10);
const LOAD_STORE: TableId = TableId(11);
const BLOCK_TRANSFER: TableId = TableId(12);

/// Table names, indexed by [`TableId`]
pub const ARM_TABLE_NAMES: [&str; 13] = [
    "root",
    "unconditional",
    "miscellaneous",
    "halfword multiply",
    "multiply",
    "synchronization",
    "extra load/store",
    "data processing (register)",
    "data processing (immediate)",
    "media 0110",
    "media 0111",
    "load/store word and byte",
    "block transfer",
];

/// Every ARM instruction, decoded from [`TableId::ROOT`]
pub static ARM_DECODE_TABLES: DecodeTables<'static> = DecodeTables::new(ARM_TABLES);

static ARM_TABLES: &[&[DecodeEntry]] = &[
    ROOT,
    ARM_1111,
    ARM_CCCC_0001_0XX0_0XXX,
    ARM_CCCC_0001_0XX0_1XX0,
    ARM_CCCC_0000_1001,
    ARM_CCCC_0001_1001,
    ARM_CCCC_000X_1XX1,
    ARM_CCCC_000X,
    ARM_CCCC_001X,
    ARM_CCCC_0110_XXX1,
    ARM_CCCC_0111_XXX1,
    ARM_CCCC_01XX,
    ARM_CCCC_100X,
];

const ROOT: &[DecodeEntry] = &[
    decode_table(0xf000_0000, 0xf000_0000, UNCONDITIONAL),
    // cccc 0001 0xx0 xxxx xxxx xxxx 0xxx xxxx
    decode_table(0x0f90_0080, 0x0100_0000, MISC),
    // cccc 0001 0xx0 xxxx xxxx xxxx 1xx0 xxxx
    decode_table(0x0f90_0090, 0x0100_0080, HALFWORD_MUL),
    // cccc 0000 xxxx xxxx xxxx xxxx 1001 xxxx
    decode_table(0x0f00_00f0, 0x0000_0090, MUL),
    // cccc 0001 xxxx xxxx xxxx xxxx 1001 xxxx
    decode_table(0x0f00_00f0, 0x0100_0090, SYNC),
    // cccc 000x xxxx xxxx xxxx xxxx 1xx1 xxxx
    decode_table(0x0e00_0090, 0x0000_0090, EXTRA_LOAD_STORE),
    // cccc 000x xxxx xxxx xxxx xxxx xxxx xxxx
    decode_table(0x0e00_0000, 0x0000_0000, DATA_PROCESSING_REG),
    // cccc 001x xxxx xxxx xxxx xxxx xxxx xxxx
    decode_table(0x0e00_0000, 0x0200_0000, DATA_PROCESSING_IMM),
    // cccc 0110 xxxx xxxx xxxx xxxx xxx1 xxxx
    decode_table(0x0f00_0010, 0x0600_0010, MEDIA_0110),
    // cccc 0111 xxxx xxxx xxxx xxxx xxx1 xxxx
    decode_table(0x0f00_0010, 0x0700_0010, MEDIA_0111),
    // cccc 01xx xxxx xxxx xxxx xxxx xxxx xxxx
    decode_table(0x0c00_0000, 0x0400_0000, LOAD_STORE),
    // cccc 100x xxxx xxxx xxxx xxxx xxxx xxxx
    decode_table(0x0e00_0000, 0x0800_0000, BLOCK_TRANSFER),
    // B, BL: cccc 101x xxxx xxxx xxxx xxxx xxxx xxxx
    decode_simulate(0x0e00_0000, 0x0a00_0000, ArmAction::Branch.idx()),
    // SVC and coprocessor: cccc 11xx xxxx xxxx xxxx xxxx xxxx xxxx
    decode_reject(0x0c00_0000, 0x0c00_0000),
    DECODE_END,
];

const ARM_1111: &[DecodeEntry] = &[
    // PLI, PLDW, PLD (immediate): 1111 010x x001 xxxx xxxx xxxx xxxx xxxx
    decode_simulate(0xfe30_0000, 0xf410_0000, ArmAction::PreloadImm.idx()),
    // PLI, PLDW, PLD (register): 1111 011x x001 xxxx xxxx xxxx xxx0 xxxx
    decode_simulate(0xfe30_0010, 0xf610_0000, ArmAction::PreloadReg.idx()),
    // BLX (immediate): 1111 101x xxxx xxxx xxxx xxxx xxxx xxxx
    decode_simulate(0xfe00_0000, 0xfa00_0000, ArmAction::BranchImm.idx()),
    // CPS, SETEND, SRS, RFE and the rest are refused
    DECODE_END,
];

const ARM_CCCC_0001_0XX0_0XXX: &[DecodeEntry] = &[
    // MRS cpsr: cccc 0001 0000 xxxx xxxx xxxx 0000 xxxx
    decode_simulatex(0x0ff0_00f0, 0x0100_0000, ArmAction::Mrs.idx(), regs(__, NoPc, __, __, __)),
    // MRS spsr: cccc 0001 0100 xxxx xxxx xxxx 0000 xxxx
    decode_reject(0x0ff0_00f0, 0x0140_0000),
    // MSR: cccc 0001 0x10 xxxx xxxx xxxx 0000 xxxx
    decode_reject(0x0fb0_00f0, 0x0120_0000),
    // BX: cccc 0001 0010 xxxx xxxx xxxx 0001 xxxx
    decode_simulate(0x0ff0_00f0, 0x0120_0010, ArmAction::BranchReg.idx()),
    // BXJ: cccc 0001 0010 xxxx xxxx xxxx 0010 xxxx
    decode_reject(0x0ff0_00f0, 0x0120_0020),
    // BLX (register): cccc 0001 0010 xxxx xxxx xxxx 0011 xxxx
    decode_simulatex(
        0x0ff0_00f0,
        0x0120_0030,
        ArmAction::BranchReg.idx(),
        regs(__, __, __, __, NoPc),
    ),
    // CLZ: cccc 0001 0110 xxxx xxxx xxxx 0001 xxxx
    decode_emulatex(0x0ff0_00f0, 0x0160_0010, ArmAction::Clz.idx(), regs(__, NoPc, __, __, NoPc)),
    // QADD, QSUB, QDADD, QDSUB: cccc 0001 0xx0 xxxx xxxx xxxx 0101 xxxx
    decode_emulatex(
        0x0f90_00f0,
        0x0100_0050,
        ArmAction::SaturatingArithmetic.idx(),
        regs(NoPc, NoPc, __, __, NoPc),
    ),
    // BKPT: cccc 0001 0010 xxxx xxxx xxxx 0111 xxxx
    decode_reject(0x0ff0_00f0, 0x0120_0070),
    // SMC: cccc 0001 0110 xxxx xxxx xxxx 0111 xxxx
    decode_reject(0x0ff0_00f0, 0x0160_0070),
    DECODE_END,
];

const ARM_CCCC_0001_0XX0_1XX0: &[DecodeEntry] = &[
    // SMLALxy: cccc 0001 0100 xxxx xxxx xxxx 1xx0 xxxx
    decode_emulatex(
        0x0ff0_0090,
        0x0140_0080,
        ArmAction::Mul1.idx(),
        regs(NoPc, NoPc, NoPc, __, NoPc),
    ),
    // SMULWy: cccc 0001 0010 xxxx xxxx xxxx 1x10 xxxx
    decode_or(0x0ff0_00b0, 0x0120_00a0),
    // SMULxy: cccc 0001 0110 xxxx xxxx xxxx 1xx0 xxxx
    decode_emulatex(
        0x0ff0_0090,
        0x0160_0080,
        ArmAction::Mul2.idx(),
        regs(NoPc, __, NoPc, __, NoPc),
    ),
    // SMLAxy: cccc 0001 0000 xxxx xxxx xxxx 1xx0 xxxx
    decode_or(0x0ff0_0090, 0x0100_0080),
    // SMLAWy: cccc 0001 0010 xxxx xxxx xxxx 1x00 xxxx
    decode_emulatex(
        0x0ff0_00b0,
        0x0120_0080,
        ArmAction::Mul2.idx(),
        regs(NoPc, NoPc, NoPc, __, NoPc),
    ),
    DECODE_END,
];

const ARM_CCCC_0000_1001: &[DecodeEntry] = &[
    // MUL, MULS: cccc 0000 000x xxxx xxxx xxxx 1001 xxxx
    decode_emulatex(
        0x0fe0_00f0,
        0x0000_0090,
        ArmAction::Mul2.idx(),
        regs(NoPc, __, NoPc, __, NoPc),
    ),
    // MLA, MLAS: cccc 0000 001x xxxx xxxx xxxx 1001 xxxx
    decode_or(0x0fe0_00f0, 0x0020_0090),
    // MLS: cccc 0000 0110 xxxx xxxx xxxx 1001 xxxx
    decode_emulatex(
        0x0ff0_00f0,
        0x0060_0090,
        ArmAction::Mul2.idx(),
        regs(NoPc, NoPc, NoPc, __, NoPc),
    ),
    // UMAAL: cccc 0000 0100 xxxx xxxx xxxx 1001 xxxx
    decode_or(0x0ff0_00f0, 0x0040_0090),
    // UMULL, UMLAL, SMULL, SMLAL: cccc 0000 1xxx xxxx xxxx xxxx 1001 xxxx
    decode_emulatex(
        0x0f80_00f0,
        0x0080_0090,
        ArmAction::Mul1.idx(),
        regs(NoPc, NoPc, NoPc, __, NoPc),
    ),
    DECODE_END,
];

const ARM_CCCC_0001_1001: &[DecodeEntry] = &[
    // SWP, SWPB: cccc 0001 0x00 xxxx xxxx xxxx 1001 xxxx
    decode_emulatex(0x0fb0_00f0, 0x0100_0090, ArmAction::Swp.idx(), regs(NoPc, NoPc, __, __, NoPc)),
    // LDREX, STREX and their variants are refused
    DECODE_END,
];

const ARM_CCCC_000X_1XX1: &[DecodeEntry] = &[
    // STRHT, LDRHT, LDRSBT, LDRSHT: cccc 0000 xx1x xxxx xxxx xxxx 1xx1 xxxx
    decode_reject(0x0f20_0090, 0x0020_0090),
    // LDRD, STRD with Rt = lr: cccc 000x xxx0 xxxx 111x xxxx 11x1 xxxx
    decode_reject(0x0e10_e0d0, 0x0000_e0d0),
    // LDRD, STRD (register): cccc 000x x0x0 xxxx xxxx xxxx 11x1 xxxx
    decode_emulatex(
        0x0e50_00d0,
        0x0000_00d0,
        ArmAction::LdrStrd.idx(),
        regs(NoPcWb, NoPcX, __, __, NoPc),
    ),
    // LDRD, STRD (immediate): cccc 000x x1x0 xxxx xxxx xxxx 11x1 xxxx
    decode_emulatex(
        0x0e50_00d0,
        0x0040_00d0,
        ArmAction::LdrStrd.idx(),
        regs(NoPcWb, NoPcX, __, __, __),
    ),
    // STRH (register): cccc 000x x0x0 xxxx xxxx xxxx 1011 xxxx
    decode_emulatex(
        0x0e50_00f0,
        0x0000_00b0,
        ArmAction::StoreExtra.idx(),
        regs(NoPcWb, NoPc, __, __, NoPc),
    ),
    // LDRH, LDRSB, LDRSH (register): cccc 000x x0x1 xxxx xxxx xxxx 1xx1 xxxx
    decode_emulatex(
        0x0e50_0090,
        0x0010_0090,
        ArmAction::LoadExtra.idx(),
        regs(NoPcWb, NoPc, __, __, NoPc),
    ),
    // STRH (immediate): cccc 000x x1x0 xxxx xxxx xxxx 1011 xxxx
    decode_emulatex(
        0x0e50_00f0,
        0x0040_00b0,
        ArmAction::StoreExtra.idx(),
        regs(NoPcWb, NoPc, __, __, __),
    ),
    // LDRH, LDRSB, LDRSH (immediate): cccc 000x x1x1 xxxx xxxx xxxx 1xx1 xxxx
    decode_emulatex(
        0x0e50_0090,
        0x0050_0090,
        ArmAction::LoadExtra.idx(),
        regs(NoPcWb, NoPc, __, __, __),
    ),
    DECODE_END,
];

const ARM_CCCC_000X: &[DecodeEntry] = &[
    // <op>S PC, ...: cccc 000x xxx1 xxxx 1111 xxxx xxxx xxxx
    decode_reject(0x0e10_f000, 0x0010_f000),
    // mov ip, sp
    decode_simulate(0xffff_ffff, 0xe1a0_c00d, ArmAction::MovIpSp.idx()),
    // TST, TEQ, CMP, CMN (immediate shift): cccc 0001 0xx1 xxxx xxxx xxxx xxx0 xxxx
    decode_emulatex(
        0x0f90_0010,
        0x0110_0000,
        ArmAction::DataProcessingReg.idx(),
        regs(Any, __, __, __, Any),
    ),
    // MOV, MVN (immediate shift): cccc 0001 1x1x xxxx xxxx xxxx xxx0 xxxx
    decode_emulatex(
        0x0fa0_0010,
        0x01a0_0000,
        ArmAction::DataProcessingReg.idx(),
        regs(__, Any, __, __, Any),
    ),
    // Other data processing (immediate shift): cccc 000x xxxx xxxx xxxx xxxx xxx0 xxxx
    decode_emulatex(
        0x0e00_0010,
        0x0000_0000,
        ArmAction::DataProcessingReg.idx(),
        regs(Any, Any, __, __, Any),
    ),
    // TST, TEQ, CMP, CMN (register shift): cccc 0001 0xx1 xxxx xxxx xxxx 0xx1 xxxx
    decode_emulatex(
        0x0f90_0090,
        0x0110_0010,
        ArmAction::DataProcessingReg.idx(),
        regs(NoPc, __, NoPc, __, NoPc),
    ),
    // MOV, MVN (register shift): cccc 0001 1x1x xxxx xxxx xxxx 0xx1 xxxx
    decode_emulatex(
        0x0fa0_0090,
        0x01a0_0010,
        ArmAction::DataProcessingReg.idx(),
        regs(__, NoPc, NoPc, __, NoPc),
    ),
    // Other data processing (register shift): cccc 000x xxxx xxxx xxxx xxxx 0xx1 xxxx
    decode_emulatex(
        0x0e00_0090,
        0x0000_0010,
        ArmAction::DataProcessingReg.idx(),
        regs(NoPc, NoPc, NoPc, __, NoPc),
    ),
    DECODE_END,
];

const ARM_CCCC_001X: &[DecodeEntry] = &[
    // MOVW, MOVT: cccc 0011 0x00 xxxx xxxx xxxx xxxx xxxx
    decode_emulatex(
        0x0fb0_0000,
        0x0300_0000,
        ArmAction::MovHalfword.idx(),
        regs(__, NoPc, __, __, __),
    ),
    // YIELD: cccc 0011 0010 0000 xxxx xxxx 0000 0001
    decode_or(0x0fff_00ff, 0x0320_0001),
    // SEV: cccc 0011 0010 0000 xxxx xxxx 0000 0100
    decode_emulate(0x0fff_00ff, 0x0320_0004, ArmAction::Sev.idx()),
    // NOP, WFE, WFI: cccc 0011 0010 0000 xxxx xxxx 0000 00xx
    decode_simulate(0x0fff_00fc, 0x0320_0000, ArmAction::Wfe.idx()),
    // MSR (immediate) and other hints: cccc 0011 0x10 xxxx xxxx xxxx xxxx xxxx
    decode_reject(0x0fb0_0000, 0x0320_0000),
    // <op>S PC, ...: cccc 001x xxx1 xxxx 1111 xxxx xxxx xxxx
    decode_reject(0x0e10_f000, 0x0210_f000),
    // TST, TEQ, CMP, CMN (immediate): cccc 0011 0xx1 xxxx xxxx xxxx xxxx xxxx
    decode_emulatex(
        0x0f90_0000,
        0x0310_0000,
        ArmAction::DataProcessingImm.idx(),
        regs(Any, __, __, __, __),
    ),
    // MOV, MVN (immediate): cccc 0011 1x1x xxxx xxxx xxxx xxxx xxxx
    decode_emulatex(
        0x0fa0_0000,
        0x03a0_0000,
        ArmAction::DataProcessingImm.idx(),
        regs(__, Any, __, __, __),
    ),
    // Other data processing (immediate): cccc 001x xxxx xxxx xxxx xxxx xxxx xxxx
    decode_emulatex(
        0x0e00_0000,
        0x0200_0000,
        ArmAction::DataProcessingImm.idx(),
        regs(Any, Any, __, __, __),
    ),
    DECODE_END,
];

const ARM_CCCC_0110_XXX1: &[DecodeEntry] = &[
    // SEL: cccc 0110 1000 xxxx xxxx xxxx 1011 xxxx
    decode_emulatex(
        0x0ff0_00f0,
        0x0680_00b0,
        ArmAction::Saturate.idx(),
        regs(NoPc, NoPc, __, __, NoPc),
    ),
    // SSAT, USAT: cccc 0110 1x1x xxxx xxxx xxxx xx01 xxxx
    decode_or(0x0fa0_0030, 0x06a0_0010),
    // SSAT16, USAT16: cccc 0110 1x10 xxxx xxxx xxxx 0011 xxxx
    decode_emulatex(
        0x0fb0_00f0,
        0x06a0_0030,
        ArmAction::Saturate.idx(),
        regs(__, NoPc, __, __, NoPc),
    ),
    // REV, REV16, RBIT, REVSH: cccc 0110 1x11 xxxx xxxx xxxx x011 xxxx
    decode_emulatex(0x0fb0_0070, 0x06b0_0030, ArmAction::Rev.idx(), regs(__, NoPc, __, __, NoPc)),
    // Unallocated: cccc 0110 0x00 xxxx xxxx xxxx xxx1 xxxx
    decode_reject(0x0fb0_0010, 0x0600_0010),
    // Unallocated: cccc 0110 0xxx xxxx xxxx xxxx 1011 xxxx
    decode_reject(0x0f80_00f0, 0x0600_00b0),
    // Unallocated: cccc 0110 0xxx xxxx xxxx xxxx 1101 xxxx
    decode_reject(0x0f80_00f0, 0x0600_00d0),
    // Parallel add and subtract: cccc 0110 0xxx xxxx xxxx xxxx xxx1 xxxx
    decode_emulatex(0x0f80_0010, 0x0600_0010, ArmAction::Mmi.idx(), regs(NoPc, NoPc, __, __, NoPc)),
    // PKHBT, PKHTB: cccc 0110 1000 xxxx xxxx xxxx xx01 xxxx
    decode_emulatex(
        0x0ff0_0030,
        0x0680_0010,
        ArmAction::Pack.idx(),
        regs(NoPc, NoPc, __, __, NoPc),
    ),
    // Unallocated: cccc 0110 1x01 xxxx xxxx xxxx 0111 xxxx
    decode_reject(0x0fb0_00f0, 0x0690_0070),
    // SXTB16, SXTB, SXTH, UXTB16, UXTB, UXTH: cccc 0110 1xxx 1111 xxxx xxxx 0111 xxxx
    decode_emulatex(
        0x0f8f_00f0,
        0x068f_0070,
        ArmAction::Extend.idx(),
        regs(__, NoPc, __, __, NoPc),
    ),
    // SXTAB16, SXTAB, SXTAH, UXTAB16, UXTAB, UXTAH: cccc 0110 1xxx xxxx xxxx xxxx 0111 xxxx
    decode_emulatex(
        0x0f80_00f0,
        0x0680_0070,
        ArmAction::ExtendAdd.idx(),
        regs(NoPcX, NoPc, __, __, NoPc),
    ),
    DECODE_END,
];

const ARM_CCCC_0111_XXX1: &[DecodeEntry] = &[
    // Permanently undefined: cccc 0111 1111 xxxx xxxx xxxx 1111 xxxx
    decode_reject(0x0ff0_00f0, 0x07f0_00f0),
    // SMLALD, SMLSLD: cccc 0111 0100 xxxx xxxx xxxx 00x1 xxxx
    decode_emulatex(
        0x0ff0_0090,
        0x0740_0010,
        ArmAction::MulAddLong.idx(),
        regs(NoPc, NoPc, NoPc, __, NoPc),
    ),
    // SMUAD, SMUSD: cccc 0111 0000 xxxx 1111 xxxx 00x1 xxxx
    decode_or(0x0ff0_f090, 0x0700_f010),
    // SMMUL: cccc 0111 0101 xxxx 1111 xxxx 00x1 xxxx
    decode_or(0x0ff0_f0d0, 0x0750_f010),
    // USAD8: cccc 0111 1000 xxxx 1111 xxxx 0001 xxxx
    decode_emulatex(
        0x0ff0_f0f0,
        0x0780_f010,
        ArmAction::MulAdd.idx(),
        regs(NoPc, __, NoPc, __, NoPc),
    ),
    // SMLAD, SMLSD: cccc 0111 0000 xxxx xxxx xxxx 00x1 xxxx
    decode_or(0x0ff0_0090, 0x0700_0010),
    // SMMLA: cccc 0111 0101 xxxx xxxx xxxx 00x1 xxxx
    decode_or(0x0ff0_00d0, 0x0750_0010),
    // USADA8: cccc 0111 1000 xxxx xxxx xxxx 0001 xxxx
    decode_emulatex(
        0x0ff0_00f0,
        0x0780_0010,
        ArmAction::MulAdd.idx(),
        regs(NoPc, NoPcX, NoPc, __, NoPc),
    ),
    // SMMLS: cccc 0111 0101 xxxx xxxx xxxx 11x1 xxxx
    decode_emulatex(
        0x0ff0_00d0,
        0x0750_00d0,
        ArmAction::MulAdd.idx(),
        regs(NoPc, NoPc, NoPc, __, NoPc),
    ),
    // SBFX, UBFX: cccc 0111 1x1x xxxx xxxx xxxx x101 xxxx
    decode_emulatex(
        0x0fa0_0070,
        0x07a0_0050,
        ArmAction::Bitfield.idx(),
        regs(__, NoPc, __, __, NoPc),
    ),
    // BFC: cccc 0111 110x xxxx xxxx xxxx x001 1111
    decode_emulatex(
        0x0fe0_007f,
        0x07c0_001f,
        ArmAction::Bitfield.idx(),
        regs(__, NoPc, __, __, __),
    ),
    // BFI: cccc 0111 110x xxxx xxxx xxxx x001 xxxx
    decode_emulatex(
        0x0fe0_0070,
        0x07c0_0010,
        ArmAction::Bitfield.idx(),
        regs(__, NoPc, __, __, NoPcX),
    ),
    DECODE_END,
];

const ARM_CCCC_01XX: &[DecodeEntry] = &[
    // LDRB, STRB with Rt = PC: cccc 01xx x1xx xxxx 1111 xxxx xxxx xxxx
    decode_reject(0x0c40_f000, 0x0440_f000),
    // LDRT, STRT, LDRBT, STRBT: cccc 01x0 x01x xxxx xxxx xxxx xxxx xxxx
    decode_reject(0x0d20_0000, 0x0420_0000),
    // STR, STRB (immediate): cccc 010x xxx0 xxxx xxxx xxxx xxxx xxxx
    decode_emulatex(
        0x0e10_0000,
        0x0400_0000,
        ArmAction::Store.idx(),
        regs(NoPcWb, Any, __, __, __),
    ),
    // STR, STRB (register): cccc 011x xxx0 xxxx xxxx xxxx xxx0 xxxx
    decode_emulatex(
        0x0e10_0000,
        0x0600_0000,
        ArmAction::Store.idx(),
        regs(NoPcWb, Any, __, __, NoPc),
    ),
    // LDR, LDRB (immediate): cccc 010x xxx1 xxxx xxxx xxxx xxxx xxxx
    decode_emulatex(0x0e10_0000, 0x0410_0000, ArmAction::Load.idx(), regs(NoPcWb, Any, __, __, __)),
    // LDR, LDRB (register): cccc 011x xxx1 xxxx xxxx xxxx xxx0 xxxx
    decode_emulatex(
        0x0e10_0000,
        0x0610_0000,
        ArmAction::Load.idx(),
        regs(NoPcWb, Any, __, __, NoPc),
    ),
    DECODE_END,
];

const ARM_CCCC_100X: &[DecodeEntry] = &[
    // LDM, STM without the S bit: cccc 100x x0xx xxxx xxxx xxxx xxxx xxxx
    decode_custom(0x0e40_0000, 0x0800_0000, ArmAction::LdmStm.idx()),
    DECODE_END,
];
