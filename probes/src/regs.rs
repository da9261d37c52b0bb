//! Register field validation
//!
//! Most ARM and 32-bit Thumb encodings keep their register operands in whole nibbles of the
//! instruction word. A decode table entry carries a [`Regs`] descriptor with one [`RegType`] per
//! nibble; before an entry's action runs, every constrained nibble is checked and then replaced
//! by a fixed register number so that emulation handlers always see the same operand layout.
//!
//! ```text
//!  bit position     28  24  20  16  12   8   4   0
//!  ----------------+---+---+---+---+---+---+---+---+
//!  descriptor       n7  n6  n5  n4  n3  n2  n1  n0
//! ```

/// SP encoding in a register field
pub const SP_ENCODING: u32 = 0xd;

/// PC encoding in a register field
pub const PC_ENCODING: u32 = 0xf;

/// Register numbers substituted into validated fields
///
/// ```text
///  bit position     16  12   8   4   0
///  ----------------+---+---+---+---+---+
///  register         r2  r0  r1  --  r3
/// ```
pub const INSN_NEW_BITS: u32 = 0x0002_0103;

/// Every nibble holds the register number that `INSN_NEW_BITS` puts at bit 16
pub const INSN_SAMEAS16_BITS: u32 = 0x2222_2222;

const SP_IN_EVERY_NIBBLE: u32 = SP_ENCODING * 0x1111_1111;
const PC_IN_EVERY_NIBBLE: u32 = PC_ENCODING * 0x1111_1111;

/// Constraint applied to one register nibble
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RegType {
    /// Not a register, ignored
    None = 0,
    /// Any register allowed
    Any = 1,
    /// Register is replaced by the one at bits 19..16
    SameAs16 = 2,
    /// Register must be SP
    Sp = 3,
    /// Register must be PC
    Pc = 4,
    /// Register must not be SP
    NoSp = 5,
    /// Register must be neither SP nor PC
    NoSpPc = 6,
    /// Register must not be PC
    NoPc = 7,
    /// Register must not be PC when the load/store writes back its base
    NoPcWb = 8,
    /// Same as `NoPc`, but PC selects another instruction form
    NoPcX = 9,
    /// Same as `NoSpPc`, but PC selects another instruction form
    NoSpPcX = 10,
}

impl RegType {
    /// Number of valid nibble encodings
    pub const COUNT: u32 = 11;

    pub const fn from_nibble(nibble: u32) -> Option<Self> {
        match nibble {
            0 => Some(RegType::None),
            1 => Some(RegType::Any),
            2 => Some(RegType::SameAs16),
            3 => Some(RegType::Sp),
            4 => Some(RegType::Pc),
            5 => Some(RegType::NoSp),
            6 => Some(RegType::NoSpPc),
            7 => Some(RegType::NoPc),
            8 => Some(RegType::NoPcWb),
            9 => Some(RegType::NoPcX),
            10 => Some(RegType::NoSpPcX),
            _ => None,
        }
    }
}

/// Packed register constraint descriptor, one `RegType` per instruction nibble
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Regs(u32);

impl Regs {
    /// No register fields are constrained
    pub const NONE: Regs = Regs(0);

    pub const fn from_bits(bits: u32) -> Self {
        Regs(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the constraint of nibble `n` (0 = bits 3..0), or `None` for an unknown encoding or
    /// a nibble past the eighth
    pub const fn nibble(self, n: u32) -> Option<RegType> {
        if n >= 8 {
            return None;
        }
        RegType::from_nibble((self.0 >> (n * 4)) & 0xf)
    }

    /// Iterates the raw nibble encodings, least significant first
    pub fn nibbles(self) -> impl Iterator<Item = u32> {
        (0..8).map(move |n| (self.0 >> (n * 4)) & 0xf)
    }
}

/// Builds a descriptor for the fields at bit positions 16, 12, 8, 4 and 0
pub const fn regs(r16: RegType, r12: RegType, r8: RegType, r4: RegType, r0: RegType) -> Regs {
    Regs(
        ((r16 as u32) << 16)
            | ((r12 as u32) << 12)
            | ((r8 as u32) << 8)
            | ((r4 as u32) << 4)
            | (r0 as u32),
    )
}

/// Load/store writeback predicate: pre-indexed forms write back only with W set, post-indexed
/// forms always do
#[inline(always)]
pub fn is_writeback(insn: u32) -> bool {
    if insn & (1 << 24) != 0 {
        insn & (1 << 21) != 0
    } else {
        true
    }
}

/// Validates every constrained register nibble of `insn` and rewrites it to its substitute
/// register number.
///
/// Returns false as soon as one nibble violates its constraint; `insn` is only written back when
/// every nibble passed.
pub fn decode_regs(insn: &mut u32, regs: Regs) -> bool {
    let mut word = *insn;
    let mut remaining = regs.bits();
    let mut mask: u32 = 0xf;

    while remaining != 0 {
        let Some(reg_type) = RegType::from_nibble(remaining & 0xf) else {
            tracing::trace!(
                "decode_regs() unknown register type in descriptor {:#010x}",
                regs.bits()
            );
            return false;
        };

        let mut new_bits = INSN_NEW_BITS;
        let accepted = match reg_type {
            RegType::None => {
                remaining >>= 4;
                mask <<= 4;
                continue;
            }
            RegType::Any => true,
            RegType::SameAs16 => {
                new_bits = INSN_SAMEAS16_BITS;
                true
            }
            RegType::Sp => (word ^ SP_IN_EVERY_NIBBLE) & mask == 0,
            RegType::Pc => (word ^ PC_IN_EVERY_NIBBLE) & mask == 0,
            RegType::NoSp => (word ^ SP_IN_EVERY_NIBBLE) & mask != 0,
            // 0xd and 0xf differ only in bit 1, which the SP pattern masks out
            RegType::NoSpPc | RegType::NoSpPcX => {
                (word ^ SP_IN_EVERY_NIBBLE) & SP_IN_EVERY_NIBBLE & mask != 0
            }
            RegType::NoPcWb if !is_writeback(word) => true,
            RegType::NoPcWb | RegType::NoPc | RegType::NoPcX => {
                (word ^ PC_IN_EVERY_NIBBLE) & mask != 0
            }
        };

        if !accepted {
            tracing::trace!(
                "decode_regs() {reg_type:?} rejects field {:#x} of insn {word:#010x}",
                (word & mask) >> mask.trailing_zeros()
            );
            return false;
        }

        word = (word & !mask) | (new_bits & mask);
        remaining >>= 4;
        mask <<= 4;
    }

    *insn = word;
    true
}
