//! Instruction decoder for placing probes on live ARM machine code
//!
//! A probe replaces an instruction with a breakpoint. When the breakpoint fires, the original
//! instruction still has to take effect, and that is only possible for instructions this crate
//! knows how to handle. Decoding an instruction answers three questions at once:
//!     - Can a probe be placed here at all?
//!     - Can its effect be computed from the register file alone (simulation), or must a copy of
//!       it run out of line (emulation)?
//!     - Which handler takes over when the probe fires?
//!
//! The answers come from decode tables: ordered lists of mask/value matchers, each tied to an
//! action. Tables are plain `static` data, see [`arm::ARM_DECODE_TABLES`] for the ARM instruction
//! set.
//!
//! **Example**
//!
//! ```
//! use probes_decoder::{arm, InsnVerdict, ProbeInsn, ProbeRegs};
//!
//! fn out_of_line(_insn: u32, _asi: &ProbeInsn, _regs: &mut ProbeRegs) {}
//!
//! let actions = arm::arm_actions(out_of_line);
//! let mut asi = ProbeInsn::default();
//!
//! // bl +8 is simulated: no slot needed
//! assert_eq!(arm::arm_decode_insn(0xeb000000, &mut asi, &actions), InsnVerdict::GoodNoSlot);
//!
//! // add r0, r1, r2 runs out of line from a prepared slot
//! assert_eq!(arm::arm_decode_insn(0xe0810002, &mut asi, &actions), InsnVerdict::Good);
//!
//! // svc #0 is refused
//! assert_eq!(arm::arm_decode_insn(0xef000000, &mut asi, &actions), InsnVerdict::Rejected);
//! ```

mod action;
mod condition;
mod decode;
mod regs;
mod regs_state;
mod slot;
mod table;

pub mod arm;

pub use action::*;
pub use condition::*;
pub use decode::*;
pub use regs::*;
pub use regs_state::*;
pub use slot::*;
pub use table::*;
