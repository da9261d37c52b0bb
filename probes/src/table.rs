//! Decode tables
//!
//! A decode table is an ordered list of [`DecodeEntry`] items terminated by [`DECODE_END`]. Each
//! entry matches when `(insn & mask) == value`; the first matching entry decides what happens
//! next. Tables live in a [`DecodeTables`] arena and refer to each other by [`TableId`], which
//! lets a whole instruction set be declared as `static` data.

use crate::{ProbeAction, RegType, Regs};
use thiserror::Error;

/// Index of a table inside a [`DecodeTables`] arena
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(pub u16);

impl TableId {
    /// Table where decoding starts unless told otherwise
    pub const ROOT: TableId = TableId(0);

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Fields shared by every matching entry
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct DecodeHeader {
    pub regs: Regs,
    pub mask: u32,
    pub value: u32,
}

impl DecodeHeader {
    pub const fn new(mask: u32, value: u32, regs: Regs) -> Self {
        Self { regs, mask, value }
    }

    #[inline(always)]
    pub fn matches(&self, insn: u32) -> bool {
        insn & self.mask == self.value
    }
}

/// One row of a decode table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeEntry {
    /// Continue decoding in a sub-table
    Table { header: DecodeHeader, table: TableId },
    /// Hand the instruction to a custom decoder from the action table
    Custom { header: DecodeHeader, action: usize },
    /// Accept; the handler computes the effect without executing the instruction
    Simulate { header: DecodeHeader, action: usize },
    /// Accept; the instruction is copied to a slot and executed out of line
    Emulate { header: DecodeHeader, action: usize },
    /// Alternative match for the entry that follows
    Or { header: DecodeHeader },
    /// Refuse the instruction
    Reject { header: DecodeHeader },
    /// End of table
    End,
}

impl DecodeEntry {
    pub const fn header(&self) -> Option<&DecodeHeader> {
        match self {
            DecodeEntry::Table { header, .. }
            | DecodeEntry::Custom { header, .. }
            | DecodeEntry::Simulate { header, .. }
            | DecodeEntry::Emulate { header, .. }
            | DecodeEntry::Or { header }
            | DecodeEntry::Reject { header } => Some(header),
            DecodeEntry::End => None,
        }
    }

    /// Short lowercase tag, as used in log lines and reports
    pub const fn kind(&self) -> &'static str {
        match self {
            DecodeEntry::Table { .. } => "table",
            DecodeEntry::Custom { .. } => "custom",
            DecodeEntry::Simulate { .. } => "simulate",
            DecodeEntry::Emulate { .. } => "emulate",
            DecodeEntry::Or { .. } => "or",
            DecodeEntry::Reject { .. } => "reject",
            DecodeEntry::End => "end",
        }
    }
}

pub const DECODE_END: DecodeEntry = DecodeEntry::End;

pub const fn decode_table(mask: u32, value: u32, table: TableId) -> DecodeEntry {
    DecodeEntry::Table { header: DecodeHeader::new(mask, value, Regs::NONE), table }
}

pub const fn decode_custom(mask: u32, value: u32, action: usize) -> DecodeEntry {
    DecodeEntry::Custom { header: DecodeHeader::new(mask, value, Regs::NONE), action }
}

pub const fn decode_simulate(mask: u32, value: u32, action: usize) -> DecodeEntry {
    decode_simulatex(mask, value, action, Regs::NONE)
}

pub const fn decode_simulatex(mask: u32, value: u32, action: usize, regs: Regs) -> DecodeEntry {
    DecodeEntry::Simulate { header: DecodeHeader::new(mask, value, regs), action }
}

pub const fn decode_emulate(mask: u32, value: u32, action: usize) -> DecodeEntry {
    decode_emulatex(mask, value, action, Regs::NONE)
}

pub const fn decode_emulatex(mask: u32, value: u32, action: usize, regs: Regs) -> DecodeEntry {
    DecodeEntry::Emulate { header: DecodeHeader::new(mask, value, regs), action }
}

pub const fn decode_or(mask: u32, value: u32) -> DecodeEntry {
    DecodeEntry::Or { header: DecodeHeader::new(mask, value, Regs::NONE) }
}

pub const fn decode_reject(mask: u32, value: u32) -> DecodeEntry {
    DecodeEntry::Reject { header: DecodeHeader::new(mask, value, Regs::NONE) }
}

/// Structural problems found by [`DecodeTables::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Decode table set is empty")]
    Empty,

    #[error("Table {table} is not terminated by an end entry")]
    MissingEnd { table: usize },

    #[error("Table {table} entry {entry} refers to unknown table {target}")]
    UnknownTable { table: usize, entry: usize, target: usize },

    #[error("Table {table} is reachable from itself")]
    Cycle { table: usize },

    #[error("Table {table} entry {entry} uses action {action}, but only {len} actions exist")]
    UnknownAction { table: usize, entry: usize, action: usize, len: usize },

    #[error(
        "Table {table} entry {entry} is a {kind} entry but action {action} is not a {expected}"
    )]
    WrongActionKind {
        table: usize,
        entry: usize,
        action: usize,
        kind: &'static str,
        expected: &'static str,
    },

    #[error("Table {table} entry {entry} has an invalid register descriptor {regs:#010x}")]
    InvalidRegs { table: usize, entry: usize, regs: u32 },

    #[error("Table {table} entry {entry} is an or entry with nothing to continue into")]
    DanglingOr { table: usize, entry: usize },
}

/// Arena of decode tables addressed by [`TableId`]
#[derive(Debug, Copy, Clone)]
pub struct DecodeTables<'a> {
    tables: &'a [&'a [DecodeEntry]],
}

impl<'a> DecodeTables<'a> {
    pub const fn new(tables: &'a [&'a [DecodeEntry]]) -> Self {
        Self { tables }
    }

    #[inline(always)]
    pub fn table(&self, id: TableId) -> Option<&'a [DecodeEntry]> {
        self.tables.get(id.index()).copied()
    }

    /// Entry `entry` of table `id`, or `None` past the end of either
    #[inline(always)]
    pub fn entry(&self, id: TableId, entry: usize) -> Option<&'a DecodeEntry> {
        self.tables.get(id.index()).and_then(|t| t.get(entry))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableId, &'a [DecodeEntry])> + '_ {
        self.tables.iter().enumerate().map(|(i, t)| (TableId(i as u16), *t))
    }

    /// Checks that the tables can be walked safely with the given action table.
    ///
    /// The decode driver never runs these checks itself; they are meant for tests and for
    /// callers that build tables at runtime.
    pub fn validate(&self, actions: &[ProbeAction]) -> Result<(), TableError> {
        if self.tables.is_empty() {
            return Err(TableError::Empty);
        }

        for (table, entries) in self.tables.iter().enumerate() {
            if entries.last() != Some(&DecodeEntry::End) {
                return Err(TableError::MissingEnd { table });
            }

            for (entry, item) in entries.iter().enumerate() {
                if let Some(header) = item.header() {
                    if header.regs.nibbles().any(|n| n >= RegType::COUNT) {
                        return Err(TableError::InvalidRegs {
                            table,
                            entry,
                            regs: header.regs.bits(),
                        });
                    }
                }

                match *item {
                    DecodeEntry::Table { table: target, .. } => {
                        if target.index() >= self.tables.len() {
                            return Err(TableError::UnknownTable {
                                table,
                                entry,
                                target: target.index(),
                            });
                        }
                    }
                    DecodeEntry::Custom { action, .. } => {
                        Self::check_action(actions, table, entry, item.kind(), action, true)?
                    }
                    DecodeEntry::Simulate { action, .. } | DecodeEntry::Emulate { action, .. } => {
                        Self::check_action(actions, table, entry, item.kind(), action, false)?
                    }
                    DecodeEntry::Or { .. } => {
                        if matches!(entries.get(entry + 1), None | Some(DecodeEntry::End)) {
                            return Err(TableError::DanglingOr { table, entry });
                        }
                    }
                    DecodeEntry::Reject { .. } | DecodeEntry::End => {}
                }
            }
        }

        self.check_acyclic()
    }

    fn check_action(
        actions: &[ProbeAction],
        table: usize,
        entry: usize,
        kind: &'static str,
        action: usize,
        wants_decoder: bool,
    ) -> Result<(), TableError> {
        let Some(a) = actions.get(action) else {
            return Err(TableError::UnknownAction { table, entry, action, len: actions.len() });
        };
        let is_decoder = matches!(a, ProbeAction::Decoder(_));
        if is_decoder != wants_decoder {
            let expected = if wants_decoder { "decoder" } else { "handler" };
            return Err(TableError::WrongActionKind { table, entry, action, kind, expected });
        }
        Ok(())
    }

    /// Depth-first search over sub-table references, colouring tables as they are visited
    fn check_acyclic(&self) -> Result<(), TableError> {
        #[derive(Copy, Clone, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.tables.len()];

        for start in 0..self.tables.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            // Stack of (table, next entry to inspect)
            let mut stack = vec![(start, 0usize)];
            marks[start] = Mark::InProgress;

            while let Some((table, entry)) = stack.pop() {
                let entries = self.tables[table];
                let next = entries[entry..].iter().enumerate().find_map(|(i, e)| match e {
                    DecodeEntry::Table { table: target, .. } => Some((entry + i, target.index())),
                    _ => None,
                });

                match next {
                    Some((at, target)) => {
                        stack.push((table, at + 1));
                        match marks[target] {
                            Mark::InProgress => return Err(TableError::Cycle { table: target }),
                            Mark::Unvisited => {
                                marks[target] = Mark::InProgress;
                                stack.push((target, 0));
                            }
                            Mark::Done => {}
                        }
                    }
                    None => marks[table] = Mark::Done,
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{regs, InsnVerdict, ProbeInsn, ProbeRegs};

    fn nop_handler(_insn: u32, _asi: &ProbeInsn, _regs: &mut ProbeRegs) {}

    fn reject_decoder(_insn: u32, _asi: &mut ProbeInsn, _actions: &[ProbeAction]) -> InsnVerdict {
        InsnVerdict::Rejected
    }

    const ACTIONS: [ProbeAction; 2] =
        [ProbeAction::Handler(nop_handler), ProbeAction::Decoder(reject_decoder)];

    #[test]
    fn test_header_matches() {
        let h = DecodeHeader::new(0x0e00_0000, 0x0a00_0000, Regs::NONE);
        assert!(h.matches(0xea00_0010));
        assert!(h.matches(0x1b00_0000));
        assert!(!h.matches(0xe1a0_f00e));
    }

    #[test]
    fn test_validate_accepts_well_formed_tables() {
        static SUB: [DecodeEntry; 2] = [decode_simulate(0xf, 0x1, 0), DECODE_END];
        static ROOT: [DecodeEntry; 4] = [
            decode_or(0xff, 0x10),
            decode_custom(0xff, 0x20, 1),
            decode_table(0xf0, 0x00, TableId(1)),
            DECODE_END,
        ];
        static LIST: [&[DecodeEntry]; 2] = [&ROOT, &SUB];
        static TABLES: DecodeTables<'static> = DecodeTables::new(&LIST);

        assert_eq!(TABLES.validate(&ACTIONS), Ok(()));
        assert_eq!(TABLES.len(), 2);
        assert_eq!(TABLES.entry(TableId(1), 1), Some(&DecodeEntry::End));
        assert_eq!(TABLES.entry(TableId(1), 2), None);
    }

    #[test]
    fn test_validate_missing_end() {
        let root = [decode_reject(0, 0)];
        let tables = [&root[..]];
        let err = DecodeTables::new(&tables).validate(&ACTIONS).unwrap_err();
        assert_eq!(err, TableError::MissingEnd { table: 0 });
    }

    #[test]
    fn test_validate_unknown_table_and_action() {
        let root = [decode_table(0, 0, TableId(7)), DECODE_END];
        let tables = [&root[..]];
        assert_eq!(
            DecodeTables::new(&tables).validate(&ACTIONS),
            Err(TableError::UnknownTable { table: 0, entry: 0, target: 7 })
        );

        let root = [decode_emulate(0, 0, 9), DECODE_END];
        let tables = [&root[..]];
        assert_eq!(
            DecodeTables::new(&tables).validate(&ACTIONS),
            Err(TableError::UnknownAction { table: 0, entry: 0, action: 9, len: 2 })
        );
    }

    #[test]
    fn test_validate_wrong_action_kind() {
        let root = [decode_simulate(0, 0, 1), DECODE_END];
        let tables = [&root[..]];
        let err = DecodeTables::new(&tables).validate(&ACTIONS).unwrap_err();
        assert!(matches!(err, TableError::WrongActionKind { expected: "handler", .. }));

        let root = [decode_custom(0, 0, 0), DECODE_END];
        let tables = [&root[..]];
        let err = DecodeTables::new(&tables).validate(&ACTIONS).unwrap_err();
        assert!(matches!(err, TableError::WrongActionKind { expected: "decoder", .. }));
    }

    #[test]
    fn test_validate_detects_cycle() {
        let a = [decode_table(0xf, 0x1, TableId(1)), DECODE_END];
        let b = [decode_reject(0xf, 0x2), decode_table(0xf, 0x3, TableId(0)), DECODE_END];
        let tables = [&a[..], &b[..]];
        let err = DecodeTables::new(&tables).validate(&ACTIONS).unwrap_err();
        assert_eq!(err, TableError::Cycle { table: 0 });
    }

    #[test]
    fn test_validate_shared_sub_table_is_not_a_cycle() {
        let root =
            [decode_table(0xf, 0x1, TableId(1)), decode_table(0xf, 0x2, TableId(1)), DECODE_END];
        let shared = [DECODE_END];
        let tables = [&root[..], &shared[..]];
        assert_eq!(DecodeTables::new(&tables).validate(&ACTIONS), Ok(()));
    }

    #[test]
    fn test_validate_invalid_regs_and_dangling_or() {
        let root = [decode_simulatex(0, 0, 0, Regs::from_bits(0xf0)), DECODE_END];
        let tables = [&root[..]];
        assert_eq!(
            DecodeTables::new(&tables).validate(&ACTIONS),
            Err(TableError::InvalidRegs { table: 0, entry: 0, regs: 0xf0 })
        );

        let root = [decode_or(0, 0), DECODE_END];
        let tables = [&root[..]];
        assert_eq!(
            DecodeTables::new(&tables).validate(&ACTIONS),
            Err(TableError::DanglingOr { table: 0, entry: 0 })
        );

        let desc =
            regs(RegType::NoSpPcX, RegType::None, RegType::None, RegType::None, RegType::Any);
        let ok = [decode_simulatex(0, 0, 0, desc), DECODE_END];
        let tables = [&ok[..]];
        assert_eq!(DecodeTables::new(&tables).validate(&ACTIONS), Ok(()));
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(DecodeTables::new(&[]).validate(&ACTIONS), Err(TableError::Empty));
    }
}
