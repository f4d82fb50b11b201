//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for 6502 instruction decoding.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - `None`, rejected at execution time
//!
//! Each documented entry carries the mnemonic, addressing mode, instruction
//! size and base cycle count. Base cycles already include the fixed penalty
//! that indexed stores and read-modify-write instructions always pay
//! (e.g. `STA $1234,X` is 5 cycles, `INC $1234,X` is 7), so only indexed
//! *reads* add a cycle dynamically on page crossing.

use crate::addressing::AddressingMode;
use std::fmt;

/// Instruction families of the NMOS 6502 (56 documented mnemonics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Every mnemonic, in alphabetical order.
    pub const ALL: [Mnemonic; 56] = [
        Mnemonic::Adc,
        Mnemonic::And,
        Mnemonic::Asl,
        Mnemonic::Bcc,
        Mnemonic::Bcs,
        Mnemonic::Beq,
        Mnemonic::Bit,
        Mnemonic::Bmi,
        Mnemonic::Bne,
        Mnemonic::Bpl,
        Mnemonic::Brk,
        Mnemonic::Bvc,
        Mnemonic::Bvs,
        Mnemonic::Clc,
        Mnemonic::Cld,
        Mnemonic::Cli,
        Mnemonic::Clv,
        Mnemonic::Cmp,
        Mnemonic::Cpx,
        Mnemonic::Cpy,
        Mnemonic::Dec,
        Mnemonic::Dex,
        Mnemonic::Dey,
        Mnemonic::Eor,
        Mnemonic::Inc,
        Mnemonic::Inx,
        Mnemonic::Iny,
        Mnemonic::Jmp,
        Mnemonic::Jsr,
        Mnemonic::Lda,
        Mnemonic::Ldx,
        Mnemonic::Ldy,
        Mnemonic::Lsr,
        Mnemonic::Nop,
        Mnemonic::Ora,
        Mnemonic::Pha,
        Mnemonic::Php,
        Mnemonic::Pla,
        Mnemonic::Plp,
        Mnemonic::Rol,
        Mnemonic::Ror,
        Mnemonic::Rti,
        Mnemonic::Rts,
        Mnemonic::Sbc,
        Mnemonic::Sec,
        Mnemonic::Sed,
        Mnemonic::Sei,
        Mnemonic::Sta,
        Mnemonic::Stx,
        Mnemonic::Sty,
        Mnemonic::Tax,
        Mnemonic::Tay,
        Mnemonic::Tsx,
        Mnemonic::Txa,
        Mnemonic::Txs,
        Mnemonic::Tya,
    ];

    /// Upper-case three-letter assembler name, e.g. `"LDA"`.
    pub fn name(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }

    /// Returns true for instructions that read their operand from memory and
    /// pay one extra cycle when indexed addressing crosses a page.
    pub fn pays_page_cross_penalty(self) -> bool {
        matches!(
            self,
            Mnemonic::Adc
                | Mnemonic::And
                | Mnemonic::Cmp
                | Mnemonic::Eor
                | Mnemonic::Lda
                | Mnemonic::Ldx
                | Mnemonic::Ldy
                | Mnemonic::Ora
                | Mnemonic::Sbc
        )
    }

    /// Returns true for the eight conditional branches.
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for a single documented 6502 opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Mnemonic, OpcodeMetadata};
///
/// let lda_imm = OpcodeMetadata::lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// // Undocumented opcodes have no entry
/// assert!(OpcodeMetadata::lookup(0x02).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// The opcode byte itself.
    pub opcode: u8,

    /// Instruction family.
    pub mnemonic: Mnemonic,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,

    /// Minimum cycle cost, before page-crossing and branch penalties.
    pub base_cycles: u8,
}

impl OpcodeMetadata {
    /// Looks up the metadata for an opcode byte. `None` for undocumented opcodes.
    pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
        OPCODE_TABLE[opcode as usize].as_ref()
    }
}

impl fmt::Display for OpcodeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X} {} {:?} ({} bytes, {} cycles)",
            self.opcode, self.mnemonic, self.addressing_mode, self.size_bytes, self.base_cycles
        )
    }
}

/// Returns every documented opcode that shares `mnemonic`, in opcode order.
///
/// ```
/// use emu6502::{opcodes_for, Mnemonic};
///
/// assert_eq!(opcodes_for(Mnemonic::Lda).count(), 8);
/// assert_eq!(opcodes_for(Mnemonic::Jmp).map(|m| m.opcode).collect::<Vec<_>>(), vec![0x4C, 0x6C]);
/// ```
pub fn opcodes_for(mnemonic: Mnemonic) -> impl Iterator<Item = &'static OpcodeMetadata> {
    OPCODE_TABLE
        .iter()
        .flatten()
        .filter(move |metadata| metadata.mnemonic == mnemonic)
}

const fn op(
    opcode: u8,
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    size_bytes: u8,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        opcode,
        mnemonic,
        addressing_mode,
        size_bytes,
        base_cycles,
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Columns: opcode, mnemonic, addressing mode, size in bytes, base cycles.
pub static OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;

    [
        Some(op(0x00, Brk, Implicit, 1, 7)),
        Some(op(0x01, Ora, IndirectX, 2, 6)),
        None, // 0x02
        None, // 0x03
        None, // 0x04
        Some(op(0x05, Ora, ZeroPage, 2, 3)),
        Some(op(0x06, Asl, ZeroPage, 2, 5)),
        None, // 0x07
        Some(op(0x08, Php, Implicit, 1, 3)),
        Some(op(0x09, Ora, Immediate, 2, 2)),
        Some(op(0x0A, Asl, Accumulator, 1, 2)),
        None, // 0x0B
        None, // 0x0C
        Some(op(0x0D, Ora, Absolute, 3, 4)),
        Some(op(0x0E, Asl, Absolute, 3, 6)),
        None, // 0x0F
        Some(op(0x10, Bpl, Relative, 2, 2)),
        Some(op(0x11, Ora, IndirectY, 2, 5)),
        None, // 0x12
        None, // 0x13
        None, // 0x14
        Some(op(0x15, Ora, ZeroPageX, 2, 4)),
        Some(op(0x16, Asl, ZeroPageX, 2, 6)),
        None, // 0x17
        Some(op(0x18, Clc, Implicit, 1, 2)),
        Some(op(0x19, Ora, AbsoluteY, 3, 4)),
        None, // 0x1A
        None, // 0x1B
        None, // 0x1C
        Some(op(0x1D, Ora, AbsoluteX, 3, 4)),
        Some(op(0x1E, Asl, AbsoluteX, 3, 7)),
        None, // 0x1F
        Some(op(0x20, Jsr, Absolute, 3, 6)),
        Some(op(0x21, And, IndirectX, 2, 6)),
        None, // 0x22
        None, // 0x23
        Some(op(0x24, Bit, ZeroPage, 2, 3)),
        Some(op(0x25, And, ZeroPage, 2, 3)),
        Some(op(0x26, Rol, ZeroPage, 2, 5)),
        None, // 0x27
        Some(op(0x28, Plp, Implicit, 1, 4)),
        Some(op(0x29, And, Immediate, 2, 2)),
        Some(op(0x2A, Rol, Accumulator, 1, 2)),
        None, // 0x2B
        Some(op(0x2C, Bit, Absolute, 3, 4)),
        Some(op(0x2D, And, Absolute, 3, 4)),
        Some(op(0x2E, Rol, Absolute, 3, 6)),
        None, // 0x2F
        Some(op(0x30, Bmi, Relative, 2, 2)),
        Some(op(0x31, And, IndirectY, 2, 5)),
        None, // 0x32
        None, // 0x33
        None, // 0x34
        Some(op(0x35, And, ZeroPageX, 2, 4)),
        Some(op(0x36, Rol, ZeroPageX, 2, 6)),
        None, // 0x37
        Some(op(0x38, Sec, Implicit, 1, 2)),
        Some(op(0x39, And, AbsoluteY, 3, 4)),
        None, // 0x3A
        None, // 0x3B
        None, // 0x3C
        Some(op(0x3D, And, AbsoluteX, 3, 4)),
        Some(op(0x3E, Rol, AbsoluteX, 3, 7)),
        None, // 0x3F
        Some(op(0x40, Rti, Implicit, 1, 6)),
        Some(op(0x41, Eor, IndirectX, 2, 6)),
        None, // 0x42
        None, // 0x43
        None, // 0x44
        Some(op(0x45, Eor, ZeroPage, 2, 3)),
        Some(op(0x46, Lsr, ZeroPage, 2, 5)),
        None, // 0x47
        Some(op(0x48, Pha, Implicit, 1, 3)),
        Some(op(0x49, Eor, Immediate, 2, 2)),
        Some(op(0x4A, Lsr, Accumulator, 1, 2)),
        None, // 0x4B
        Some(op(0x4C, Jmp, Absolute, 3, 3)),
        Some(op(0x4D, Eor, Absolute, 3, 4)),
        Some(op(0x4E, Lsr, Absolute, 3, 6)),
        None, // 0x4F
        Some(op(0x50, Bvc, Relative, 2, 2)),
        Some(op(0x51, Eor, IndirectY, 2, 5)),
        None, // 0x52
        None, // 0x53
        None, // 0x54
        Some(op(0x55, Eor, ZeroPageX, 2, 4)),
        Some(op(0x56, Lsr, ZeroPageX, 2, 6)),
        None, // 0x57
        Some(op(0x58, Cli, Implicit, 1, 2)),
        Some(op(0x59, Eor, AbsoluteY, 3, 4)),
        None, // 0x5A
        None, // 0x5B
        None, // 0x5C
        Some(op(0x5D, Eor, AbsoluteX, 3, 4)),
        Some(op(0x5E, Lsr, AbsoluteX, 3, 7)),
        None, // 0x5F
        Some(op(0x60, Rts, Implicit, 1, 6)),
        Some(op(0x61, Adc, IndirectX, 2, 6)),
        None, // 0x62
        None, // 0x63
        None, // 0x64
        Some(op(0x65, Adc, ZeroPage, 2, 3)),
        Some(op(0x66, Ror, ZeroPage, 2, 5)),
        None, // 0x67
        Some(op(0x68, Pla, Implicit, 1, 4)),
        Some(op(0x69, Adc, Immediate, 2, 2)),
        Some(op(0x6A, Ror, Accumulator, 1, 2)),
        None, // 0x6B
        Some(op(0x6C, Jmp, Indirect, 3, 5)),
        Some(op(0x6D, Adc, Absolute, 3, 4)),
        Some(op(0x6E, Ror, Absolute, 3, 6)),
        None, // 0x6F
        Some(op(0x70, Bvs, Relative, 2, 2)),
        Some(op(0x71, Adc, IndirectY, 2, 5)),
        None, // 0x72
        None, // 0x73
        None, // 0x74
        Some(op(0x75, Adc, ZeroPageX, 2, 4)),
        Some(op(0x76, Ror, ZeroPageX, 2, 6)),
        None, // 0x77
        Some(op(0x78, Sei, Implicit, 1, 2)),
        Some(op(0x79, Adc, AbsoluteY, 3, 4)),
        None, // 0x7A
        None, // 0x7B
        None, // 0x7C
        Some(op(0x7D, Adc, AbsoluteX, 3, 4)),
        Some(op(0x7E, Ror, AbsoluteX, 3, 7)),
        None, // 0x7F
        None, // 0x80
        Some(op(0x81, Sta, IndirectX, 2, 6)),
        None, // 0x82
        None, // 0x83
        Some(op(0x84, Sty, ZeroPage, 2, 3)),
        Some(op(0x85, Sta, ZeroPage, 2, 3)),
        Some(op(0x86, Stx, ZeroPage, 2, 3)),
        None, // 0x87
        Some(op(0x88, Dey, Implicit, 1, 2)),
        None, // 0x89
        Some(op(0x8A, Txa, Implicit, 1, 2)),
        None, // 0x8B
        Some(op(0x8C, Sty, Absolute, 3, 4)),
        Some(op(0x8D, Sta, Absolute, 3, 4)),
        Some(op(0x8E, Stx, Absolute, 3, 4)),
        None, // 0x8F
        Some(op(0x90, Bcc, Relative, 2, 2)),
        Some(op(0x91, Sta, IndirectY, 2, 6)),
        None, // 0x92
        None, // 0x93
        Some(op(0x94, Sty, ZeroPageX, 2, 4)),
        Some(op(0x95, Sta, ZeroPageX, 2, 4)),
        Some(op(0x96, Stx, ZeroPageY, 2, 4)),
        None, // 0x97
        Some(op(0x98, Tya, Implicit, 1, 2)),
        Some(op(0x99, Sta, AbsoluteY, 3, 5)),
        Some(op(0x9A, Txs, Implicit, 1, 2)),
        None, // 0x9B
        None, // 0x9C
        Some(op(0x9D, Sta, AbsoluteX, 3, 5)),
        None, // 0x9E
        None, // 0x9F
        Some(op(0xA0, Ldy, Immediate, 2, 2)),
        Some(op(0xA1, Lda, IndirectX, 2, 6)),
        Some(op(0xA2, Ldx, Immediate, 2, 2)),
        None, // 0xA3
        Some(op(0xA4, Ldy, ZeroPage, 2, 3)),
        Some(op(0xA5, Lda, ZeroPage, 2, 3)),
        Some(op(0xA6, Ldx, ZeroPage, 2, 3)),
        None, // 0xA7
        Some(op(0xA8, Tay, Implicit, 1, 2)),
        Some(op(0xA9, Lda, Immediate, 2, 2)),
        Some(op(0xAA, Tax, Implicit, 1, 2)),
        None, // 0xAB
        Some(op(0xAC, Ldy, Absolute, 3, 4)),
        Some(op(0xAD, Lda, Absolute, 3, 4)),
        Some(op(0xAE, Ldx, Absolute, 3, 4)),
        None, // 0xAF
        Some(op(0xB0, Bcs, Relative, 2, 2)),
        Some(op(0xB1, Lda, IndirectY, 2, 5)),
        None, // 0xB2
        None, // 0xB3
        Some(op(0xB4, Ldy, ZeroPageX, 2, 4)),
        Some(op(0xB5, Lda, ZeroPageX, 2, 4)),
        Some(op(0xB6, Ldx, ZeroPageY, 2, 4)),
        None, // 0xB7
        Some(op(0xB8, Clv, Implicit, 1, 2)),
        Some(op(0xB9, Lda, AbsoluteY, 3, 4)),
        Some(op(0xBA, Tsx, Implicit, 1, 2)),
        None, // 0xBB
        Some(op(0xBC, Ldy, AbsoluteX, 3, 4)),
        Some(op(0xBD, Lda, AbsoluteX, 3, 4)),
        Some(op(0xBE, Ldx, AbsoluteY, 3, 4)),
        None, // 0xBF
        Some(op(0xC0, Cpy, Immediate, 2, 2)),
        Some(op(0xC1, Cmp, IndirectX, 2, 6)),
        None, // 0xC2
        None, // 0xC3
        Some(op(0xC4, Cpy, ZeroPage, 2, 3)),
        Some(op(0xC5, Cmp, ZeroPage, 2, 3)),
        Some(op(0xC6, Dec, ZeroPage, 2, 5)),
        None, // 0xC7
        Some(op(0xC8, Iny, Implicit, 1, 2)),
        Some(op(0xC9, Cmp, Immediate, 2, 2)),
        Some(op(0xCA, Dex, Implicit, 1, 2)),
        None, // 0xCB
        Some(op(0xCC, Cpy, Absolute, 3, 4)),
        Some(op(0xCD, Cmp, Absolute, 3, 4)),
        Some(op(0xCE, Dec, Absolute, 3, 6)),
        None, // 0xCF
        Some(op(0xD0, Bne, Relative, 2, 2)),
        Some(op(0xD1, Cmp, IndirectY, 2, 5)),
        None, // 0xD2
        None, // 0xD3
        None, // 0xD4
        Some(op(0xD5, Cmp, ZeroPageX, 2, 4)),
        Some(op(0xD6, Dec, ZeroPageX, 2, 6)),
        None, // 0xD7
        Some(op(0xD8, Cld, Implicit, 1, 2)),
        Some(op(0xD9, Cmp, AbsoluteY, 3, 4)),
        None, // 0xDA
        None, // 0xDB
        None, // 0xDC
        Some(op(0xDD, Cmp, AbsoluteX, 3, 4)),
        Some(op(0xDE, Dec, AbsoluteX, 3, 7)),
        None, // 0xDF
        Some(op(0xE0, Cpx, Immediate, 2, 2)),
        Some(op(0xE1, Sbc, IndirectX, 2, 6)),
        None, // 0xE2
        None, // 0xE3
        Some(op(0xE4, Cpx, ZeroPage, 2, 3)),
        Some(op(0xE5, Sbc, ZeroPage, 2, 3)),
        Some(op(0xE6, Inc, ZeroPage, 2, 5)),
        None, // 0xE7
        Some(op(0xE8, Inx, Implicit, 1, 2)),
        Some(op(0xE9, Sbc, Immediate, 2, 2)),
        Some(op(0xEA, Nop, Implicit, 1, 2)),
        None, // 0xEB
        Some(op(0xEC, Cpx, Absolute, 3, 4)),
        Some(op(0xED, Sbc, Absolute, 3, 4)),
        Some(op(0xEE, Inc, Absolute, 3, 6)),
        None, // 0xEF
        Some(op(0xF0, Beq, Relative, 2, 2)),
        Some(op(0xF1, Sbc, IndirectY, 2, 5)),
        None, // 0xF2
        None, // 0xF3
        None, // 0xF4
        Some(op(0xF5, Sbc, ZeroPageX, 2, 4)),
        Some(op(0xF6, Inc, ZeroPageX, 2, 6)),
        None, // 0xF7
        Some(op(0xF8, Sed, Implicit, 1, 2)),
        Some(op(0xF9, Sbc, AbsoluteY, 3, 4)),
        None, // 0xFA
        None, // 0xFB
        None, // 0xFC
        Some(op(0xFD, Sbc, AbsoluteX, 3, 4)),
        Some(op(0xFE, Inc, AbsoluteX, 3, 7)),
        None, // 0xFF
    ]
};
