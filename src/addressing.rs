//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 and the
//! resolver that turns an opcode's operand bytes into an [`Operand`]: the
//! immediate value and/or effective address the instruction works on, plus
//! whether indexing crossed a page.

use crate::{Cpu, MemoryBus, OpcodeMetadata};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (branch if zero flag set, offset is relative to PC)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40, read 16-bit address from that ZP
    /// location, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load from result)
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Result of resolving an instruction's addressing mode.
///
/// Which fields are populated depends on the mode:
///
/// | Mode                    | `value`       | `address`        |
/// |-------------------------|---------------|------------------|
/// | Implicit                | -             | -                |
/// | Accumulator             | A             | -                |
/// | Immediate               | operand byte  | -                |
/// | Relative                | displacement  | branch target    |
/// | every other mode        | -             | effective address|
///
/// Memory operands are not read during resolution; instructions call
/// [`Operand::read`] so stores never touch the target before writing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// The opcode this operand was resolved for.
    pub metadata: &'static OpcodeMetadata,

    /// Value carried in the instruction stream (or A for accumulator mode).
    pub value: Option<u8>,

    /// Effective address, or branch target for relative mode.
    pub address: Option<u16>,

    /// True when indexing (or a branch) landed in a different page than the base.
    pub page_crossed: bool,
}

impl Operand {
    fn new(metadata: &'static OpcodeMetadata) -> Self {
        Self {
            metadata,
            value: None,
            address: None,
            page_crossed: false,
        }
    }

    fn with_value(metadata: &'static OpcodeMetadata, value: u8) -> Self {
        Self {
            value: Some(value),
            ..Self::new(metadata)
        }
    }

    fn with_address(metadata: &'static OpcodeMetadata, address: u16, page_crossed: bool) -> Self {
        Self {
            address: Some(address),
            page_crossed,
            ..Self::new(metadata)
        }
    }

    pub fn addressing_mode(&self) -> AddressingMode {
        self.metadata.addressing_mode
    }

    /// Returns the operand byte: the carried value if there is one, otherwise
    /// the byte at the effective address. Only implicit operands carry
    /// neither; they read as 0, and no instruction that reads its operand
    /// uses implied addressing.
    pub fn read<M: MemoryBus>(&self, memory: &M) -> u8 {
        match (self.value, self.address) {
            (Some(value), _) => value,
            (None, Some(addr)) => memory.read(addr),
            (None, None) => 0,
        }
    }

    /// Writes `value` to the effective address, or to A in accumulator mode.
    pub fn write<M: MemoryBus>(&self, cpu: &mut Cpu, memory: &mut M, value: u8) {
        match self.address {
            Some(addr) => memory.write(addr, value),
            None => cpu.a = value,
        }
    }

    /// Extra cycle owed by read instructions whose indexed address crossed a page.
    pub fn page_penalty(&self) -> u8 {
        if self.page_crossed && self.metadata.mnemonic.pays_page_cross_penalty() {
            1
        } else {
            0
        }
    }
}

/// Returns true if `a` and `b` lie in different 256-byte pages.
pub fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Resolves the operand of the instruction whose opcode byte has just been
/// fetched.
///
/// `cpu.pc` must point at the first operand byte. On return it points at the
/// next instruction.
pub fn resolve<M: MemoryBus>(
    cpu: &mut Cpu,
    memory: &M,
    metadata: &'static OpcodeMetadata,
) -> Operand {
    match metadata.addressing_mode {
        AddressingMode::Implicit => Operand::new(metadata),

        AddressingMode::Accumulator => Operand::with_value(metadata, cpu.a),

        AddressingMode::Immediate => {
            let value = cpu.fetch_byte(memory);
            Operand::with_value(metadata, value)
        }

        AddressingMode::ZeroPage => {
            let addr = cpu.fetch_byte(memory) as u16;
            Operand::with_address(metadata, addr, false)
        }

        AddressingMode::ZeroPageX => {
            // Wraps within zero page: $80 + $FF = $7F
            let addr = cpu.fetch_byte(memory).wrapping_add(cpu.x) as u16;
            Operand::with_address(metadata, addr, false)
        }

        AddressingMode::ZeroPageY => {
            let addr = cpu.fetch_byte(memory).wrapping_add(cpu.y) as u16;
            Operand::with_address(metadata, addr, false)
        }

        AddressingMode::Relative => {
            let offset = cpu.fetch_byte(memory);
            let target = cpu.pc.wrapping_add_signed(offset as i8 as i16);
            Operand {
                value: Some(offset),
                address: Some(target),
                page_crossed: crosses_page(cpu.pc, target),
                ..Operand::new(metadata)
            }
        }

        AddressingMode::Absolute => {
            let addr = cpu.fetch_word(memory);
            Operand::with_address(metadata, addr, false)
        }

        AddressingMode::AbsoluteX => {
            let base = cpu.fetch_word(memory);
            let addr = base.wrapping_add(cpu.x as u16);
            Operand::with_address(metadata, addr, crosses_page(base, addr))
        }

        AddressingMode::AbsoluteY => {
            let base = cpu.fetch_word(memory);
            let addr = base.wrapping_add(cpu.y as u16);
            Operand::with_address(metadata, addr, crosses_page(base, addr))
        }

        AddressingMode::Indirect => {
            let ptr = cpu.fetch_word(memory);
            let target = if cpu.config.indirect_jmp_bug && (ptr & 0x00FF) == 0x00FF {
                // NMOS bug: the high byte comes from the start of the same page,
                // JMP ($10FF) reads $10FF and $1000
                let lo = memory.read(ptr) as u16;
                let hi = memory.read(ptr & 0xFF00) as u16;
                (hi << 8) | lo
            } else {
                memory.read_word(ptr)
            };
            Operand::with_address(metadata, target, false)
        }

        AddressingMode::IndirectX => {
            let ptr = cpu.fetch_byte(memory).wrapping_add(cpu.x);
            let addr = read_zero_page_word(memory, ptr);
            Operand::with_address(metadata, addr, false)
        }

        AddressingMode::IndirectY => {
            let ptr = cpu.fetch_byte(memory);
            let base = read_zero_page_word(memory, ptr);
            let addr = base.wrapping_add(cpu.y as u16);
            Operand::with_address(metadata, addr, crosses_page(base, addr))
        }
    }
}

/// Reads a pointer from zero page. The high byte wraps to $00 when the
/// pointer sits at $FF.
fn read_zero_page_word<M: MemoryBus>(memory: &M, ptr: u8) -> u16 {
    let lo = memory.read(ptr as u16) as u16;
    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CpuConfig, FlatMemory};

    fn resolve_at(cpu: &mut Cpu, memory: &mut FlatMemory, bytes: &[u8]) -> Operand {
        memory.load(0x0200, bytes);
        cpu.pc = 0x0201;
        let metadata = OpcodeMetadata::lookup(bytes[0]).unwrap();
        resolve(cpu, memory, metadata)
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = Cpu::new();
        let mut memory = FlatMemory::new();
        cpu.x = 0xFF;

        // LDA $80,X
        let operand = resolve_at(&mut cpu, &mut memory, &[0xB5, 0x80]);
        assert_eq!(operand.address, Some(0x007F));
        assert!(!operand.page_crossed);
        assert_eq!(cpu.pc, 0x0202);
    }

    #[test]
    fn test_absolute_x_page_cross() {
        let mut cpu = Cpu::new();
        let mut memory = FlatMemory::new();
        cpu.x = 0x01;

        // LDA $12FF,X
        let operand = resolve_at(&mut cpu, &mut memory, &[0xBD, 0xFF, 0x12]);
        assert_eq!(operand.address, Some(0x1300));
        assert!(operand.page_crossed);
        assert_eq!(operand.page_penalty(), 1);
        assert_eq!(cpu.pc, 0x0203);
    }

    #[test]
    fn test_store_never_pays_page_penalty() {
        let mut cpu = Cpu::new();
        let mut memory = FlatMemory::new();
        cpu.x = 0x01;

        // STA $12FF,X
        let operand = resolve_at(&mut cpu, &mut memory, &[0x9D, 0xFF, 0x12]);
        assert!(operand.page_crossed);
        assert_eq!(operand.page_penalty(), 0);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut cpu = Cpu::new();
        let mut memory = FlatMemory::new();
        cpu.x = 0x01;
        memory.write(0x00FF, 0x34);
        memory.write(0x0000, 0x12);

        // LDA ($FE,X) -> pointer at $FF, high byte from $00
        let operand = resolve_at(&mut cpu, &mut memory, &[0xA1, 0xFE]);
        assert_eq!(operand.address, Some(0x1234));
    }

    #[test]
    fn test_indirect_y_page_cross() {
        let mut cpu = Cpu::new();
        let mut memory = FlatMemory::new();
        cpu.y = 0x10;
        memory.write_word(0x0040, 0x20F8);

        // LDA ($40),Y
        let operand = resolve_at(&mut cpu, &mut memory, &[0xB1, 0x40]);
        assert_eq!(operand.address, Some(0x2108));
        assert!(operand.page_crossed);
    }

    #[test]
    fn test_indirect_jmp_bug_configurable() {
        let mut memory = FlatMemory::new();
        memory.write(0x10FF, 0x34);
        memory.write(0x1000, 0x12);
        memory.write(0x1100, 0x56);

        let mut cpu = Cpu::new();
        let operand = resolve_at(&mut cpu, &mut memory, &[0x6C, 0xFF, 0x10]);
        assert_eq!(operand.address, Some(0x1234));

        let mut cpu = Cpu::with_config(CpuConfig {
            indirect_jmp_bug: false,
            ..CpuConfig::default()
        });
        let operand = resolve_at(&mut cpu, &mut memory, &[0x6C, 0xFF, 0x10]);
        assert_eq!(operand.address, Some(0x5634));
    }

    #[test]
    fn test_relative_backwards_across_page() {
        let mut cpu = Cpu::new();
        let mut memory = FlatMemory::new();

        // BNE -4 at $0200: PC after operand is $0202, target $01FE
        let operand = resolve_at(&mut cpu, &mut memory, &[0xD0, 0xFC]);
        assert_eq!(operand.value, Some(0xFC));
        assert_eq!(operand.address, Some(0x01FE));
        assert!(operand.page_crossed);
    }

    #[test]
    fn test_accumulator_write_targets_a() {
        let mut cpu = Cpu::new();
        let mut memory = FlatMemory::new();
        cpu.a = 0x41;

        // ASL A
        let operand = resolve_at(&mut cpu, &mut memory, &[0x0A]);
        assert_eq!(operand.read(&memory), 0x41);
        operand.write(&mut cpu, &mut memory, 0x82);
        assert_eq!(cpu.a, 0x82);
    }

    #[test]
    fn test_every_opcode_resolves_what_its_instruction_needs() {
        use crate::opcodes::{Mnemonic, OPCODE_TABLE};

        for metadata in OPCODE_TABLE.iter().flatten() {
            let mut cpu = Cpu::new();
            let memory = FlatMemory::new();
            cpu.pc = 0x0201;
            let operand = resolve(&mut cpu, &memory, metadata);

            let needs_target = metadata.mnemonic.is_branch()
                || matches!(metadata.mnemonic, Mnemonic::Jmp | Mnemonic::Jsr);
            if needs_target {
                assert!(operand.address.is_some(), "{} has no target", metadata);
            }

            if metadata.addressing_mode == AddressingMode::Implicit {
                assert_eq!(operand, Operand::new(metadata));
            } else {
                assert!(
                    operand.value.is_some() || operand.address.is_some(),
                    "{} resolved to nothing",
                    metadata
                );
            }
        }
    }

    #[test]
    fn test_implied_opcodes_never_read_an_operand() {
        use crate::opcodes::{Mnemonic::*, OPCODE_TABLE};

        let readers = [
            Adc, And, Asl, Bit, Cmp, Cpx, Cpy, Dec, Eor, Inc, Lda, Ldx, Ldy, Lsr, Ora, Rol, Ror,
            Sbc,
        ];
        for metadata in OPCODE_TABLE.iter().flatten() {
            if metadata.addressing_mode == AddressingMode::Implicit {
                assert!(!readers.contains(&metadata.mnemonic), "{}", metadata);
            }
        }
    }
}
