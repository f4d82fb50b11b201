//! Tests for the opcode metadata table and its agreement with execution.

use emu6502::{
    opcodes_for, AddressingMode, Cpu, FlatMemory, MemoryBus, Mnemonic, OpcodeMetadata, OPCODE_TABLE,
};

// ========== Table Shape ==========

#[test]
fn test_151_documented_opcodes() {
    assert_eq!(OPCODE_TABLE.iter().flatten().count(), 151);
}

#[test]
fn test_known_illegal_opcodes_are_absent() {
    for opcode in [0x02, 0x03, 0x04, 0x0B, 0x1A, 0x80, 0x89, 0x9C, 0xA3, 0xEB, 0xFF] {
        assert!(
            OpcodeMetadata::lookup(opcode).is_none(),
            "opcode {:02X} should be illegal",
            opcode
        );
    }
}

#[test]
fn test_representative_cycle_counts() {
    let expected: &[(u8, Mnemonic, AddressingMode, u8)] = &[
        (0x00, Mnemonic::Brk, AddressingMode::Implicit, 7),
        (0x0A, Mnemonic::Asl, AddressingMode::Accumulator, 2),
        (0x1E, Mnemonic::Asl, AddressingMode::AbsoluteX, 7),
        (0x20, Mnemonic::Jsr, AddressingMode::Absolute, 6),
        (0x40, Mnemonic::Rti, AddressingMode::Implicit, 6),
        (0x4C, Mnemonic::Jmp, AddressingMode::Absolute, 3),
        (0x60, Mnemonic::Rts, AddressingMode::Implicit, 6),
        (0x6C, Mnemonic::Jmp, AddressingMode::Indirect, 5),
        (0x81, Mnemonic::Sta, AddressingMode::IndirectX, 6),
        (0x91, Mnemonic::Sta, AddressingMode::IndirectY, 6),
        (0x96, Mnemonic::Stx, AddressingMode::ZeroPageY, 4),
        (0x99, Mnemonic::Sta, AddressingMode::AbsoluteY, 5),
        (0x9D, Mnemonic::Sta, AddressingMode::AbsoluteX, 5),
        (0xA9, Mnemonic::Lda, AddressingMode::Immediate, 2),
        (0xB1, Mnemonic::Lda, AddressingMode::IndirectY, 5),
        (0xBE, Mnemonic::Ldx, AddressingMode::AbsoluteY, 4),
        (0xD0, Mnemonic::Bne, AddressingMode::Relative, 2),
        (0xDE, Mnemonic::Dec, AddressingMode::AbsoluteX, 7),
        (0xE6, Mnemonic::Inc, AddressingMode::ZeroPage, 5),
        (0xEA, Mnemonic::Nop, AddressingMode::Implicit, 2),
        (0x48, Mnemonic::Pha, AddressingMode::Implicit, 3),
        (0x68, Mnemonic::Pla, AddressingMode::Implicit, 4),
    ];

    for &(opcode, mnemonic, mode, cycles) in expected {
        let metadata = OpcodeMetadata::lookup(opcode).unwrap();
        assert_eq!(metadata.mnemonic, mnemonic, "opcode {:02X}", opcode);
        assert_eq!(metadata.addressing_mode, mode, "opcode {:02X}", opcode);
        assert_eq!(metadata.base_cycles, cycles, "opcode {:02X}", opcode);
    }
}

#[test]
fn test_opcodes_per_mnemonic() {
    assert_eq!(opcodes_for(Mnemonic::Adc).count(), 8);
    assert_eq!(opcodes_for(Mnemonic::Sta).count(), 7);
    assert_eq!(opcodes_for(Mnemonic::Asl).count(), 5);
    assert_eq!(opcodes_for(Mnemonic::Bit).count(), 2);
    assert_eq!(opcodes_for(Mnemonic::Nop).count(), 1);
}

#[test]
fn test_every_mnemonic_reachable() {
    for mnemonic in Mnemonic::ALL {
        assert!(opcodes_for(mnemonic).next().is_some(), "{} has no opcode", mnemonic);
    }
}

#[test]
fn test_metadata_display() {
    let metadata = OpcodeMetadata::lookup(0xBD).unwrap();
    assert_eq!(metadata.to_string(), "BD LDA AbsoluteX (3 bytes, 4 cycles)");
}

// ========== Execution Agreement ==========

#[test]
fn test_every_opcode_executes_in_base_cycles() {
    // With zero operands and zero index registers nothing crosses a page, so
    // every instruction costs its base cycles. Branches with displacement 0
    // may be taken, which adds exactly one cycle.
    for metadata in OPCODE_TABLE.iter().flatten() {
        let mut memory = FlatMemory::new();
        memory.load(0x0200, &[metadata.opcode, 0x00, 0x00]);

        let mut cpu = Cpu::new();
        cpu.pc = 0x0200;

        let cycles = cpu.step(&mut memory).unwrap();
        if metadata.mnemonic.is_branch() {
            assert!(
                cycles == metadata.base_cycles || cycles == metadata.base_cycles + 1,
                "{} took {} cycles",
                metadata,
                cycles
            );
            assert_eq!(cpu.pc, 0x0202);
        } else {
            assert_eq!(cycles, metadata.base_cycles, "{}", metadata);
        }
        assert_eq!(cpu.instructions, 1);
    }
}

#[test]
fn test_pc_advances_by_instruction_size() {
    let control_flow = [
        Mnemonic::Brk,
        Mnemonic::Jmp,
        Mnemonic::Jsr,
        Mnemonic::Rts,
        Mnemonic::Rti,
    ];

    for metadata in OPCODE_TABLE.iter().flatten() {
        if control_flow.contains(&metadata.mnemonic) || metadata.mnemonic.is_branch() {
            continue;
        }

        let mut memory = FlatMemory::new();
        memory.load(0x0200, &[metadata.opcode, 0x00, 0x00]);

        let mut cpu = Cpu::new();
        cpu.pc = 0x0200;
        cpu.step(&mut memory).unwrap();

        assert_eq!(
            cpu.pc,
            0x0200 + metadata.size_bytes as u16,
            "{}",
            metadata
        );
    }
}
