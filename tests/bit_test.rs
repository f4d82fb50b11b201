//! Tests for the BIT (Bit Test) instruction.
//!
//! BIT sets Z from A & M, and copies bits 7 and 6 of the operand into N and
//! V. The accumulator is not modified.

use emu6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

#[test]
fn test_bit_zero_page_copies_high_bits() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x24, 0x10]);
    memory.write(0x0010, 0xC0);
    cpu.a = 0x01;

    assert_eq!(cpu.step(&mut memory), Ok(3));
    assert!(cpu.status.zero());
    assert!(cpu.status.negative());
    assert!(cpu.status.overflow());
    assert_eq!(cpu.a, 0x01);
}

#[test]
fn test_bit_absolute_nonzero() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x2C, 0x00, 0x30]);
    memory.write(0x3000, 0x0F);
    cpu.a = 0x0F;
    cpu.status.set_negative(true);
    cpu.status.set_overflow(true);

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert!(!cpu.status.zero());
    assert!(!cpu.status.negative());
    assert!(!cpu.status.overflow());
}

#[test]
fn test_bit_only_overflow_bit() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x24, 0x20]);
    memory.write(0x0020, 0x40);
    cpu.a = 0x40;

    cpu.step(&mut memory).unwrap();
    assert!(!cpu.status.zero());
    assert!(cpu.status.overflow());
    assert!(!cpu.status.negative());
}

#[test]
fn test_bit_preserves_carry() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x24, 0x20]);
    cpu.status.set_carry(true);

    cpu.step(&mut memory).unwrap();
    assert!(cpu.status.carry());
}
