//! Tests for INC, DEC, INX, INY, DEX and DEY.

use emu6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

// ========== Memory ==========

#[test]
fn test_inc_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xE6, 0x10]);
    memory.write(0x0010, 0x7F);

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(memory.read(0x0010), 0x80);
    assert!(cpu.status.negative());
}

#[test]
fn test_inc_wraps_to_zero() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xEE, 0x00, 0x30]);
    memory.write(0x3000, 0xFF);
    cpu.status.set_carry(false);

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(memory.read(0x3000), 0x00);
    assert!(cpu.status.zero());
    // INC never touches carry
    assert!(!cpu.status.carry());
}

#[test]
fn test_inc_absolute_x_fixed_cycles() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xFE, 0xFF, 0x30]);
    cpu.x = 0x01;

    assert_eq!(cpu.step(&mut memory), Ok(7));
    assert_eq!(memory.read(0x3100), 0x01);
}

#[test]
fn test_dec_zero_page_x() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xD6, 0x10]);
    memory.write(0x0012, 0x01);
    cpu.x = 0x02;

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(memory.read(0x0012), 0x00);
    assert!(cpu.status.zero());
}

#[test]
fn test_dec_wraps_to_ff() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xC6, 0x10]);

    cpu.step(&mut memory).unwrap();
    assert_eq!(memory.read(0x0010), 0xFF);
    assert!(cpu.status.negative());
}

// ========== Registers ==========

#[test]
fn test_inx_wraps() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xE8]);
    cpu.x = 0xFF;

    assert_eq!(cpu.step(&mut memory), Ok(2));
    assert_eq!(cpu.x, 0x00);
    assert!(cpu.status.zero());
}

#[test]
fn test_iny() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xC8]);
    cpu.y = 0x7F;

    assert_eq!(cpu.step(&mut memory), Ok(2));
    assert_eq!(cpu.y, 0x80);
    assert!(cpu.status.negative());
}

#[test]
fn test_dex() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xCA]);
    cpu.x = 0x01;

    assert_eq!(cpu.step(&mut memory), Ok(2));
    assert_eq!(cpu.x, 0x00);
    assert!(cpu.status.zero());
}

#[test]
fn test_dey_wraps() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x88]);
    cpu.y = 0x00;

    assert_eq!(cpu.step(&mut memory), Ok(2));
    assert_eq!(cpu.y, 0xFF);
    assert!(cpu.status.negative());
    assert!(!cpu.status.zero());
}
