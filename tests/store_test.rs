//! Tests for the STA, STX and STY (Store Register) instructions.
//!
//! Stores never affect flags and never pay a page-crossing penalty: their
//! indexed forms always take the fixed cycle count from the opcode table.

use emu6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

#[test]
fn test_sta_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x85, 0x10]);
    cpu.a = 0x42;

    cpu.step(&mut memory).unwrap();

    assert_eq!(memory.read(0x0010), 0x42);
    assert_eq!(cpu.cycles, 3);
    assert_eq!(cpu.pc, 0x8002);
}

#[test]
fn test_sta_does_not_affect_flags() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x8D, 0x00, 0x20]);
    cpu.a = 0x00;
    let status_before = cpu.status;

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.status, status_before);
    assert_eq!(cpu.cycles, 4);
}

#[test]
fn test_sta_absolute_x_fixed_cycles() {
    // Same 5 cycles with and without a page cross
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x9D, 0x00, 0x20, 0x9D, 0xFF, 0x20]);
    cpu.a = 0x99;
    cpu.x = 0x01;

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(memory.read(0x2001), 0x99);

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(memory.read(0x2100), 0x99);
}

#[test]
fn test_sta_absolute_y() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x99, 0xF0, 0x20]);
    cpu.a = 0x12;
    cpu.y = 0x20;

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(memory.read(0x2110), 0x12);
}

#[test]
fn test_sta_indirect_x() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x81, 0x40]);
    memory.write_word(0x0042, 0x3000);
    cpu.a = 0x5A;
    cpu.x = 0x02;

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(memory.read(0x3000), 0x5A);
}

#[test]
fn test_sta_indirect_y_fixed_cycles() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x91, 0x40]);
    memory.write_word(0x0040, 0x30FF);
    cpu.a = 0xA5;
    cpu.y = 0x01;

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(memory.read(0x3100), 0xA5);
}

#[test]
fn test_stx_zero_page_y_wraps() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x96, 0xFF]);
    cpu.x = 0x33;
    cpu.y = 0x02;

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(memory.read(0x0001), 0x33);
    assert_eq!(memory.read(0x0101), 0x00);
}

#[test]
fn test_stx_absolute() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x8E, 0x34, 0x12]);
    cpu.x = 0x80;

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(memory.read(0x1234), 0x80);
    assert!(!cpu.status.negative());
}

#[test]
fn test_sty_zero_page_x() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x94, 0x10]);
    cpu.y = 0x44;
    cpu.x = 0x05;

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(memory.read(0x0015), 0x44);
}

#[test]
fn test_sty_absolute() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x8C, 0x00, 0x04]);
    cpu.y = 0x01;

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(memory.read(0x0400), 0x01);
}
