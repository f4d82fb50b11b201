//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - Binary addition with and without carry in
//! - Carry, overflow, zero and negative flag behaviour
//! - NMOS decimal mode
//! - Decimal mode disabled through `CpuConfig`
//! - Page crossing penalty

use emu6502::{Cpu, CpuConfig, FlatMemory, MemoryBus};

fn setup_cpu() -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

fn adc_immediate(cpu: &mut Cpu, memory: &mut FlatMemory, a: u8, value: u8, carry: bool) {
    memory.load(cpu.pc, &[0x69, value]);
    cpu.a = a;
    cpu.status.set_carry(carry);
    cpu.step(memory).unwrap();
}

// ========== Binary Mode ==========

#[test]
fn test_adc_simple() {
    let (mut cpu, mut memory) = setup_cpu();
    adc_immediate(&mut cpu, &mut memory, 0x10, 0x20, false);

    assert_eq!(cpu.a, 0x30);
    assert!(!cpu.status.carry());
    assert!(!cpu.status.overflow());
    assert!(!cpu.status.zero());
    assert!(!cpu.status.negative());
    assert_eq!(cpu.cycles, 2);
}

#[test]
fn test_adc_with_carry_in() {
    let (mut cpu, mut memory) = setup_cpu();
    adc_immediate(&mut cpu, &mut memory, 0x10, 0x20, true);

    assert_eq!(cpu.a, 0x31);
}

#[test]
fn test_adc_carry_out_and_zero() {
    let (mut cpu, mut memory) = setup_cpu();
    adc_immediate(&mut cpu, &mut memory, 0xFF, 0x01, false);

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.status.carry());
    assert!(cpu.status.zero());
    assert!(!cpu.status.overflow());
}

#[test]
fn test_adc_signed_overflow_positive() {
    let (mut cpu, mut memory) = setup_cpu();
    adc_immediate(&mut cpu, &mut memory, 0x50, 0x50, false);

    assert_eq!(cpu.a, 0xA0);
    assert!(cpu.status.overflow());
    assert!(cpu.status.negative());
    assert!(!cpu.status.carry());
}

#[test]
fn test_adc_signed_overflow_negative() {
    let (mut cpu, mut memory) = setup_cpu();
    adc_immediate(&mut cpu, &mut memory, 0x80, 0xFF, false);

    assert_eq!(cpu.a, 0x7F);
    assert!(cpu.status.overflow());
    assert!(cpu.status.carry());
    assert!(!cpu.status.negative());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let (mut cpu, mut memory) = setup_cpu();
    adc_immediate(&mut cpu, &mut memory, 0x7F, 0x80, true);

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.status.carry());
    assert!(!cpu.status.overflow());
}

// ========== Decimal Mode ==========

#[test]
fn test_adc_decimal_simple() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.status.set_decimal(true);
    adc_immediate(&mut cpu, &mut memory, 0x15, 0x27, false);

    assert_eq!(cpu.a, 0x42);
    assert!(!cpu.status.carry());
}

#[test]
fn test_adc_decimal_carry_out() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.status.set_decimal(true);
    adc_immediate(&mut cpu, &mut memory, 0x58, 0x46, true);

    assert_eq!(cpu.a, 0x05);
    assert!(cpu.status.carry());
}

#[test]
fn test_adc_decimal_99_plus_1() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.status.set_decimal(true);
    adc_immediate(&mut cpu, &mut memory, 0x99, 0x01, false);

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.status.carry());
    // NMOS: Z reflects the binary sum (0x9A), not the BCD result
    assert!(!cpu.status.zero());
}

#[test]
fn test_adc_decimal_same_cycles() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.status.set_decimal(true);
    adc_immediate(&mut cpu, &mut memory, 0x01, 0x01, false);

    assert_eq!(cpu.a, 0x02);
    assert_eq!(cpu.cycles, 2);
}

#[test]
fn test_adc_decimal_disabled_by_config() {
    let mut memory = FlatMemory::new();
    let mut cpu = Cpu::with_config(CpuConfig {
        decimal_mode: false,
        ..CpuConfig::default()
    });
    cpu.pc = 0x8000;
    cpu.status.set_decimal(true);

    adc_immediate(&mut cpu, &mut memory, 0x15, 0x27, false);

    assert_eq!(cpu.a, 0x3C);
    // D stays set; only the arithmetic ignores it
    assert!(cpu.status.decimal());
}

// ========== Addressing Modes ==========

#[test]
fn test_adc_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x65, 0x10]);
    memory.write(0x0010, 0x05);
    cpu.a = 0x03;

    assert_eq!(cpu.step(&mut memory), Ok(3));
    assert_eq!(cpu.a, 0x08);
}

#[test]
fn test_adc_absolute_y_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x79, 0xFF, 0x20]);
    memory.write(0x2100, 0x01);
    cpu.a = 0x01;
    cpu.y = 0x01;

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(cpu.a, 0x02);
}

#[test]
fn test_adc_indirect_y_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x71, 0x20]);
    memory.write_word(0x0020, 0x21FF);
    memory.write(0x2200, 0x10);
    cpu.a = 0x01;
    cpu.y = 0x01;

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(cpu.a, 0x11);
}
