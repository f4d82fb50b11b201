//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! Every instruction here except BIT reads through possibly-indexed
//! addressing and owes one extra cycle when the index crossed a page.

use crate::arithmetic::{self, ArithResult, CompareResult};
use crate::{Cpu, MemoryBus, Operand};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. With the D flag
/// set (and decimal mode enabled in [`CpuConfig`](crate::CpuConfig)) the
/// operands are treated as packed BCD.
///
/// Flags affected: N, V, Z, C
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let value = operand.read(memory);
    let carry_in = cpu.status.carry();

    let result = if cpu.status.decimal() && cpu.config.decimal_mode {
        arithmetic::add_decimal(cpu.a, value, carry_in)
    } else {
        arithmetic::add_binary(cpu.a, value, carry_in)
    };
    apply_arith(cpu, result);

    operand.page_penalty()
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the borrow (inverted carry) from the
/// accumulator. Decimal mode follows the same rule as ADC.
///
/// Flags affected: N, V, Z, C
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let value = operand.read(memory);
    let carry_in = cpu.status.carry();

    let result = if cpu.status.decimal() && cpu.config.decimal_mode {
        arithmetic::subtract_decimal(cpu.a, value, carry_in)
    } else {
        arithmetic::subtract_binary(cpu.a, value, carry_in)
    };
    apply_arith(cpu, result);

    operand.page_penalty()
}

fn apply_arith(cpu: &mut Cpu, result: ArithResult) {
    cpu.a = result.result;
    cpu.status.set_carry(result.carry);
    cpu.status.set_overflow(result.overflow);
    cpu.status.set_zero(result.zero);
    cpu.status.set_negative(result.negative);
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    cpu.a &= operand.read(memory);
    cpu.status.set_zn(cpu.a);
    operand.page_penalty()
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    cpu.a |= operand.read(memory);
    cpu.status.set_zn(cpu.a);
    operand.page_penalty()
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    cpu.a ^= operand.read(memory);
    cpu.status.set_zn(cpu.a);
    operand.page_penalty()
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Computes A - M without storing it. Carry is an unsigned `A >= M`, so
/// A=$FF compared with $01 sets carry.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let result = arithmetic::compare(cpu.a, operand.read(memory));
    apply_compare(cpu, result);
    operand.page_penalty()
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let result = arithmetic::compare(cpu.x, operand.read(memory));
    apply_compare(cpu, result);
    0
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let result = arithmetic::compare(cpu.y, operand.read(memory));
    apply_compare(cpu, result);
    0
}

fn apply_compare(cpu: &mut Cpu, result: CompareResult) {
    cpu.status.set_carry(result.carry);
    cpu.status.set_zero(result.zero);
    cpu.status.set_negative(result.negative);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; N and V are copied from bits 7 and 6 of M.
/// Neither A nor memory is modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let result = arithmetic::bit_test(cpu.a, operand.read(memory));
    cpu.status.set_zero(result.zero);
    cpu.status.set_overflow(result.overflow);
    cpu.status.set_negative(result.negative);
    0
}
