//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (accumulator mode) or on a memory byte
//! (read-modify-write). The bit shifted out lands in carry; Z and N follow
//! the result.

use crate::arithmetic::{self, ShiftResult};
use crate::{Cpu, MemoryBus, Operand};

fn apply_shift<M: MemoryBus>(
    cpu: &mut Cpu,
    memory: &mut M,
    operand: &Operand,
    shifted: ShiftResult,
) {
    operand.write(cpu, memory, shifted.result);
    cpu.status.set_carry(shifted.carry);
    cpu.status.set_zn(shifted.result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 becomes 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let shifted = arithmetic::shift_left(operand.read(memory));
    apply_shift(cpu, memory, operand, shifted);
    0
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 becomes 0 (so N is always cleared) and bit 0 goes to carry.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let shifted = arithmetic::shift_right(operand.read(memory));
    apply_shift(cpu, memory, operand, shifted);
    0
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let shifted = arithmetic::rotate_left(operand.read(memory), cpu.status.carry());
    apply_shift(cpu, memory, operand, shifted);
    0
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let shifted = arithmetic::rotate_right(operand.read(memory), cpu.status.carry());
    apply_shift(cpu, memory, operand, shifted);
    0
}
