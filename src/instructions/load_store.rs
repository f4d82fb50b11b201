//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register

use crate::{Cpu, MemoryBus, Operand};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
///
/// # Cycles
///
/// One extra cycle for `abs,X`, `abs,Y` and `(zp),Y` when indexing crosses a page.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    cpu.a = operand.read(memory);
    cpu.status.set_zn(cpu.a);
    operand.page_penalty()
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag and cycle behaviour as LDA.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    cpu.x = operand.read(memory);
    cpu.status.set_zn(cpu.x);
    operand.page_penalty()
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag and cycle behaviour as LDA.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    cpu.y = operand.read(memory);
    cpu.status.set_zn(cpu.y);
    operand.page_penalty()
}

/// Executes the STA (Store Accumulator) instruction.
///
/// # Flag Behavior
///
/// - No flags affected
///
/// Store instructions never pay a page-crossing penalty; their indexed forms
/// always take the table's fixed cycle count.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let value = cpu.a;
    operand.write(cpu, memory, value);
    0
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let value = cpu.x;
    operand.write(cpu, memory, value);
    0
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let value = cpu.y;
    operand.write(cpu, memory, value);
    0
}
