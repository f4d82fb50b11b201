//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Memory
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap at the byte boundary ($FF + 1 = $00, $00 - 1 = $FF) and update
//! Z and N. The memory forms are read-modify-write: their indexed variants
//! always cost the fixed 7 cycles in the opcode table, page crossing or not.

use crate::{Cpu, MemoryBus, Operand};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let result = operand.read(memory).wrapping_add(1);
    operand.write(cpu, memory, result);
    cpu.status.set_zn(result);
    0
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    let result = operand.read(memory).wrapping_sub(1);
    operand.write(cpu, memory, result);
    cpu.status.set_zn(result);
    0
}

pub(crate) fn execute_inx(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
    0
}

pub(crate) fn execute_iny(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
    0
}

pub(crate) fn execute_dex(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
    0
}

pub(crate) fn execute_dey(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
    0
}
