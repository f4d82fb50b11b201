//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP, and SP wraps
//! within the page in both directions.

use crate::{Cpu, MemoryBus, ProcessorStatus};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Stack operation:
/// 1. Write accumulator value to 0x0100 | SP
/// 2. Decrement SP (wraps from 0x00 to 0xFF)
///
/// Flags affected: None
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u8 {
    let value = cpu.a;
    cpu.push(memory, value);
    0
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has Break and the unused bit forced to 1; the live
/// register is unchanged.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u8 {
    let pushed = cpu.status.pushed_by_software();
    cpu.push(memory, pushed.bits());
    0
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u8 {
    cpu.a = cpu.pop(memory);
    cpu.status.set_zn(cpu.a);
    0
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// All eight bits are restored verbatim, so PHP followed by PLP leaves Break
/// and the unused bit set.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u8 {
    cpu.status = ProcessorStatus::from_byte(cpu.pop(memory));
    0
}
