//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::cpu::IRQ_VECTOR;
use crate::{Cpu, MemoryBus, Operand, ProcessorStatus};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is one byte long but the return address it pushes is the opcode
/// address + 2, skipping a padding byte. On entry PC already points one past
/// the opcode.
///
/// Cycle timing: 7 cycles (fixed)
///
/// Flags affected:
/// - B, unused: Set to 1 in the pushed status byte only
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u8 {
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_word(memory, return_address);

    let pushed = cpu.status.pushed_by_software();
    cpu.push(memory, pushed.bits());

    cpu.status.set_interrupt_disable(true);
    cpu.pc = memory.read_word(IRQ_VECTOR);

    0
}

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already followed the pointer for the indirect form
/// (including the $xxFF page-wrap quirk when enabled).
///
/// Flags affected: None
pub(crate) fn execute_jmp(cpu: &mut Cpu, operand: &Operand) -> u8 {
    debug_assert!(operand.address.is_some(), "JMP operand resolved without a target");
    if let Some(target) = operand.address {
        cpu.pc = target;
    }
    0
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address - 1), high byte first, then jumps. RTS adds the 1 back.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    debug_assert!(operand.address.is_some(), "JSR operand resolved without a target");
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(memory, return_address);

    if let Some(target) = operand.address {
        cpu.pc = target;
    }
    0
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u8 {
    cpu.pc = cpu.pop_word(memory).wrapping_add(1);
    0
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (Break and the unused bit are not restored),
/// then pulls PC with no +1 adjustment.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u8 {
    let status = ProcessorStatus::from_byte(cpu.pop(memory));
    cpu.status = status - ProcessorStatus::BREAK - ProcessorStatus::UNUSED;
    cpu.pc = cpu.pop_word(memory);
    0
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop() -> u8 {
    0
}
