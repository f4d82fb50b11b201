//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All of them update Z and N from the copied value, except TXS which
//! affects no flags.

use crate::Cpu;

pub(crate) fn execute_tax(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
    0
}

pub(crate) fn execute_tay(cpu: &mut Cpu) -> u8 {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
    0
}

pub(crate) fn execute_txa(cpu: &mut Cpu) -> u8 {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
    0
}

pub(crate) fn execute_tya(cpu: &mut Cpu) -> u8 {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
    0
}

pub(crate) fn execute_tsx(cpu: &mut Cpu) -> u8 {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
    0
}

/// TXS does not touch the flags.
pub(crate) fn execute_txs(cpu: &mut Cpu) -> u8 {
    cpu.sp = cpu.x;
    0
}
