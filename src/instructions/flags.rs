//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! Each touches exactly one flag.

use crate::Cpu;

pub(crate) fn execute_clc(cpu: &mut Cpu) -> u8 {
    cpu.status.set_carry(false);
    0
}

pub(crate) fn execute_sec(cpu: &mut Cpu) -> u8 {
    cpu.status.set_carry(true);
    0
}

pub(crate) fn execute_cli(cpu: &mut Cpu) -> u8 {
    cpu.status.set_interrupt_disable(false);
    0
}

pub(crate) fn execute_sei(cpu: &mut Cpu) -> u8 {
    cpu.status.set_interrupt_disable(true);
    0
}

/// There is no SEV; overflow is only set by ADC, SBC, BIT, PLP and RTI.
pub(crate) fn execute_clv(cpu: &mut Cpu) -> u8 {
    cpu.status.set_overflow(false);
    0
}

pub(crate) fn execute_cld(cpu: &mut Cpu) -> u8 {
    cpu.status.set_decimal(false);
    0
}

pub(crate) fn execute_sed(cpu: &mut Cpu) -> u8 {
    cpu.status.set_decimal(true);
    0
}
