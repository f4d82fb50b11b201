//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! The resolver has already computed the target and whether it lies in a
//! different page than the instruction that follows the branch.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::{Cpu, Operand};

/// Moves PC to the branch target when `condition` holds and returns the
/// extra cycles owed.
fn branch(cpu: &mut Cpu, operand: &Operand, condition: bool) -> u8 {
    debug_assert!(operand.address.is_some(), "relative operand resolved without a target");
    if !condition {
        return 0;
    }

    match operand.address {
        Some(target) => {
            cpu.pc = target;
            if operand.page_crossed {
                2
            } else {
                1
            }
        }
        None => 0,
    }
}

/// BCC: Branch if Carry Clear.
pub(crate) fn execute_bcc(cpu: &mut Cpu, operand: &Operand) -> u8 {
    let taken = !cpu.status.carry();
    branch(cpu, operand, taken)
}

/// BCS: Branch if Carry Set.
pub(crate) fn execute_bcs(cpu: &mut Cpu, operand: &Operand) -> u8 {
    let taken = cpu.status.carry();
    branch(cpu, operand, taken)
}

/// BEQ: Branch if Equal (Z set).
pub(crate) fn execute_beq(cpu: &mut Cpu, operand: &Operand) -> u8 {
    let taken = cpu.status.zero();
    branch(cpu, operand, taken)
}

/// BNE: Branch if Not Equal (Z clear).
pub(crate) fn execute_bne(cpu: &mut Cpu, operand: &Operand) -> u8 {
    let taken = !cpu.status.zero();
    branch(cpu, operand, taken)
}

/// BMI: Branch if Minus (N set).
pub(crate) fn execute_bmi(cpu: &mut Cpu, operand: &Operand) -> u8 {
    let taken = cpu.status.negative();
    branch(cpu, operand, taken)
}

/// BPL: Branch if Positive (N clear).
pub(crate) fn execute_bpl(cpu: &mut Cpu, operand: &Operand) -> u8 {
    let taken = !cpu.status.negative();
    branch(cpu, operand, taken)
}

/// BVC: Branch if Overflow Clear.
pub(crate) fn execute_bvc(cpu: &mut Cpu, operand: &Operand) -> u8 {
    let taken = !cpu.status.overflow();
    branch(cpu, operand, taken)
}

/// BVS: Branch if Overflow Set.
pub(crate) fn execute_bvs(cpu: &mut Cpu, operand: &Operand) -> u8 {
    let taken = cpu.status.overflow();
    branch(cpu, operand, taken)
}
