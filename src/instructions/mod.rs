//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 56 documented 6502
//! instructions, organized by category. Each instruction is a standalone
//! function taking the CPU, the memory bus and the already-resolved
//! [`Operand`], and returning the extra cycles it owes on top of the opcode's
//! base cycles (page-cross penalty for indexed reads, taken-branch penalties).
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{Cpu, MemoryBus, Mnemonic, Operand};

/// Dispatches a resolved instruction to its implementation.
///
/// Returns the instruction-specific extra cycles.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, operand: &Operand) -> u8 {
    match operand.metadata.mnemonic {
        Mnemonic::Adc => alu::execute_adc(cpu, memory, operand),
        Mnemonic::And => alu::execute_and(cpu, memory, operand),
        Mnemonic::Asl => shifts::execute_asl(cpu, memory, operand),
        Mnemonic::Bcc => branches::execute_bcc(cpu, operand),
        Mnemonic::Bcs => branches::execute_bcs(cpu, operand),
        Mnemonic::Beq => branches::execute_beq(cpu, operand),
        Mnemonic::Bit => alu::execute_bit(cpu, memory, operand),
        Mnemonic::Bmi => branches::execute_bmi(cpu, operand),
        Mnemonic::Bne => branches::execute_bne(cpu, operand),
        Mnemonic::Bpl => branches::execute_bpl(cpu, operand),
        Mnemonic::Brk => control::execute_brk(cpu, memory),
        Mnemonic::Bvc => branches::execute_bvc(cpu, operand),
        Mnemonic::Bvs => branches::execute_bvs(cpu, operand),
        Mnemonic::Clc => flags::execute_clc(cpu),
        Mnemonic::Cld => flags::execute_cld(cpu),
        Mnemonic::Cli => flags::execute_cli(cpu),
        Mnemonic::Clv => flags::execute_clv(cpu),
        Mnemonic::Cmp => alu::execute_cmp(cpu, memory, operand),
        Mnemonic::Cpx => alu::execute_cpx(cpu, memory, operand),
        Mnemonic::Cpy => alu::execute_cpy(cpu, memory, operand),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, memory, operand),
        Mnemonic::Dex => inc_dec::execute_dex(cpu),
        Mnemonic::Dey => inc_dec::execute_dey(cpu),
        Mnemonic::Eor => alu::execute_eor(cpu, memory, operand),
        Mnemonic::Inc => inc_dec::execute_inc(cpu, memory, operand),
        Mnemonic::Inx => inc_dec::execute_inx(cpu),
        Mnemonic::Iny => inc_dec::execute_iny(cpu),
        Mnemonic::Jmp => control::execute_jmp(cpu, operand),
        Mnemonic::Jsr => control::execute_jsr(cpu, memory, operand),
        Mnemonic::Lda => load_store::execute_lda(cpu, memory, operand),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, memory, operand),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, memory, operand),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, memory, operand),
        Mnemonic::Nop => control::execute_nop(),
        Mnemonic::Ora => alu::execute_ora(cpu, memory, operand),
        Mnemonic::Pha => stack::execute_pha(cpu, memory),
        Mnemonic::Php => stack::execute_php(cpu, memory),
        Mnemonic::Pla => stack::execute_pla(cpu, memory),
        Mnemonic::Plp => stack::execute_plp(cpu, memory),
        Mnemonic::Rol => shifts::execute_rol(cpu, memory, operand),
        Mnemonic::Ror => shifts::execute_ror(cpu, memory, operand),
        Mnemonic::Rti => control::execute_rti(cpu, memory),
        Mnemonic::Rts => control::execute_rts(cpu, memory),
        Mnemonic::Sbc => alu::execute_sbc(cpu, memory, operand),
        Mnemonic::Sec => flags::execute_sec(cpu),
        Mnemonic::Sed => flags::execute_sed(cpu),
        Mnemonic::Sei => flags::execute_sei(cpu),
        Mnemonic::Sta => load_store::execute_sta(cpu, memory, operand),
        Mnemonic::Stx => load_store::execute_stx(cpu, memory, operand),
        Mnemonic::Sty => load_store::execute_sty(cpu, memory, operand),
        Mnemonic::Tax => transfer::execute_tax(cpu),
        Mnemonic::Tay => transfer::execute_tay(cpu),
        Mnemonic::Tsx => transfer::execute_tsx(cpu),
        Mnemonic::Txa => transfer::execute_txa(cpu),
        Mnemonic::Txs => transfer::execute_txs(cpu),
        Mnemonic::Tya => transfer::execute_tya(cpu),
    }
}
