//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes one step to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{Cpu, CpuConfig, FlatMemory, MemoryBus, OpcodeMetadata, ProcessorStatus};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte, every bit combination allowed
    status: u8,
    decimal_mode: bool,
    indirect_jmp_bug: bool,
    nmi: bool,
}

/// Memory regions an instruction at 0x8000 can reach with small operands
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    memory.write_word(0xFFFE, 0x9000);
    memory.write_word(0xFFFA, 0xA000);

    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let state = &input.cpu_state;
    let mut cpu = Cpu::with_config(CpuConfig {
        decimal_mode: state.decimal_mode,
        indirect_jmp_bug: state.indirect_jmp_bug,
    });
    cpu.reset(&memory);
    cpu.a = state.a;
    cpu.x = state.x;
    cpu.y = state.y;
    cpu.sp = state.sp;
    cpu.status = ProcessorStatus::from_byte(state.status);
    if state.nmi {
        cpu.trigger_nmi();
    }

    let before = cpu.clone();

    match cpu.step(&mut memory) {
        Ok(cycles) => {
            assert!(cycles >= 2 && cycles <= 7);
            assert_eq!(cpu.cycles, cycles as u64);
            if !state.nmi {
                assert_eq!(cpu.instructions, 1);
            }
        }
        Err(_) => {
            // Only an undocumented opcode can fail, and it changes nothing
            assert!(!state.nmi);
            assert!(OpcodeMetadata::lookup(input.memory.instruction_bytes[0]).is_none());
            assert_eq!(cpu, before);
        }
    }
});
