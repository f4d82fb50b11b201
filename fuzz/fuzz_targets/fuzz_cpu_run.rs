//! Fuzz target for the run loop.
//!
//! Loads an arbitrary program image and runs it under a cycle limit. The run
//! must always terminate, either at the limit or on an undocumented opcode.

#![no_main]

use emu6502::{Cpu, FlatMemory, MemoryBus, StopCondition, StopReason};
use libfuzzer_sys::fuzz_target;

const CYCLE_LIMIT: u64 = 10_000;

fuzz_target!(|program: &[u8]| {
    let mut memory = FlatMemory::new();
    memory.load(0x0200, program);
    memory.write_word(0xFFFC, 0x0200);

    let mut cpu = Cpu::new();
    cpu.reset(&memory);

    let summary = cpu.run(&mut memory, &mut StopCondition::MaxCycles(CYCLE_LIMIT));

    match summary.reason {
        StopReason::CycleLimit => {
            // Overshoot is bounded by the longest instruction
            assert!(summary.cycles >= CYCLE_LIMIT);
            assert!(summary.cycles < CYCLE_LIMIT + 8);
        }
        StopReason::Fault(_) => assert!(summary.cycles < CYCLE_LIMIT),
        other => panic!("unexpected stop reason {}", other),
    }
    assert_eq!(summary.cycles, cpu.cycles);
});
