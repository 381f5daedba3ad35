//! Testes de integração do processador

use intcode_core::prelude::*;
use intcode_core::instruction::{Instruction, ParameterMode};
use proptest::prelude::*;

/// Roda `program` com `inputs` no canal de entrada e devolve as saídas
fn run_io(program: &[i64], inputs: &[i64]) -> (Execution, Vec<i64>) {
    let output = Pipe::new();
    let mut cpu = Processor::new(program.to_vec(), Pipe::seeded(inputs.iter().copied()), output.clone());
    let execution = cpu.run();
    (execution, output.drain())
}

#[test]
fn test_reference_round_trip() {
    let (execution, _) = run_io(&[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50], &[]);
    assert!(execution.is_halted());
    assert_eq!(execution.answer(), Some(3500));
    assert_eq!(
        execution.memory.as_slice(),
        &[3500, 9, 10, 70, 2, 3, 11, 0, 99, 30, 40, 50]
    );
}

#[test]
fn test_small_programs() {
    assert_eq!(run_io(&[1, 0, 0, 0, 99], &[]).0.answer(), Some(2));
    assert_eq!(run_io(&[2, 3, 0, 3, 99], &[]).0.memory.get(3), Some(6));
    assert_eq!(run_io(&[1101, 100, -1, 4, 0], &[]).0.memory.get(4), Some(99));
}

#[test]
fn test_echo() {
    let (execution, out) = run_io(&[3, 0, 4, 0, 99], &[-12]);
    assert!(execution.is_halted());
    assert_eq!(out, vec![-12]);
}

#[test]
fn test_equals_position_mode() {
    let program = [3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8];
    assert_eq!(run_io(&program, &[8]).1, vec![1]);
    assert_eq!(run_io(&program, &[7]).1, vec![0]);
}

#[test]
fn test_less_than_position_mode() {
    let program = [3, 9, 7, 9, 10, 9, 4, 9, 99, -1, 8];
    assert_eq!(run_io(&program, &[7]).1, vec![1]);
    assert_eq!(run_io(&program, &[8]).1, vec![0]);
}

#[test]
fn test_compare_immediate_mode() {
    let equals = [3, 3, 1108, -1, 8, 3, 4, 3, 99];
    assert_eq!(run_io(&equals, &[8]).1, vec![1]);
    assert_eq!(run_io(&equals, &[9]).1, vec![0]);

    let less = [3, 3, 1107, -1, 8, 3, 4, 3, 99];
    assert_eq!(run_io(&less, &[3]).1, vec![1]);
    assert_eq!(run_io(&less, &[8]).1, vec![0]);
}

#[test]
fn test_jump_cast_to_bool() {
    let immediate = [3, 3, 1105, -1, 9, 1101, 0, 0, 12, 4, 12, 99, 1];
    let position = [3, 12, 6, 12, 15, 1, 13, 14, 13, 4, 13, 99, -1, 0, 1, 9];

    for input in [1, -1, 5, 1_000_000] {
        assert_eq!(run_io(&immediate, &[input]).1, vec![1]);
        assert_eq!(run_io(&position, &[input]).1, vec![1]);
    }
    assert_eq!(run_io(&immediate, &[0]).1, vec![0]);
    assert_eq!(run_io(&position, &[0]).1, vec![0]);
}

#[test]
fn test_larger_compare_program() {
    // 999 abaixo de 8, 1000 igual a 8, 1001 acima
    let program = [
        3, 21, 1008, 21, 8, 20, 1005, 20, 22, 107, 8, 21, 20, 1006, 20, 31, 1106, 0, 36, 98, 0,
        0, 1002, 21, 125, 20, 4, 20, 1105, 1, 46, 104, 999, 1105, 1, 46, 1101, 1000, 1, 20, 4,
        20, 1105, 1, 46, 98, 99,
    ];
    assert_eq!(run_io(&program, &[7]).1, vec![999]);
    assert_eq!(run_io(&program, &[8]).1, vec![1000]);
    assert_eq!(run_io(&program, &[9]).1, vec![1001]);
}

#[test]
fn test_mode_decoding() {
    let instr = Instruction::decode(1002, 0).unwrap();
    assert_eq!(
        instr.modes(),
        &[ParameterMode::Position, ParameterMode::Immediate, ParameterMode::Position]
    );
}

#[test]
fn test_console_channels_drive_processor() {
    use std::io::Cursor;

    let mut console = Console::new(Cursor::new("8\n"), Vec::new());
    let program = vec![3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8];
    let execution = Processor::new(program, &mut console, Pipe::new()).run();
    assert!(execution.is_halted());

    let (_, prompt) = console.into_parts();
    assert_eq!(String::from_utf8(prompt).unwrap(), "input: ");
}

proptest! {
    #[test]
    fn prop_add_is_commutative(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
        let ab = run_io(&[1101, a, b, 0, 99], &[]).0.answer();
        let ba = run_io(&[1101, b, a, 0, 99], &[]).0.answer();
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(ab, Some(a + b));
    }

    #[test]
    fn prop_multiply_is_commutative(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let ab = run_io(&[1102, a, b, 0, 99], &[]).0.answer();
        let ba = run_io(&[1102, b, a, 0, 99], &[]).0.answer();
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(ab, Some(a * b));
    }

    #[test]
    fn prop_unknown_opcode_faults_in_bounds(
        word in 0i64..100_000,
        tail in proptest::collection::vec(-100i64..100, 0..8),
    ) {
        prop_assume!(!matches!(word % 100, 1..=8 | 99));

        let mut program = vec![word];
        program.extend(tail);
        let len = program.len();

        let mut cpu = Processor::new(program, Pipe::new(), Pipe::new());
        let state = cpu.step().clone();

        prop_assert_eq!(state, RunState::Faulted(Fault::UnknownOpcode { opcode: word % 100, ip: 0 }));
        prop_assert!(cpu.ip() < len);
    }
}
