//! # 🖥️ Processor — ciclo fetch-decode-execute
//!
//! Executa uma imagem de programa até `HALT` ou até uma falha, fazendo I/O
//! apenas pelos dois canais injetados na construção.
//!
//! ```ignore
//! use intcode_core::{Pipe, Processor};
//!
//! let mut cpu = Processor::new(vec![3, 0, 4, 0, 99], Pipe::seeded([7]), Pipe::new());
//! let execution = cpu.run();
//! assert!(execution.is_halted());
//! ```

use crate::channel::Channel;
use crate::error::{Fault, ProcessorResult};
use crate::instruction::{Instruction, ParameterMode};
use crate::memory::Memory;
use crate::opcode::Opcode;
use tracing::{trace, warn};

/// Estado de execução
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    /// Ainda executando
    Running,
    /// Parou em `HALT`
    Halted,
    /// Parou por falha (terminal)
    Faulted(Fault),
}

impl RunState {
    /// Estado terminal?
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Halted => write!(f, "halted"),
            Self::Faulted(fault) => write!(f, "faulted: {}", fault),
        }
    }
}

/// Resultado de [`Processor::run`]: estado final + snapshot da memória
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub state: RunState,
    pub memory: Memory,
}

impl Execution {
    /// Parou em `HALT`?
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Memory[0]
    pub fn answer(&self) -> Option<i64> {
        self.memory.answer()
    }

    /// Converte em `Result`, devolvendo a memória se parou em `HALT`
    pub fn into_result(self) -> ProcessorResult<Memory> {
        match self.state {
            RunState::Faulted(fault) => Err(fault),
            _ => Ok(self.memory),
        }
    }
}

/// Próximo passo após uma instrução
enum Flow {
    Continue(usize),
    Halt,
}

/// Processador de programa armazenado
pub struct Processor<I, O> {
    /// Memória (cópia exclusiva deste processador)
    memory: Memory,
    /// Instruction pointer
    ip: usize,
    /// Estado
    state: RunState,
    /// Canal de entrada
    input: I,
    /// Canal de saída
    output: O,
    /// Instruções executadas
    cycles: u64,
}

impl<I: Channel, O: Channel> Processor<I, O> {
    /// Cria processador com `ip = 0`
    ///
    /// A memória é consumida; reusar um programa exige passar uma cópia nova.
    pub fn new(memory: impl Into<Memory>, input: I, output: O) -> Self {
        Self {
            memory: memory.into(),
            ip: 0,
            state: RunState::Running,
            input,
            output,
            cycles: 0,
        }
    }

    /// Executa até `HALT` ou falha
    pub fn run(&mut self) -> Execution {
        while !self.state.is_terminal() {
            self.step();
        }

        Execution {
            state: self.state.clone(),
            memory: self.memory.clone(),
        }
    }

    /// Executa uma única instrução
    ///
    /// Sem efeito se o processador já estiver em estado terminal.
    pub fn step(&mut self) -> &RunState {
        if self.state.is_terminal() {
            return &self.state;
        }

        match self.execute() {
            Ok(Flow::Continue(next)) => self.ip = next,
            Ok(Flow::Halt) => self.state = RunState::Halted,
            Err(fault) => {
                warn!(ip = self.ip, %fault, "processor faulted");
                self.state = RunState::Faulted(fault);
            }
        }
        self.cycles += 1;

        &self.state
    }

    /// Estado atual
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Instruction pointer
    ///
    /// Após uma falha, aponta para a instrução que falhou.
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Memória atual
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Instruções executadas (incluindo a que falhou)
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Devolve os canais
    pub fn into_channels(self) -> (I, O) {
        (self.input, self.output)
    }

    // ═════════════════════════════════════════════════════════════════
    // FETCH / DECODE / EXECUTE
    // ═════════════════════════════════════════════════════════════════

    /// Lê a palavra em `cursor` e avança o cursor
    fn fetch(&self, cursor: &mut usize, pc: usize) -> ProcessorResult<i64> {
        let address = i64::try_from(*cursor).map_err(|_| Fault::OutOfBounds {
            address: i64::MAX,
            ip: pc,
        })?;
        let word = self.memory.read(address, pc)?;
        *cursor += 1;
        Ok(word)
    }

    /// Parâmetro de dado, resolvido pelo modo
    fn data(&self, instr: &Instruction, index: usize, cursor: &mut usize, pc: usize) -> ProcessorResult<i64> {
        let raw = self.fetch(cursor, pc)?;
        match instr.mode(index) {
            ParameterMode::Position => self.memory.read(raw, pc),
            ParameterMode::Immediate => Ok(raw),
        }
    }

    /// Parâmetro de endereço, sempre cru
    fn addr(&self, cursor: &mut usize, pc: usize) -> ProcessorResult<i64> {
        self.fetch(cursor, pc)
    }

    /// Executa a instrução em `self.ip`
    ///
    /// `self.ip` só é atualizado pelo chamador em caso de sucesso.
    fn execute(&mut self) -> ProcessorResult<Flow> {
        use Opcode::*;

        let pc = self.ip;
        let mut cursor = pc;
        let word = self.fetch(&mut cursor, pc)?;
        let instr = Instruction::decode(word, pc)?;

        match instr.opcode {
            Add | Multiply | LessThan | Equals => {
                let a = self.data(&instr, 0, &mut cursor, pc)?;
                let b = self.data(&instr, 1, &mut cursor, pc)?;
                let c = self.addr(&mut cursor, pc)?;

                let value = match instr.opcode {
                    Add => a.checked_add(b).ok_or(Fault::Overflow { ip: pc })?,
                    Multiply => a.checked_mul(b).ok_or(Fault::Overflow { ip: pc })?,
                    LessThan => i64::from(a < b),
                    _ => i64::from(a == b),
                };

                trace!(ip = pc, op = %instr.opcode, a, b, dest = c, value);
                self.memory.write(c, value, pc)?;
            }

            Input => {
                let a = self.addr(&mut cursor, pc)?;
                let value = self
                    .input
                    .receive()
                    .map_err(|err| Fault::from_channel(err, pc))?;

                trace!(ip = pc, op = %instr.opcode, dest = a, value);
                self.memory.write(a, value, pc)?;
            }

            Output => {
                let a = self.data(&instr, 0, &mut cursor, pc)?;

                trace!(ip = pc, op = %instr.opcode, value = a);
                self.output
                    .send(a)
                    .map_err(|err| Fault::from_channel(err, pc))?;
            }

            JumpIfTrue | JumpIfFalse => {
                let a = self.data(&instr, 0, &mut cursor, pc)?;
                let b = self.data(&instr, 1, &mut cursor, pc)?;

                let taken = match instr.opcode {
                    JumpIfTrue => a != 0,
                    _ => a == 0,
                };

                trace!(ip = pc, op = %instr.opcode, cond = a, target = b, taken);
                if taken {
                    return Ok(Flow::Continue(self.memory.check_jump(b, pc)?));
                }
            }

            Halt => {
                trace!(ip = pc, op = %instr.opcode);
                return Ok(Flow::Halt);
            }
        }

        Ok(Flow::Continue(cursor))
    }
}
