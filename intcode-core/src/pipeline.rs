//! Pipeline de amplificadores em série
//!
//! ```text
//!  [fase0, inicial]   [fase1]         [fase2]               [ ]
//!  ──────pipe0────▶ A0 ──pipe1──▶ A1 ──pipe2──▶ ... AN-1 ──sink──▶ resultado
//! ```
//!
//! Cada estágio recebe uma cópia própria do programa. A saída do estágio `i`
//! é o mesmo [`Pipe`] que a entrada do estágio `i + 1`. Os estágios rodam
//! até o fim, um de cada vez, começando pelo 0; não há realimentação.

use crate::channel::Pipe;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::memory::Memory;
use crate::processor::{Processor, RunState};
use tracing::debug;

/// Cadeia de amplificadores que compartilham a mesma imagem de programa
#[derive(Debug, Clone)]
pub struct Pipeline {
    program: Memory,
}

impl Pipeline {
    /// Cria pipeline sobre `program`
    pub fn new(program: impl Into<Memory>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Imagem de programa usada por todos os estágios
    pub fn program(&self) -> &Memory {
        &self.program
    }

    /// Roda um estágio por fase e devolve o último valor emitido pelo último estágio
    pub fn run(&self, phases: &[i64], initial: i64) -> PipelineResult<i64> {
        if phases.is_empty() {
            return Err(PipelineError::NoStages);
        }

        // pipes[i] é a entrada do estágio i, já com a fase
        let pipes: Vec<Pipe> = phases.iter().map(|&phase| Pipe::seeded([phase])).collect();
        pipes[0].seed(initial);
        let sink = Pipe::new();

        for (stage, &phase) in phases.iter().enumerate() {
            let input = pipes[stage].clone();
            let output = pipes.get(stage + 1).unwrap_or(&sink).clone();

            debug!(stage, phase, "stage starting");
            let mut amp = Processor::new(self.program.clone(), input, output);
            let execution = amp.run();

            if let RunState::Faulted(fault) = execution.state {
                return Err(PipelineError::StageFaulted { stage, fault });
            }
            debug!(stage, cycles = amp.cycles(), "stage halted");
        }

        sink.drain().last().copied().ok_or(PipelineError::NoOutput)
    }

    /// Roda com fases e valor inicial de `config`
    pub fn run_with_config(&self, config: &PipelineConfig) -> PipelineResult<i64> {
        self.run(&config.phases, config.initial)
    }
}

/// Atalho para `Pipeline::new(program).run(phases, initial)`
pub fn run(program: &[i64], phases: &[i64], initial: i64) -> PipelineResult<i64> {
    Pipeline::new(program).run(phases, initial)
}
