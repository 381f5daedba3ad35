//! Buscas sobre o processador
//!
//! - [`best_phase_setting`] — maior saída do pipeline sobre todas as
//!   permutações de um conjunto de fases
//! - [`find_noun_verb`] — par (noun, verb) que faz Memory[0] atingir um alvo

use crate::channel::Pipe;
use crate::error::{PipelineError, PipelineResult};
use crate::memory::Memory;
use crate::pipeline::Pipeline;
use crate::processor::Processor;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, info};

/// Melhor atribuição de fases encontrada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Fases por estágio
    pub phases: Vec<i64>,
    /// Saída do último estágio
    pub output: i64,
    /// Permutações avaliadas
    pub candidates: usize,
}

/// Avalia todas as permutações de `phases` e devolve a de maior saída
///
/// As permutações seguem a ordem lexicográfica das posições em `phases`; em
/// empate, vence a primeira. Qualquer falha de estágio aborta a busca.
pub fn best_phase_setting(
    program: &Memory,
    phases: &[i64],
    initial: i64,
) -> PipelineResult<SearchResult> {
    if phases.is_empty() {
        return Err(PipelineError::NoStages);
    }

    let pipeline = Pipeline::new(program.clone());
    let mut best: Option<SearchResult> = None;
    let mut candidates = 0;

    for candidate in phases.iter().copied().permutations(phases.len()) {
        let output = pipeline.run(&candidate, initial)?;
        candidates += 1;
        debug!(?candidate, output, "candidate evaluated");

        if best.as_ref().is_none_or(|b| output > b.output) {
            best = Some(SearchResult {
                phases: candidate,
                output,
                candidates: 0,
            });
        }
    }

    let mut best = best.ok_or(PipelineError::NoOutput)?;
    best.candidates = candidates;
    info!(phases = ?best.phases, output = best.output, candidates, "best phase setting");
    Ok(best)
}

/// Par encontrado pela busca de noun/verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounVerb {
    pub noun: i64,
    pub verb: i64,
}

impl NounVerb {
    /// `100 * noun + verb`
    pub fn code(&self) -> i64 {
        100 * self.noun + self.verb
    }
}

/// Roda `program` com Memory[1] = noun e Memory[2] = verb, sem I/O
///
/// Devolve Memory[0] se o programa parou em `HALT`.
pub fn run_patched(program: &Memory, noun: i64, verb: i64) -> Option<i64> {
    let mut memory = program.clone();
    if !memory.patch(1, noun) || !memory.patch(2, verb) {
        return None;
    }

    let execution = Processor::new(memory, Pipe::new(), Pipe::new()).run();
    match execution.into_result() {
        Ok(memory) => memory.answer(),
        Err(fault) => {
            debug!(noun, verb, %fault, "candidate faulted");
            None
        }
    }
}

/// Primeiro par em `range × range` cujo Memory[0] final é `target`
///
/// Candidatos que falham são descartados.
pub fn find_noun_verb(program: &Memory, target: i64, range: Range<i64>) -> Option<NounVerb> {
    range
        .clone()
        .cartesian_product(range)
        .find(|&(noun, verb)| run_patched(program, noun, verb) == Some(target))
        .map(|(noun, verb)| NounVerb { noun, verb })
}
