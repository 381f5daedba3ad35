//! # 🔁 Intcode-Core
//!
//! Processador de programa armazenado sobre uma memória plana de inteiros,
//! mais a composição de vários processadores num pipeline de amplificadores.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Processor                           │
//! │  ┌──────────┐  ┌────────────────────┐  ┌──────────────┐  │
//! │  │  Memory  │  │ fetch/decode/exec  │  │  ip + state  │  │
//! │  └──────────┘  └────────────────────┘  └──────────────┘  │
//! │        ▲ input: Channel              output: Channel ▼   │
//! └──────────────────────────────────────────────────────────┘
//!                 Pipe (FIFO) │ Console (prompt)
//! ```
//!
//! ## Módulos
//!
//! - [`memory`] - Imagem de programa de tamanho fixo
//! - [`opcode`] - Conjunto fechado de instruções
//! - [`instruction`] - Decodificação de opcode e modos
//! - [`processor`] - Ciclo fetch-decode-execute
//! - [`channel`] - Trait `Channel` e o `Pipe` em memória
//! - [`console`] - Canal interativo
//! - [`pipeline`] - Amplificadores em série
//! - [`search`] - Busca de fases e de noun/verb
//! - [`loader`] - Leitura de imagens de programa
//! - [`config`] - Defaults via `.env`
//!
//! ## Exemplo
//!
//! ```
//! use intcode_core::prelude::*;
//!
//! let program = ProgramLoader::parse("3,15,3,16,1002,16,10,16,1,16,15,15,4,15,99,0,0").unwrap();
//! let best = best_phase_setting(&program, &[0, 1, 2, 3, 4], 0).unwrap();
//! assert_eq!(best.output, 43210);
//! ```

pub mod channel;
pub mod config;
pub mod console;
pub mod error;
pub mod instruction;
pub mod loader;
pub mod memory;
pub mod opcode;
pub mod pipeline;
pub mod prelude;
pub mod processor;
pub mod search;

// Re-exports
pub use channel::{Channel, Pipe};
pub use config::PipelineConfig;
pub use console::Console;
pub use error::{
    ChannelError, Fault, LoadError, LoadResult, PipelineError, PipelineResult, ProcessorResult,
};
pub use instruction::{Instruction, ParameterMode};
pub use loader::ProgramLoader;
pub use memory::Memory;
pub use opcode::{Opcode, ParamKind};
pub use pipeline::Pipeline;
pub use processor::{Execution, Processor, RunState};
pub use search::{NounVerb, SearchResult, best_phase_setting, find_noun_verb};
