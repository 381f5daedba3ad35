//! # Prelude — Re-exportações Convenientes
//!
//! ```
//! use intcode_core::prelude::*;
//! ```

// Execução
pub use crate::memory::Memory;
pub use crate::processor::{Execution, Processor, RunState};

// Canais
pub use crate::channel::{Channel, Pipe};
pub use crate::console::Console;

// Composição
pub use crate::config::PipelineConfig;
pub use crate::pipeline::Pipeline;
pub use crate::search::{NounVerb, SearchResult, best_phase_setting, find_noun_verb};

// Carregamento e erros
pub use crate::error::{ChannelError, Fault, LoadError, PipelineError};
pub use crate::loader::ProgramLoader;
