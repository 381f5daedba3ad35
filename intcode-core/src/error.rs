//! Erros do processador, dos canais e do pipeline

use thiserror::Error;

/// Tipo de resultado do processador
pub type ProcessorResult<T> = Result<T, Fault>;

/// Tipo de resultado do pipeline
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Tipo de resultado do loader
pub type LoadResult<T> = Result<T, LoadError>;

/// Falha de um canal ao enviar ou receber
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// Pipe vazio (pipes nunca bloqueiam)
    #[error("channel is empty")]
    Empty,

    /// Entrada encerrada (EOF no console)
    #[error("channel closed")]
    Closed,

    /// Linha que não é um inteiro decimal
    #[error("invalid integer input: {0:?}")]
    Parse(String),

    /// Erro de I/O
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ChannelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Falha terminal de um processador
///
/// Todo `ip` registrado aqui é o endereço da instrução que falhou,
/// não o ponteiro já avançado.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Opcode fora do conjunto de instruções
    #[error("unknown opcode {opcode} at ip {ip}")]
    UnknownOpcode { opcode: i64, ip: usize },

    /// Dígito de modo de parâmetro desconhecido
    #[error("invalid parameter mode {mode} at ip {ip}")]
    InvalidMode { mode: i64, ip: usize },

    /// Leitura de pipe vazio
    #[error("input channel empty at ip {ip}")]
    EmptyChannel { ip: usize },

    /// Endereço fora de `[0, len)`
    #[error("address {address} out of bounds at ip {ip}")]
    OutOfBounds { address: i64, ip: usize },

    /// Overflow aritmético em add/multiply
    #[error("arithmetic overflow at ip {ip}")]
    Overflow { ip: usize },

    /// Falha de canal que não é pipe vazio
    #[error("channel failure at ip {ip}: {source}")]
    Channel { ip: usize, source: ChannelError },
}

impl Fault {
    /// Endereço da instrução que falhou
    pub fn ip(&self) -> usize {
        match self {
            Self::UnknownOpcode { ip, .. }
            | Self::InvalidMode { ip, .. }
            | Self::EmptyChannel { ip }
            | Self::OutOfBounds { ip, .. }
            | Self::Overflow { ip }
            | Self::Channel { ip, .. } => *ip,
        }
    }

    /// Converte erro de canal em falha, preservando a distinção de pipe vazio
    pub(crate) fn from_channel(err: ChannelError, ip: usize) -> Self {
        match err {
            ChannelError::Empty => Self::EmptyChannel { ip },
            source => Self::Channel { ip, source },
        }
    }
}

/// Erros do pipeline de amplificadores
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Nenhuma fase fornecida
    #[error("pipeline needs at least one phase setting")]
    NoStages,

    /// Um estágio falhou
    #[error("stage {stage} faulted: {fault}")]
    StageFaulted { stage: usize, fault: Fault },

    /// O último estágio terminou sem emitir valor
    #[error("final stage produced no output")]
    NoOutput,
}

/// Erros de carregamento da imagem de programa
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Texto sem nenhum inteiro
    #[error("program image is empty")]
    Empty,

    /// Token que não é inteiro decimal
    #[error("invalid token {token:?} at position {index}")]
    InvalidToken { index: usize, token: String },

    /// Arquivo ilegível
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
}
