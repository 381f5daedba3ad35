//! Decodificação de instruções
//!
//! Uma palavra de instrução `ABCDE` carrega o opcode em `DE` e os modos dos
//! parâmetros em `C`, `B`, `A` (primeiro parâmetro no dígito menos
//! significativo). Dígitos ausentes valem [`ParameterMode::Position`].

use crate::error::{Fault, ProcessorResult};
use crate::opcode::Opcode;

/// Número máximo de parâmetros de uma instrução
pub const MAX_PARAMS: usize = 3;

/// Modo de endereçamento de um parâmetro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterMode {
    /// Valor cru é endereço; lê Memory[valor]
    #[default]
    Position,
    /// Valor cru é o próprio operando
    Immediate,
}

impl ParameterMode {
    /// Decodifica um dígito de modo
    pub fn from_digit(digit: i64) -> Option<Self> {
        match digit {
            0 => Some(Self::Position),
            1 => Some(Self::Immediate),
            _ => None,
        }
    }
}

/// Instrução decodificada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Opcode
    pub opcode: Opcode,
    /// Modos dos parâmetros, em ordem de leitura
    modes: [ParameterMode; MAX_PARAMS],
}

impl Instruction {
    /// Decodifica a palavra lida em `ip`
    pub fn decode(word: i64, ip: usize) -> ProcessorResult<Self> {
        if word < 0 {
            return Err(Fault::UnknownOpcode { opcode: word, ip });
        }

        let opcode = Opcode::from_code(word % 100)
            .ok_or(Fault::UnknownOpcode { opcode: word % 100, ip })?;

        let mut modes = [ParameterMode::Position; MAX_PARAMS];
        let mut rest = word / 100;
        for slot in modes.iter_mut().take(opcode.params().len()) {
            let digit = rest % 10;
            *slot = ParameterMode::from_digit(digit)
                .ok_or(Fault::InvalidMode { mode: digit, ip })?;
            rest /= 10;
        }

        Ok(Self { opcode, modes })
    }

    /// Modo do parâmetro `index` (0-based)
    pub fn mode(&self, index: usize) -> ParameterMode {
        self.modes.get(index).copied().unwrap_or_default()
    }

    /// Modos dos parâmetros que a instrução realmente usa
    pub fn modes(&self) -> &[ParameterMode] {
        &self.modes[..self.opcode.params().len()]
    }

    /// Tamanho em palavras
    pub fn width(&self) -> usize {
        self.opcode.width()
    }
}
