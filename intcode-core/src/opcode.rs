//! Opcodes do processador
//!
//! Conjunto fechado de instruções. O opcode ocupa os dois dígitos decimais
//! menos significativos da palavra de instrução.

use serde::{Deserialize, Serialize};

/// Papel de um parâmetro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Valor lido conforme o modo (posição ou imediato)
    Data,
    /// Endereço de destino, sempre usado cru
    Address,
}

use ParamKind::{Address, Data};

/// Opcodes suportados
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Opcode {
    /// Memory[c] = a + b
    Add = 1,
    /// Memory[c] = a * b
    Multiply = 2,
    /// Memory[a] = próxima entrada
    Input = 3,
    /// Envia a para a saída
    Output = 4,
    /// Salta para b se a ≠ 0
    JumpIfTrue = 5,
    /// Salta para b se a = 0
    JumpIfFalse = 6,
    /// Memory[c] = (a < b)
    LessThan = 7,
    /// Memory[c] = (a == b)
    Equals = 8,
    /// Encerra execução
    Halt = 99,
}

impl Opcode {
    /// Decodifica os dois dígitos baixos
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            1 => Self::Add,
            2 => Self::Multiply,
            3 => Self::Input,
            4 => Self::Output,
            5 => Self::JumpIfTrue,
            6 => Self::JumpIfFalse,
            7 => Self::LessThan,
            8 => Self::Equals,
            99 => Self::Halt,
            _ => return None,
        })
    }

    /// Código numérico
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Parâmetros na ordem de leitura
    pub fn params(self) -> &'static [ParamKind] {
        match self {
            Self::Add | Self::Multiply | Self::LessThan | Self::Equals => &[Data, Data, Address],
            Self::Input => &[Address],
            Self::Output => &[Data],
            Self::JumpIfTrue | Self::JumpIfFalse => &[Data, Data],
            Self::Halt => &[],
        }
    }

    /// Tamanho da instrução em palavras (opcode + parâmetros)
    pub fn width(self) -> usize {
        1 + self.params().len()
    }

    /// Mnemônico
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Multiply => "MUL",
            Self::Input => "IN",
            Self::Output => "OUT",
            Self::JumpIfTrue => "JT",
            Self::JumpIfFalse => "JF",
            Self::LessThan => "LT",
            Self::Equals => "EQ",
            Self::Halt => "HALT",
        }
    }

    /// Todos os opcodes em ordem numérica
    pub fn all() -> [Opcode; 9] {
        [
            Self::Add,
            Self::Multiply,
            Self::Input,
            Self::Output,
            Self::JumpIfTrue,
            Self::JumpIfFalse,
            Self::LessThan,
            Self::Equals,
            Self::Halt,
        ]
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
