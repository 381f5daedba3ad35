//! Memória do processador
//!
//! Imagem de programa de tamanho fixo. Nenhuma operação redimensiona a
//! memória; todo acesso fora de `[0, len)` vira [`Fault::OutOfBounds`].

use crate::error::{Fault, ProcessorResult};
use serde::{Deserialize, Serialize};

/// Memória plana de inteiros com sinal
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memory {
    cells: Vec<i64>,
}

impl Memory {
    /// Cria memória a partir da imagem de programa
    pub fn new(cells: Vec<i64>) -> Self {
        Self { cells }
    }

    /// Número de células
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Memória vazia?
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Valida um endereço e converte para índice
    fn index(&self, address: i64, ip: usize) -> ProcessorResult<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&idx| idx < self.cells.len())
            .ok_or(Fault::OutOfBounds { address, ip })
    }

    /// Lê a célula `address`; `ip` identifica a instrução em caso de falha
    pub fn read(&self, address: i64, ip: usize) -> ProcessorResult<i64> {
        let idx = self.index(address, ip)?;
        Ok(self.cells[idx])
    }

    /// Escreve `value` na célula `address`
    pub fn write(&mut self, address: i64, value: i64, ip: usize) -> ProcessorResult<()> {
        let idx = self.index(address, ip)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Verifica que `address` é um destino válido de salto
    pub fn check_jump(&self, address: i64, ip: usize) -> ProcessorResult<usize> {
        self.index(address, ip)
    }

    /// Leitura sem contexto de instrução
    pub fn get(&self, index: usize) -> Option<i64> {
        self.cells.get(index).copied()
    }

    /// Substitui uma célula antes da execução (noun/verb)
    ///
    /// Retorna `false` se `index` estiver fora da imagem.
    pub fn patch(&mut self, index: usize, value: i64) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Valor em Memory[0], a resposta convencional de um programa
    pub fn answer(&self) -> Option<i64> {
        self.get(0)
    }

    /// Células como slice
    pub fn as_slice(&self) -> &[i64] {
        &self.cells
    }

    /// Consome a memória e devolve as células
    pub fn into_vec(self) -> Vec<i64> {
        self.cells
    }
}

impl From<Vec<i64>> for Memory {
    fn from(cells: Vec<i64>) -> Self {
        Self::new(cells)
    }
}

impl From<&[i64]> for Memory {
    fn from(cells: &[i64]) -> Self {
        Self::new(cells.to_vec())
    }
}

impl FromIterator<i64> for Memory {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_in_bounds() {
        let mut mem = Memory::from(vec![1, 2, 3]);
        assert_eq!(mem.read(2, 0).unwrap(), 3);
        mem.write(0, 42, 0).unwrap();
        assert_eq!(mem.answer(), Some(42));
    }

    #[test]
    fn test_out_of_bounds_is_fault() {
        let mut mem = Memory::from(vec![1, 2, 3]);
        assert_eq!(mem.read(3, 5), Err(Fault::OutOfBounds { address: 3, ip: 5 }));
        assert_eq!(mem.read(-1, 5), Err(Fault::OutOfBounds { address: -1, ip: 5 }));
        assert_eq!(mem.write(100, 0, 1), Err(Fault::OutOfBounds { address: 100, ip: 1 }));
        assert_eq!(mem.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_patch() {
        let mut mem = Memory::from(vec![1, 0, 0, 3]);
        assert!(mem.patch(1, 12));
        assert!(mem.patch(2, 2));
        assert!(!mem.patch(4, 9));
        assert_eq!(mem.into_vec(), vec![1, 12, 2, 3]);
    }

    #[test]
    fn test_serde_transparent() {
        let mem = Memory::from(vec![1, -2, 99]);
        let json = serde_json::to_string(&mem).unwrap();
        assert_eq!(json, "[1,-2,99]");
        let back: Memory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mem);
    }
}
