//! Canais de I/O do processador
//!
//! Um canal transporta um inteiro por vez entre o processador e o ambiente
//! ou outro processador. Duas implementações:
//!
//! - [`Pipe`] — fila FIFO em memória, compartilhada entre estágios
//! - [`Console`](crate::console::Console) — prompt interativo

use crate::error::ChannelError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Ponto de envio/recepção de inteiros
pub trait Channel {
    /// Entrega um valor
    fn send(&mut self, value: i64) -> Result<(), ChannelError>;

    /// Próximo valor disponível
    ///
    /// Canais não bloqueantes retornam [`ChannelError::Empty`] quando não há valor.
    fn receive(&mut self) -> Result<i64, ChannelError>;
}

impl<C: Channel + ?Sized> Channel for &mut C {
    fn send(&mut self, value: i64) -> Result<(), ChannelError> {
        (**self).send(value)
    }

    fn receive(&mut self) -> Result<i64, ChannelError> {
        (**self).receive()
    }
}

impl<C: Channel + ?Sized> Channel for Box<C> {
    fn send(&mut self, value: i64) -> Result<(), ChannelError> {
        (**self).send(value)
    }

    fn receive(&mut self) -> Result<i64, ChannelError> {
        (**self).receive()
    }
}

/// Pipe FIFO em memória
///
/// Clonar um `Pipe` produz outro handle para a mesma fila: o estágio `k`
/// escreve no handle que o estágio `k + 1` lê. A fila vive enquanto houver
/// algum handle. Acesso single-thread; estágios nunca rodam em paralelo.
#[derive(Debug, Clone, Default)]
pub struct Pipe {
    queue: Rc<RefCell<VecDeque<i64>>>,
}

impl Pipe {
    /// Cria pipe vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria pipe pré-carregado com `values`, na ordem dada
    pub fn seeded(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            queue: Rc::new(RefCell::new(values.into_iter().collect())),
        }
    }

    /// Acrescenta um valor antes da execução (fase, valor inicial)
    pub fn seed(&self, value: i64) {
        self.queue.borrow_mut().push_back(value);
    }

    /// Valores pendentes
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Pipe vazio?
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Remove e devolve todos os valores pendentes, em ordem
    pub fn drain(&self) -> Vec<i64> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Número de handles vivos para esta fila
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.queue)
    }
}

impl Channel for Pipe {
    fn send(&mut self, value: i64) -> Result<(), ChannelError> {
        self.queue.borrow_mut().push_back(value);
        Ok(())
    }

    fn receive(&mut self) -> Result<i64, ChannelError> {
        self.queue.borrow_mut().pop_front().ok_or(ChannelError::Empty)
    }
}
