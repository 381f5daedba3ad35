//! Program loader for intcode images

use crate::error::{LoadError, LoadResult};
use crate::memory::Memory;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Carregador de imagens de programa
pub struct ProgramLoader;

impl ProgramLoader {
    /// Lê e interpreta um arquivo de programa
    pub fn load_file(path: impl AsRef<Path>) -> LoadResult<Memory> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| LoadError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let memory = Self::parse(&source)?;
        debug!(path = %path.display(), cells = memory.len(), "program loaded");
        Ok(memory)
    }

    /// Interpreta texto com inteiros separados por vírgula ou espaço
    ///
    /// Tokens vazios (vírgula final, linhas em branco) são ignorados.
    pub fn parse(source: &str) -> LoadResult<Memory> {
        let cells = source
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(index, token)| {
                token.parse::<i64>().map_err(|_| LoadError::InvalidToken {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<LoadResult<Vec<i64>>>()?;

        if cells.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(Memory::new(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        let mem = ProgramLoader::parse("1,9,10,3,2,3,11,0,99,30,40,50\n").unwrap();
        assert_eq!(mem.len(), 12);
        assert_eq!(mem.get(11), Some(50));
    }

    #[test]
    fn test_parse_whitespace_and_negatives() {
        let mem = ProgramLoader::parse("1101 100\n-1\t4 0").unwrap();
        assert_eq!(mem.as_slice(), &[1101, 100, -1, 4, 0]);
    }

    #[test]
    fn test_parse_trailing_comma() {
        let mem = ProgramLoader::parse("99,\n").unwrap();
        assert_eq!(mem.as_slice(), &[99]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(ProgramLoader::parse(" \n"), Err(LoadError::Empty));
        assert_eq!(
            ProgramLoader::parse("1,2,x3"),
            Err(LoadError::InvalidToken { index: 2, token: "x3".into() })
        );
    }

    #[test]
    fn test_missing_file() {
        let err = ProgramLoader::load_file("/nonexistent/program.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
