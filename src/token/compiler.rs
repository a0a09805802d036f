use std::{fmt, sync::Arc};

use dashmap::DashMap;

use crate::token::SerializedString;

/// Turns a raw external name into a compiled [`SerializedString`].
///
/// Implementations must be deterministic: compiling equal input twice yields equal tokens.
pub trait TokenCompiler: Send + Sync {
    /// Compile `raw` into a token
    fn compile(&self, raw: &str) -> SerializedString;
}

/// Compiler that creates a new, unshared token on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectCompiler;

impl TokenCompiler for DirectCompiler {
    fn compile(&self, raw: &str) -> SerializedString {
        SerializedString::new(raw)
    }
}

/// Compiler backed by a concurrent pool, returning one shared token per distinct input.
///
/// Useful when many tables (or many mapper configurations) resolve the same external names:
/// each distinct name is stored, and escaped, only once.
#[derive(Default)]
pub struct InterningCompiler {
    pool: DashMap<Arc<str>, SerializedString>,
}

impl InterningCompiler {
    /// Create an empty pool
    #[must_use]
    pub fn new() -> Self {
        InterningCompiler {
            pool: DashMap::new(),
        }
    }

    /// Number of distinct tokens in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Returns true if no token has been compiled yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

impl TokenCompiler for InterningCompiler {
    fn compile(&self, raw: &str) -> SerializedString {
        if let Some(existing) = self.pool.get(raw) {
            return existing.value().clone();
        }

        self.pool
            .entry(Arc::from(raw))
            .or_insert_with(|| SerializedString::new(raw))
            .value()
            .clone()
    }
}

impl fmt::Debug for InterningCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterningCompiler")
            .field("len", &self.pool.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_compiler_does_not_share() {
        let compiler = DirectCompiler;
        let a = compiler.compile("red");
        let b = compiler.compile("red");
        assert_eq!(a, b);
        assert!(!SerializedString::ptr_eq(&a, &b));
    }

    #[test]
    fn interning_compiler_shares() {
        let compiler = InterningCompiler::new();
        assert!(compiler.is_empty());

        let a = compiler.compile("red");
        let b = compiler.compile("red");
        let c = compiler.compile("blue");

        assert!(SerializedString::ptr_eq(&a, &b));
        assert!(!SerializedString::ptr_eq(&a, &c));
        assert_eq!(compiler.len(), 2);
    }

    #[test]
    fn interning_compiler_across_threads() {
        let compiler = Arc::new(InterningCompiler::new());

        let tokens: Vec<SerializedString> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let compiler = &compiler;
                    scope.spawn(move || compiler.compile("shared"))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(compiler.len(), 1);
        assert!(tokens
            .iter()
            .all(|token| SerializedString::ptr_eq(token, &tokens[0])));
    }
}
