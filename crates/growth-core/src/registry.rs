//! Lookup of rule functions by name.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::function::{RuleFunction, ZScoreFunction};

/// Registry of rule functions indexed by expression name.
///
/// The default registry is cached using [`OnceLock`] and can be shared
/// across threads.
pub struct FunctionRegistry {
    functions: HashMap<&'static str, Box<dyn RuleFunction>>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registers a function under its name, replacing any previous one.
    pub fn register(&mut self, function: Box<dyn RuleFunction>) {
        self.functions.insert(function.name(), function);
    }

    /// Function registered under `name`. Names are case-sensitive.
    pub fn get(&self, name: &str) -> Option<&dyn RuleFunction> {
        self.functions.get(name).map(|function| function.as_ref())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

/// Registry with the built-in functions, backed by
/// [`growth_standards::default_table`] (so `GROWTH_STANDARDS_DIR` applies).
pub fn default_registry() -> &'static FunctionRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

fn build_default_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    registry.register(Box::new(ZScoreFunction::default()));
    registry
}
