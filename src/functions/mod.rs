use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use lazy_static::lazy_static;
use log::warn;

use crate::error::{PipelineError, Result};
use crate::pipeline::TransformFn;

mod builtins;
pub use builtins::{register_builtins, STEMMER_LABEL, STOP_WORD_FILTER_LABEL, TRIMMER_LABEL};

/// Maps stable labels to pipeline functions so that a serialized pipeline
/// (a list of labels) can be turned back into runnable stages.
///
/// Registrations are never removed. The registry does no locking of its own;
/// callers sharing one across threads must serialize `register` themselves.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, TransformFn>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// A registry holding the default `trimmer`, `stopWordFilter` and
    /// `stemmer` functions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Binds `label` to `function` and returns the labelled handle. The
    /// returned handle shares its body with `function`, so either can be used
    /// for positional edits. An existing binding is overwritten with a warning.
    pub fn register(&mut self, function: &TransformFn, label: &str) -> TransformFn {
        if self.functions.contains_key(label) {
            warn!("Overwriting existing registered function {}", label);
        }
        let labelled = function.labelled(label);
        self.functions.insert(label.to_string(), labelled.clone());
        labelled
    }

    pub fn resolve(&self, label: &str) -> Result<TransformFn> {
        self.functions
            .get(label)
            .cloned()
            .ok_or_else(|| PipelineError::UnregisteredFunction(label.to_string()))
    }

    pub fn get(&self, label: &str) -> Option<&TransformFn> {
        self.functions.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.functions.contains_key(label)
    }

    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.functions.keys().cloned().collect();
        labels.sort();
        labels
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

lazy_static! {
    static ref GLOBAL_REGISTRY: RwLock<FunctionRegistry> =
        RwLock::new(FunctionRegistry::with_builtins());
}

/// Process-wide registry, pre-populated with the builtins.
pub fn global() -> RwLockReadGuard<'static, FunctionRegistry> {
    GLOBAL_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn global_mut() -> RwLockWriteGuard<'static, FunctionRegistry> {
    GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Registers `function` with the process-wide registry.
pub fn register_function(function: &TransformFn, label: &str) -> TransformFn {
    global_mut().register(function, label)
}
