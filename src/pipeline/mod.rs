use std::fmt;

use log::warn;
use serde::ser::{Error as _, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::{PipelineError, Result};
use crate::functions::FunctionRegistry;

mod function;
mod token;

pub use self::function::{StageFn, StageOutput, TransformFn};
pub use self::token::Token;

/// An ordered stack of functions applied to every token entering the index
/// and to queries run against it.
///
/// A pipeline is persisted as the list of its function labels and rebuilt
/// with [`Pipeline::load`]. Mutating methods are not synchronized; share a
/// pipeline across threads only behind a lock.
#[derive(Clone, Default)]
pub struct Pipeline {
    stack: Vec<TransformFn>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline { stack: Vec::new() }
    }

    /// Rebuilds a serialized pipeline. Fails on the first label missing from
    /// `registry`.
    pub fn load<S: AsRef<str>>(registry: &FunctionRegistry, serialised: &[S]) -> Result<Pipeline> {
        let stack = serialised
            .iter()
            .map(|label| registry.resolve(label.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Pipeline { stack })
    }

    pub fn from_json(registry: &FunctionRegistry, json: &str) -> Result<Pipeline> {
        let labels: Vec<String> = serde_json::from_str(json)?;
        Self::load(registry, &labels)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_labels()?)?)
    }

    /// Appends functions to the end of the pipeline, in order.
    pub fn add<I>(&mut self, functions: I)
    where
        I: IntoIterator<Item = TransformFn>,
    {
        for function in functions {
            self.push(function);
        }
    }

    pub fn push(&mut self, function: TransformFn) {
        warn_if_function_not_registered(&function);
        self.stack.push(function);
    }

    /// Inserts `new_fn` right after `existing_fn`.
    pub fn after(&mut self, existing_fn: &TransformFn, new_fn: TransformFn) -> Result<()> {
        warn_if_function_not_registered(&new_fn);
        let index = self.position(existing_fn)?;
        self.stack.insert(index + 1, new_fn);
        Ok(())
    }

    /// Inserts `new_fn` right before `existing_fn`.
    pub fn before(&mut self, existing_fn: &TransformFn, new_fn: TransformFn) -> Result<()> {
        warn_if_function_not_registered(&new_fn);
        let index = self.position(existing_fn)?;
        self.stack.insert(index, new_fn);
        Ok(())
    }

    /// Removes the first occurrence of `function`, if any.
    pub fn remove(&mut self, function: &TransformFn) {
        if let Some(index) = self.stack.iter().position(|f| f.same_as(function)) {
            self.stack.remove(index);
        }
    }

    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Runs every stage over the tokens. Each stage maps the surviving tokens
    /// one by one; empty output drops a token and a split output yields
    /// several, in order. The next stage only sees what this one produced.
    pub fn run(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut current = tokens;
        for function in &self.stack {
            let mut next = Vec::with_capacity(current.len());
            for (i, token) in current.iter().enumerate() {
                for text in function.call(token, i, &current).into_texts() {
                    next.push(token.with_text(text));
                }
            }
            current = next;
        }
        current
    }

    /// Runs a single string through the pipeline.
    pub fn run_string(&self, text: &str) -> Vec<String> {
        self.run(vec![Token::new(text)])
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    pub fn to_labels(&self) -> Result<Vec<String>> {
        self.stack
            .iter()
            .map(|f| {
                f.label()
                    .map(str::to_string)
                    .ok_or(PipelineError::UnlabelledFunction)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransformFn> {
        self.stack.iter()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn position(&self, existing_fn: &TransformFn) -> Result<usize> {
        self.stack
            .iter()
            .position(|f| f.same_as(existing_fn))
            .ok_or_else(|| PipelineError::NotFound(existing_fn.describe()))
    }
}

fn warn_if_function_not_registered(function: &TransformFn) {
    if !function.is_registered() {
        warn!(
            "Function is not registered with pipeline. \
             This may cause problems when serialising the index."
        );
    }
}

impl Serialize for Pipeline {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.stack.len()))?;
        for function in &self.stack {
            let label = function
                .label()
                .ok_or_else(|| S::Error::custom(PipelineError::UnlabelledFunction))?;
            seq.serialize_element(label)?;
        }
        seq.end()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.stack.iter().map(|function| function.describe()))
            .finish()
    }
}
