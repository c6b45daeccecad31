//! Token processing pipelines for full-text search indexes.
//!
//! A [`Pipeline`] is an ordered stack of labelled functions applied to every
//! token at index time and at query time. Functions are bound to labels in a
//! [`FunctionRegistry`] so a pipeline can be persisted as a list of labels and
//! rebuilt later. [`LanguageBundler`] wires trimming, stop-word filtering and
//! stemming for one or more languages into an indexing and a query pipeline.

pub mod config;
pub mod error;
pub mod functions;
pub mod language;
pub mod pipeline;

pub use config::LanguageConfig;
pub use error::{PipelineError, Result};
pub use functions::{register_function, FunctionRegistry};
pub use language::{
    get_builder, init, language_support, register_languages, Builder, Language, LanguageBundler,
    PipelineSlots,
};
pub use pipeline::{Pipeline, StageOutput, Token, TransformFn};

#[cfg(test)]
mod tests;
