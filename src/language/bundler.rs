use std::collections::{HashMap, HashSet};
use std::fmt;

use log::debug;

use super::english::ENGLISH_STOP_WORDS;
use super::stop_words::{stop_word_filter, stop_word_filter_label, CorpusStopWords, StopWordSource};
use super::trimmer::{RegexTrimmerFactory, TrimmerFactory, WordCharacters};
use super::{multi_trimmer_label, parse_languages, stemmer_label, Language};
use crate::config::LanguageConfig;
use crate::error::{PipelineError, Result};
use crate::functions::{FunctionRegistry, STEMMER_LABEL, STOP_WORD_FILTER_LABEL};
use crate::pipeline::{Pipeline, TransformFn};

/// Anything owning an indexing pipeline and a search pipeline.
pub trait PipelineSlots {
    fn indexing_pipeline_mut(&mut self) -> &mut Pipeline;
    fn search_pipeline_mut(&mut self) -> &mut Pipeline;
}

/// Minimal index builder: the two pipelines the bundler fills in.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub pipeline: Pipeline,
    pub search_pipeline: Pipeline,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PipelineSlots for Builder {
    fn indexing_pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }

    fn search_pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.search_pipeline
    }
}

/// Stop-word filter of one language: either already in the registry or
/// still to be registered under `label`.
enum FilterPlan {
    Registered(TransformFn),
    Pending { label: String, stop_words: HashSet<String> },
}

/// Assembles the indexing and query pipelines for a set of languages.
pub struct LanguageBundler {
    stop_words: Box<dyn StopWordSource>,
    trimmers: Box<dyn TrimmerFactory>,
    extra_stop_words: HashMap<Language, HashSet<String>>,
}

impl fmt::Debug for LanguageBundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageBundler")
            .field("available", &self.is_available())
            .field("extra_stop_words", &self.extra_stop_words)
            .finish()
    }
}

impl Default for LanguageBundler {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageBundler {
    pub fn new() -> Self {
        Self::with_capabilities(CorpusStopWords::new(), RegexTrimmerFactory)
    }

    pub fn with_capabilities<S, T>(stop_words: S, trimmers: T) -> Self
    where
        S: StopWordSource + 'static,
        T: TrimmerFactory + 'static,
    {
        LanguageBundler {
            stop_words: Box::new(stop_words),
            trimmers: Box::new(trimmers),
            extra_stop_words: HashMap::new(),
        }
    }

    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        let mut bundler = Self::new();
        for (code, words) in &config.stop_words {
            let language = Language::from_code(code)?;
            bundler = bundler.with_extra_stop_words(language, words.iter().cloned());
        }
        Ok(bundler)
    }

    /// Adds stop words on top of the corpus list of `language`.
    pub fn with_extra_stop_words<I>(mut self, language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.extra_stop_words.entry(language).or_default().extend(words);
        self
    }

    /// Whether languages other than the default can be bundled.
    pub fn is_available(&self) -> bool {
        self.stop_words.is_available()
    }

    /// Fills `builder` with the indexing pipeline (trimmer, stop-word
    /// filters, stemmers) and the query pipeline (stemmers only) for
    /// `languages`. Nothing is registered or modified unless every language
    /// resolves.
    pub fn build<B, S>(&self, registry: &mut FunctionRegistry, builder: &mut B, languages: &[S]) -> Result<()>
    where
        B: PipelineSlots,
        S: AsRef<str>,
    {
        let (indexing, search) = self.build_pipelines(registry, languages)?;

        let pipeline = builder.indexing_pipeline_mut();
        pipeline.reset();
        pipeline.add(indexing.iter().cloned());

        let pipeline = builder.search_pipeline_mut();
        pipeline.reset();
        pipeline.add(search.iter().cloned());
        Ok(())
    }

    /// Returns `(indexing_pipeline, query_pipeline)` for `languages`.
    pub fn build_pipelines<S: AsRef<str>>(
        &self,
        registry: &mut FunctionRegistry,
        languages: &[S],
    ) -> Result<(Pipeline, Pipeline)> {
        let languages = parse_languages(languages)?;
        if languages.is_empty() {
            return Err(PipelineError::Configuration(
                "at least one language is required".to_string(),
            ));
        }
        if languages.iter().any(|l| !l.is_default()) && !self.is_available() {
            return Err(PipelineError::LanguageSupportUnavailable(
                "stop-word corpus is not available".to_string(),
            ));
        }

        let mut stemmers = Vec::with_capacity(languages.len());
        let mut filters = Vec::with_capacity(languages.len());
        let mut word_characters = WordCharacters::new();

        for &language in &languages {
            let extra = self.extra_stop_words.get(&language);
            if language.is_default() {
                stemmers.push(registry.resolve(STEMMER_LABEL)?);
                word_characters.insert_generic();
                filters.push(match extra {
                    Some(extra) => FilterPlan::Pending {
                        label: stop_word_filter_label(Some(language)),
                        stop_words: ENGLISH_STOP_WORDS.union(extra).cloned().collect(),
                    },
                    None => FilterPlan::Registered(registry.resolve(STOP_WORD_FILTER_LABEL)?),
                });
            } else {
                let mut stop_words = self.stop_words.stop_words(language)?;
                word_characters.extend_from_words(&stop_words);
                if let Some(extra) = extra {
                    stop_words.extend(extra.iter().cloned());
                }
                stemmers.push(registry.resolve(&stemmer_label(language))?);
                filters.push(FilterPlan::Pending {
                    label: stop_word_filter_label(Some(language)),
                    stop_words,
                });
            }
        }

        let trimmer = self.trimmers.build_trimmer(&word_characters)?;

        // Everything resolved; from here on only registrations happen.
        let trimmer = registry.register(&trimmer, &multi_trimmer_label(&languages));
        let filters: Vec<TransformFn> = filters
            .into_iter()
            .map(|plan| match plan {
                FilterPlan::Registered(filter) => filter,
                FilterPlan::Pending { label, stop_words } => {
                    registry.register(&stop_word_filter(stop_words), &label)
                }
            })
            .collect();

        let mut indexing = Pipeline::new();
        indexing.push(trimmer);
        indexing.add(filters);
        indexing.add(stemmers.iter().cloned());

        let mut search = Pipeline::new();
        search.add(stemmers);

        debug!(
            "Built pipelines for [{}]: indexing {:?}, search {:?}",
            languages.iter().map(|l| l.code()).collect::<Vec<_>>().join(", "),
            indexing,
            search
        );
        Ok((indexing, search))
    }
}

/// Returns a builder wired for `languages` with the default capabilities.
pub fn get_builder<S: AsRef<str>>(registry: &mut FunctionRegistry, languages: &[S]) -> Result<Builder> {
    let mut builder = Builder::new();
    LanguageBundler::new().build(registry, &mut builder, languages)?;
    Ok(builder)
}
