use std::fmt;
use std::sync::Arc;

use super::token::Token;

/// What a stage produces for one input token.
#[derive(Clone, Debug, PartialEq)]
pub enum StageOutput {
    Drop,
    Token(String),
    /// Split one token into several; each enters the next stage in order.
    Tokens(Vec<String>),
}

impl StageOutput {
    /// Non-empty output texts in emission order. Empty strings are drops.
    pub fn into_texts(self) -> Vec<String> {
        match self {
            StageOutput::Drop => Vec::new(),
            StageOutput::Token(text) if text.is_empty() => Vec::new(),
            StageOutput::Token(text) => vec![text],
            StageOutput::Tokens(texts) => texts.into_iter().filter(|t| !t.is_empty()).collect(),
        }
    }
}

impl From<String> for StageOutput {
    fn from(text: String) -> Self {
        StageOutput::Token(text)
    }
}

impl From<&str> for StageOutput {
    fn from(text: &str) -> Self {
        StageOutput::Token(text.to_string())
    }
}

impl From<Token> for StageOutput {
    fn from(token: Token) -> Self {
        StageOutput::Token(token.text)
    }
}

impl From<Option<String>> for StageOutput {
    fn from(text: Option<String>) -> Self {
        match text {
            Some(text) => StageOutput::Token(text),
            None => StageOutput::Drop,
        }
    }
}

impl From<Vec<String>> for StageOutput {
    fn from(texts: Vec<String>) -> Self {
        StageOutput::Tokens(texts)
    }
}

/// Signature shared by every pipeline stage: the token, its index in the
/// current sequence and the whole current sequence.
pub type StageFn = dyn Fn(&Token, usize, &[Token]) -> StageOutput + Send + Sync;

/// A pipeline stage. Clones share the same function body, which is what
/// positional edits compare against; the label is only used for persistence.
#[derive(Clone)]
pub struct TransformFn {
    label: Option<Arc<str>>,
    func: Arc<StageFn>,
}

impl TransformFn {
    pub fn new<F, O>(f: F) -> Self
    where
        F: Fn(&Token, usize, &[Token]) -> O + Send + Sync + 'static,
        O: Into<StageOutput>,
    {
        let func: Arc<StageFn> =
            Arc::new(move |token: &Token, i: usize, tokens: &[Token]| -> StageOutput {
                f(token, i, tokens).into()
            });
        TransformFn { label: None, func }
    }

    /// Only `FunctionRegistry::register` hands out labelled functions.
    pub(crate) fn labelled(&self, label: &str) -> Self {
        TransformFn {
            label: Some(Arc::from(label)),
            func: Arc::clone(&self.func),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_registered(&self) -> bool {
        self.label.is_some()
    }

    pub fn call(&self, token: &Token, index: usize, tokens: &[Token]) -> StageOutput {
        (self.func)(token, index, tokens)
    }

    /// True when both handles wrap the same function body.
    pub fn same_as(&self, other: &TransformFn) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }

    pub(crate) fn describe(&self) -> String {
        self.label().unwrap_or("<unlabelled>").to_string()
    }
}

impl fmt::Debug for TransformFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformFn")
            .field("label", &self.label)
            .field("func", &"<fn>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_output_drops_empty_text() {
        assert!(StageOutput::from("").into_texts().is_empty());
        assert!(StageOutput::from(None).into_texts().is_empty());
        assert_eq!(
            StageOutput::from(vec!["a".to_string(), String::new(), "b".to_string()]).into_texts(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_identity_follows_function_body() {
        let upper = TransformFn::new(|t: &Token, _: usize, _: &[Token]| t.text.to_uppercase());
        let other = TransformFn::new(|t: &Token, _: usize, _: &[Token]| t.text.to_uppercase());
        let labelled = upper.labelled("upper");

        assert!(upper.same_as(&labelled));
        assert!(!upper.same_as(&other));
        assert_eq!(labelled.label(), Some("upper"));
        assert!(!upper.is_registered());
    }
}
