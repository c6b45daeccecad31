use crate::{
    error::PipelineError,
    functions::FunctionRegistry,
    pipeline::{Pipeline, StageOutput, Token, TransformFn},
};

fn tokens(words: &[&str]) -> Vec<Token> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| Token::with_position(*w, i))
        .collect()
}

fn texts(tokens: Vec<Token>) -> Vec<String> {
    tokens.into_iter().map(|t| t.text).collect()
}

fn drop_short() -> TransformFn {
    TransformFn::new(|t: &Token, _: usize, _: &[Token]| {
        if t.text.chars().count() < 3 {
            StageOutput::Drop
        } else {
            StageOutput::Token(t.text.clone())
        }
    })
}

fn tag(suffix: &'static str) -> TransformFn {
    TransformFn::new(move |t: &Token, _: usize, _: &[Token]| format!("{}{}", t.text, suffix))
}

#[test]
fn test_filter_then_stem() -> Result<(), PipelineError> {
    let mut registry = FunctionRegistry::with_builtins();
    let drop_short = registry.register(&drop_short(), "dropShort");
    let stemmer = registry.resolve("stemmer")?;

    let mut pipeline = Pipeline::new();
    pipeline.add(vec![drop_short, stemmer]);

    let out = pipeline.run(tokens(&["a", "cats", "dogs"]));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].text, "cat");
    assert_eq!(out[1].text, "dog");
    // positional metadata survives both stages
    assert_eq!(out[0].position, 1);
    assert_eq!(out[1].position, 2);
    Ok(())
}

#[test]
fn test_dropped_tokens_are_invisible_downstream() {
    let mut pipeline = Pipeline::new();
    pipeline.push(drop_short());
    pipeline.push(TransformFn::new(|t: &Token, i: usize, all: &[Token]| {
        format!("{}:{}/{}", t.text, i, all.len())
    }));

    let out = texts(pipeline.run(tokens(&["to", "be", "or", "not", "here"])));
    assert_eq!(out, vec!["not:0/2", "here:1/2"]);
}

#[test]
fn test_order_preserved_without_drops() {
    let mut pipeline = Pipeline::new();
    pipeline.add(vec![tag("1"), tag("2"), tag("3")]);

    let input = tokens(&["x", "y", "z", "w"]);
    let out = texts(pipeline.run(input.clone()));
    assert_eq!(out.len(), input.len());
    assert_eq!(out, vec!["x123", "y123", "z123", "w123"]);
}

#[test]
fn test_positional_edits_apply_in_sequence() -> Result<(), PipelineError> {
    let mut registry = FunctionRegistry::new();
    let f1 = registry.register(&tag("1"), "f1");
    let f2 = registry.register(&tag("2"), "f2");
    let f3 = registry.register(&tag("3"), "f3");
    let f_new = registry.register(&tag("n"), "f_new");
    let f_new2 = registry.register(&tag("m"), "f_new2");

    let mut pipeline = Pipeline::new();
    pipeline.add(vec![f1.clone(), f2.clone(), f3]);
    pipeline.before(&f2, f_new)?;
    pipeline.after(&f1, f_new2)?;

    assert_eq!(pipeline.to_labels()?, vec!["f1", "f_new2", "f_new", "f2", "f3"]);
    assert_eq!(pipeline.run_string("x"), vec!["x1mn23"]);
    Ok(())
}

#[test]
fn test_edits_locate_by_identity_not_label() -> Result<(), PipelineError> {
    let mut registry = FunctionRegistry::new();
    let original = registry.register(&tag("a"), "shared");
    // same label, different function body
    let impostor = registry.register(&tag("b"), "shared");

    let mut pipeline = Pipeline::new();
    pipeline.push(original.clone());

    assert_eq!(
        pipeline.after(&impostor, tag("c")).unwrap_err(),
        PipelineError::NotFound("shared".to_string())
    );
    pipeline.after(&original, impostor)?;
    assert_eq!(pipeline.run_string("x"), vec!["xab"]);
    Ok(())
}

#[test]
fn test_round_trip_through_labels() -> Result<(), PipelineError> {
    let mut registry = FunctionRegistry::with_builtins();
    let drop_short = registry.register(&drop_short(), "dropShort");

    let mut pipeline = Pipeline::new();
    pipeline.add(vec![
        registry.resolve("trimmer")?,
        drop_short,
        registry.resolve("stopWordFilter")?,
        registry.resolve("stemmer")?,
    ]);

    let json = serde_json::to_string(&pipeline)?;
    assert_eq!(json, r#"["trimmer","dropShort","stopWordFilter","stemmer"]"#);
    assert_eq!(pipeline.to_json()?, json);

    let loaded = Pipeline::from_json(&registry, &json)?;
    let input = tokens(&["\"Running\"", "of", "the", "hills,", "quickly!"]);
    assert_eq!(loaded.run(input.clone()), pipeline.run(input));
    Ok(())
}

#[test]
fn test_load_unregistered_label() {
    let registry = FunctionRegistry::with_builtins();
    let result = Pipeline::from_json(&registry, r#"["trimmer","stemmer-xx"]"#);
    assert_eq!(
        result.unwrap_err(),
        PipelineError::UnregisteredFunction("stemmer-xx".to_string())
    );
}

#[test]
fn test_duplicate_functions_are_kept() -> Result<(), PipelineError> {
    let mut registry = FunctionRegistry::new();
    let f = registry.register(&tag("!"), "bang");

    let mut pipeline = Pipeline::new();
    pipeline.add(vec![f.clone(), f.clone()]);
    assert_eq!(pipeline.to_labels()?, vec!["bang", "bang"]);
    assert_eq!(pipeline.run_string("hi"), vec!["hi!!"]);

    let reloaded = Pipeline::load(&registry, &pipeline.to_labels()?)?;
    assert_eq!(reloaded.len(), 2);
    Ok(())
}
