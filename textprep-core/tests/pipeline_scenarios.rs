//! End-to-end scenarios for the normalization pipeline

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use textprep_core::language::{DictionarySpellChecker, EmbeddedStopwords, LexiconLemmatizer};
use textprep_core::{
    default_punctuation, Collaborators, Pipeline, PipelineError, PipelineOptions,
    PunctuationOption, ServiceError, Step, Stemmer, StopwordOption,
};

const SAMPLE: &str = "The 2 wuick brown foxes jumped, over the  lazy dog.";

fn english() -> Collaborators {
    Collaborators::english().unwrap()
}

fn dictionary() -> DictionarySpellChecker {
    DictionarySpellChecker::from_frequencies([
        ("the", 500),
        ("quick", 40),
        ("brown", 30),
        ("foxes", 12),
        ("jumped", 10),
        ("over", 60),
        ("lazy", 10),
        ("dog", 25),
    ])
}

#[test]
fn test_punctuation_only_keeps_digits_and_spacing() {
    let options = PipelineOptions {
        punctuation: PunctuationOption::Enabled(true),
        whitespace: false,
        ..Default::default()
    };
    let pipeline = Pipeline::from_options(options, Collaborators::new()).unwrap();
    let output = pipeline.transform(SAMPLE).unwrap();

    assert_eq!(output, "The 2 wuick brown foxes jumped over the  lazy dog");
    let punctuation = default_punctuation();
    assert!(!output.chars().any(|c| punctuation.contains(&c)));
}

#[test]
fn test_punctuation_with_whitespace_collapses_double_space() {
    let pipeline = Pipeline::builder().punctuation(true).build().unwrap();
    assert_eq!(
        pipeline.transform(SAMPLE).unwrap(),
        "The 2 wuick brown foxes jumped over the lazy dog"
    );
}

#[test]
fn test_number_removal_leaves_spaces() {
    let pipeline = Pipeline::builder().numbers(true).build().unwrap();
    assert_eq!(
        pipeline.transform(SAMPLE).unwrap(),
        "The  wuick brown foxes jumped, over the lazy dog."
    );
}

#[test]
fn test_custom_punctuation_without_default() {
    let options = PipelineOptions {
        punctuation: PunctuationOption::List(vec![",f".into()]),
        append_punctuation: false,
        ..Default::default()
    };
    let pipeline = Pipeline::from_options(options, Collaborators::new()).unwrap();
    assert_eq!(
        pipeline.transform(SAMPLE).unwrap(),
        "The 2 wuick brown oxes jumped over the lazy dog."
    );
}

#[test]
fn test_stopword_append_law() {
    let text = "the fox jumped over a dog";

    let appended = Pipeline::builder()
        .custom_stopwords(["fox"])
        .append_stopwords(true)
        .collaborators(english())
        .build()
        .unwrap();
    assert_eq!(appended.transform(text).unwrap(), "jumped dog");

    let verbatim = Pipeline::builder()
        .custom_stopwords(["fox"])
        .append_stopwords(false)
        .build()
        .unwrap();
    assert_eq!(verbatim.transform(text).unwrap(), "the jumped over a dog");
}

#[test]
fn test_custom_stopwords_appended_to_defaults() {
    let options = PipelineOptions {
        stopwords: StopwordOption::Custom(vec!["Fox".into(), "quick".into()]),
        ..Default::default()
    };
    let pipeline = Pipeline::from_options(options, english()).unwrap();
    assert_eq!(
        pipeline.transform(SAMPLE).unwrap(),
        "2 wuick brown foxes jumped, lazy dog."
    );
}

#[test]
fn test_full_cleaning_with_lemmas() {
    let options = PipelineOptions {
        stopwords: StopwordOption::Enabled(true),
        lemmatize: true,
        lower: true,
        punctuation: PunctuationOption::Enabled(true),
        ..Default::default()
    };
    let pipeline = Pipeline::from_options(options, english()).unwrap();
    assert_eq!(
        pipeline.transform(SAMPLE).unwrap(),
        "2 wuick brown fox jump lazy dog"
    );
}

#[test]
fn test_spellcheck_corrects_tokens() {
    let pipeline = Pipeline::builder()
        .spellcheck(true)
        .spellchecker(dictionary())
        .build()
        .unwrap();
    assert_eq!(
        pipeline.transform(SAMPLE).unwrap(),
        "The 2 quick brown foxes jumped over the lazy dog"
    );
}

#[test]
fn test_known_words_are_respected() {
    let pipeline = Pipeline::builder()
        .spellcheck(true)
        .known_words(["wuick"])
        .punctuation(true)
        .spellchecker(dictionary())
        .build()
        .unwrap();
    assert_eq!(
        pipeline.transform(SAMPLE).unwrap(),
        "The 2 wuick brown foxes jumped over the lazy dog"
    );
}

#[test]
fn test_numbers_removed_before_spellcheck() {
    let pipeline = Pipeline::builder()
        .numbers(true)
        .spellcheck(true)
        .spellchecker(dictionary())
        .build()
        .unwrap();
    assert_eq!(pipeline.transform("the 42 dgo").unwrap(), "the  dog");
}

struct CountingStemmer(Arc<AtomicUsize>);

impl Stemmer for CountingStemmer {
    fn stem(&self, token: &str) -> Result<String, ServiceError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(token.to_string())
    }
}

#[test]
fn test_lemmatize_takes_priority_over_stem() {
    let calls = Arc::new(AtomicUsize::new(0));
    let both = Pipeline::builder()
        .lemmatize(true)
        .stem(true)
        .collaborators(
            Collaborators::new()
                .with_lemmatizer(LexiconLemmatizer::english().unwrap())
                .with_stemmer(CountingStemmer(Arc::clone(&calls))),
        )
        .build()
        .unwrap();
    let lemma_only = Pipeline::builder()
        .lemmatize(true)
        .lemmatizer(LexiconLemmatizer::english().unwrap())
        .build()
        .unwrap();

    assert_eq!(
        both.transform(SAMPLE).unwrap(),
        lemma_only.transform(SAMPLE).unwrap()
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!both.steps().contains(&Step::Stemming));
}

#[test]
fn test_stemming_lowercases_each_token() {
    let pipeline = Pipeline::builder()
        .stem(true)
        .punctuation(true)
        .collaborators(english())
        .build()
        .unwrap();
    assert_eq!(
        pipeline.transform(SAMPLE).unwrap(),
        "the 2 wuick brown fox jump over the lazy dog"
    );
}

#[test]
fn test_whitespace_generalized_to_tabs_and_newlines() {
    let pipeline = Pipeline::builder().build().unwrap();
    assert_eq!(
        pipeline.transform("a\t\tb\n\nc   d").unwrap(),
        "a b c d"
    );
}

#[test]
fn test_default_stopwords_require_provider() {
    let result = Pipeline::builder().stopwords(true).build();
    assert!(matches!(
        result,
        Err(PipelineError::ResourceUnavailable { .. })
    ));

    let ok = Pipeline::builder()
        .stopwords(true)
        .stopword_provider(EmbeddedStopwords::from_words(["over"]))
        .build()
        .unwrap();
    assert_eq!(ok.transform("jumped over it").unwrap(), "jumped it");
}

#[test]
fn test_invalid_option_type_fails_at_construction() {
    let result = PipelineOptions::from_toml_str("punctuation = 3\nlower = true");
    assert!(matches!(result, Err(PipelineError::Configuration(_))));
}

#[test]
fn test_options_file_round_trip_into_pipeline() {
    let options = PipelineOptions::from_toml_str(
        r#"
lower = true
punctuation = ",."
append_punctuation = false
stopwords = ["the"]
append_stopwords = false
"#,
    )
    .unwrap();
    let pipeline = Pipeline::from_options(options, Collaborators::new()).unwrap();
    assert_eq!(
        pipeline.transform(SAMPLE).unwrap(),
        "2 wuick brown foxes jumped over lazy dog"
    );
}
