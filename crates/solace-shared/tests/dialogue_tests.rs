//! End-to-end behaviour of the dialogue engine over the built-in training set.

use approx::assert_relative_eq;
use solace_shared::config::RuleConfig;
use solace_shared::rules::format_resources;
use solace_shared::training_data::{
    crisis_resources, CRISIS_PREAMBLE, DEFAULT_RESPONSE, MINDFULNESS_PROMPTS, SUPPORT_CORPUS,
};
use solace_shared::{
    Corpus, DialogueEngine, LinearMatcher, MatchResult, Matcher, Reply, RuleRouter,
    SeededPicker, SolaceConfig, StatementPair,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Wraps a real matcher and counts how often it is consulted
struct SpyMatcher {
    inner: LinearMatcher,
    calls: Arc<AtomicUsize>,
}

impl Matcher for SpyMatcher {
    fn best_match(&self, utterance: &str, threshold: f64, default_response: &str) -> MatchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.best_match(utterance, threshold, default_response)
    }
}

fn builtin_engine() -> DialogueEngine {
    DialogueEngine::from_config(&SolaceConfig::default()).unwrap()
}

fn spy_engine(corpus: Corpus) -> (DialogueEngine<SpyMatcher>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let matcher = SpyMatcher {
        inner: LinearMatcher::new(Arc::new(corpus)),
        calls: calls.clone(),
    };
    let rules = RuleConfig::default().build_rules().unwrap();
    let router = RuleRouter::with_picker(rules, Arc::new(SeededPicker::new(42)));
    let engine = DialogueEngine::new(router, matcher, 0.9, DEFAULT_RESPONSE).unwrap();
    (engine, calls)
}

fn crisis_listing() -> String {
    format_resources(CRISIS_PREAMBLE, &crisis_resources())
}

#[test]
fn test_crisis_listing_format() {
    assert_eq!(
        crisis_listing(),
        "It sounds like you may need immediate assistance. Here are some resources:\n\
         National Suicide Prevention Lifeline: 1-800-273-8255\n\
         Crisis Text Line: Text HOME to 741741\n\
         SAMHSA Helpline: 1-800-662-4357"
    );
}

#[test]
fn test_stressed_scenario() {
    let engine = builtin_engine();
    let result = engine.retrieve("I feel really stressed");

    assert_eq!(result.matched_statement.as_deref(), Some("I feel stressed"));
    assert!(result.confidence >= 0.9, "confidence {}", result.confidence);
    assert!(result.response.contains("breathe deeply"));
    assert_eq!(engine.respond("I feel really stressed"), result.response);
}

#[test]
fn test_single_word_typo_still_matches() {
    let engine = builtin_engine();
    let expected = engine.retrieve("stressed").response;

    let result = engine.retrieve("stresed");
    assert_eq!(result.matched_statement.as_deref(), Some("stressed"));
    assert!(result.confidence >= 0.9, "confidence {}", result.confidence);
    assert_eq!(engine.respond("stresed"), expected);
    assert_ne!(engine.respond("I'm so sd"), DEFAULT_RESPONSE);
}

#[test]
fn test_gibberish_falls_back() {
    let engine = builtin_engine();
    let result = engine.retrieve("asdkjhasd random text");

    assert!(result.is_fallback());
    assert_eq!(result.response, DEFAULT_RESPONSE);
    assert!(result.confidence < 0.2, "confidence {}", result.confidence);
    assert_eq!(engine.respond("asdkjhasd random text"), DEFAULT_RESPONSE);
}

#[test]
fn test_exact_match_every_statement() {
    let engine = builtin_engine();
    let corpus = Corpus::from_list(SUPPORT_CORPUS);

    for pair in corpus.all_pairs() {
        let result = engine.retrieve(&pair.statement);
        assert_relative_eq!(result.confidence, 1.0);
        assert_eq!(result.response, pair.response, "statement {:?}", pair.statement);
    }
}

#[test]
fn test_crisis_overrides_perfect_corpus_match() {
    // "I need help" is a verbatim corpus statement, the rule still wins
    let (engine, calls) = spy_engine(Corpus::from_list(SUPPORT_CORPUS));

    for utterance in ["I need help", "CRISIS", "what are some crisis resources?", "Help!"] {
        assert_eq!(engine.respond(utterance), crisis_listing());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_crisis_listing_with_custom_corpus() {
    let corpus = Corpus::ingest(vec![StatementPair::new("help", "not the listing")]);
    let (engine, _) = spy_engine(corpus);
    assert_eq!(engine.respond("help"), crisis_listing());
}

#[test]
fn test_mindfulness_skips_matcher() {
    let (engine, calls) = spy_engine(Corpus::from_list(SUPPORT_CORPUS));

    let response = engine.respond("What is mindfulness?");

    assert!(MINDFULNESS_PROMPTS.contains(&response.as_str()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_mindfulness_checked_before_crisis() {
    // Verbatim corpus statement that also contains "help"
    let (engine, calls) = spy_engine(Corpus::from_list(SUPPORT_CORPUS));

    for utterance in ["Can you help with mindfulness?", "MINDFULNESS crisis"] {
        let response = engine.respond(utterance);
        assert!(MINDFULNESS_PROMPTS.contains(&response.as_str()), "{:?}", response);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let reply = builtin_engine().respond_detailed("Can you help with mindfulness?");
    assert!(matches!(reply, Reply::Rule(ref hit) if hit.rule == "mindfulness"));
}

#[test]
fn test_mindfulness_membership_many_draws() {
    let engine = builtin_engine();
    for i in 0..50 {
        let response = engine.respond(&format!("mindfulness tip {}", i));
        assert!(MINDFULNESS_PROMPTS.contains(&response.as_str()));
    }
}

#[test]
fn test_retrieval_consulted_once_without_rule() {
    let (engine, calls) = spy_engine(Corpus::from_list(SUPPORT_CORPUS));
    engine.respond("I can't focus");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_responses_never_empty() {
    let engine = builtin_engine();
    let empty = Corpus::default();
    let (empty_engine, _) = spy_engine(empty);

    for utterance in ["", "   ", "?!?", "ünïcödé 🙂", "I feel numb", "help", "mindfulness"] {
        assert!(!engine.respond(utterance).is_empty());
        assert!(!empty_engine.respond(utterance).is_empty());
    }
}

#[test]
fn test_empty_corpus_always_default() {
    let (engine, calls) = spy_engine(Corpus::default());
    assert_eq!(engine.respond("I feel stressed"), DEFAULT_RESPONSE);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_deterministic_retrieval() {
    let a = builtin_engine();
    let b = builtin_engine();
    for utterance in ["I feel sad", "I'm feeling overwhelmed today", "xyz", "How do I calm down?"] {
        assert_eq!(a.retrieve(utterance), b.retrieve(utterance));
        assert_eq!(a.respond(utterance), a.respond(utterance));
    }
}

#[test]
fn test_seeded_mindfulness_is_reproducible() {
    let mut config = SolaceConfig::default();
    config.engine.seed = Some(1234);

    let a = DialogueEngine::from_config(&config).unwrap();
    let b = DialogueEngine::from_config(&config).unwrap();

    let left: Vec<String> = (0..10).map(|_| a.respond("mindfulness")).collect();
    let right: Vec<String> = (0..10).map(|_| b.respond("mindfulness")).collect();
    assert_eq!(left, right);
}

#[test]
fn test_concurrent_respond() {
    let engine = Arc::new(builtin_engine());
    let expected = engine.respond("I feel stressed");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                (0..25)
                    .map(|_| engine.respond("I feel stressed"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for response in handle.join().unwrap() {
            assert_eq!(response, expected);
        }
    }
}
