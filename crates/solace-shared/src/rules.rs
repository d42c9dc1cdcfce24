//! Keyword rules that answer before retrieval is consulted.
//!
//! Rules are an ordered list of (trigger, action) pairs. The router applies the
//! first rule whose trigger fires; later rules are never tested. Triggers are
//! case-insensitive substring checks, so "HELP me" and "helpful" both fire "help".

use crate::error::{Result, SolaceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// A named support resource with its contact string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub contact: String,
}

impl Resource {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }
}

/// Source of randomness for `RandomChoice` rules
pub trait ResponsePicker: Send + Sync + fmt::Debug {
    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform pick from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl ResponsePicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible picks: draw `n` is seeded with `seed + n`
///
/// The draw counter is atomic, so concurrent callers never block each other.
#[derive(Debug)]
pub struct SeededPicker {
    seed: u64,
    draws: AtomicU64,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draws: AtomicU64::new(0),
        }
    }
}

impl ResponsePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let draw = self.draws.fetch_add(1, Ordering::Relaxed);
        StdRng::seed_from_u64(self.seed.wrapping_add(draw)).gen_range(0..len)
    }
}

/// When a rule fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Any keyword appears in the utterance (case-insensitive substring)
    AnyKeyword(Vec<String>),
}

impl Trigger {
    pub fn any_keyword<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Trigger::AnyKeyword(
            keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.trim().is_empty())
                .collect(),
        )
    }

    /// `lowered` must already be lowercased
    fn fires(&self, lowered: &str) -> bool {
        match self {
            Trigger::AnyKeyword(keywords) => keywords.iter().any(|k| lowered.contains(k.as_str())),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Trigger::AnyKeyword(keywords) => keywords.is_empty(),
        }
    }
}

/// What a rule answers with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// Uniformly random response from a fixed pool
    RandomChoice(Vec<String>),
    /// Preamble line followed by one `name: contact` line per resource, in order
    FormattedList {
        preamble: String,
        items: Vec<Resource>,
    },
}

impl RuleAction {
    /// `None` only for an empty pool, which `Rule::new` never admits
    fn respond(&self, picker: &dyn ResponsePicker) -> Option<String> {
        match self {
            RuleAction::RandomChoice(responses) if responses.is_empty() => None,
            RuleAction::RandomChoice(responses) => {
                responses.get(picker.pick(responses.len())).cloned()
            }
            RuleAction::FormattedList { preamble, items } => Some(format_resources(preamble, items)),
        }
    }
}

/// Render a resource listing
pub fn format_resources(preamble: &str, items: &[Resource]) -> String {
    let lines = items
        .iter()
        .map(|r| format!("{}: {}", r.name, r.contact))
        .collect::<Vec<_>>()
        .join("\n");

    if preamble.is_empty() {
        lines
    } else {
        format!("{}\n{}", preamble, lines)
    }
}

/// A single (trigger, action) entry, only constructible through [`Rule::new`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    trigger: Trigger,
    action: RuleAction,
}

impl Rule {
    /// Build a rule, rejecting ones that could never fire or could answer with
    /// blank text
    pub fn new(name: impl Into<String>, trigger: Trigger, action: RuleAction) -> Result<Self> {
        let name = name.into();

        if trigger.is_empty() {
            return Err(SolaceError::NoKeywords(name));
        }
        match &action {
            RuleAction::RandomChoice(responses)
                if responses.is_empty() || responses.iter().any(|r| r.trim().is_empty()) =>
            {
                return Err(SolaceError::EmptyResponsePool(name));
            }
            RuleAction::FormattedList { items, .. }
                if items.is_empty()
                    || items
                        .iter()
                        .any(|r| r.name.trim().is_empty() || r.contact.trim().is_empty()) =>
            {
                return Err(SolaceError::EmptyResourceList(name));
            }
            _ => {}
        }

        Ok(Self {
            name,
            trigger,
            action,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn action(&self) -> &RuleAction {
        &self.action
    }
}

/// A rule that fired, with the text it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule: String,
    pub response: String,
}

/// First-match router over an ordered rule list
#[derive(Debug, Clone)]
pub struct RuleRouter {
    rules: Vec<Rule>,
    picker: Arc<dyn ResponsePicker>,
}

impl RuleRouter {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self::with_picker(rules, Arc::new(ThreadRngPicker))
    }

    pub fn with_picker(rules: Vec<Rule>, picker: Arc<dyn ResponsePicker>) -> Self {
        Self { rules, picker }
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply the first matching rule, if any
    pub fn route(&self, utterance: &str) -> Option<String> {
        self.route_hit(utterance).map(|hit| hit.response)
    }

    /// Like [`route`](Self::route), also reporting which rule fired
    pub fn route_hit(&self, utterance: &str) -> Option<RuleHit> {
        let lowered = utterance.to_lowercase();

        self.rules
            .iter()
            .filter(|r| r.trigger.fires(&lowered))
            .find_map(|rule| {
                let response = rule.action.respond(self.picker.as_ref())?;
                debug!("Rule '{}' fired", rule.name);
                Some(RuleHit {
                    rule: rule.name.clone(),
                    response,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<String> {
        vec!["one".to_string(), "two".to_string(), "three".to_string()]
    }

    fn crisis_rule() -> Rule {
        Rule::new(
            "crisis",
            Trigger::any_keyword(["crisis", "help"]),
            RuleAction::FormattedList {
                preamble: "Resources:".to_string(),
                items: vec![Resource::new("A Line", "111"), Resource::new("B Line", "222")],
            },
        )
        .unwrap()
    }

    fn pool_rule() -> Rule {
        Rule::new(
            "mindfulness",
            Trigger::any_keyword(["Mindfulness"]),
            RuleAction::RandomChoice(pool()),
        )
        .unwrap()
    }

    #[test]
    fn test_format_resources() {
        let items = vec![Resource::new("A", "1"), Resource::new("B", "2")];
        assert_eq!(format_resources("Here:", &items), "Here:\nA: 1\nB: 2");
        assert_eq!(format_resources("", &items), "A: 1\nB: 2");
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let router = RuleRouter::new(vec![crisis_rule()]);
        assert!(router.route("I NEED HELP").is_some());
        assert!(router.route("is this a Crisis?").is_some());
        assert!(router.route("I feel fine").is_none());
    }

    #[test]
    fn test_first_rule_wins() {
        let router = RuleRouter::new(vec![pool_rule(), crisis_rule()]);
        let hit = router.route_hit("help me with mindfulness").unwrap();
        assert_eq!(hit.rule, "mindfulness");
        assert!(pool().contains(&hit.response));

        let hit = router.route_hit("I need help").unwrap();
        assert_eq!(hit.rule, "crisis");
        assert_eq!(hit.response, "Resources:\nA Line: 111\nB Line: 222");
    }

    #[test]
    fn test_order_is_caller_defined() {
        let router = RuleRouter::new(vec![crisis_rule(), pool_rule()]);
        assert_eq!(router.route_hit("help me with mindfulness").unwrap().rule, "crisis");
        let names: Vec<&str> = router.rules().iter().map(Rule::name).collect();
        assert_eq!(names, vec!["crisis", "mindfulness"]);
    }

    #[test]
    fn test_random_choice_from_pool() {
        let router = RuleRouter::new(vec![pool_rule()]);
        for _ in 0..20 {
            let response = router.route("mindfulness please").unwrap();
            assert!(pool().contains(&response));
        }
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let a = SeededPicker::new(7);
        let b = SeededPicker::new(7);
        let left: Vec<usize> = (0..10).map(|_| a.pick(3)).collect();
        let right: Vec<usize> = (0..10).map(|_| b.pick(3)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|&i| i < 3));
    }

    #[test]
    fn test_rule_validation() {
        assert!(matches!(
            Rule::new("m", Trigger::any_keyword(["x"]), RuleAction::RandomChoice(vec![])),
            Err(SolaceError::EmptyResponsePool(_))
        ));
        assert!(matches!(
            Rule::new(
                "c",
                Trigger::any_keyword(["x"]),
                RuleAction::FormattedList {
                    preamble: String::new(),
                    items: vec![]
                }
            ),
            Err(SolaceError::EmptyResourceList(_))
        ));
        assert!(matches!(
            Rule::new("k", Trigger::any_keyword(["  "]), RuleAction::RandomChoice(pool())),
            Err(SolaceError::NoKeywords(_))
        ));
    }

    #[test]
    fn test_blank_entries_rejected() {
        let blank_prompt = vec!["one".to_string(), " ".to_string()];
        assert!(matches!(
            Rule::new("m", Trigger::any_keyword(["x"]), RuleAction::RandomChoice(blank_prompt)),
            Err(SolaceError::EmptyResponsePool(_))
        ));
        assert!(matches!(
            Rule::new(
                "c",
                Trigger::any_keyword(["x"]),
                RuleAction::FormattedList {
                    preamble: "Here:".to_string(),
                    items: vec![Resource::new("A Line", "111"), Resource::new("", "")]
                }
            ),
            Err(SolaceError::EmptyResourceList(_))
        ));
        assert!(matches!(
            Rule::new(
                "c",
                Trigger::any_keyword(["x"]),
                RuleAction::FormattedList {
                    preamble: String::new(),
                    items: vec![Resource::new("A Line", "  ")]
                }
            ),
            Err(SolaceError::EmptyResourceList(_))
        ));
    }

    #[test]
    fn test_empty_pool_never_panics() {
        assert_eq!(RuleAction::RandomChoice(vec![]).respond(&ThreadRngPicker), None);
    }
}
