use regex::{Captures, Regex};
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Links one placeholder token to the pool that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolBinding {
    pub token: &'static str,
    pub pool: &'static str,
    /// Number of distinct values drawn from the pool for this token.
    pub arity: u8,
}

pub type BindingSet = SmallVec<[PoolBinding; 2]>;

/// A parameterized challenge prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectiveTemplate {
    pub label: &'static str,
    pub bindings: BindingSet,
    pub is_time_consuming: bool,
    pub is_difficult: bool,
    pub weight: u32,
}

impl ObjectiveTemplate {
    /// New template with the host defaults: quick, easy, weight 1.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            bindings: SmallVec::new(),
            is_time_consuming: false,
            is_difficult: false,
            weight: 1,
        }
    }

    #[must_use]
    pub fn bind(mut self, token: &'static str, pool: &'static str, arity: u8) -> Self {
        self.bindings.push(PoolBinding { token, pool, arity });
        self
    }

    #[must_use]
    pub const fn time_consuming(mut self) -> Self {
        self.is_time_consuming = true;
        self
    }

    #[must_use]
    pub const fn difficult(mut self) -> Self {
        self.is_difficult = true;
        self
    }

    #[must_use]
    pub const fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn binding(&self, token: &str) -> Option<&PoolBinding> {
        self.bindings.iter().find(|binding| binding.token == token)
    }

    /// Placeholder tokens found in the label.
    #[must_use]
    pub fn tokens(&self) -> Vec<&'static str> {
        placeholder_tokens(self.label)
    }

    /// Substitute drawn values into the label. Tokens without a value are
    /// left untouched.
    #[must_use]
    pub fn render(&self, values: &HashMap<&str, String>) -> String {
        token_pattern()
            .replace_all(self.label, |caps: &Captures<'_>| {
                let token = &caps[0];
                values
                    .get(token)
                    .cloned()
                    .unwrap_or_else(|| token.to_string())
            })
            .into_owned()
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b[A-Z][A-Z0-9_]*[A-Z0-9]\b").expect("placeholder pattern compiles")
    })
}

/// Uppercase placeholder tokens in `label`, in order of first appearance.
///
/// A token is two or more characters of `A-Z`, `0-9` or `_`, starting with a
/// letter and standing alone as a word.
#[must_use]
pub fn placeholder_tokens(label: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = Vec::new();
    for found in token_pattern().find_iter(label) {
        let token = found.as_str();
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}
