// src/render/behavior.rs

//! Tokenizer for render-behaviour specs.
//!
//! A spec is a comma-separated list of `map` or `map:rotation` tokens,
//! e.g. `overview,caves:tl,caves:br`. Whitespace around tokens and empty
//! tokens are ignored.

/// One `map[:rotation]` entry of a behaviour spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorToken {
    pub map: String,
    /// Raw rotation name, `None` for "every rotation".
    pub rotation: Option<String>,
}

pub fn parse_behavior_spec(spec: &str) -> Vec<BehaviorToken> {
    spec.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once(':') {
            Some((map, rotation)) => BehaviorToken {
                map: map.trim().to_string(),
                rotation: Some(rotation.trim().to_string()).filter(|r| !r.is_empty()),
            },
            None => BehaviorToken {
                map: token.to_string(),
                rotation: None,
            },
        })
        .collect()
}
