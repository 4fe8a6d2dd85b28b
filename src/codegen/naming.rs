//! Identifier casing
//!
//! A context-free string transform: split an XML name into words, re-join
//! in the requested convention. `Original` is the identity transform.

use serde::Serialize;

/// Casing applied to generated field and type identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NamingConvention {
    /// `myFieldName`
    #[default]
    Camel,
    /// `MyFieldName`
    Pascal,
    /// The source name, untouched
    Original,
    /// `my-field-name`
    Kebab,
}

impl NamingConvention {
    /// Apply this convention to an identifier
    pub fn apply(&self, name: &str) -> String {
        if *self == NamingConvention::Original {
            return name.to_string();
        }

        let words = split_words(name);
        match self {
            NamingConvention::Camel => words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
                .collect(),
            NamingConvention::Pascal => words.iter().map(|w| capitalize(w)).collect(),
            NamingConvention::Kebab => words.join("-"),
            NamingConvention::Original => unreachable!(),
        }
    }
}

/// Split an identifier into lowercase words on separators and on
/// lower-to-upper case transitions
fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if c == '-' || c == '_' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
        } else {
            if c.is_uppercase() && prev_lower && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
            prev_lower = c.is_lowercase() || c.is_numeric();
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
