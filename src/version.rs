//! # Context Value Parsing
//!
//! A context dimension's value (e.g. `centos-7.9`, `fedora`, `rhel-9:beta`)
//! is split into a leading name token and zero or more ordered version
//! parts, on any of `.`, `:`, `-`. Comparisons between parts are numeric
//! when both sides parse as plain integers, lexical otherwise, with the
//! literal `rawhide` always comparing greater than any numeric part.

use std::cmp::Ordering;

/// A parsed context value: a name plus its ordered version parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub name: String,
    pub parts: Vec<String>,
}

impl Version {
    /// Parses a raw dimension value string into a [`Version`].
    ///
    /// The first run of characters up to the first separator becomes
    /// `name`; everything after is split on separators into `parts`. A
    /// value with no separators has no parts at all (e.g. `fedora`).
    pub fn parse(raw: &str) -> Version {
        let mut parts: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut name: Option<String> = None;

        for c in raw.chars() {
            if c == '.' || c == ':' || c == '-' {
                if name.is_none() {
                    name = Some(std::mem::take(&mut current));
                } else {
                    let part = std::mem::take(&mut current);
                    if !part.is_empty() {
                        parts.push(part);
                    }
                }
            } else {
                current.push(c);
            }
        }
        match name {
            Some(n) => {
                if !current.is_empty() {
                    parts.push(current);
                }
                Version { name: n, parts }
            }
            None => Version {
                name: current,
                parts: Vec::new(),
            },
        }
    }

    fn name_eq(&self, other: &Version, case_insensitive: bool) -> bool {
        if case_insensitive {
            self.name.eq_ignore_ascii_case(&other.name)
        } else {
            self.name == other.name
        }
    }

    /// Compares one part from the left side against the corresponding part
    /// on the right. A missing left part is always "smaller" than any
    /// present right part.
    fn compare_part(left: Option<&str>, right: &str, case_insensitive: bool) -> Ordering {
        let left = match left {
            None => return Ordering::Less,
            Some(l) => l,
        };
        compare_tokens(left, right, case_insensitive)
    }

    /// True if `self` equals `other`: names match and every one of the
    /// right side's parts equals the corresponding left part (the left may
    /// carry additional trailing parts).
    pub fn matches_eq(&self, other: &Version, case_insensitive: bool) -> bool {
        if !self.name_eq(other, case_insensitive) {
            return false;
        }
        if self.parts.len() < other.parts.len() {
            return false;
        }
        other
            .parts
            .iter()
            .enumerate()
            .all(|(i, p)| compare_tokens(&self.parts[i], p, case_insensitive) == Ordering::Equal)
    }

    /// Ordering comparison against `other`, defined only when names match.
    pub fn compare_ord(&self, other: &Version, case_insensitive: bool) -> Option<Ordering> {
        if !self.name_eq(other, case_insensitive) {
            return None;
        }
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let l = self.parts.get(i).map(|s| s.as_str());
            let r = other.parts.get(i).map(|s| s.as_str());
            let ord = match r {
                None => Ordering::Greater,
                Some(r) => Self::compare_part(l, r, case_insensitive),
            };
            if ord != Ordering::Equal {
                return Some(ord);
            }
        }
        Some(Ordering::Equal)
    }

    /// Major (first) version part, if any.
    pub fn major(&self) -> Option<&str> {
        self.parts.first().map(|s| s.as_str())
    }

    /// True when names match and the major (first) version part matches —
    /// the guard that makes a minor-scoped (`~op`) comparison defined.
    pub fn major_matches(&self, other: &Version, case_insensitive: bool) -> bool {
        if !self.name_eq(other, case_insensitive) {
            return false;
        }
        match (self.parts.first(), other.parts.first()) {
            (Some(a), Some(b)) => compare_tokens(a, b, case_insensitive) == Ordering::Equal,
            (None, None) => true,
            _ => false,
        }
    }
}

/// Compares two opaque version tokens: numerically if both parse as plain
/// unsigned integers, lexically otherwise. The literal `rawhide` compares
/// greater than any numeric token and equal to another `rawhide`.
fn compare_tokens(a: &str, b: &str, case_insensitive: bool) -> Ordering {
    let fold = |s: &str| -> String {
        if case_insensitive {
            s.to_ascii_lowercase()
        } else {
            s.to_string()
        }
    };
    let (a_f, b_f) = (fold(a), fold(b));

    let a_rawhide = a_f == "rawhide";
    let b_rawhide = b_f == "rawhide";
    if a_rawhide || b_rawhide {
        return match (a_rawhide, b_rawhide) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => unreachable!(),
        };
    }

    match (a_f.parse::<i64>(), b_f.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a_f.cmp(&b_f),
    }
}
