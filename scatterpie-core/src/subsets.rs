//! Exact-membership partitions of overlapping groups, as drawn by Euler/Venn diagrams.
//!
//! Keys are strings of `'0'`/`'1'`, one char per group: `"101"` holds the elements found in groups 0
//! and 2 but not in group 1.

use std::{collections::{BTreeMap, BTreeSet}, fmt, ops::Deref};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use tsify::{declare, Tsify};

use crate::error::SubsetError;

/// More groups than this would mean millions of keys.
pub const MAX_GROUPS: usize = 20;

#[declare]
pub type SubsetsMap<T> = BTreeMap<String, BTreeSet<T>>;

#[derive(Clone, Debug, PartialEq, Serialize, Tsify)]
pub struct Subsets<T> {
    pub all: SubsetsMap<T>,
    pub n: usize,
}

impl<T> Deref for Subsets<T> {
    type Target = SubsetsMap<T>;
    fn deref(&self) -> &Self::Target {
        &self.all
    }
}

/// Subset size: a raw count, or a share of the union.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(untagged)]
pub enum Size {
    Count(usize),
    Fraction(f64),
}

impl Size {
    pub fn value(&self) -> f64 {
        match *self {
            Size::Count(n) => n as f64,
            Size::Fraction(f) => f,
        }
    }
}

/// Shortest round-trip digits, keeping a trailing ".0" on whole numbers; exponents are signed and
/// at least two digits wide (`5e-05`, `1e+16`).
fn fmt_fraction(v: f64) -> String {
    let s = format!("{:?}", v);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Count(n) => write!(f, "{}", n),
            Size::Fraction(v) => write!(f, "{}", fmt_fraction(*v)),
        }
    }
}

impl<T> Subsets<T> {
    /// Key for the `m`-th pattern: `m` in binary, zero-padded to `n` chars.
    pub fn key(m: usize, n: usize) -> String {
        format!("{:0width$b}", m, width = n)
    }

    /// Key with only group `idx` set.
    pub fn single_key(idx: usize, n: usize) -> String {
        (0..n).map(|i| if i == idx { '1' } else { '0' }).collect()
    }

    /// All 2^n - 1 non-empty keys, in increasing binary order.
    pub fn keys(n: usize) -> Result<impl Iterator<Item = String>, SubsetError> {
        if n > MAX_GROUPS {
            return Err(SubsetError::TooManyGroups(n));
        }
        Ok((1..1usize << n).map(move |m| Self::key(m, n)))
    }
}

impl<T: Ord + Clone> Subsets<T> {
    pub fn new<G, I>(groups: G) -> Result<Self, SubsetError>
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let sets: Vec<BTreeSet<T>> = groups.into_iter().map(|g| g.into_iter().collect()).collect();
        let n = sets.len();
        let keys = Self::keys(n)?;
        let union: BTreeSet<T> = sets.iter().flatten().cloned().collect();
        let all: SubsetsMap<T> = keys.map(|key| {
            let value: BTreeSet<T> = union
                .iter()
                .filter(|&elem| {
                    key.chars().zip(&sets).all(|(bit, set)| (bit == '1') == set.contains(elem))
                })
                .cloned()
                .collect();
            (key, value)
        }).collect();
        debug!(
            "{} groups, union size {}: {}",
            n,
            union.len(),
            all.iter().map(|(k, v)| format!("{}: {}", k, v.len())).join(", "),
        );
        Ok(Subsets { all, n })
    }

    /// Union of all subsets (equal to the union of the input groups).
    pub fn union(&self) -> BTreeSet<T> {
        self.all.values().flatten().cloned().collect()
    }
}

impl<T: Ord> Subsets<T> {
    /// Cardinality of each subset; with `normalize`, as a fraction of the union's size (all zeros
    /// when the union is empty).
    pub fn sizes(&self, normalize: bool) -> BTreeMap<String, Size> {
        let total: usize = self.all.values().map(BTreeSet::len).sum();
        self.all.iter().map(|(key, set)| {
            let size = if !normalize {
                Size::Count(set.len())
            } else if total == 0 {
                Size::Fraction(0.)
            } else {
                Size::Fraction(set.len() as f64 / total as f64)
            };
            (key.clone(), size)
        }).collect()
    }

    /// Size label for each key; single-group keys are prefixed with that group's name and a line
    /// break when `names` are given.
    pub fn labels<S: AsRef<str>>(&self, names: Option<&[S]>, normalize: bool) -> Result<BTreeMap<String, String>, SubsetError> {
        let mut prefixes: BTreeMap<String, String> = BTreeMap::new();
        if let Some(names) = names {
            if names.len() != self.n {
                return Err(SubsetError::GroupCountMismatch { expected: self.n, provided: names.len() });
            }
            for (idx, name) in names.iter().enumerate() {
                prefixes.insert(Self::single_key(idx, self.n), format!("{}\n", name.as_ref()));
            }
        }
        Ok(
            self.sizes(normalize)
                .into_iter()
                .map(|(key, size)| {
                    let prefix = prefixes.remove(&key).unwrap_or_default();
                    (key, format!("{}{}", prefix, size))
                })
                .collect()
        )
    }
}
