//! Parameter tables: per-(h, m) start vectors and √5 endomorphisms.
//!
//! The endomorphism coefficients and starting vectors are published data for
//! the curves y² = x⁵ + h with h ∈ {2, 3, 31, 10} and multipliers
//! m ∈ {1, 3, 7, 11}. They are a closed enumeration, carried as TOML:
//!
//! ```toml
//! [[params]]
//! h = 10
//! m = 3
//! start_vector = ["…", "…", "…", "…"]      # decimal big integers
//!
//! [[params.polynomials]]                     # exactly four, coordinate order
//! terms = [{ coeff = "50", exps = [4, 0, 0, 0] }]
//! ```
//!
//! Validation happens entirely at load time, before any iteration: supported
//! h and m, exactly four start coordinates and four polynomials, exact
//! decimal parsing, no duplicate (h, m) keys. A record owns both its start
//! vector and its map, so a vector can never be paired with another curve's
//! polynomials.

use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use rug::Integer;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::poly::{Poly4, Term};
use crate::surface::{Endomorphism, Point};

/// Curves the published tables cover: y² = x⁵ + h.
pub const SUPPORTED_H: [u32; 4] = [2, 3, 31, 10];

/// Multipliers the published tables cover.
pub const SUPPORTED_M: [u32; 4] = [1, 3, 7, 11];

// ── TOML schema ─────────────────────────────────────────────────

/// Top-level file: a list of `[[params]]` records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamFile {
    pub params: Vec<ParamRecord>,
}

/// One (h, m) record as it appears on disk. Big integers are decimal
/// strings; TOML integers would silently cap at i64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamRecord {
    pub h: u32,
    pub m: u32,
    pub start_vector: [String; 4],
    pub polynomials: Vec<PolyDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyDef {
    pub terms: Vec<TermDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDef {
    pub coeff: String,
    pub exps: [u32; 4],
}

// ── Validated in-memory form ────────────────────────────────────

/// A validated (h, m) selection: the 4·m·Q starting point and the √5 map
/// for the same curve. Read-only for the lifetime of every test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSet {
    pub h: u32,
    pub m: u32,
    pub start: Point,
    pub map: Endomorphism,
}

impl ParamSet {
    pub fn new(h: u32, m: u32, start: Point, map: Endomorphism) -> Result<Self> {
        ensure!(
            SUPPORTED_H.contains(&h),
            "unsupported curve h = {h} (supported: {SUPPORTED_H:?})"
        );
        ensure!(
            SUPPORTED_M.contains(&m),
            "unsupported multiplier m = {m} (supported: {SUPPORTED_M:?})"
        );
        Ok(ParamSet { h, m, start, map })
    }
}

/// The (h, m)-keyed lookup table.
#[derive(Debug, Clone)]
pub struct ParamTable {
    sets: Vec<ParamSet>,
}

impl ParamTable {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading parameter table {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("parsing parameter table {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ParamFile = toml::from_str(text).context("malformed parameter TOML")?;
        ensure!(!file.params.is_empty(), "parameter table is empty");

        let mut sets: Vec<ParamSet> = Vec::with_capacity(file.params.len());
        for rec in &file.params {
            if sets.iter().any(|s| s.h == rec.h && s.m == rec.m) {
                bail!("duplicate parameter record for (h = {}, m = {})", rec.h, rec.m);
            }
            sets.push(build_set(rec)?);
        }
        info!(records = sets.len(), "parameter table loaded");
        Ok(ParamTable { sets })
    }

    /// Look up the record for an (h, m) selection; the only way to obtain
    /// one, so mismatched vector/map pairs cannot be constructed.
    pub fn get(&self, h: u32, m: u32) -> Result<&ParamSet> {
        self.sets
            .iter()
            .find(|s| s.h == h && s.m == m)
            .with_context(|| {
                let available: Vec<(u32, u32)> = self.sets.iter().map(|s| (s.h, s.m)).collect();
                format!(
                    "no parameter record for (h = {h}, m = {m}); \
                     table provides {available:?}, supported h {SUPPORTED_H:?}, m {SUPPORTED_M:?}"
                )
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

fn build_set(rec: &ParamRecord) -> Result<ParamSet> {
    let coords: [Integer; 4] = [
        parse_int(&rec.start_vector[0], rec, "start_vector[0]")?,
        parse_int(&rec.start_vector[1], rec, "start_vector[1]")?,
        parse_int(&rec.start_vector[2], rec, "start_vector[2]")?,
        parse_int(&rec.start_vector[3], rec, "start_vector[3]")?,
    ];

    ensure!(
        rec.polynomials.len() == 4,
        "(h = {}, m = {}): expected 4 endomorphism polynomials, got {}",
        rec.h,
        rec.m,
        rec.polynomials.len()
    );

    let mut polys: Vec<Poly4> = Vec::with_capacity(4);
    for (i, def) in rec.polynomials.iter().enumerate() {
        let mut terms = Vec::with_capacity(def.terms.len());
        for t in &def.terms {
            let coeff = parse_int(&t.coeff, rec, &format!("polynomial {} term", i + 1))?;
            terms.push(Term::new(coeff, t.exps));
        }
        polys.push(Poly4::new(terms));
    }
    let polys: [Poly4; 4] = polys
        .try_into()
        .ok()
        .context("endomorphism polynomial count")?;

    ParamSet::new(rec.h, rec.m, Point::new(coords), Endomorphism::new(polys))
}

fn parse_int(s: &str, rec: &ParamRecord, what: &str) -> Result<Integer> {
    s.trim().parse::<Integer>().map_err(|e| {
        anyhow::anyhow!(
            "(h = {}, m = {}): {} is not a decimal integer ({:?}): {e}",
            rec.h,
            rec.m,
            what,
            s
        )
    })
}
