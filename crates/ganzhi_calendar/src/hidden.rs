//! Hidden-stem lookup table with per-branch overrides.

use std::collections::BTreeMap;

use crate::branch::Branch;
use crate::error::CalendarError;
use crate::stem::Stem;

/// Hidden stems per branch: the built-in table plus any overrides
/// supplied by an external delegate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenStemTable {
    overrides: BTreeMap<u8, Vec<Stem>>,
}

impl HiddenStemTable {
    /// The built-in table with no overrides.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Replace the hidden stems of one branch.
    pub fn set(&mut self, branch: Branch, stems: Vec<Stem>) {
        self.overrides.insert(branch.index(), stems);
    }

    /// Replace hidden stems from symbol pairs, failing on any unknown symbol.
    ///
    /// Nothing is applied unless every entry parses.
    pub fn apply_symbols<'a, I, S>(&mut self, entries: I) -> Result<(), CalendarError>
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut parsed = Vec::new();
        for (branch, stems) in entries {
            let branch = Branch::from_symbol(branch)?;
            let stems = stems
                .into_iter()
                .map(Stem::from_symbol)
                .collect::<Result<Vec<_>, _>>()?;
            parsed.push((branch, stems));
        }
        for (branch, stems) in parsed {
            self.set(branch, stems);
        }
        Ok(())
    }

    /// Hidden stems of a branch, override first.
    pub fn get(&self, branch: Branch) -> &[Stem] {
        self.overrides
            .get(&branch.index())
            .map(Vec::as_slice)
            .unwrap_or_else(|| branch.hidden_stems())
    }

    /// Whether any branch has been overridden.
    pub fn is_builtin(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_through() {
        let t = HiddenStemTable::builtin();
        assert!(t.is_builtin());
        assert_eq!(t.get(Branch::Yin), &[Stem::Jia, Stem::Bing, Stem::Wu]);
    }

    #[test]
    fn override_one_branch() {
        let mut t = HiddenStemTable::builtin();
        t.apply_symbols([("子", ["癸"])]).unwrap();
        assert_eq!(t.get(Branch::Zi), &[Stem::Gui]);
        assert_eq!(t.get(Branch::Chou), Branch::Chou.hidden_stems());
    }

    #[test]
    fn bad_symbol_applies_nothing() {
        let mut t = HiddenStemTable::builtin();
        let err = t.apply_symbols([("子", vec!["癸"]), ("X", vec!["甲"])]);
        assert!(matches!(err, Err(CalendarError::InvalidInput(_))));
        assert!(t.is_builtin());
    }
}
