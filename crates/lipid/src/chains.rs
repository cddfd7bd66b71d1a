use crate::{Chain, Chains};

impl Chain {
    pub(crate) fn new(carbons: impl Into<String>, double_bonds: impl Into<String>) -> Self {
        let carbons = carbons.into();
        let double_bonds = double_bonds.into();
        Self {
            carbons,
            double_bonds,
        }
    }

    #[must_use]
    pub fn carbons(&self) -> &str {
        &self.carbons
    }

    #[must_use]
    pub fn double_bonds(&self) -> &str {
        &self.double_bonds
    }
}

impl Chains {
    pub const CAPACITY: usize = 3;

    /// Fills the next slot (which may be left empty), handing back anything that doesn't fit
    pub(crate) fn push(&mut self, slot: Option<Chain>) -> Result<(), Option<Chain>> {
        if self.filled == Self::CAPACITY {
            return Err(slot);
        }
        self.slots[self.filled] = slot;
        self.filled += 1;
        Ok(())
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Chain> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub const fn slots(&self) -> &[Option<Chain>; Self::CAPACITY] {
        &self.slots
    }

    /// The populated slots, in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Chain> {
        self.slots.iter().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'c> IntoIterator for &'c Chains {
    type Item = &'c Chain;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'c, Option<Chain>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}
