//! Reflector: turns the signal around at the end of the rotor stack.

use crate::alphabet::Letter;
use crate::error::Result;
use crate::registry::ReflectorSpec;

/// An installed reflector. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    spec: &'static ReflectorSpec,
}

impl Reflector {
    /// # Errors
    /// `ComponentError::UnknownReflector` if `name` is not in the registry.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            spec: ReflectorSpec::lookup(name)?,
        })
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// The partner of `letter`. Never `letter` itself.
    pub fn reflect(&self, letter: Letter) -> Letter {
        self.spec.wiring.forward(letter)
    }

    /// The 13 reciprocal pairs, each listed once with the smaller letter first.
    #[cfg(test)]
    fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .map(|l| (l, self.reflect(l)))
            .filter(|(a, b)| a < b)
            .collect()
    }
}
