//! Last-seen-value cache for keyed side effects.

/// Lets an effect act only when its key differs from the previous run
#[derive(Debug, Clone)]
pub struct EffectGate<T> {
    last: Option<T>,
}

impl<T> Default for EffectGate<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Clone> EffectGate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True (and remembers `current`) if `current` differs from the last key
    pub fn changed(&mut self, current: &T) -> bool {
        if self.last.as_ref() == Some(current) {
            return false;
        }
        self.last = Some(current.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_passes() {
        let mut gate = EffectGate::new();
        assert!(gate.changed(&0u32));
    }

    #[test]
    fn test_repeats_are_blocked() {
        let mut gate = EffectGate::new();
        assert!(gate.changed(&Some(1u32)));
        assert!(!gate.changed(&Some(1)));
        assert!(gate.changed(&Some(2)));
        assert!(gate.changed(&None));
        assert!(!gate.changed(&None));
    }
}
