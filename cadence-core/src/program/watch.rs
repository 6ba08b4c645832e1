//! Change-detecting value cell

/// A value whose writes report whether anything changed
///
/// The engine notifies observers only when [`Watched::set`] returns `true`,
/// so writing the current value again stays silent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Watched<T> {
    value: T,
}

impl<T: Copy + PartialEq> Watched<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> T {
        self.value
    }

    /// Store `value`, returning `true` if it differs from the current one
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_change() {
        let mut cell = Watched::new(3);
        assert!(!cell.set(3));
        assert!(cell.set(4));
        assert_eq!(cell.get(), 4);
        assert!(!cell.set(4));
    }

    #[test]
    fn test_option_values() {
        let mut index: Watched<Option<usize>> = Watched::new(None);
        assert!(index.set(Some(0)));
        assert!(!index.set(Some(0)));
        assert!(index.set(None));
    }
}
