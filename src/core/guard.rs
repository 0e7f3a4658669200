//! Guard predicates for deciding whether a value is accepted.
//!
//! Guards are pure boolean functions. Handlers use them to decide which
//! requests they accept, without side effects.

/// Pure predicate over a borrowed value.
///
/// # Example
///
/// ```rust
/// use switchboard::core::Guard;
///
/// let is_nut = Guard::new(|food: &String| food == "Nut");
///
/// assert!(is_nut.check(&"Nut".to_string()));
/// assert!(!is_nut.check(&"Banana".to_string()));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that accepts everything.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check if the guard accepts this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: PartialEq + Send + Sync + 'static> Guard<T> {
    /// Guard that accepts values equal to `expected`.
    ///
    /// ```rust
    /// use switchboard::core::Guard;
    ///
    /// let guard = Guard::equals(3);
    /// assert!(guard.check(&3));
    /// assert!(!guard.check(&4));
    /// ```
    pub fn equals(expected: T) -> Self {
        Self::new(move |value| *value == expected)
    }
}

impl<T: ?Sized> std::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Food {
        Nut,
        Banana,
        MeatBall,
        Coffee,
    }

    #[test]
    fn guard_allows_matching_values() {
        let guard = Guard::new(|f: &Food| matches!(f, Food::Nut));

        assert!(guard.check(&Food::Nut));
        assert!(!guard.check(&Food::Banana));
    }

    #[test]
    fn guard_is_deterministic() {
        let food = Food::MeatBall;
        let guard = Guard::new(|f: &Food| matches!(f, Food::MeatBall));

        let result1 = guard.check(&food);
        let result2 = guard.check(&food);

        assert_eq!(result1, result2);
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard = Guard::new(|f: &Food| matches!(f, Food::Nut | Food::Banana));

        assert!(guard.check(&Food::Nut));
        assert!(guard.check(&Food::Banana));
        assert!(!guard.check(&Food::MeatBall));
        assert!(!guard.check(&Food::Coffee));
    }

    #[test]
    fn equals_guard_compares_by_value() {
        let guard = Guard::equals(Food::Banana);

        assert!(guard.check(&Food::Banana));
        assert!(!guard.check(&Food::Coffee));
    }

    #[test]
    fn always_guard_accepts_everything() {
        let guard: Guard<str> = Guard::always();

        assert!(guard.check("anything"));
        assert!(guard.check(""));
    }
}
