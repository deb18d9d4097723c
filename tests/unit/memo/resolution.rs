//! Tests for resolution outcomes and delegation combinators

#[cfg(test)]
mod tests {
    use searchkit::memo::resolution::{Delegation, Resolution};

    fn delegation(resolution: Resolution<char, u32>) -> Delegation<char, u32> {
        match resolution {
            Resolution::Delegate(delegation) => delegation,
            Resolution::Immediate(value) => unreachable!("expected a delegation, got {value}"),
        }
    }

    // Tests immediate values carry no dependencies
    // Verified by wrapping immediate values in a delegation
    #[test]
    fn test_immediate() {
        let resolution: Resolution<char, u32> = Resolution::immediate(7);
        assert!(matches!(resolution, Resolution::Immediate(7)));
    }

    // Tests forward passes the single value through unchanged
    // Verified by transforming the value in forward
    #[test]
    fn test_forward() {
        let forward = delegation(Resolution::forward('a'));
        assert_eq!(forward.required(), &['a']);
        assert_eq!(forward.combine(vec![12]), 12);
    }

    // Tests map applies its transform to the one value
    // Verified by ignoring the transform
    #[test]
    fn test_map() {
        let mapped = delegation(Resolution::map('a', |value| value * 3));
        assert_eq!(mapped.combine(vec![5]), 15);
    }

    // Tests combine receives values in listed order
    // Verified by swapping the two values before combining
    #[test]
    fn test_combine_order() {
        let combined = delegation(Resolution::combine('a', 'b', |a, b| a * 10 + b));
        assert_eq!(combined.required(), &['a', 'b']);
        assert_eq!(combined.combine(vec![4, 2]), 42);
    }

    // Tests all depends on every listed state
    // Verified by dropping the last state from the required list
    #[test]
    fn test_all() {
        let summed = delegation(Resolution::all(['x', 'y', 'z'], |values| values.iter().sum()));
        assert_eq!(summed.required(), &['x', 'y', 'z']);
        assert_eq!(summed.combine(vec![1, 2, 3]), 6);
    }

    // Tests a delegation with no requirements combines an empty list
    // Verified by requiring at least one value
    #[test]
    fn test_empty_delegation() {
        let empty: Delegation<char, u32> = Delegation::new(Vec::new(), |values| values.len() as u32 + 9);
        assert!(empty.required().is_empty());
        assert!(format!("{empty:?}").contains("Delegation"));
        assert_eq!(empty.combine(Vec::new()), 9);
    }

    // Tests a map delegation given no value panics instead of inventing one
    // Verified by substituting a default value for the missing input
    #[test]
    #[should_panic(expected = "exactly one value per required state")]
    fn test_map_requires_its_value() {
        let mapped = delegation(Resolution::map('a', |value| value + 1));
        mapped.combine(Vec::new());
    }
}
