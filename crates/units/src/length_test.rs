mod tests {
    use crate::length::Length;

    #[test]
    fn test_orbit_equality_is_exact() {
        let a = Length::from_au(4.0);
        let b = Length::from_au(4.0);
        assert_eq!(a, b);
        assert_ne!(a, Length::from_au(4.000001));
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let length1 = Length::from_au(5.0);
        let length2 = Length::from_au(3.0);

        assert_eq!((length1 + length2).to_au(), 8.0);
        assert_eq!((length1 - length2).to_au(), 2.0);
        assert!(length2 < length1);
    }
}
