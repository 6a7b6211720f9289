use std::fmt::Display;

/// Join two values left-to-right using their default text form.
///
/// Numbers, booleans and chars all read the way `println!("{}")` would
/// print them, so `concat("13", 31)` is `"1331"` and `concat(13.3, "1")`
/// is `"13.31"`.
pub fn concat(left: impl Display, right: impl Display) -> String {
    format!("{left}{right}")
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn canonical_pairs_format_exactly() {
        assert_eq!(concat("13", 31), "1331");
        assert_eq!(concat("1331", '1'), "13311");
        assert_eq!(concat(13.3, "1"), "13.31");
        assert_eq!(concat(false, ""), "false");
        assert_eq!(concat("", true), "true");
        assert_eq!(concat(1331, ""), "1331");
        assert_eq!(concat("", 'A'), "A");
    }

    #[test]
    fn floats_keep_their_shortest_form() {
        assert_eq!(concat(13.30, ""), "13.3");
        assert_eq!(concat(0.5, 0.25), "0.50.25");
    }

    #[test]
    fn negative_numbers_keep_their_sign() {
        assert_eq!(concat(-40, "F"), "-40F");
    }
}
