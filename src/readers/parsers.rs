//! Nom parser combinators for banner and header lines
//!
//! The block engine works on whole lines, but a handful of single lines
//! carry structure of their own: the report banner's flow units and version,
//! the interface file's entity counts, and the input file's bracketed
//! section tags. Those get proper parsers here.

// external crates
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{char, space0, space1, u16, u32};
use nom::multi::many1;
use nom::sequence::{delimited, preceded, separated_pair, tuple};
use nom::IResult;

/// Value after a dotted leader, e.g. `Flow Units ....... CFS` -> `CFS`
///
/// The banner pads labels with a run of dots before the value, so consume
/// up to and through the dots and trim what is left.
pub fn dotted_leader_value(i: &str) -> IResult<&str, &str> {
    let (value, _) = tuple((take_until("."), many1(char('.')), space0))(i)?;
    Ok(("", value.trim()))
}

/// Major.minor following a `VERSION` tag anywhere in the line
///
/// The report banner reads `EPA STORM WATER MANAGEMENT MODEL - VERSION 5.1
/// (Build 5.1.013)`.
pub fn banner_version(i: &str) -> IResult<&str, (u16, u16)> {
    preceded(
        tuple((take_until("VERSION"), tag("VERSION"), space1)),
        separated_pair(u16, char('.'), u16),
    )(i)
}

/// Leading integer of an interface count line
///
/// Count lines read `2  - number of nodes as listed below:`.
pub fn leading_count(i: &str) -> IResult<&str, usize> {
    let (rest, count) = preceded(space0, u32)(i)?;
    Ok((rest, count as usize))
}

/// Tag name inside a bracketed section marker, e.g. `[JUNCTIONS]`
pub fn section_tag(i: &str) -> IResult<&str, &str> {
    delimited(char('['), take_until("]"), char(']'))(i)
}

/// Quick check for a bracketed section marker line
pub fn is_section_tag(i: &str) -> bool {
    i.starts_with('[')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  Flow Units ............... CFS", "CFS")]
    #[case("  Flow Units ... LPS  ", "LPS")]
    fn dotted_leaders_yield_the_value(#[case] line: &str, #[case] expected: &str) {
        let (_, value) = dotted_leader_value(line).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn version_parses_from_the_banner() {
        let line = "  EPA STORM WATER MANAGEMENT MODEL - VERSION 5.1 (Build 5.1.013)";
        let (_, version) = banner_version(line).unwrap();
        assert_eq!(version, (5, 1));
    }

    #[test]
    fn count_lines_parse_their_leading_integer() {
        let line = "2  - number of nodes as listed below:";
        let (_, count) = leading_count(line).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn count_line_without_integer_fails() {
        assert!(leading_count("no count here").is_err());
    }

    #[rstest]
    #[case("[JUNCTIONS]", "JUNCTIONS")]
    #[case("[Polygons]", "Polygons")]
    fn section_tags_unbracket(#[case] line: &str, #[case] expected: &str) {
        let (_, name) = section_tag(line).unwrap();
        assert_eq!(name, expected);
    }
}
