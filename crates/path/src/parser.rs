//! A `nom`-based parser for path expressions.
use super::ast::{Anchor, PathExpr};
use super::syntax::PathSyntax;
use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_while},
    character::complete::char,
    combinator::{map, opt},
    multi::separated_list1,
};

/// Parses `input` with the default syntax.
pub fn parse_path(input: &str) -> PathExpr {
    parse_path_with(input, &PathSyntax::default())
}

/// Parses `input` with a custom syntax.
///
/// Parsing never fails: the remainder after the root marker is split on the
/// separator like a plain string split, so empty field names are kept.
pub fn parse_path_with(input: &str, syntax: &PathSyntax) -> PathExpr {
    let (rest, anchor) = if syntax.root_marker.is_empty() {
        (input, Anchor::Local)
    } else {
        match root_marker(input, &syntax.root_marker) {
            Ok(parsed) => parsed,
            Err(_) => (input, Anchor::Local),
        }
    };

    let segments = match segments(rest, syntax.separator) {
        Ok((_, names)) => names.into_iter().map(str::to_string).collect(),
        // Unreachable with complete parsers; keep the whole remainder as one name.
        Err(_) => vec![rest.to_string()],
    };

    PathExpr { anchor, segments }
}

// --- Combinators ---

fn root_marker<'a>(input: &'a str, marker: &str) -> IResult<&'a str, Anchor> {
    map(opt(tag(marker)), |found: Option<&str>| match found {
        Some(_) => Anchor::Root,
        None => Anchor::Local,
    })
    .parse(input)
}

fn segments(input: &str, separator: char) -> IResult<&str, Vec<&str>> {
    separated_list1(char(separator), take_while(move |c: char| c != separator)).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path() {
        let path = parse_path("company.name");
        assert_eq!(path.anchor(), Anchor::Local);
        assert_eq!(path.segments(), ["company", "name"]);
    }

    #[test]
    fn test_root_marker_is_stripped() {
        let path = parse_path("$.socialNetworks.twitter");
        assert_eq!(path.anchor(), Anchor::Root);
        assert_eq!(path.segments(), ["socialNetworks", "twitter"]);
    }

    #[test]
    fn test_dollar_without_dot_is_a_local_key() {
        let path = parse_path("$price");
        assert_eq!(path.anchor(), Anchor::Local);
        assert_eq!(path.segments(), ["$price"]);
    }

    #[test]
    fn test_empty_segments_are_kept() {
        assert_eq!(parse_path("a..b").segments(), ["a", "", "b"]);
        assert_eq!(parse_path("").segments(), [""]);
        assert_eq!(parse_path("$.").segments(), [""]);
    }

    #[test]
    fn test_custom_syntax() {
        let syntax = PathSyntax {
            root_marker: "/".to_string(),
            separator: '/',
        };
        let path = parse_path_with("/a/b", &syntax);
        assert!(path.is_rooted());
        assert_eq!(path.segments(), ["a", "b"]);

        let local = parse_path_with("a.b/c", &syntax);
        assert!(!local.is_rooted());
        assert_eq!(local.segments(), ["a.b", "c"]);
    }

    #[test]
    fn test_empty_marker_disables_root_anchor() {
        let syntax = PathSyntax {
            root_marker: String::new(),
            separator: '.',
        };
        let path = parse_path_with("$.a", &syntax);
        assert!(!path.is_rooted());
        assert_eq!(path.segments(), ["$", "a"]);
    }
}
