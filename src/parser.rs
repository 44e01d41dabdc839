use nom::bytes::complete::tag;
use nom::character::complete::{alphanumeric1, digit1, line_ending, multispace0, space0, space1};
use nom::combinator::{all_consuming, map, map_res};
use nom::error::{convert_error, VerboseError};
use nom::multi::{many0, separated_list};
use nom::sequence::{delimited, terminated, tuple};
use nom::IResult;

use crate::def::{AutomatonDef, Edge};

pub type NomResult<'a, Ret> = IResult<&'a str, Ret, VerboseError<&'a str>>;

/// Description format, one section per line:
///
/// ```text
/// alphabet: a b
/// states: 4
/// terminal: 1 2
/// edges:
/// 0 a 1
/// 1 b 2
/// ```
fn integer(input: &str) -> NomResult<usize> {
    map_res(digit1, |digit_str: &str| digit_str.parse::<usize>())(input)
}

fn symbol(input: &str) -> NomResult<String> {
    map(alphanumeric1, |s: &str| s.to_string())(input)
}

fn line_end(input: &str) -> NomResult<()> {
    map(tuple((space0, line_ending)), |_| ())(input)
}

fn alphabet_line(input: &str) -> NomResult<Vec<String>> {
    delimited(
        tuple((tag("alphabet:"), space0)),
        separated_list(space1, symbol),
        line_end,
    )(input)
}

fn states_line(input: &str) -> NomResult<usize> {
    delimited(tuple((tag("states:"), space0)), integer, line_end)(input)
}

fn terminal_line(input: &str) -> NomResult<Vec<usize>> {
    delimited(
        tuple((tag("terminal:"), space0)),
        separated_list(space1, integer),
        line_end,
    )(input)
}

fn edge_line(input: &str) -> NomResult<Edge> {
    map(
        terminated(tuple((integer, space1, symbol, space1, integer)), multispace0),
        |(from, _, symbol, _, to)| Edge { from, symbol, to },
    )(input)
}

pub fn automaton_def(input: &str) -> NomResult<AutomatonDef> {
    map(
        tuple((
            multispace0,
            alphabet_line,
            states_line,
            terminal_line,
            tuple((tag("edges:"), multispace0)),
            many0(edge_line),
        )),
        |(_, alphabet, state_count, terminal, _, edges)| AutomatonDef {
            alphabet,
            state_count,
            terminal,
            edges,
        },
    )(input)
}

pub fn parse_exact<Ret, Parser: Fn(&str) -> NomResult<Ret>>(
    parser: Parser,
    input: &str,
) -> NomResult<Ret> {
    all_consuming(parser)(input)
}

pub fn unwrap_nom<'a, Ret>(input: &'a str, result: NomResult<'a, Ret>) -> (&'a str, Ret) {
    match result {
        Ok(data) => data,
        Err(e) => match e {
            nom::Err::Incomplete(_) => panic!("Incomplete input"),
            nom::Err::Error(e) | nom::Err::Failure(e) => panic!("{}", convert_error(input, e)),
        },
    }
}
