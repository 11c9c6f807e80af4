//! Parser for the textual encoding
//!
//! ```text
//! <states> / <alphabet> / <transitions> / <initial state> / <accepting states>
//! ```
//!
//! where states are lists of integers, the alphabet is a list of characters and
//! transitions are `from, symbol, to` triples separated by `;`. Whitespace around any
//! token is ignored, the accepting states (including the preceding `/`) may be omitted.
use ariadne::{Config, Label, Report, ReportKind, Source};
use chumsky::{error::SimpleReason, prelude::*};
use itertools::Itertools;

use crate::FsmError;

/// The components of an encoded machine, before any ids are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEncoding {
    pub states: Vec<u32>,
    pub alphabet: Vec<char>,
    pub transitions: Vec<(u32, Option<char>, u32)>,
    pub initial: u32,
    pub accepting: Vec<u32>,
}

impl TryFrom<&str> for RawEncoding {
    type Error = FsmError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parser()
            .parse(value)
            .map_err(|errors| FsmError::MalformedEncoding(build_error_report(value, errors)))
    }
}

fn whitespace() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_whitespace()).repeated().ignored()
}

fn state_id() -> impl Parser<char, u32, Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|digits, span| {
            digits
                .parse::<u32>()
                .map_err(|err| Simple::custom(span, format!("invalid state id {digits}: {err}")))
        })
        .labelled("state id")
}

fn state_list() -> impl Parser<char, Vec<u32>, Error = Simple<char>> + Clone {
    state_id().padded().repeated()
}

fn symbol() -> impl Parser<char, char, Error = Simple<char>> + Clone {
    filter(|c: &char| !c.is_whitespace() && !matches!(c, '/' | ',' | ';')).labelled("symbol")
}

fn alphabet() -> impl Parser<char, Vec<char>, Error = Simple<char>> + Clone {
    let separator = filter(|c: &char| c.is_whitespace()).repeated().at_least(1);
    whitespace()
        .ignore_then(symbol().separated_by(separator).allow_trailing())
        .then_ignore(whitespace())
}

fn transition() -> impl Parser<char, (u32, Option<char>, u32), Error = Simple<char>> + Clone {
    state_id()
        .padded()
        .then_ignore(just(','))
        .then(
            whitespace()
                .ignore_then(symbol().or_not())
                .then_ignore(whitespace()),
        )
        .then_ignore(just(','))
        .then(state_id().padded())
        .map(|((from, symbol), to)| (from, symbol, to))
        .labelled("transition")
}

fn transitions() -> impl Parser<char, Vec<(u32, Option<char>, u32)>, Error = Simple<char>> + Clone
{
    whitespace()
        .ignore_then(transition().separated_by(just(';')).allow_trailing())
        .then_ignore(whitespace())
}

pub(crate) fn parser() -> impl Parser<char, RawEncoding, Error = Simple<char>> {
    state_list()
        .then_ignore(just('/'))
        .then(alphabet())
        .then_ignore(just('/'))
        .then(transitions())
        .then_ignore(just('/'))
        .then(state_id().padded())
        .then(just('/').ignore_then(state_list()).or_not())
        .then_ignore(whitespace())
        .then_ignore(end())
        .map(
            |((((states, alphabet), transitions), initial), accepting)| RawEncoding {
                states,
                alphabet,
                transitions,
                initial,
                accepting: accepting.unwrap_or_default(),
            },
        )
}

const EMPTY_ENCODING: &str =
    "empty encoding, expected <states>/<alphabet>/<transitions>/<initial state>/<accepting states>";

fn build_error_report<I: IntoIterator<Item = Simple<char>>>(input: &str, errs: I) -> String {
    // ariadne cannot render a report into a source without lines
    if input.trim().is_empty() {
        return EMPTY_ENCODING.to_string();
    }
    let len = input.chars().count();
    errs.into_iter()
        .map(|e| {
            if e.span().start > len {
                return format!("could not parse {input:?} at {:?}", e.span());
            }
            let report = Report::build(ReportKind::Error, (), e.span().start)
                .with_config(Config::default().with_color(false));

            let report = match e.reason() {
                SimpleReason::Unexpected => {
                    let expected = e
                        .expected()
                        .map(|expected| match expected {
                            Some(c) => format!("'{c}'"),
                            None => "end of input".to_string(),
                        })
                        .sorted()
                        .join(", ");
                    let found = e
                        .found()
                        .map(|c| format!("'{c}'"))
                        .unwrap_or_else(|| "end of input".to_string());
                    report
                        .with_message(match e.label() {
                            Some(label) => format!("Unexpected {found} while parsing {label}"),
                            None => format!("Unexpected {found}"),
                        })
                        .with_label(Label::new(e.span()).with_message(if expected.is_empty() {
                            "expected something else".to_string()
                        } else {
                            format!("expected {expected}")
                        }))
                }
                SimpleReason::Unclosed { span, delimiter } => report
                    .with_message(format!("Unclosed delimiter {delimiter}"))
                    .with_label(Label::new(span.clone()).with_message("opened here")),
                SimpleReason::Custom(msg) => report
                    .with_message(msg)
                    .with_label(Label::new(e.span()).with_message(msg)),
            };

            let mut report_output = Vec::new();
            match report
                .finish()
                .write(Source::from(input), &mut report_output)
            {
                Ok(()) => String::from_utf8_lossy(&report_output).into_owned(),
                Err(_) => format!("could not parse {input:?} at {:?}", e.span()),
            }
        })
        .join("\n")
}
