//! Template formatting.
//!
//! A template is a run of field codes and literal text. Codes are matched
//! longest first:
//!
//! | Code | Output |
//! |------|--------|
//! | `YYYY` | year, at least four digits |
//! | `YY` | last two digits of the year |
//! | `MMMM` / `MMM` | full / abbreviated month name |
//! | `MM` / `M` | month, zero-padded / unpadded |
//! | `DD` / `D` | day, zero-padded / unpadded |
//! | `WWWW` / `WWW` | full / abbreviated weekday name |
//! | `hh` / `h` | hour 0..=23, zero-padded / unpadded |
//! | `hh12` / `h12` | hour 1..=12, zero-padded / unpadded |
//! | `a` | AM/PM marker |
//! | `mm` / `m` | minute, zero-padded / unpadded |
//! | `ss` / `s` | second, zero-padded / unpadded |
//! | `f` .. `fffffffff` | fraction of a second, truncated to 1..=9 digits |
//!
//! Text between a pair of `|` characters is copied verbatim, which is how
//! letters that would otherwise be codes get into the output:
//! `YYYY-MM-DD|T|hh:mm:ss`. Anything else that is not a code is copied as is.

use crate::datetime::DateTime;
use crate::error::CalendarError;
use crate::locale::{Locale, NameTable, abbreviate};

const ESCAPE: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year4,
    Year2,
    MonthFull,
    MonthAbbrev,
    Month2,
    Month1,
    Day2,
    Day1,
    WeekdayFull,
    WeekdayAbbrev,
    Hour12Padded,
    Hour12,
    Hour2,
    Hour1,
    AmPm,
    Minute2,
    Minute1,
    Second2,
    Second1,
    Fraction(usize),
}

impl Field {
    fn needs_time(self) -> bool {
        !matches!(
            self,
            Field::Year4
                | Field::Year2
                | Field::MonthFull
                | Field::MonthAbbrev
                | Field::Month2
                | Field::Month1
                | Field::Day2
                | Field::Day1
                | Field::WeekdayFull
                | Field::WeekdayAbbrev
        )
    }
}

/// Codes in matching order; a code never precedes one it is a prefix of.
const CODES: &[(&str, Field)] = &[
    ("YYYY", Field::Year4),
    ("YY", Field::Year2),
    ("MMMM", Field::MonthFull),
    ("MMM", Field::MonthAbbrev),
    ("MM", Field::Month2),
    ("M", Field::Month1),
    ("DD", Field::Day2),
    ("D", Field::Day1),
    ("WWWW", Field::WeekdayFull),
    ("WWW", Field::WeekdayAbbrev),
    ("hh12", Field::Hour12Padded),
    ("h12", Field::Hour12),
    ("hh", Field::Hour2),
    ("h", Field::Hour1),
    ("a", Field::AmPm),
    ("mm", Field::Minute2),
    ("m", Field::Minute1),
    ("ss", Field::Second2),
    ("s", Field::Second1),
];

#[derive(Debug, PartialEq, Eq)]
enum Token<'t> {
    Literal(&'t str),
    Field(Field),
}

fn match_field(rest: &str) -> Option<(Field, usize)> {
    let fs = rest.bytes().take(9).take_while(|&b| b == b'f').count();
    if fs > 0 {
        return Some((Field::Fraction(fs), fs));
    }
    CODES
        .iter()
        .find(|(code, _)| rest.starts_with(code))
        .map(|&(code, field)| (field, code.len()))
}

fn tokenize(template: &str) -> Result<Vec<Token<'_>>, CalendarError> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;
    while pos < template.len() {
        let rest = &template[pos..];
        if rest.starts_with(ESCAPE) {
            if literal_start < pos {
                tokens.push(Token::Literal(&template[literal_start..pos]));
            }
            let body = &rest[ESCAPE.len_utf8()..];
            let end = body
                .find(ESCAPE)
                .ok_or(CalendarError::UnterminatedEscape { position: pos })?;
            if end > 0 {
                tokens.push(Token::Literal(&body[..end]));
            }
            pos += 2 * ESCAPE.len_utf8() + end;
            literal_start = pos;
        } else if let Some((field, len)) = match_field(rest) {
            if literal_start < pos {
                tokens.push(Token::Literal(&template[literal_start..pos]));
            }
            tokens.push(Token::Field(field));
            pos += len;
            literal_start = pos;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    if literal_start < template.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }
    Ok(tokens)
}

fn push_padded(out: &mut String, value: impl std::fmt::Display, width: usize) {
    out.push_str(&format!("{value:0>width$}"));
}

/// Formats `value` with `template`, taking names from `names`.
///
/// The whole template is checked before any output is produced.
///
/// # Errors
///
/// Returns [`CalendarError::UnterminatedEscape`] for an unclosed `|` run
/// and [`CalendarError::MissingTime`] when a date-only value meets a
/// time code.
pub fn format(
    value: &DateTime,
    template: &str,
    names: &NameTable<'_>,
) -> Result<String, CalendarError> {
    let tokens = tokenize(template)?;
    let time = if tokens
        .iter()
        .any(|t| matches!(t, Token::Field(f) if f.needs_time()))
    {
        Some(value.require_time("format")?)
    } else {
        None
    };

    let mut out = String::with_capacity(template.len() + 16);
    for token in tokens {
        let field = match token {
            Token::Literal(text) => {
                out.push_str(text);
                continue;
            }
            Token::Field(field) => field,
        };
        match (field, time) {
            (Field::Year4, _) => {
                if value.year() < 0 {
                    out.push('-');
                }
                push_padded(&mut out, value.year().unsigned_abs(), 4);
            }
            (Field::Year2, _) => push_padded(&mut out, value.year().rem_euclid(100), 2),
            (Field::MonthFull, _) => out.push_str(names.month(value.month())),
            (Field::MonthAbbrev, _) => out.push_str(abbreviate(names.month(value.month()))),
            (Field::Month2, _) => push_padded(&mut out, value.month(), 2),
            (Field::Month1, _) => push_padded(&mut out, value.month(), 1),
            (Field::Day2, _) => push_padded(&mut out, value.day(), 2),
            (Field::Day1, _) => push_padded(&mut out, value.day(), 1),
            (Field::WeekdayFull, _) => out.push_str(names.weekday(value.weekday())),
            (Field::WeekdayAbbrev, _) => out.push_str(abbreviate(names.weekday(value.weekday()))),
            (Field::Hour2, Some(t)) => push_padded(&mut out, t.hour, 2),
            (Field::Hour1, Some(t)) => push_padded(&mut out, t.hour, 1),
            (Field::Hour12Padded, Some(t)) => push_padded(&mut out, twelve_hour(t.hour), 2),
            (Field::Hour12, Some(t)) => push_padded(&mut out, twelve_hour(t.hour), 1),
            (Field::AmPm, Some(t)) => out.push_str(names.am_pm(t.hour)),
            (Field::Minute2, Some(t)) => push_padded(&mut out, t.minute, 2),
            (Field::Minute1, Some(t)) => push_padded(&mut out, t.minute, 1),
            (Field::Second2, Some(t)) => push_padded(&mut out, t.second, 2),
            (Field::Second1, Some(t)) => push_padded(&mut out, t.second, 1),
            (Field::Fraction(digits), Some(t)) => {
                out.push_str(&format!("{:09}", t.nanosecond)[..digits]);
            }
            // Time codes were checked against the value above.
            (_, None) => return Err(CalendarError::MissingTime { operation: "format" }),
        }
    }
    Ok(out)
}

fn twelve_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

impl DateTime {
    /// Formats with the default (English) name table.
    ///
    /// # Errors
    ///
    /// See [`format`].
    pub fn format(&self, template: &str) -> Result<String, CalendarError> {
        format(self, template, &Locale::default().names())
    }

    /// Formats with the name table of `locale`.
    ///
    /// # Errors
    ///
    /// See [`format`].
    pub fn format_with_locale(
        &self,
        template: &str,
        locale: Locale,
    ) -> Result<String, CalendarError> {
        format(self, template, &locale.names())
    }

    /// Formats with a caller-supplied name table.
    ///
    /// # Errors
    ///
    /// See [`format`].
    pub fn format_with_names(
        &self,
        template: &str,
        names: &NameTable<'_>,
    ) -> Result<String, CalendarError> {
        format(self, template, names)
    }
}
