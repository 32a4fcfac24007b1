//! Parsing `YYYY-MM-DD[( |T)hh:mm[:ss[.f]]]` text into a [`DateTime`].

use std::str::FromStr;

use crate::datetime::DateTime;
use crate::error::CalendarError;

struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn fail(&self, reason: &'static str) -> CalendarError {
        CalendarError::Parse {
            input: self.input.to_string(),
            reason,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8, reason: &'static str) -> Result<(), CalendarError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.fail(reason))
        }
    }

    /// Reads between `min` and `max` ASCII digits; returns the value and
    /// how many digits were read.
    fn digits(
        &mut self,
        min: usize,
        max: usize,
        reason: &'static str,
    ) -> Result<(u64, usize), CalendarError> {
        let start = self.pos;
        let mut value: u64 = 0;
        while self.pos - start < max {
            match self.peek() {
                Some(b @ b'0'..=b'9') => {
                    value = value * 10 + u64::from(b - b'0');
                    self.pos += 1;
                }
                _ => break,
            }
        }
        let count = self.pos - start;
        if count < min {
            return Err(self.fail(reason));
        }
        Ok((value, count))
    }

    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

fn narrow<T: TryFrom<u64>>(cursor: &Cursor<'_>, value: u64) -> Result<T, CalendarError> {
    T::try_from(value).map_err(|_| cursor.fail("field value too large"))
}

impl FromStr for DateTime {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`, optionally followed by a space or `T` and
    /// `hh:mm`, `hh:mm:ss` or `hh:mm:ss.f` (one to nine fraction digits).
    ///
    /// The year may carry a leading `-` or `+` and more than four digits.
    /// Missing seconds are zero. Out-of-range fields are reported with the
    /// same errors as the constructors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut c = Cursor::new(s);
        let negative = if c.eat(b'-') {
            true
        } else {
            c.eat(b'+');
            false
        };
        let (year, _) = c.digits(4, 6, "expected a year of at least four digits")?;
        let year: i32 = narrow(&c, year)?;
        let year = if negative { -year } else { year };
        c.expect(b'-', "expected '-' after the year")?;
        let (month, _) = c.digits(2, 2, "expected a two-digit month")?;
        c.expect(b'-', "expected '-' after the month")?;
        let (day, _) = c.digits(2, 2, "expected a two-digit day")?;
        let (month, day): (u8, u8) = (narrow(&c, month)?, narrow(&c, day)?);

        if c.at_end() {
            return DateTime::for_date_only(year, month, day);
        }
        if !(c.eat(b' ') || c.eat(b'T')) {
            return Err(c.fail("expected ' ' or 'T' between date and time"));
        }
        let (hour, _) = c.digits(2, 2, "expected a two-digit hour")?;
        c.expect(b':', "expected ':' after the hour")?;
        let (minute, _) = c.digits(2, 2, "expected a two-digit minute")?;
        let mut second = 0;
        let mut nanosecond = 0;
        if c.eat(b':') {
            second = c.digits(2, 2, "expected a two-digit second")?.0;
            if c.eat(b'.') {
                let (fraction, count) = c.digits(1, 9, "expected one to nine fraction digits")?;
                nanosecond = fraction * 10u64.pow((9 - count) as u32);
            }
        }
        if !c.at_end() {
            return Err(c.fail("unexpected trailing characters"));
        }
        DateTime::for_date_time(
            year,
            month,
            day,
            narrow(&c, hour)?,
            narrow(&c, minute)?,
            narrow(&c, second)?,
            narrow(&c, nanosecond)?,
        )
    }
}
