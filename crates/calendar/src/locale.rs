//! Month, weekday and AM/PM name tables used by the formatter.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Names substituted for the `MMMM`/`MMM`, `WWWW`/`WWW` and `a` format codes.
///
/// Weekdays start on Sunday, matching [`DateTime::weekday`](crate::DateTime::weekday).
/// Abbreviations are the first three characters of the full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTable<'a> {
    /// January through December.
    pub months: [&'a str; 12],
    /// Sunday through Saturday.
    pub weekdays: [&'a str; 7],
    /// Markers for times before and after noon.
    pub am_pm: [&'a str; 2],
}

impl<'a> NameTable<'a> {
    /// Full name of `month` (1..=12).
    pub(crate) fn month(&self, month: u8) -> &'a str {
        self.months[usize::from(month - 1)]
    }

    /// Full name of `weekday` (1 = Sunday ... 7 = Saturday).
    pub(crate) fn weekday(&self, weekday: u8) -> &'a str {
        self.weekdays[usize::from(weekday - 1)]
    }

    pub(crate) fn am_pm(&self, hour: u8) -> &'a str {
        if hour < 12 { self.am_pm[0] } else { self.am_pm[1] }
    }
}

/// Returns the first three characters of `name`.
pub(crate) fn abbreviate(name: &str) -> &str {
    match name.char_indices().nth(3) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

/// Built-in locales with a name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English, the default.
    #[default]
    English,
    /// French.
    French,
    /// German.
    German,
    /// Spanish.
    Spanish,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Dutch.
    Dutch,
}

impl Locale {
    /// Every built-in locale.
    pub const ALL: [Locale; 7] = [
        Locale::English,
        Locale::French,
        Locale::German,
        Locale::Spanish,
        Locale::Italian,
        Locale::Portuguese,
        Locale::Dutch,
    ];

    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
            Locale::German => "de",
            Locale::Spanish => "es",
            Locale::Italian => "it",
            Locale::Portuguese => "pt",
            Locale::Dutch => "nl",
        }
    }

    /// Name table for this locale.
    pub fn names(self) -> NameTable<'static> {
        match self {
            Locale::English => ENGLISH,
            Locale::French => FRENCH,
            Locale::German => GERMAN,
            Locale::Spanish => SPANISH,
            Locale::Italian => ITALIAN,
            Locale::Portuguese => PORTUGUESE,
            Locale::Dutch => DUTCH,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    /// Parses a locale tag such as `en`, `en-US` or `fr_CA`.
    ///
    /// Only the language subtag is considered.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        Locale::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(language))
            .ok_or_else(|| CalendarError::UnknownLocale {
                tag: tag.to_string(),
            })
    }
}

const ENGLISH: NameTable<'static> = NameTable {
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    weekdays: [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    am_pm: ["AM", "PM"],
};

const FRENCH: NameTable<'static> = NameTable {
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    weekdays: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    am_pm: ["AM", "PM"],
};

const GERMAN: NameTable<'static> = NameTable {
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    weekdays: [
        "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
    ],
    am_pm: ["AM", "PM"],
};

const SPANISH: NameTable<'static> = NameTable {
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    weekdays: [
        "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
    ],
    am_pm: ["a. m.", "p. m."],
};

const ITALIAN: NameTable<'static> = NameTable {
    months: [
        "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
        "settembre", "ottobre", "novembre", "dicembre",
    ],
    weekdays: [
        "domenica", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
    ],
    am_pm: ["AM", "PM"],
};

const PORTUGUESE: NameTable<'static> = NameTable {
    months: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
        "outubro", "novembro", "dezembro",
    ],
    weekdays: [
        "domingo", "segunda-feira", "terça-feira", "quarta-feira", "quinta-feira", "sexta-feira",
        "sábado",
    ],
    am_pm: ["AM", "PM"],
};

const DUTCH: NameTable<'static> = NameTable {
    months: [
        "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september",
        "oktober", "november", "december",
    ],
    weekdays: [
        "zondag", "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag",
    ],
    am_pm: ["a.m.", "p.m."],
};
