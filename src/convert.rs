//! Pure conversion functions: TOML config plus command-line overrides ->
//! library types.

use almanac_calendar::{DateTime, Locale};
use almanac_clock::Zone;
use anyhow::{Context, Result};
use tracing::debug;

use crate::config::DefaultsToml;

/// Effective defaults for one invocation.
#[derive(Debug)]
pub struct Settings {
    zone: Option<String>,
    locale: String,
    pub date_format: String,
    pub datetime_format: String,
}

impl Settings {
    pub fn from_config(defaults: &DefaultsToml) -> Self {
        Self {
            zone: defaults.zone.clone(),
            locale: defaults.locale.clone(),
            date_format: defaults.date_format.clone(),
            datetime_format: defaults.datetime_format.clone(),
        }
    }

    /// The override if given, else the configured zone, else the system zone.
    ///
    /// Resolved on demand so commands that never touch a zone do not fail on
    /// a bad zone setting.
    pub fn zone(&self, cli: Option<Zone>) -> Result<Zone> {
        if let Some(zone) = cli {
            return Ok(zone);
        }
        match &self.zone {
            Some(name) => {
                Zone::resolve(name).with_context(|| format!("invalid [defaults].zone: {name:?}"))
            }
            None => {
                let zone = Zone::system_default().context("no zone given and no system zone")?;
                debug!(zone = zone.name(), "using system zone");
                Ok(zone)
            }
        }
    }

    pub fn locale(&self, cli: Option<Locale>) -> Result<Locale> {
        match cli {
            Some(locale) => Ok(locale),
            None => self
                .locale
                .parse()
                .with_context(|| format!("invalid [defaults].locale: {:?}", self.locale)),
        }
    }

    /// The override if given, else the configured date or date-time format
    /// matching the form of `value`.
    pub fn template_for<'a>(&'a self, value: &DateTime, cli: Option<&'a str>) -> &'a str {
        cli.unwrap_or(if value.has_time() {
            &self.datetime_format
        } else {
            &self.date_format
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(zone: Option<&str>, locale: &str) -> Settings {
        Settings::from_config(&DefaultsToml {
            zone: zone.map(str::to_string),
            locale: locale.to_string(),
            ..DefaultsToml::default()
        })
    }

    #[test]
    fn cli_overrides_config() {
        let s = settings(Some("Europe/Paris"), "fr");
        let tokyo = Zone::resolve("Asia/Tokyo").unwrap();
        assert_eq!(s.zone(Some(tokyo)).unwrap(), tokyo);
        assert_eq!(s.zone(None).unwrap().name(), "Europe/Paris");
        assert_eq!(s.locale(None).unwrap(), Locale::French);
        assert_eq!(s.locale(Some(Locale::German)).unwrap(), Locale::German);
    }

    #[test]
    fn bad_config_values_are_errors() {
        let s = settings(Some("Nowhere/Special"), "xx");
        assert!(s.zone(None).is_err());
        assert!(s.locale(None).is_err());
    }

    #[test]
    fn template_follows_value_form() {
        let s = settings(None, "en");
        let day = DateTime::for_date_only(2024, 2, 29).unwrap();
        let moment = DateTime::for_date_time(2024, 2, 29, 8, 0, 0, 0).unwrap();
        assert_eq!(s.template_for(&day, None), "YYYY-MM-DD");
        assert_eq!(s.template_for(&moment, None), "YYYY-MM-DD hh:mm:ss");
        assert_eq!(s.template_for(&moment, Some("hh:mm")), "hh:mm");
    }
}
