//! Presentation helpers shared by the commands

mod date;

pub use date::*;

use chrono::NaiveDateTime;

use crate::config::SiteConfig;

/// Helpers bound to a site configuration
pub struct Helpers<'a> {
    config: &'a SiteConfig,
}

impl<'a> Helpers<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Format a date, falling back to the configured `date_format`
    pub fn date(&self, date: &NaiveDateTime, format: Option<&str>) -> String {
        format_date(date, format.unwrap_or(&self.config.date_format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_date_uses_config_format() {
        let config = SiteConfig {
            date_format: "YYYY/MM/DD".to_string(),
            ..Default::default()
        };
        let helpers = Helpers::new(&config);
        let date = NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(helpers.date(&date, None), "2023/06/15");
        assert_eq!(helpers.date(&date, Some("DD.MM.YYYY")), "15.06.2023");
    }
}
