//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! defaults and the working calendar from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::InMemoryCalendar;
use crate::error::{EngineError, EngineResult};

use super::types::{CalendarFile, DefaultCalendar, EngineConfig};

/// Loads and provides access to the engine configuration and calendar.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml          # Default calendar used for dates without a record
/// └── calendar/
///     └── 2026-03.yaml     # Calendar days, any number of files
/// ```
///
/// The `calendar/` directory is optional. Without it every date falls back
/// to the default calendar.
///
/// # Example
///
/// ```no_run
/// use work_calendar_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Calendar days loaded: {}", loader.calendar().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    engine: EngineConfig,
    calendar: InMemoryCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if `engine.yaml` is missing or a file cannot be read
    /// - `ConfigParseError` if a file is not valid YAML or a calendar day
    ///   violates its invariants
    /// - `DuplicateCalendarDay` if two records share a date
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineConfig>(&path.join("engine.yaml"))?;
        let calendar = Self::load_calendar(&path.join("calendar"))?;

        Ok(Self { engine, calendar })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every calendar file, in file-name order, into one calendar.
    fn load_calendar(calendar_dir: &Path) -> EngineResult<InMemoryCalendar> {
        let mut calendar = InMemoryCalendar::new();

        if !calendar_dir.exists() {
            return Ok(calendar);
        }

        let dir_str = calendar_dir.display().to_string();
        let entries = fs::read_dir(calendar_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                files.push(path);
            }
        }
        files.sort();

        for file in files {
            let calendar_file = Self::load_yaml::<CalendarFile>(&file)?;
            for day in calendar_file.days {
                calendar.insert(day)?;
            }
        }

        Ok(calendar)
    }

    /// Returns the engine configuration.
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Returns the default calendar applied on lookup misses.
    pub fn defaults(&self) -> &DefaultCalendar {
        &self.engine.default_calendar
    }

    /// Returns the loaded calendar.
    pub fn calendar(&self) -> &InMemoryCalendar {
        &self.calendar
    }

    /// Consumes the loader, returning the calendar and defaults.
    pub fn into_parts(self) -> (InMemoryCalendar, DefaultCalendar) {
        (self.calendar, self.engine.default_calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarRepository;
    use crate::models::HolidayType;
    use chrono::{NaiveDate, NaiveTime};

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    /// Creates an empty scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "work-calendar-engine-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.defaults().shift().start(), t(8, 0));
        assert_eq!(loader.defaults().shift().end(), t(17, 0));
        assert!(!loader.calendar().is_empty());
    }

    #[test]
    fn test_loaded_calendar_days() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let monday = loader.calendar().lookup(make_date("2026-03-02")).unwrap();
        assert!(monday.is_open());
        assert_eq!(monday.break_window().unwrap().start(), t(12, 0));

        let sunday = loader.calendar().lookup(make_date("2026-03-08")).unwrap();
        assert!(!sunday.is_open());
    }

    #[test]
    fn test_loaded_holiday() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let holiday = loader.calendar().lookup(make_date("2026-03-09")).unwrap();
        assert_eq!(holiday.holiday_type(), HolidayType::PaidClosure);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_calendar_directory_gives_empty_calendar() {
        let dir = scratch_dir("no-calendar");
        fs::write(
            dir.join("engine.yaml"),
            "default_calendar:\n  shift_start: \"09:00:00\"\n  shift_end: \"17:30:00\"\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert!(loader.calendar().is_empty());
        assert_eq!(loader.defaults().shift().start(), t(9, 0));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_day_is_parse_error() {
        let dir = scratch_dir("invalid-day");
        fs::write(dir.join("engine.yaml"), "{}\n").unwrap();
        fs::create_dir_all(dir.join("calendar")).unwrap();
        fs::write(
            dir.join("calendar").join("bad.yaml"),
            "days:\n  - date: 2026-03-02\n    shift_start: \"17:00:00\"\n    shift_end: \"08:00:00\"\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_duplicate_day_across_files_is_rejected() {
        let dir = scratch_dir("duplicate-day");
        fs::write(dir.join("engine.yaml"), "{}\n").unwrap();
        fs::create_dir_all(dir.join("calendar")).unwrap();
        let day = "days:\n  - date: 2026-03-02\n    is_open: false\n";
        fs::write(dir.join("calendar").join("a.yaml"), day).unwrap();
        fs::write(dir.join("calendar").join("b.yaml"), day).unwrap();

        let result = ConfigLoader::load(&dir);
        assert_eq!(
            result.err(),
            Some(EngineError::DuplicateCalendarDay {
                date: make_date("2026-03-02")
            })
        );

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_empty_engine_file_uses_default_shift() {
        let dir = scratch_dir("empty-engine");
        fs::write(dir.join("engine.yaml"), "{}\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.defaults(), &DefaultCalendar::default());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_into_parts() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let expected_len = loader.calendar().len();

        let (calendar, defaults) = loader.into_parts();
        assert_eq!(calendar.len(), expected_len);
        assert_eq!(defaults.shift().end(), t(17, 0));
    }
}
