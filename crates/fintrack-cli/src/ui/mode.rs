//! Output mode routing logic.

use crate::helpers::OutputFormat;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and tables (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything (exclusive mode)
    /// 2. `--format plain` forces plain, `--format table` forces pretty
    /// 3. `TERM=dumb` forces plain
    /// 4. Otherwise pretty only when stdout is a TTY
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }

        match format {
            Some(OutputFormat::Plain) => return Self::Plain,
            Some(OutputFormat::Table) => return Self::Pretty,
            None => {}
        }

        if term_is_dumb {
            return Self::Plain;
        }

        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_forces() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(false, None, true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Pretty);
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), true, false),
            OutputMode::Pretty
        );
    }

    #[test]
    fn test_non_tty_gets_plain() {
        let mode = OutputMode::resolve(false, None, false, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_table_forces_pretty() {
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), false, false),
            OutputMode::Pretty
        );
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), false, true),
            OutputMode::Pretty
        );
    }
}
