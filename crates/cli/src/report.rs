//! Rendering of conversion results for the terminal.

use ctodata_core::{hexdump, ConversionReport, DecodedFile};

/// How results are presented on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportStyle {
    /// Print the report as JSON instead of status lines.
    pub json: bool,
    /// Suppress the status lines.
    pub quiet: bool,
    /// Append a hexdump of at most this many lines.
    pub hexdump_lines: Option<usize>,
}

impl ReportStyle {
    /// Notice printed before the output file is written.
    pub fn making_line(&self, decoded: &DecodedFile) -> Option<String> {
        if self.json || self.quiet {
            return None;
        }
        Some(format!("Making DATA file <{}>", decoded.output.display()))
    }

    /// Lines printed once the output file is written.
    pub fn finished_lines(
        &self,
        report: &ConversionReport,
        bytes: &[u8],
    ) -> Result<Vec<String>, serde_json::Error> {
        let mut lines = Vec::new();

        if self.json {
            lines.push(serde_json::to_string_pretty(report)?);
        } else if !self.quiet {
            lines.push(report.bytes_written.to_string());
        }

        if let Some(max_lines) = self.hexdump_lines {
            if !bytes.is_empty() {
                lines.push(hexdump(bytes, max_lines));
            }
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn decoded() -> DecodedFile {
        DecodedFile {
            input: PathBuf::from("data.c"),
            output: PathBuf::from("data.c.ctodata"),
            bytes: vec![0x0a, 0x20, 0x00, 0xff],
        }
    }

    fn report() -> ConversionReport {
        ConversionReport {
            input: PathBuf::from("data.c"),
            output: PathBuf::from("data.c.ctodata"),
            bytes_written: 4,
        }
    }

    #[test]
    fn test_default_style_prints_status() {
        let style = ReportStyle::default();
        assert_eq!(
            style.making_line(&decoded()).as_deref(),
            Some("Making DATA file <data.c.ctodata>")
        );
        assert_eq!(
            style.finished_lines(&report(), &decoded().bytes).unwrap(),
            vec!["4".to_string()]
        );
    }

    #[test]
    fn test_quiet_style_prints_nothing() {
        let style = ReportStyle {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(style.making_line(&decoded()), None);
        assert!(style
            .finished_lines(&report(), &decoded().bytes)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_json_style_prints_report_only() {
        let style = ReportStyle {
            json: true,
            ..Default::default()
        };
        assert_eq!(style.making_line(&decoded()), None);

        let lines = style.finished_lines(&report(), &decoded().bytes).unwrap();
        assert_eq!(lines.len(), 1);
        let parsed: ConversionReport = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed, report());
    }

    #[test]
    fn test_hexdump_follows_count() {
        let style = ReportStyle {
            hexdump_lines: Some(16),
            ..Default::default()
        };
        let lines = style.finished_lines(&report(), &decoded().bytes).unwrap();
        assert_eq!(lines[0], "4");
        assert!(lines[1].starts_with("00000000: 0a20 00ff"));
    }

    #[test]
    fn test_hexdump_skipped_for_empty_output() {
        let style = ReportStyle {
            hexdump_lines: Some(16),
            ..Default::default()
        };
        let empty = ConversionReport {
            bytes_written: 0,
            ..report()
        };
        assert_eq!(style.finished_lines(&empty, &[]).unwrap(), vec!["0".to_string()]);
    }
}
