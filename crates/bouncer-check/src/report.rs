//! Text report assembly

use crate::config::ReportingOptions;
use std::fmt;

/// Prefix of a rule line that found nothing
const PASS_MARKER: &str = " + ";
/// Prefix of a rule line or block with findings
const FAIL_MARKER: &str = "XXX";
const NOTHING_FOUND: &str = "...(nothing found)...";

/// Style of section header dividers
const HEAVY_DIVIDER: &str = "=";
/// Style of result block dividers
const LIGHT_DIVIDER: &str = "-";

/// Data reported for one labeled result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultData {
    Empty,
    Scalar(String),
    List(Vec<String>),
}

impl ResultData {
    pub fn is_empty(&self) -> bool {
        match self {
            ResultData::Empty => true,
            ResultData::Scalar(s) => s.is_empty(),
            ResultData::List(items) => items.is_empty(),
        }
    }
}

impl From<Vec<String>> for ResultData {
    fn from(items: Vec<String>) -> Self {
        if items.is_empty() {
            ResultData::Empty
        } else {
            ResultData::List(items)
        }
    }
}

impl From<String> for ResultData {
    fn from(value: String) -> Self {
        ResultData::Scalar(value)
    }
}

/// Repeat `style` until it spans exactly `width` characters
pub fn render_divider(style: &str, width: usize) -> String {
    style.chars().cycle().take(width).collect()
}

/// A finished report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDocument {
    lines: Vec<String>,
}

impl ReportDocument {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check whether some line equals `line` exactly
    pub fn contains_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl fmt::Display for ReportDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Accumulates report lines in emission order
pub struct ReportBuilder<'a> {
    options: &'a ReportingOptions,
    lines: Vec<String>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(options: &'a ReportingOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn add_blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.lines.push(String::new());
        }
    }

    /// Full-width divider in the configured style
    pub fn add_divider(&mut self) {
        let divider = render_divider(&self.options.divider_style, self.options.divider_width);
        self.lines.push(divider);
    }

    fn add_styled_divider(&mut self, style: &str) {
        let divider = render_divider(style, self.options.divider_width);
        self.lines.push(divider);
    }

    pub fn add_section_header(&mut self, label: &str) {
        self.add_blank_lines(2);
        self.add_line(label);
        self.add_styled_divider(HEAVY_DIVIDER);
    }

    pub fn add_subsection_header(&mut self, label: &str) {
        self.add_blank_lines(1);
        self.add_line(label);
        self.add_styled_divider(LIGHT_DIVIDER);
    }

    pub fn add_subsection_footer(&mut self) {
        self.add_styled_divider(LIGHT_DIVIDER);
    }

    /// Report one labeled result.
    ///
    /// Empty data renders a single pass line and a scalar a single fail line.
    /// Lists render as a block with their items sorted, unless singleton lists
    /// are squashed onto one line.
    pub fn add_result(&mut self, label: &str, data: &ResultData) {
        match data {
            ResultData::Scalar(value) if !value.is_empty() => {
                let line = self.inline(FAIL_MARKER, label, value);
                self.add_line(line);
            }
            ResultData::List(items)
                if items.len() == 1 && self.options.squash_singleton_lists =>
            {
                let line = self.inline(FAIL_MARKER, label, &items[0]);
                self.add_line(line);
            }
            ResultData::List(items) if !items.is_empty() => {
                let mut items = items.clone();
                items.sort();

                self.add_subsection_header(&format!("{} {}", FAIL_MARKER, label));
                for item in items {
                    self.add_line(item);
                }
                self.add_subsection_footer();
                self.add_blank_lines(1);
            }
            _ => {
                let line = self.inline(PASS_MARKER, label, NOTHING_FOUND);
                self.add_line(line);
            }
        }
    }

    fn inline(&self, marker: &str, label: &str, text: &str) -> String {
        format!(
            "{} {:<width$} {}",
            marker,
            label,
            text,
            width = self.options.label_width
        )
    }

    pub fn finish(self) -> ReportDocument {
        ReportDocument { lines: self.lines }
    }
}
