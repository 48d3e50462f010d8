//! Output formatting for comps and estimates (table, JSON, markdown, CSV).

use crate::comps::Comp;
use crate::config::OutputFormat;
use crate::pricing::Estimate;

/// Formats pricing results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a full estimate.
    pub fn format_estimate(&self, estimate: &Estimate) -> String {
        match self.format {
            OutputFormat::Json => self.json_estimate(estimate),
            OutputFormat::Table => self.table_estimate(estimate),
            OutputFormat::Markdown => self.markdown_estimate(estimate),
            OutputFormat::Csv => self.csv_comps(&estimate.comps),
        }
    }

    /// Formats a list of comps.
    pub fn format_comps(&self, comps: &[Comp]) -> String {
        if comps.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No comps found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_comps(comps),
            OutputFormat::Table => self.table_comps(comps),
            OutputFormat::Markdown => self.markdown_comps(comps),
            OutputFormat::Csv => self.csv_comps(comps),
        }
    }

    // JSON formatting

    fn json_estimate(&self, estimate: &Estimate) -> String {
        serde_json::to_string_pretty(estimate).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_comps(&self, comps: &[Comp]) -> String {
        serde_json::to_string_pretty(comps).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_estimate(&self, estimate: &Estimate) -> String {
        let rec = &estimate.recommendation;
        let mut lines = Vec::new();

        lines.push(format!("Item:        {}", estimate.query.label()));
        if let Some(condition) = &estimate.query.condition {
            lines.push(format!("Condition:   {}", condition));
        }
        if let Some(expected) = estimate.expected_price {
            lines.push(format!("Expected:    ${:.2}", expected));
        }
        lines.push(String::new());
        lines.push(self.table_comps(&estimate.comps));
        lines.push(String::new());
        lines.push(format!("Recommended: ${:.2}", rec.recommended_price));
        lines.push(format!("Range:       ${:.2} - ${:.2}", rec.low, rec.high));
        lines.push(format!("Confidence:  {}", rec.confidence));
        lines.push(format!(
            "Priced comps: {} of {}",
            estimate.usable_comps(),
            estimate.comps.len()
        ));

        if !rec.notes.is_empty() {
            lines.push(String::new());
            for note in &rec.notes {
                lines.push(format!("- {}", note));
            }
        }

        lines.join("\n")
    }

    fn table_comps(&self, comps: &[Comp]) -> String {
        let source_width = 14;
        let price_width = 10;
        let title_width = 50;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<source_width$}  {:>price_width$}  {}",
            "Source", "Price", "Title"
        ));
        lines.push(format!(
            "{:-<source_width$}  {:-<price_width$}  {:-<title_width$}",
            "", "", ""
        ));

        for comp in comps {
            lines.push(format!(
                "{:<source_width$}  {:>price_width$}  {}",
                comp.source,
                price_cell(comp),
                truncate(&comp.title, title_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} comps", comps.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_estimate(&self, estimate: &Estimate) -> String {
        let rec = &estimate.recommendation;
        let mut lines = Vec::new();

        lines.push(format!("## {}", estimate.query.label()));
        lines.push(String::new());
        lines.push(format!("- **Recommended:** ${:.2}", rec.recommended_price));
        lines.push(format!("- **Range:** ${:.2} - ${:.2}", rec.low, rec.high));
        lines.push(format!("- **Confidence:** {}", rec.confidence));
        lines.push(format!(
            "- **Priced comps:** {} of {}",
            estimate.usable_comps(),
            estimate.comps.len()
        ));
        lines.push(String::new());
        lines.push(self.markdown_comps(&estimate.comps));

        if !rec.notes.is_empty() {
            lines.push(String::new());
            lines.push("### Notes".to_string());
            lines.push(String::new());
            for note in &rec.notes {
                lines.push(format!("- {}", note));
            }
        }

        lines.join("\n")
    }

    fn markdown_comps(&self, comps: &[Comp]) -> String {
        let mut lines = Vec::new();

        lines.push("| Source | Price | Title |".to_string());
        lines.push("|--------|-------|-------|".to_string());

        for comp in comps {
            let title = truncate(&comp.title, 40);
            let title = match &comp.url {
                Some(url) => format!("[{}]({})", title, url),
                None => title,
            };

            lines.push(format!("| {} | {} | {} |", comp.source, price_cell(comp), title));
        }

        lines.push(String::new());
        lines.push(format!("*{} comps*", comps.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "source,title,price,url".to_string()
    }

    fn csv_comps(&self, comps: &[Comp]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for comp in comps {
            lines.push(format!(
                "{},{},{},{}",
                Self::csv_escape(&comp.source),
                Self::csv_escape(&comp.title),
                comp.price,
                comp.url.as_deref().map(Self::csv_escape).unwrap_or_default()
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

fn price_cell(comp: &Comp) -> String {
    match comp.usable_price() {
        Some(price) => format!("{:.2}", price),
        None => "N/A".to_string(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let head: String = text.chars().take(width - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
