//! Console reporter with colored output

use crate::ScoreResult;
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Print a score report for one article
    pub fn report(&self, result: &ScoreResult) {
        println!("{}", self.render(result));
    }

    fn render(&self, result: &ScoreResult) -> String {
        let mut out = String::new();
        out.push_str("Content Quality Scores\n");
        out.push_str(&"─".repeat(40));
        out.push('\n');
        out.push_str(&self.score_line("SEO    ", result.seo_score));
        out.push_str(&self.score_line("AEO    ", result.aeo_score));
        out.push_str(&self.score_line("GEO    ", result.geo_score));
        out.push_str(&self.score_line("E-E-A-T", result.eeat_score));

        if !result.keyword_density.is_empty() {
            out.push('\n');
            out.push_str("Keyword density\n");
            for (keyword, density) in &result.keyword_density {
                let name = if keyword.is_empty() { "(none)" } else { keyword };
                out.push_str(&format!("  {name}: {density:.2}%\n"));
            }
        }
        out
    }

    fn score_line(&self, label: &str, score: u8) -> String {
        let value = format!("{score:>3}/100");
        let colored_value = if !self.use_colors {
            value
        } else if score >= 80 {
            value.green().to_string()
        } else if score >= 50 {
            value.yellow().to_string()
        } else {
            value.red().to_string()
        };
        format!("  {label}  {colored_value}\n")
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
