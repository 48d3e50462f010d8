//! Price and comps command implementations.

use crate::comps::{CompAssembler, PriceExtractor, Query};
use crate::config::Config;
use crate::format::Formatter;
use crate::pricing::Estimate;
use tracing::info;

/// Builds comps for an item and prices it.
pub struct PriceCommand {
    config: Config,
}

impl PriceCommand {
    /// Creates a new price command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the full estimate and returns formatted output.
    pub async fn execute(&self, query: &Query, expected_price: Option<f64>) -> String {
        let assembler = CompAssembler::new(&self.config);
        self.execute_with(&assembler, query, expected_price).await
    }

    /// Runs the estimate with a provided assembler (for testing).
    pub async fn execute_with<E: PriceExtractor>(
        &self,
        assembler: &CompAssembler<E>,
        query: &Query,
        expected_price: Option<f64>,
    ) -> String {
        info!(
            "Pricing: {} ({} comps)",
            query.label(),
            if assembler.is_live() { "live" } else { "synthetic" }
        );

        let comps = assembler.build_comps(query).await;
        let estimate = Estimate::new(query.clone(), expected_price, comps);

        info!(
            "Recommended {:.2} ({} confidence)",
            estimate.recommendation.recommended_price, estimate.recommendation.confidence
        );

        Formatter::new(self.config.format).format_estimate(&estimate)
    }

    /// Lists the comps for an item without pricing it.
    pub async fn comps(&self, query: &Query) -> String {
        let assembler = CompAssembler::new(&self.config);
        self.comps_with(&assembler, query).await
    }

    /// Lists comps with a provided assembler (for testing).
    pub async fn comps_with<E: PriceExtractor>(
        &self,
        assembler: &CompAssembler<E>,
        query: &Query,
    ) -> String {
        let comps = assembler.build_comps(query).await;
        Formatter::new(self.config.format).format_comps(&comps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::search::{SearchError, SearchHit, WebSearch};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockSearch(Vec<SearchHit>);

    #[async_trait]
    impl WebSearch for MockSearch {
        async fn search(&self, _query: &str, max: usize) -> Result<Vec<SearchHit>, SearchError> {
            Ok(self.0.iter().take(max).cloned().collect())
        }
    }

    fn make_test_config(format: OutputFormat) -> Config {
        Config { enable_live_comps: true, format, ..Config::default() }
    }

    #[tokio::test]
    async fn test_price_offline_table() {
        let cmd = PriceCommand::new(Config::default());
        let output = cmd
            .execute_with(&CompAssembler::offline(), &Query::new("sofa", None, None), None)
            .await;

        assert!(output.contains("Item:        sofa"));
        assert!(output.contains("212.50"));
        assert!(output.contains("Confidence:  medium"));
    }

    #[tokio::test]
    async fn test_price_live_json() {
        let config = make_test_config(OutputFormat::Json);
        let hits = vec![
            SearchHit::new("Sofa $300", "https://example.com/1", ""),
            SearchHit::new("Sofa", "https://example.com/2", "only $200"),
        ];
        let assembler = CompAssembler::with_search(&config, Arc::new(MockSearch(hits)));

        let cmd = PriceCommand::new(config);
        let output = cmd.execute_with(&assembler, &Query::new("sofa", None, None), Some(260.0)).await;
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["comps"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["comps"][0]["source"], "Web (CSE)");
        // 0.6 * 260 + 0.4 * 250
        assert_eq!(parsed["recommendation"]["recommended_price"], 256.0);
        assert_eq!(parsed["recommendation"]["confidence"], "low");
    }

    #[tokio::test]
    async fn test_comps_csv() {
        let cmd = PriceCommand::new(make_test_config(OutputFormat::Csv));
        let output = cmd.comps_with(&CompAssembler::offline(), &Query::new("chair", None, None)).await;

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "Marketplace,chair (similar),29.75,");
        assert_eq!(lines[4], "Retail (est.),New chair (estimate),50.75,");
    }
}
