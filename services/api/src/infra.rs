use chrono::NaiveDate;
use loan_decision::config::DecisionConfig;
use loan_decision::decision::{DateSource, DecisionEngine, EstonianPersonalCodeValidator};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type StandardEngine = DecisionEngine<EstonianPersonalCodeValidator, DateSource>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_engine(config: &DecisionConfig) -> Arc<StandardEngine> {
    Arc::new(DecisionEngine::standard(config.date_source()))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
