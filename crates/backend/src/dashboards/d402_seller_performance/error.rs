use thiserror::Error;

/// Ошибки расчета отчета по продавцам. Any of them aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Purchase record references unknown seller '{seller_id}'")]
    UnknownSeller { seller_id: String },

    #[error("Line item references unknown product '{sku}'")]
    UnknownProduct { sku: String },
}
