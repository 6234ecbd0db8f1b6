use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    pub date: String,
    pub order_sum: f64,
    pub volume: f64,
    pub sales: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTotals {
    pub order_sum: f64,
    pub volume: f64,
    pub sales: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<ChartTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            totals: None,
            error: None,
        }
    }

    pub fn with_totals(mut self, totals: ChartTotals) -> Self {
        self.totals = Some(totals);
        self
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            totals: None,
            error: Some(message.into()),
        }
    }
}

pub type RawDataResponse = DataResponse<Value>;
pub type ChartDataResponse = DataResponse<Vec<ChartRecord>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
