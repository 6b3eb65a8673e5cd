//! # Forecast Core
//!
//! 需求預測與物料需求的核心資料模型與類型定義

pub mod config;
pub mod conversion;
pub mod result;
pub mod sales;
pub mod source;

// Re-export 主要類型
pub use config::ForecastConfig;
pub use conversion::{validate_rates, ConversionRate};
pub use result::{ForecastResult, MaterialRequirement};
pub use sales::{parse_sales_date, RawSalesRow, SalesRecord, SalesSeries};
pub use source::{ForecastDataSource, InMemoryDataSource};

/// 預測錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("銷售資料不足以進行迴歸：需要 {required} 筆，實際 {actual} 筆")]
    InsufficientData { required: usize, actual: usize },

    #[error("產品 {product_id} 沒有可用的銷售歷史（{records} 筆）")]
    NoSalesData { product_id: String, records: usize },

    #[error("銷售序列的時間座標全部相同（{records} 筆），正規方程矩陣奇異")]
    DegenerateSeries { records: usize },

    #[error("無效的轉換率 '{material}': {reason}")]
    InvalidConversionRate { material: String, reason: String },

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("找不到產品: {0}")]
    ProductNotFound(String),

    #[error("資料來源錯誤: {0}")]
    DataSource(String),
}

impl ForecastError {
    /// 是否屬於「資料可用性」問題（呼叫端可據此停用匯出等功能）
    pub fn is_data_availability(&self) -> bool {
        matches!(
            self,
            ForecastError::NoSalesData { .. }
                | ForecastError::DegenerateSeries { .. }
                | ForecastError::ProductNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ForecastError>;
