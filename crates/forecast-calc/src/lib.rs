//! # Forecast Calculation Engine
//!
//! 需求預測與物料需求計算引擎：
//! 銷售序列 → 線性迴歸預測需求 → 依轉換率換算原物料需求

pub mod materials;
pub mod pipeline;
pub mod regression;
pub mod service;

// Re-export 主要類型
pub use materials::MaterialRequirementCalculator;
pub use pipeline::ForecastPipeline;
pub use regression::{LinearFit, SalesSeriesRegressor};
pub use service::ForecastService;

/// 進行迴歸所需的最少銷售記錄數
pub const MIN_RECORDS: usize = 2;
