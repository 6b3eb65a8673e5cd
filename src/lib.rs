//! # MRP Forecast
//!
//! 由銷售歷史預測產品需求，並換算為原物料需求量。
//!
//! - [`forecast_core`]：資料模型、錯誤、配置、資料來源介面
//! - [`forecast_calc`]：線性迴歸、原物料換算、預測流程
//! - [`forecast_report`]：文字摘要與 CSV 報表

pub use forecast_calc::{
    ForecastPipeline, ForecastService, LinearFit, MaterialRequirementCalculator,
    SalesSeriesRegressor, MIN_RECORDS,
};
pub use forecast_core::{
    parse_sales_date, validate_rates, ConversionRate, ForecastConfig, ForecastDataSource,
    ForecastError, ForecastResult, InMemoryDataSource, MaterialRequirement, RawSalesRow, Result,
    SalesRecord, SalesSeries,
};
pub use forecast_report::{render_csv, render_outcome, render_summary, ReportError};

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
