//! 預測流程編排

use forecast_core::{ConversionRate, ForecastConfig, ForecastError, ForecastResult, Result, SalesSeries};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::{MaterialRequirementCalculator, SalesSeriesRegressor, MIN_RECORDS};

/// 預測流程：銷售序列 → 預測需求 → 原物料需求
///
/// 無狀態；同一個 pipeline 可被多個呼叫端同時使用。
#[derive(Debug, Clone, Default)]
pub struct ForecastPipeline {
    config: ForecastConfig,
    regressor: SalesSeriesRegressor,
}

impl ForecastPipeline {
    /// 創建新的預測流程
    pub fn new(config: ForecastConfig) -> Self {
        let regressor = SalesSeriesRegressor::new(&config);
        Self { config, regressor }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// 主預測入口
    pub fn run(&self, series: &SalesSeries, rates: &[ConversionRate]) -> Result<ForecastResult> {
        tracing::info!(
            "開始預測：產品 {}，銷售記錄 {} 筆，轉換率 {} 筆",
            series.product_id,
            series.len(),
            rates.len()
        );

        // 少於兩筆視為「沒有歷史」，不進入迴歸
        if series.len() < MIN_RECORDS {
            return Err(ForecastError::NoSalesData {
                product_id: series.product_id.clone(),
                records: series.len(),
            });
        }

        let raw = self.regressor.fit_and_predict(series)?;
        let predicted_demand = round_demand(raw)?;
        tracing::debug!("原始預測 {}，取整後 {}", raw, predicted_demand);

        if self.config.warn_on_negative_demand && predicted_demand < Decimal::ZERO {
            tracing::warn!(
                "產品 {} 預測需求為負 ({})，請檢查銷售資料品質",
                series.product_id,
                predicted_demand
            );
        }

        // 顯示用的取整值同時用於物料換算
        let materials = MaterialRequirementCalculator::compute(rates, predicted_demand)?;

        tracing::info!(
            "預測完成：產品 {}，預測需求 {}，原物料 {} 項",
            series.product_id,
            predicted_demand,
            materials.len()
        );

        Ok(ForecastResult::new(predicted_demand, materials))
    }
}

/// 四捨五入（遠離零）為整數值
fn round_demand(raw: f64) -> Result<Decimal> {
    Decimal::from_f64(raw.round())
        .map(|d| d.round_dp(0))
        .ok_or_else(|| ForecastError::CalculationError(format!("預測值無法轉換為數量: {}", raw)))
}
