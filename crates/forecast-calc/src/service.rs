//! 預測服務：資料來源 + 預測流程

use forecast_core::{ForecastConfig, ForecastDataSource, ForecastResult, Result};

use crate::ForecastPipeline;

/// 預測服務
///
/// 先向資料來源取得銷售序列與轉換率，再交給 [`ForecastPipeline`]。
pub struct ForecastService<S> {
    source: S,
    pipeline: ForecastPipeline,
}

impl<S: ForecastDataSource> ForecastService<S> {
    /// 創建新的預測服務
    pub fn new(source: S, config: ForecastConfig) -> Self {
        Self {
            source,
            pipeline: ForecastPipeline::new(config),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 預測指定產品的需求與原物料需求
    pub fn forecast(&self, product_id: &str) -> Result<ForecastResult> {
        let series = self.source.sales_series(product_id)?;
        let rates = self.source.conversion_rates(product_id)?;

        self.pipeline.run(&series, &rates)
    }
}
