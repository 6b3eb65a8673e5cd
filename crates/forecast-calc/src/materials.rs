//! 原物料需求換算

use forecast_core::{validate_rates, ConversionRate, ForecastError, MaterialRequirement, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// 原物料需求計算器
pub struct MaterialRequirementCalculator;

impl MaterialRequirementCalculator {
    /// 依預測需求換算每種原物料的需求量
    ///
    /// - 需求量 = round(預測需求 × 轉換率)，採四捨五入（遠離零）
    /// - 輸出順序與轉換率提供順序相同
    /// - 沒有轉換率時回傳空清單
    /// - 負的預測需求不截斷，會得到負的需求量
    pub fn compute(
        rates: &[ConversionRate],
        predicted_demand: Decimal,
    ) -> Result<Vec<MaterialRequirement>> {
        validate_rates(rates)?;

        rates
            .iter()
            .map(|rate| {
                let required_quantity = Self::required_quantity(predicted_demand, rate)?;

                tracing::debug!(
                    "原物料 {}: {} × {} = {}",
                    rate.material_name,
                    predicted_demand,
                    rate.quantity_per_unit,
                    required_quantity
                );

                Ok(MaterialRequirement::new(
                    rate.material_name.clone(),
                    required_quantity,
                ))
            })
            .collect()
    }

    fn required_quantity(predicted_demand: Decimal, rate: &ConversionRate) -> Result<Decimal> {
        predicted_demand
            .checked_mul(rate.quantity_per_unit)
            .map(|qty| qty.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .ok_or_else(|| {
                ForecastError::CalculationError(format!(
                    "原物料 {} 需求量溢位: {} × {}",
                    rate.material_name, predicted_demand, rate.quantity_per_unit
                ))
            })
    }
}
