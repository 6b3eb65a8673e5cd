//! 物料轉換率模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{ForecastError, Result};

/// 產品對原物料的單位轉換率
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRate {
    /// 原物料名稱
    pub material_name: String,

    /// 每單位產品所需原物料數量
    pub quantity_per_unit: Decimal,
}

impl ConversionRate {
    /// 創建新的轉換率
    pub fn new(material_name: String, quantity_per_unit: Decimal) -> Self {
        Self {
            material_name,
            quantity_per_unit,
        }
    }

    /// 檢查名稱非空且轉換率非負
    pub fn validate(&self) -> Result<()> {
        if self.material_name.trim().is_empty() {
            return Err(ForecastError::InvalidConversionRate {
                material: self.material_name.clone(),
                reason: "物料名稱為空".to_string(),
            });
        }

        if self.quantity_per_unit < Decimal::ZERO {
            return Err(ForecastError::InvalidConversionRate {
                material: self.material_name.clone(),
                reason: format!("負數轉換率 {}", self.quantity_per_unit),
            });
        }

        Ok(())
    }
}

/// 檢查一組轉換率：逐筆驗證，且同一產品內物料名稱不可重複
pub fn validate_rates(rates: &[ConversionRate]) -> Result<()> {
    let mut seen = HashSet::with_capacity(rates.len());

    for rate in rates {
        rate.validate()?;

        if !seen.insert(rate.material_name.as_str()) {
            return Err(ForecastError::InvalidConversionRate {
                material: rate.material_name.clone(),
                reason: "物料名稱重複".to_string(),
            });
        }
    }

    Ok(())
}
