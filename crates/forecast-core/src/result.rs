//! 預測結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一原物料的需求量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    /// 原物料名稱
    pub material_name: String,

    /// 需求數量（已四捨五入為整數值）
    pub required_quantity: Decimal,
}

impl MaterialRequirement {
    pub fn new(material_name: String, required_quantity: Decimal) -> Self {
        Self {
            material_name,
            required_quantity,
        }
    }
}

/// 預測結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// 預測需求（已四捨五入為整數值，可能為負）
    pub predicted_demand: Decimal,

    /// 原物料需求，順序與轉換率提供順序相同
    pub materials: Vec<MaterialRequirement>,
}

impl ForecastResult {
    /// 創建新的預測結果
    pub fn new(predicted_demand: Decimal, materials: Vec<MaterialRequirement>) -> Self {
        Self {
            predicted_demand,
            materials,
        }
    }

    /// 依名稱查找原物料需求
    pub fn material(&self, name: &str) -> Option<&MaterialRequirement> {
        self.materials.iter().find(|m| m.material_name == name)
    }

    /// 預測需求為負（資料品質訊號）
    pub fn has_negative_demand(&self) -> bool {
        self.predicted_demand < Decimal::ZERO
    }

    /// 全部原物料需求量加總
    pub fn total_required(&self) -> Decimal {
        self.materials.iter().map(|m| m.required_quantity).sum()
    }
}
