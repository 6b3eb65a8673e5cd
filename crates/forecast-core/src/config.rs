//! 預測引擎配置

use serde::{Deserialize, Serialize};

/// 預設的奇異判定門檻（正規方程矩陣行列式）
pub const DEFAULT_DEGENERACY_EPSILON: f64 = 1e-9;

/// 預測引擎參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// 2x2 正規方程矩陣 `n * Σ(t - t̄)²` 的最小可接受值，低於此值視為奇異
    pub degeneracy_epsilon: f64,

    /// 預測需求為負時是否輸出警告日誌
    /// - 引擎本身不做截斷，負值會原樣傳遞給物料計算
    pub warn_on_negative_demand: bool,
}

impl ForecastConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            degeneracy_epsilon: DEFAULT_DEGENERACY_EPSILON,
            warn_on_negative_demand: true,
        }
    }

    /// 建構器模式：設置奇異判定門檻
    pub fn with_degeneracy_epsilon(mut self, epsilon: f64) -> Self {
        self.degeneracy_epsilon = epsilon.abs();
        self
    }

    /// 建構器模式：設置負需求警告
    pub fn with_warn_on_negative_demand(mut self, warn: bool) -> Self {
        self.warn_on_negative_demand = warn;
        self
    }

    /// 從 JSON 字串載入配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::ForecastError::DataSource(format!("配置解析失敗: {}", e)))
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::new()
    }
}
