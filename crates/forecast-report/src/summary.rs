//! 文字摘要

use std::fmt::Write;

use forecast_core::ForecastResult;

/// 產生兩段式文字摘要：預測需求，接著逐行列出原物料需求
pub fn render_summary(result: &ForecastResult) -> String {
    let mut text = format!(
        "Predicted Demand: {}\nRequired Materials:\n",
        result.predicted_demand.normalize()
    );
    for material in &result.materials {
        // 寫入 String 不會失敗
        let _ = writeln!(
            text,
            "{}: {}",
            material.material_name,
            material.required_quantity.normalize()
        );
    }
    text
}

/// 依預測結果或錯誤產生顯示文字
///
/// 資料可用性錯誤顯示為「沒有資料」，其他錯誤顯示錯誤訊息。
pub fn render_outcome(outcome: &forecast_core::Result<ForecastResult>) -> String {
    match outcome {
        Ok(result) => render_summary(result),
        Err(err) if err.is_data_availability() => "No sales data\nNo material data\n".to_string(),
        Err(err) => format!("Error: {}\n", err),
    }
}
