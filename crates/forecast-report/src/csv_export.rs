//! CSV 報表匯出
//!
//! 版面分兩段：
//! ```text
//! Product,Predicted Demand
//! <產品>,<預測需求>
//!
//! Required Materials
//! Raw Material,Quantity
//! <原物料>,<數量>
//! ```

use csv::{Writer, WriterBuilder};
use forecast_core::ForecastResult;

use crate::Result;

fn writer(out: &mut Vec<u8>) -> Writer<&mut Vec<u8>> {
    WriterBuilder::new().flexible(true).from_writer(out)
}

/// 將預測結果輸出為 CSV 字串
pub fn render_csv(result: &ForecastResult, product_label: &str) -> Result<String> {
    let mut out = Vec::new();

    {
        let mut w = writer(&mut out);
        w.write_record(["Product", "Predicted Demand"])?;
        let demand = result.predicted_demand.normalize().to_string();
        w.write_record([product_label, demand.as_str()])?;
        w.flush()?;
    }

    // 段落間空行；csv writer 會把空記錄寫成 `""`，因此直接寫入換行
    out.push(b'\n');

    {
        let mut w = writer(&mut out);
        w.write_record(["Required Materials"])?;
        w.write_record(["Raw Material", "Quantity"])?;
        for material in &result.materials {
            let quantity = material.required_quantity.normalize().to_string();
            w.write_record([material.material_name.as_str(), quantity.as_str()])?;
        }
        w.flush()?;
    }

    Ok(String::from_utf8(out)?)
}
