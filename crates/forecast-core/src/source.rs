//! 資料來源介面
//!
//! 引擎不直接存取儲存層；呼叫端透過 [`ForecastDataSource`] 取得銷售序列與轉換率後再交給引擎。
//! 格式錯誤的銷售列必須在這一層被過濾掉。

use std::collections::HashMap;

use crate::{ConversionRate, ForecastError, RawSalesRow, Result, SalesRecord, SalesSeries};

/// 預測資料來源
pub trait ForecastDataSource {
    /// 取得產品的銷售序列（已過濾格式錯誤的列）
    fn sales_series(&self, product_id: &str) -> Result<SalesSeries>;

    /// 取得產品的原物料轉換率（保持儲存順序）
    fn conversion_rates(&self, product_id: &str) -> Result<Vec<ConversionRate>>;
}

/// 記憶體資料來源
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    sales: HashMap<String, Vec<RawSalesRow>>,
    rates: HashMap<String, Vec<ConversionRate>>,
    strict: bool,
}

impl InMemoryDataSource {
    /// 創建空的資料來源
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：加入原始銷售列
    pub fn with_sales_rows(mut self, product_id: &str, rows: Vec<RawSalesRow>) -> Self {
        self.sales
            .entry(product_id.to_string())
            .or_default()
            .extend(rows);
        self
    }

    /// 建構器模式：加入已解析的銷售記錄
    pub fn with_sales_records(self, product_id: &str, records: &[SalesRecord]) -> Self {
        let rows = records
            .iter()
            .map(|r| RawSalesRow::new(r.date.to_string(), r.quantity))
            .collect();
        self.with_sales_rows(product_id, rows)
    }

    /// 建構器模式：設置轉換率
    pub fn with_conversion_rates(mut self, product_id: &str, rates: Vec<ConversionRate>) -> Self {
        self.rates.insert(product_id.to_string(), rates);
        self
    }

    /// 建構器模式：未知產品是否回報 `ProductNotFound`
    /// - false: 未知產品視為沒有銷售資料（預設）
    /// - true: 未知產品直接回報錯誤
    pub fn with_strict_products(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn is_known(&self, product_id: &str) -> bool {
        self.sales.contains_key(product_id) || self.rates.contains_key(product_id)
    }

    fn check_known(&self, product_id: &str) -> Result<()> {
        if self.strict && !self.is_known(product_id) {
            return Err(ForecastError::ProductNotFound(product_id.to_string()));
        }
        Ok(())
    }
}

impl ForecastDataSource for InMemoryDataSource {
    fn sales_series(&self, product_id: &str) -> Result<SalesSeries> {
        self.check_known(product_id)?;

        let mut series = SalesSeries::new(product_id.to_string());
        let Some(rows) = self.sales.get(product_id) else {
            return Ok(series);
        };

        for row in rows {
            match row.to_record() {
                Some(record) => series.push(record),
                None => tracing::warn!(
                    "產品 {} 的銷售列格式錯誤，已略過: {:?}",
                    product_id,
                    row
                ),
            }
        }

        tracing::debug!(
            "產品 {} 銷售列 {} 筆，有效 {} 筆",
            product_id,
            rows.len(),
            series.len()
        );

        Ok(series)
    }

    fn conversion_rates(&self, product_id: &str) -> Result<Vec<ConversionRate>> {
        self.check_known(product_id)?;
        Ok(self.rates.get(product_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn source() -> InMemoryDataSource {
        InMemoryDataSource::new()
            .with_sales_rows(
                "1",
                vec![
                    RawSalesRow::new("20250101", 100.0),
                    RawSalesRow {
                        date: None,
                        quantity: Some(50.0),
                    },
                    RawSalesRow::new("20250102", 110.0),
                    RawSalesRow::new("not-a-date", 10.0),
                ],
            )
            .with_conversion_rates(
                "1",
                vec![
                    ConversionRate::new("steel".to_string(), Decimal::from(2)),
                    ConversionRate::new("bolt".to_string(), Decimal::from(8)),
                ],
            )
    }

    #[test]
    fn test_malformed_rows_are_filtered() {
        let series = source().sales_series("1").unwrap();

        assert_eq!(series.product_id, "1");
        assert_eq!(series.len(), 2);
        let first = series.first().unwrap();
        let last = series.last().unwrap();
        assert_eq!(last.date - first.date, 1);
        assert_eq!(last.quantity, 110.0);
    }

    #[test]
    fn test_rates_keep_storage_order() {
        let rates = source().conversion_rates("1").unwrap();
        let names: Vec<_> = rates.iter().map(|r| r.material_name.as_str()).collect();
        assert_eq!(names, vec!["steel", "bolt"]);
    }

    #[test]
    fn test_unknown_product_is_empty_by_default() {
        let source = source();
        assert!(source.sales_series("99").unwrap().is_empty());
        assert!(source.conversion_rates("99").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_product_in_strict_mode() {
        let source = source().with_strict_products(true);
        assert!(matches!(
            source.sales_series("99"),
            Err(ForecastError::ProductNotFound(ref id)) if id == "99"
        ));
        assert!(source.sales_series("1").is_ok());
    }

    #[test]
    fn test_records_roundtrip_through_rows() {
        let records = [SalesRecord::new(5, 50.0), SalesRecord::new(3, 40.0)];
        let source = InMemoryDataSource::new().with_sales_records("A", &records);

        let series = source.sales_series("A").unwrap();
        assert_eq!(series.records, records.to_vec());
    }
}
