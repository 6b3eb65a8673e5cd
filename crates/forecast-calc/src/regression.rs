//! 銷售序列線性迴歸
//!
//! 以第一筆記錄的日期為時間原點，對 `quantity ≈ θ0 + θ1 * t` 做最小平方法擬合。
//! 2x2 正規方程的閉式解等價於以均值與共變異數計算斜率，這裡直接用後者以避免大數相減。

use forecast_core::{ForecastConfig, ForecastError, Result, SalesSeries};
use serde::{Deserialize, Serialize};

use crate::MIN_RECORDS;

/// 擬合結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// 截距 θ0（t = 0，即第一筆記錄日期的數量）
    pub intercept: f64,

    /// 斜率 θ1（每天變化量）
    pub slope: f64,

    /// 時間原點（第一筆記錄的日期）
    pub origin_date: i64,

    /// 參與擬合的記錄數
    pub observations: usize,
}

impl LinearFit {
    /// 在相對時間座標 t 上求值
    pub fn predict_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }

    /// 在絕對日期上求值
    pub fn predict_at_date(&self, date: i64) -> f64 {
        self.predict_at(time_offset(date, self.origin_date))
    }
}

/// 銷售序列迴歸器
#[derive(Debug, Clone)]
pub struct SalesSeriesRegressor {
    degeneracy_epsilon: f64,
}

impl SalesSeriesRegressor {
    /// 創建新的迴歸器
    pub fn new(config: &ForecastConfig) -> Self {
        Self {
            degeneracy_epsilon: config.degeneracy_epsilon,
        }
    }

    /// 擬合直線
    pub fn fit(&self, series: &SalesSeries) -> Result<LinearFit> {
        let records = &series.records;
        let n = records.len();
        if n < MIN_RECORDS {
            return Err(ForecastError::InsufficientData {
                required: MIN_RECORDS,
                actual: n,
            });
        }

        // 時間原點取序列的第一筆，而非最小日期
        let origin_date = records[0].date;
        let ts: Vec<f64> = records
            .iter()
            .map(|r| time_offset(r.date, origin_date))
            .collect();

        let count = n as f64;
        let mean_t = ts.iter().sum::<f64>() / count;
        let mean_y = records.iter().map(|r| r.quantity).sum::<f64>() / count;

        let (sxx, sxy) = ts
            .iter()
            .zip(records)
            .fold((0.0, 0.0), |(sxx, sxy), (&t, r)| {
                let dt = t - mean_t;
                (sxx + dt * dt, sxy + dt * (r.quantity - mean_y))
            });

        // det(XᵗX) = n·Σt² - (Σt)² = n·Σ(t - t̄)²
        let determinant = count * sxx;
        if determinant.is_nan() || determinant <= self.degeneracy_epsilon {
            return Err(ForecastError::DegenerateSeries { records: n });
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_t;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(ForecastError::CalculationError(format!(
                "迴歸係數非有限值: intercept={}, slope={}",
                intercept, slope
            )));
        }

        tracing::debug!(
            "產品 {} 迴歸完成: n={}, intercept={}, slope={}",
            series.product_id,
            n,
            intercept,
            slope
        );

        Ok(LinearFit {
            intercept,
            slope,
            origin_date,
            observations: n,
        })
    }

    /// 擬合並預測需求
    ///
    /// 預測點是**最後一筆提供記錄**的時間座標（不是最大日期，也不是未來日期），
    /// 因此回傳值是該點的擬合值而非外推。回傳原始實數，可能為負，由呼叫端決定如何取整。
    pub fn fit_and_predict(&self, series: &SalesSeries) -> Result<f64> {
        let fit = self.fit(series)?;

        // fit 成功代表至少有兩筆記錄
        let last_date = series
            .last()
            .map(|r| r.date)
            .ok_or(ForecastError::InsufficientData {
                required: MIN_RECORDS,
                actual: 0,
            })?;

        let predicted = fit.predict_at_date(last_date);
        if !predicted.is_finite() {
            return Err(ForecastError::CalculationError(format!(
                "預測值非有限值: {}",
                predicted
            )));
        }

        Ok(predicted)
    }
}

impl Default for SalesSeriesRegressor {
    fn default() -> Self {
        Self::new(&ForecastConfig::default())
    }
}

/// 相對時間座標，以 i128 相減避免極端日期溢位
fn time_offset(date: i64, origin: i64) -> f64 {
    (i128::from(date) - i128::from(origin)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::SalesRecord;
    use proptest::prelude::*;
    use rstest::rstest;

    fn series(points: &[(i64, f64)]) -> SalesSeries {
        SalesSeries::new("P-001".to_string()).with_records(
            points
                .iter()
                .map(|&(date, qty)| SalesRecord::new(date, qty))
                .collect(),
        )
    }

    #[rstest]
    #[case(&[])]
    #[case(&[(5, 50.0)])]
    fn test_insufficient_data(#[case] points: &[(i64, f64)]) {
        let err = SalesSeriesRegressor::default()
            .fit_and_predict(&series(points))
            .unwrap_err();

        assert!(matches!(
            err,
            ForecastError::InsufficientData { required: 2, actual } if actual == points.len()
        ));
    }

    #[rstest]
    #[case(&[(3, 10.0), (3, 20.0)])]
    #[case(&[(7, 1.0), (7, 1.0), (7, 5.0)])]
    fn test_degenerate_series(#[case] points: &[(i64, f64)]) {
        let err = SalesSeriesRegressor::default()
            .fit_and_predict(&series(points))
            .unwrap_err();

        assert!(matches!(err, ForecastError::DegenerateSeries { records } if records == points.len()));
    }

    #[test]
    fn test_exact_linear_fit() {
        let fit = SalesSeriesRegressor::default()
            .fit(&series(&[(0, 100.0), (1, 110.0), (2, 120.0)]))
            .unwrap();

        assert!((fit.intercept - 100.0).abs() < 1e-9);
        assert!((fit.slope - 10.0).abs() < 1e-9);
        assert_eq!(fit.origin_date, 0);
        assert_eq!(fit.observations, 3);
    }

    #[test]
    fn test_two_point_declining_trend() {
        let predicted = SalesSeriesRegressor::default()
            .fit_and_predict(&series(&[(0, 100.0), (10, 80.0)]))
            .unwrap();

        assert!((predicted - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_prediction_point_is_last_supplied_record() {
        // 亂序輸入：最後一筆是 day 1，而不是最大日期 day 2
        let data = series(&[(0, 100.0), (2, 120.0), (1, 110.0)]);
        let predicted = SalesSeriesRegressor::default().fit_and_predict(&data).unwrap();

        assert!((predicted - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_origin_is_first_record_not_minimum() {
        let fit = SalesSeriesRegressor::default()
            .fit(&series(&[(10, 20.0), (0, 0.0), (5, 10.0)]))
            .unwrap();

        assert_eq!(fit.origin_date, 10);
        // 原點在 day 10，截距即 day 10 的擬合值
        assert!((fit.intercept - 20.0).abs() < 1e-9);
        assert!((fit.predict_at_date(0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_noisy_series_returns_fitted_value() {
        // y = 1, 3, 2, 4 at t = 0..3: slope 0.8, intercept 1.3
        let predicted = SalesSeriesRegressor::default()
            .fit_and_predict(&series(&[(0, 1.0), (1, 3.0), (2, 2.0), (3, 4.0)]))
            .unwrap();

        assert!((predicted - 3.7).abs() < 1e-9);
    }

    #[test]
    fn test_negative_prediction_is_not_clamped() {
        let predicted = SalesSeriesRegressor::default()
            .fit_and_predict(&series(&[(0, 10.0), (1, 0.0), (2, -10.0)]))
            .unwrap();

        assert!((predicted + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_quantity_is_reported() {
        let err = SalesSeriesRegressor::default()
            .fit_and_predict(&series(&[(0, f64::NAN), (1, 1.0)]))
            .unwrap_err();

        assert!(matches!(err, ForecastError::CalculationError(_)));
    }

    #[test]
    fn test_extreme_dates_do_not_overflow() {
        let predicted = SalesSeriesRegressor::default()
            .fit_and_predict(&series(&[(i64::MAX, 1.0), (i64::MAX - 1, 2.0)]))
            .unwrap();

        assert!((predicted - 2.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_translation_invariance(
            points in prop::collection::vec((0i64..1000, 0.0f64..1000.0), 2..40),
            shift in -1_000_000i64..1_000_000,
        ) {
            prop_assume!(points.iter().any(|p| p.0 != points[0].0));

            let shifted: Vec<_> = points.iter().map(|&(d, q)| (d + shift, q)).collect();
            let regressor = SalesSeriesRegressor::default();

            let original = regressor.fit_and_predict(&series(&points)).unwrap();
            let moved = regressor.fit_and_predict(&series(&shifted)).unwrap();

            prop_assert_eq!(original, moved);
        }

        #[test]
        fn prop_exact_fit_on_a_line(
            dates in prop::collection::vec(-500i64..500, 2..40),
            a in -1000.0f64..1000.0,
            b in -50.0f64..50.0,
        ) {
            prop_assume!(dates.iter().any(|d| *d != dates[0]));

            let origin = dates[0];
            let points: Vec<_> = dates
                .iter()
                .map(|&d| (d, a + b * (d - origin) as f64))
                .collect();

            let predicted = SalesSeriesRegressor::default()
                .fit_and_predict(&series(&points))
                .unwrap();

            let t_last = (dates[dates.len() - 1] - origin) as f64;
            let expected = a + b * t_last;
            let scale = 1.0 + a.abs() + b.abs() * 1000.0;
            prop_assert!((predicted - expected).abs() <= 1e-9 * scale);
        }
    }
}
