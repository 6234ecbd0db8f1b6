use crate::models::{ChartRecord, ChartTotals};

pub fn build_totals(records: &[ChartRecord]) -> ChartTotals {
    records
        .iter()
        .fold(ChartTotals::default(), |totals, record| ChartTotals {
            order_sum: totals.order_sum + record.order_sum,
            volume: totals.volume + record.volume,
            sales: totals.sales + record.sales,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(order_sum: f64, volume: f64, sales: f64) -> ChartRecord {
        ChartRecord {
            date: "01.01.2024".to_string(),
            order_sum,
            volume,
            sales,
        }
    }

    #[test]
    fn totals_sum_each_series() {
        let totals = build_totals(&[record(100.0, 1.0, 0.0), record(50.5, 0.0, 3.0)]);
        assert_eq!(
            totals,
            ChartTotals {
                order_sum: 150.5,
                volume: 1.0,
                sales: 3.0,
            }
        );
    }

    #[test]
    fn empty_list_totals_to_zero() {
        assert_eq!(build_totals(&[]), ChartTotals::default());
    }
}
