//! Fixed demonstration sequence.

use std::io;

use chrono::Utc;

use stockkeep_inventory::{Manager, Product, StockReport, Warehouse};

use crate::config::DemoConfig;

/// Receive two products, release one partially, print a stock report to
/// `out`, then recount. Returns the final warehouse state and the report.
pub fn run<W: io::Write>(config: &DemoConfig, out: &mut W) -> io::Result<(Warehouse, StockReport)> {
    let mut warehouse = Warehouse::new(config.warehouse_id.clone());
    let report = {
        let mut manager = Manager::new(config.manager.clone(), &mut warehouse);

        manager.create_income_receipt(Product::new("Rice", 100), "Supplier A", Utc::now());
        manager.create_income_receipt(Product::new("Flour", 50), "Supplier B", Utc::now());
        manager.create_outcome_receipt(Product::new("Rice", 30), "Customer C", Utc::now());

        let report = manager.write_stock_report(out, Utc::now(), Utc::now())?;

        manager.perform_inventory_check(&Product::new("Rice", 0), 65, Utc::now());
        report
    };

    Ok((warehouse, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_prints_report_and_ends_with_recount() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();
        let mut out = Vec::new();

        let (warehouse, report) = run(&config, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "=== Stock Report ===\nRice: 70\nFlour: 50\n");
        assert_eq!(report.lines().len(), 2);
        assert_eq!(warehouse.get("Rice").map(Product::quantity), Some(65));
        assert_eq!(warehouse.get("Flour").map(Product::quantity), Some(50));
    }
}
