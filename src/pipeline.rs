//! Pipeline Board Helpers
//!
//! Pure grouping over the in-memory deal list; the board never refilters
//! server-side, it just buckets what the last fetch returned.

use crate::models::{Deal, DealStage};

/// Cards for one column, in fetch order
pub fn deals_in_stage(deals: &[Deal], stage: DealStage) -> Vec<Deal> {
    deals.iter().filter(|d| d.stage == stage).cloned().collect()
}

/// Sum of card values in one column
pub fn stage_value(deals: &[Deal], stage: DealStage) -> f64 {
    deals
        .iter()
        .filter(|d| d.stage == stage)
        .map(|d| d.value)
        .sum()
}

/// Sum over the whole list, shown in the view header
pub fn total_value(deals: &[Deal]) -> f64 {
    deals.iter().map(|d| d.value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_deal(id: &str, stage: DealStage, value: f64) -> Deal {
        Deal {
            id: id.to_string(),
            owner_id: "owner".to_string(),
            contact_id: None,
            title: format!("Deal {}", id),
            value,
            currency: "USD".to_string(),
            stage,
            probability: 50,
            expected_close_date: None,
            actual_close_date: None,
            notes: None,
            created_at: "2024-01-01T00:00:00".to_string(),
            updated_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn every_deal_lands_in_exactly_one_column() {
        let deals = vec![
            make_deal("a", DealStage::Lead, 100.0),
            make_deal("b", DealStage::Proposal, 200.0),
            make_deal("c", DealStage::Lead, 300.0),
        ];
        let total: usize = DealStage::PIPELINE
            .iter()
            .map(|&stage| deals_in_stage(&deals, stage).len())
            .sum();
        assert_eq!(total, deals.len());
        assert_eq!(deals_in_stage(&deals, DealStage::Lead).len(), 2);
        assert!(deals_in_stage(&deals, DealStage::ClosedWon).is_empty());
    }

    #[test]
    fn column_totals_sum_card_values() {
        let deals = vec![
            make_deal("a", DealStage::Lead, 100.0),
            make_deal("b", DealStage::Lead, 250.0),
            make_deal("c", DealStage::ClosedWon, 1_000.0),
        ];
        assert!((stage_value(&deals, DealStage::Lead) - 350.0).abs() < f64::EPSILON);
        assert_eq!(stage_value(&deals, DealStage::Proposal), 0.0);
        assert!((total_value(&deals) - 1_350.0).abs() < f64::EPSILON);
    }
}
