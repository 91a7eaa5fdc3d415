use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Promotion categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DealType {
    Flash,
    EarlyBird,
    Weekend,
    Student,
    Group,
    Upgrade,
}

impl DealType {
    pub const ALL: [DealType; 6] = [
        DealType::Flash,
        DealType::EarlyBird,
        DealType::Weekend,
        DealType::Student,
        DealType::Group,
        DealType::Upgrade,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DealType::Flash => "flash",
            DealType::EarlyBird => "early-bird",
            DealType::Weekend => "weekend",
            DealType::Student => "student",
            DealType::Group => "group",
            DealType::Upgrade => "upgrade",
        }
    }
}

impl FromStr for DealType {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DealType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DealError::UnknownType(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DealError {
    #[error("Unknown deal type: {0}")]
    UnknownType(String),
}

/// A promotional fare shown on the deals page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Headline label, e.g. "40% OFF"
    pub discount: String,
    pub valid_until: NaiveDate,
    pub destinations: Vec<String>,
    pub original_price: i64,
    pub discounted_price: i64,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    pub terms: String,
    pub image: String,
}

impl Deal {
    pub fn savings(&self) -> i64 {
        self.original_price - self.discounted_price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealTypeCount {
    pub value: String,
    pub count: usize,
}

/// `None` keeps every deal.
pub fn filter_deals(deals: &[Deal], deal_type: Option<DealType>) -> Vec<Deal> {
    deals
        .iter()
        .filter(|deal| deal_type.map_or(true, |t| deal.deal_type == t))
        .cloned()
        .collect()
}

/// Count for "all" followed by one entry per deal type.
pub fn deal_counts(deals: &[Deal]) -> Vec<DealTypeCount> {
    let mut counts = vec![DealTypeCount {
        value: "all".to_string(),
        count: deals.len(),
    }];
    counts.extend(DealType::ALL.into_iter().map(|t| DealTypeCount {
        value: t.as_str().to_string(),
        count: deals.iter().filter(|d| d.deal_type == t).count(),
    }));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(id: u32, deal_type: DealType) -> Deal {
        Deal {
            id,
            title: format!("Deal {}", id),
            description: String::new(),
            discount: "25% OFF".to_string(),
            valid_until: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            destinations: vec!["Goa".to_string()],
            original_price: 6999,
            discounted_price: 5249,
            deal_type,
            terms: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_parse_deal_type() {
        assert_eq!("early-bird".parse::<DealType>().unwrap(), DealType::EarlyBird);
        assert!("clearance".parse::<DealType>().is_err());
    }

    #[test]
    fn test_filter_and_count() {
        let deals = vec![
            deal(1, DealType::Weekend),
            deal(2, DealType::Flash),
            deal(3, DealType::Weekend),
        ];

        assert_eq!(filter_deals(&deals, None).len(), 3);
        let weekend = filter_deals(&deals, Some(DealType::Weekend));
        assert_eq!(weekend.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 3]);

        let counts = deal_counts(&deals);
        assert_eq!(counts[0], DealTypeCount { value: "all".to_string(), count: 3 });
        let weekend_count = counts.iter().find(|c| c.value == "weekend").unwrap();
        assert_eq!(weekend_count.count, 2);
        let group_count = counts.iter().find(|c| c.value == "group").unwrap();
        assert_eq!(group_count.count, 0);
        assert_eq!(deals[0].savings(), 1750);
    }
}
