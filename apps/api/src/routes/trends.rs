//! Illustrative trending keywords. Static data; there is no trends backend.

use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendKeyword {
    pub keyword: String,
    /// Growth as displayed, e.g. "+95%".
    pub trend: String,
    pub difficulty: Difficulty,
}

const TRENDING_KEYWORDS: &[(&str, &str, Difficulty)] = &[
    ("AI Content Automation", "+150%", Difficulty::High),
    ("Short-form Video Strategy", "+95%", Difficulty::Medium),
    ("Creator Monetization 2025", "+70%", Difficulty::Medium),
    ("LinkedIn Personal Branding", "+55%", Difficulty::Low),
    ("Sustainable Creator Economy", "+40%", Difficulty::Easy),
];

pub fn trending_keywords() -> Vec<TrendKeyword> {
    TRENDING_KEYWORDS
        .iter()
        .map(|&(keyword, trend, difficulty)| TrendKeyword {
            keyword: keyword.to_string(),
            trend: trend.to_string(),
            difficulty,
        })
        .collect()
}

/// GET /api/get-trends
pub async fn handle_get_trends() -> Json<Vec<TrendKeyword>> {
    Json(trending_keywords())
}
