use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct ProcessedUser {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub category: String,
    pub risk_score: f64,
}
