use anyhow::{Error, anyhow};

use crate::user_check::model::ProcessedUser;

const MAX_AGE: i64 = 150;
const RISK_FACTOR: f64 = 0.1;

pub fn process_user_data(name: &str, email: &str, age: i64) -> Result<ProcessedUser, Error> {
    // Проверки идут по порядку, останавливаемся на первой ошибке
    if name.is_empty() {
        return Err(anyhow!("Name is required"));
    }
    if email.is_empty() {
        return Err(anyhow!("Email is required"));
    }
    if age < 0 {
        return Err(anyhow!("Age must be positive"));
    }
    if age > MAX_AGE {
        return Err(anyhow!("Age too high"));
    }

    Ok(ProcessedUser {
        name: name.to_string(),
        email: email.to_string(),
        age,
        category: category_for_age(age).to_string(),
        risk_score: age as f64 * RISK_FACTOR,
    })
}

/// Категория по возрасту
fn category_for_age(age: i64) -> &'static str {
    if age < 18 {
        "minor"
    } else if age < 65 {
        "adult"
    } else {
        "senior"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn valid_user_is_categorized() {
        let processed = process_user_data("Bob", "bob@x.com", 30).unwrap();

        assert_eq!(processed.name, "Bob");
        assert_eq!(processed.email, "bob@x.com");
        assert_eq!(processed.age, 30);
        assert_eq!(processed.category, "adult");
        assert!((processed.risk_score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = process_user_data("", "bob@x.com", 30).unwrap_err();
        assert_eq!(format!("{err}"), "Name is required");
    }

    #[test]
    fn empty_email_is_rejected() {
        let err = process_user_data("Bob", "", 30).unwrap_err();
        assert_eq!(format!("{err}"), "Email is required");
    }

    #[test]
    fn negative_age_is_rejected() {
        let err = process_user_data("Bob", "bob@x.com", -1).unwrap_err();
        assert_eq!(format!("{err}"), "Age must be positive");
    }

    #[test]
    fn age_over_limit_is_rejected() {
        let err = process_user_data("Bob", "bob@x.com", 200).unwrap_err();
        assert_eq!(format!("{err}"), "Age too high");
    }

    #[test]
    fn name_is_checked_before_email() {
        let err = process_user_data("", "", -1).unwrap_err();
        assert_eq!(format!("{err}"), "Name is required");
    }

    #[test]
    fn age_boundaries() {
        assert_eq!(process_user_data("a", "b", 17).unwrap().category, "minor");
        assert_eq!(process_user_data("a", "b", 18).unwrap().category, "adult");
        assert_eq!(process_user_data("a", "b", 64).unwrap().category, "adult");
        assert_eq!(process_user_data("a", "b", 65).unwrap().category, "senior");
    }

    #[test]
    fn age_limits_are_inclusive() {
        assert_eq!(process_user_data("a", "b", 0).unwrap().category, "minor");
        assert_eq!(process_user_data("a", "b", 150).unwrap().category, "senior");
    }
}
