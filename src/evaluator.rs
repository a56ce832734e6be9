//! Strength evaluator - main classification logic.

use secrecy::ExposeSecret;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::{CRITERIA, scan};
use crate::types::{FieldValue, SatisfiedCount, StrengthTier};

/// Classifies a candidate password into one of four strength tiers.
///
/// Total over every [`FieldValue`]: non-text values and empty strings
/// classify as [`StrengthTier::Weak`] without evaluating the criteria.
/// The function never fails and has no side effects, so call sites can
/// pass raw form-event values straight through.
///
/// # Arguments
/// * `value` - The raw form value to classify
///
/// # Returns
/// The [`StrengthTier`] for the number of satisfied criteria.
pub fn evaluate_strength(value: &FieldValue) -> StrengthTier {
    let Some(text) = value.as_text() else {
        return StrengthTier::Weak;
    };

    let pwd = text.expose_secret();
    if pwd.is_empty() {
        return StrengthTier::Weak;
    }

    let report = scan(pwd);
    let satisfied = CRITERIA.iter().filter(|criterion| criterion(&report)).count() as u8;

    #[cfg(feature = "tracing")]
    tracing::debug!("criteria tally complete: {} of 5 satisfied", satisfied);

    SatisfiedCount::new(satisfied).tier()
}

/// Debounce window before an evaluation runs, so a newer keystroke can
/// cancel a superseded one.
#[cfg(feature = "async")]
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Async version that sends the resulting tier via channel.
///
/// Waits out the debounce window, then checks the token: a cancelled
/// evaluation delivers nothing. Send failures mean the receiver side went
/// away and are ignored.
#[cfg(feature = "async")]
pub async fn evaluate_strength_tx(
    value: &FieldValue,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthTier>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled by a newer keystroke");
        return;
    }

    let tier = evaluate_strength(value);

    if let Err(_err) = tx.send(tier).await {
        #[cfg(feature = "tracing")]
        tracing::error!("failed to send strength tier: {}", _err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_evaluate_short_lowercase_only() {
        // Lowercase only, 5 characters: one criterion.
        let value = FieldValue::from("short");
        assert_eq!(evaluate_strength(&value), StrengthTier::Weak);
    }

    #[test]
    fn test_evaluate_length_lowercase_digit() {
        // Length, lowercase and digit: three criteria.
        let value = FieldValue::from("password1");
        assert_eq!(evaluate_strength(&value), StrengthTier::Medium);
    }

    #[test]
    fn test_evaluate_uppercase_only_with_length() {
        // Length and uppercase: two criteria.
        let value = FieldValue::from("PASSWORD");
        assert_eq!(evaluate_strength(&value), StrengthTier::Medium);
    }

    #[test]
    fn test_evaluate_four_criteria() {
        let value = FieldValue::from("Password1");
        assert_eq!(evaluate_strength(&value), StrengthTier::Strong);
    }

    #[test]
    fn test_evaluate_all_criteria() {
        let value = FieldValue::from("Password1!");
        assert_eq!(evaluate_strength(&value), StrengthTier::VeryStrong);
    }

    #[test]
    fn test_evaluate_length_boundary() {
        // All four classes in 7 characters stays one criterion short.
        assert_eq!(
            evaluate_strength(&FieldValue::from("Abcde1!")),
            StrengthTier::Strong
        );
        assert_eq!(
            evaluate_strength(&FieldValue::from("Abcdef1!")),
            StrengthTier::VeryStrong
        );
    }

    #[test]
    fn test_evaluate_empty_string() {
        let value = FieldValue::from("");
        assert_eq!(evaluate_strength(&value), StrengthTier::Weak);
    }

    #[test]
    fn test_evaluate_non_text_values() {
        let values = [
            FieldValue::Number(12345678.0),
            FieldValue::Bool(true),
            FieldValue::Absent,
            FieldValue::List(vec![FieldValue::from("Password1!")]),
            FieldValue::Map(HashMap::from([(
                "password".to_string(),
                FieldValue::from("Password1!"),
            )])),
        ];

        for value in values {
            assert_eq!(evaluate_strength(&value), StrengthTier::Weak);
        }
    }

    #[test]
    fn test_evaluate_is_pure() {
        let value = FieldValue::from("MyPass123!");
        assert_eq!(evaluate_strength(&value), evaluate_strength(&value));
    }

    #[test]
    fn test_evaluate_order_independent() {
        // Same multiset of characters, shuffled.
        let tiers: Vec<StrengthTier> = ["Password1!", "!1drowssaP", "aP!s1sdrow"]
            .iter()
            .map(|s| evaluate_strength(&FieldValue::from(*s)))
            .collect();
        assert_eq!(tiers, vec![StrengthTier::VeryStrong; 3]);
    }

    #[test]
    fn test_evaluate_unclassified_characters_count_toward_length() {
        // Spaces and accents set no class flag but still add length.
        // Lowercase + length: two criteria.
        let value = FieldValue::from("pass wörd");
        assert_eq!(evaluate_strength(&value), StrengthTier::Medium);
    }
}
