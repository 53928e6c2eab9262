//! Profile completion score.
//!
//! The score covers a fixed set of core attributes plus one entry per field
//! of the active role schema. It is a pure function of the canonical
//! profile record: no edit buffer, no hidden state.

use super::aggregate::ArtistProfile;
use super::dynamic_fields::{format_number, FieldValue};
use serde::{Deserialize, Serialize};

/// Number of core attributes every profile is scored on
pub const CORE_FIELD_COUNT: usize = 13;

/// Longest text shown verbatim in the breakdown
const DISPLAY_LIMIT: usize = 20;

// ============================================================================
// Scored value
// ============================================================================

/// Heterogeneous value being scored
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreValue {
    Missing,
    Text(String),
    Number(f64),
    Flag(bool),
    List(Vec<String>),
}

impl ScoreValue {
    /// Strings count when non-blank, numbers always (zero included), lists
    /// when non-empty, flags only when set.
    pub fn is_filled(&self) -> bool {
        match self {
            ScoreValue::Missing => false,
            ScoreValue::Text(s) => !s.trim().is_empty(),
            ScoreValue::Number(_) => true,
            ScoreValue::Flag(b) => *b,
            ScoreValue::List(items) => !items.is_empty(),
        }
    }

    pub fn display_value(&self) -> String {
        match self {
            ScoreValue::Missing => "-".to_string(),
            ScoreValue::Text(s) => truncate(s),
            ScoreValue::Number(n) => format_number(*n),
            ScoreValue::Flag(b) => b.to_string(),
            ScoreValue::List(items) => items.join(", "),
        }
    }

    fn text(value: &str) -> Self {
        ScoreValue::Text(value.to_string())
    }

    fn opt_text(value: &Option<String>) -> Self {
        value.as_deref().map_or(ScoreValue::Missing, Self::text)
    }

    fn opt_number(value: Option<f64>) -> Self {
        value.map_or(ScoreValue::Missing, ScoreValue::Number)
    }

    fn dynamic(value: Option<&FieldValue>) -> Self {
        match value {
            None => ScoreValue::Missing,
            Some(FieldValue::Text(s)) => ScoreValue::Text(s.clone()),
            Some(FieldValue::Number(n)) => ScoreValue::Number(*n),
            Some(FieldValue::Bool(b)) => ScoreValue::Flag(*b),
        }
    }
}

fn truncate(s: &str) -> String {
    if s.chars().count() > DISPLAY_LIMIT {
        let head: String = s.chars().take(DISPLAY_LIMIT).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

// ============================================================================
// Result
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionItem {
    pub label: String,
    /// Set for entries coming from the role schema
    pub field_name: Option<String>,
    pub filled: bool,
    pub display_value: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompletionScore {
    pub percentage: u8,
    pub filled: usize,
    pub total: usize,
    pub missing: Vec<String>,
    pub items: Vec<CompletionItem>,
}

impl CompletionScore {
    /// Score of an absent profile
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn band(&self) -> CompletionBand {
        CompletionBand::from_percentage(self.percentage)
    }

    /// Labels of required schema fields that are still empty
    pub fn missing_required(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.required && !item.filled)
            .map(|item| item.label.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.filled == self.total
    }
}

/// UI band for the completion percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBand {
    Excellent,
    GoodProgress,
    Fair,
    Incomplete,
}

impl CompletionBand {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90.. => CompletionBand::Excellent,
            70..=89 => CompletionBand::GoodProgress,
            50..=69 => CompletionBand::Fair,
            _ => CompletionBand::Incomplete,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompletionBand::Excellent => "Excellent",
            CompletionBand::GoodProgress => "Good Progress",
            CompletionBand::Fair => "Fair",
            CompletionBand::Incomplete => "Incomplete",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CompletionBand::Excellent => "green",
            CompletionBand::GoodProgress => "yellow",
            CompletionBand::Fair => "orange",
            CompletionBand::Incomplete => "red",
        }
    }
}

// ============================================================================
// Scoring
// ============================================================================

fn core_values(profile: &ArtistProfile) -> [(&'static str, ScoreValue); CORE_FIELD_COUNT] {
    [
        ("First Name", ScoreValue::text(&profile.first_name)),
        ("Last Name", ScoreValue::text(&profile.last_name)),
        ("Email", ScoreValue::text(&profile.email)),
        ("Phone", ScoreValue::opt_text(&profile.phone)),
        ("Location", ScoreValue::opt_text(&profile.location)),
        ("Bio", ScoreValue::opt_text(&profile.bio)),
        ("Languages", ScoreValue::List(profile.languages.clone())),
        ("Years of Experience", ScoreValue::opt_number(profile.experience_years)),
        ("Skills", ScoreValue::List(profile.skills.clone())),
        ("Height", ScoreValue::opt_number(profile.height)),
        ("Weight", ScoreValue::opt_number(profile.weight)),
        ("Profile Photo", ScoreValue::opt_text(&profile.profile_photo_url)),
        ("Daily Rate", ScoreValue::opt_number(profile.daily_rate)),
    ]
}

pub fn score_profile(profile: Option<&ArtistProfile>) -> CompletionScore {
    let Some(profile) = profile else {
        return CompletionScore::empty();
    };

    let core = core_values(profile)
        .into_iter()
        .map(|(label, value)| CompletionItem {
            label: label.to_string(),
            field_name: None,
            filled: value.is_filled(),
            display_value: value.display_value(),
            required: false,
        });

    let dynamic = profile.schema_fields().iter().map(|descriptor| {
        let value = ScoreValue::dynamic(profile.dynamic_fields.get(&descriptor.name));
        CompletionItem {
            label: descriptor.display_label().to_string(),
            field_name: Some(descriptor.name.clone()),
            filled: value.is_filled(),
            display_value: value.display_value(),
            required: descriptor.required,
        }
    });

    let items: Vec<CompletionItem> = core.chain(dynamic).collect();
    let total = items.len();
    let filled = items.iter().filter(|item| item.filled).count();
    let missing = items
        .iter()
        .filter(|item| !item.filled)
        .map(|item| item.label.clone())
        .collect();
    let percentage = if total == 0 {
        0
    } else {
        (filled as f64 / total as f64 * 100.0).round() as u8
    };

    CompletionScore {
        percentage,
        filled,
        total,
        missing,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_artist_profile::aggregate::ArtistProfileId;
    use crate::shared::metadata::{ArtistType, FieldDescriptor, FieldKind};
    use proptest::prelude::*;
    use uuid::Uuid;

    fn bare_profile() -> ArtistProfile {
        ArtistProfile::new(ArtistProfileId::new(Uuid::nil()), "", "", "")
    }

    fn full_profile() -> ArtistProfile {
        let mut profile = ArtistProfile::new(
            ArtistProfileId::new(Uuid::nil()),
            "Maya",
            "Rao",
            "maya@example.com",
        );
        profile.phone = Some("+91 98000 00000".into());
        profile.location = Some("Mumbai".into());
        profile.bio = Some("Classically trained dancer".into());
        profile.languages = vec!["Hindi".into(), "English".into()];
        profile.experience_years = Some(6.0);
        profile.skills = vec!["Kathak".into()];
        profile.height = Some(165.0);
        profile.weight = Some(54.0);
        profile.profile_photo_url = Some("https://cdn.example/maya.jpg".into());
        profile.daily_rate = Some(15000.0);
        profile
    }

    fn with_schema(mut profile: ArtistProfile) -> ArtistProfile {
        profile.artist_type = Some(ArtistType::new(
            "Dancer",
            vec![
                FieldDescriptor::new("styles", "Dance Styles", FieldKind::Text).required(),
                FieldDescriptor::new("teaches", "Teaches Classes", FieldKind::Boolean),
                FieldDescriptor::new("reel", "Dance Reel", FieldKind::Url).required(),
            ],
        ));
        profile
    }

    #[test]
    fn test_absent_profile_scores_zero() {
        let score = score_profile(None);
        assert_eq!(score.percentage, 0);
        assert_eq!(score.total, 0);
        assert!(score.missing.is_empty());
        assert!(score.items.is_empty());
        assert!(!score.is_complete());
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let score = score_profile(Some(&bare_profile()));
        assert_eq!(score.percentage, 0);
        assert_eq!(score.total, CORE_FIELD_COUNT);
        assert_eq!(score.missing.len(), CORE_FIELD_COUNT);
        assert_eq!(score.band(), CompletionBand::Incomplete);
    }

    #[test]
    fn test_full_profile_scores_hundred() {
        let score = score_profile(Some(&full_profile()));
        assert_eq!(score.percentage, 100);
        assert_eq!(score.filled, CORE_FIELD_COUNT);
        assert!(score.missing.is_empty());
        assert!(score.is_complete());
    }

    #[test]
    fn test_dynamic_fields_join_the_total() {
        let mut profile = with_schema(full_profile());
        profile.dynamic_fields.upsert("styles", "Kathak".into());
        profile.dynamic_fields.upsert("teaches", false.into());

        let score = score_profile(Some(&profile));

        assert_eq!(score.total, CORE_FIELD_COUNT + 3);
        assert_eq!(score.filled, CORE_FIELD_COUNT + 1);
        assert_eq!(score.missing, vec!["Teaches Classes", "Dance Reel"]);
        assert_eq!(score.missing_required(), vec!["Dance Reel"]);
        // 14 / 16 = 87.5
        assert_eq!(score.percentage, 88);

        let styles = score.items.iter().find(|i| i.label == "Dance Styles").unwrap();
        assert_eq!(styles.field_name.as_deref(), Some("styles"));
        assert!(styles.required);
    }

    #[test]
    fn test_zero_weight_is_filled() {
        let mut profile = bare_profile();
        profile.weight = Some(0.0);
        let score = score_profile(Some(&profile));
        let weight = score.items.iter().find(|i| i.label == "Weight").unwrap();
        assert!(weight.filled);
        assert_eq!(weight.display_value, "0");
        assert!(!score.missing.contains(&"Weight".to_string()));
        assert!(score.missing.contains(&"Height".to_string()));
    }

    #[test]
    fn test_blank_text_is_not_filled() {
        let mut profile = bare_profile();
        profile.bio = Some("   ".into());
        let score = score_profile(Some(&profile));
        let bio = score.items.iter().find(|i| i.label == "Bio").unwrap();
        assert!(!bio.filled);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(
            ScoreValue::text("abcdefghijklmnopqrstuvwxy").display_value(),
            "abcdefghijklmnopqrst..."
        );
        assert_eq!(
            ScoreValue::text("exactly twenty chars").display_value(),
            "exactly twenty chars"
        );
        assert_eq!(
            ScoreValue::Text("ё".repeat(21)).display_value(),
            format!("{}...", "ё".repeat(20))
        );
        assert_eq!(
            ScoreValue::List(vec!["Hindi".into(), "English".into()]).display_value(),
            "Hindi, English"
        );
        assert_eq!(ScoreValue::Number(172.5).display_value(), "172.5");
        assert_eq!(ScoreValue::Missing.display_value(), "-");
    }

    #[test]
    fn test_bio_over_twenty_chars_is_truncated_in_breakdown() {
        let mut profile = bare_profile();
        profile.bio = Some("Trained at the Royal Academy".into());
        let score = score_profile(Some(&profile));
        let bio = score.items.iter().find(|i| i.label == "Bio").unwrap();
        assert_eq!(bio.display_value, "Trained at the Royal...");
    }

    #[test]
    fn test_flags() {
        assert!(ScoreValue::Flag(true).is_filled());
        assert!(!ScoreValue::Flag(false).is_filled());
        assert!(!ScoreValue::List(vec![]).is_filled());
    }

    #[test]
    fn test_bands() {
        assert_eq!(CompletionBand::from_percentage(100), CompletionBand::Excellent);
        assert_eq!(CompletionBand::from_percentage(91).label(), "Excellent");
        assert_eq!(CompletionBand::from_percentage(91).color(), "green");
        assert_eq!(CompletionBand::from_percentage(90), CompletionBand::Excellent);
        assert_eq!(CompletionBand::from_percentage(89), CompletionBand::GoodProgress);
        assert_eq!(CompletionBand::from_percentage(70).label(), "Good Progress");
        assert_eq!(CompletionBand::from_percentage(70).color(), "yellow");
        assert_eq!(CompletionBand::from_percentage(50).label(), "Fair");
        assert_eq!(CompletionBand::from_percentage(50).color(), "orange");
        assert_eq!(CompletionBand::from_percentage(49).label(), "Incomplete");
        assert_eq!(CompletionBand::from_percentage(49).color(), "red");
        assert_eq!(CompletionBand::from_percentage(0), CompletionBand::Incomplete);
    }

    fn arb_text() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some(String::new())),
            Just(Some("   ".to_string())),
            "[a-z ]{1,30}".prop_map(Some),
        ]
    }

    fn arb_number() -> impl Strategy<Value = Option<f64>> {
        prop_oneof![Just(None), Just(Some(0.0)), (0.0f64..500.0).prop_map(Some)]
    }

    fn arb_value() -> impl Strategy<Value = Option<FieldValue>> {
        prop_oneof![
            Just(None),
            any::<bool>().prop_map(|b| Some(FieldValue::Bool(b))),
            (-10.0f64..10.0).prop_map(|n| Some(FieldValue::Number(n))),
            "[a-z ]{0,25}".prop_map(|s| Some(FieldValue::Text(s))),
        ]
    }

    prop_compose! {
        fn arb_profile()(
            first_name in "[a-z]{0,6}",
            phone in arb_text(),
            bio in arb_text(),
            photo in arb_text(),
            height in arb_number(),
            weight in arb_number(),
            rate in arb_number(),
            skills in prop::collection::vec("[a-z]{1,8}", 0..3),
            dynamic in prop::collection::vec(arb_value(), 0..6),
        ) -> ArtistProfile {
            let mut profile = bare_profile();
            profile.first_name = first_name;
            profile.phone = phone;
            profile.bio = bio;
            profile.profile_photo_url = photo;
            profile.height = height;
            profile.weight = weight;
            profile.daily_rate = rate;
            profile.skills = skills;

            let fields = (0..dynamic.len())
                .map(|i| FieldDescriptor::new(format!("f{}", i), format!("Field {}", i), FieldKind::Text))
                .collect();
            profile.artist_type = Some(ArtistType::new("Role", fields));
            for (i, value) in dynamic.into_iter().enumerate() {
                if let Some(value) = value {
                    profile.dynamic_fields.upsert(&format!("f{}", i), value);
                }
            }
            profile
        }
    }

    proptest! {
        #[test]
        fn score_is_deterministic(profile in arb_profile()) {
            prop_assert_eq!(score_profile(Some(&profile)), score_profile(Some(&profile)));
        }

        #[test]
        fn counts_add_up(profile in arb_profile()) {
            let score = score_profile(Some(&profile));
            prop_assert_eq!(score.total, CORE_FIELD_COUNT + profile.schema_fields().len());
            prop_assert_eq!(score.filled + score.missing.len(), score.total);
            prop_assert_eq!(score.items.len(), score.total);
        }

        #[test]
        fn percentage_is_bounded(profile in arb_profile()) {
            let score = score_profile(Some(&profile));
            prop_assert!(score.percentage <= 100);
            if score.filled == score.total {
                prop_assert_eq!(score.percentage, 100);
            }
            if score.filled == 0 {
                prop_assert_eq!(score.percentage, 0);
            }
        }
    }
}
