use super::dynamic_fields::DynamicFields;
use crate::domain::common::AggregateId;
use crate::shared::error::ProfileError;
use crate::shared::metadata::{ArtistType, FieldDescriptor};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Profile key: a UUID, or the numeric key some backends hand out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtistProfileId {
    Uuid(Uuid),
    Numeric(u64),
}

impl ArtistProfileId {
    pub fn new(value: Uuid) -> Self {
        Self::Uuid(value)
    }

    pub fn new_v4() -> Self {
        Self::Uuid(Uuid::new_v4())
    }
}

impl AggregateId for ArtistProfileId {
    fn as_string(&self) -> String {
        self.to_string()
    }

    fn from_string(s: &str) -> Result<Self, ProfileError> {
        let trimmed = s.trim();
        if let Ok(key) = trimmed.parse::<u64>() {
            return Ok(Self::Numeric(key));
        }
        Uuid::from_string(trimmed).map(ArtistProfileId::new)
    }
}

impl std::fmt::Display for ArtistProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uuid(value) => write!(f, "{}", value),
            Self::Numeric(key) => write!(f, "{}", key),
        }
    }
}

impl Serialize for ArtistProfileId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Uuid(value) => value.serialize(serializer),
            Self::Numeric(key) => serializer.serialize_u64(*key),
        }
    }
}

/// Accepts a UUID string, a digit string or a non-negative integer
impl<'de> Deserialize<'de> for ArtistProfileId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        match &raw {
            Value::String(s) => Self::from_string(s).map_err(serde::de::Error::custom),
            Value::Number(n) => n.as_u64().map(Self::Numeric).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid profile id: {}", n))
            }),
            other => Err(serde::de::Error::custom(format!(
                "invalid profile id: {}",
                other
            ))),
        }
    }
}

// ============================================================================
// Category
// ============================================================================

/// Coarse artist category. Drives the legacy form layouts when a role has
/// no schema of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Actor,
    Dancer,
    Model,
    Singer,
    Musician,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Actor,
        Category::Dancer,
        Category::Model,
        Category::Singer,
        Category::Musician,
        Category::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Actor => "ACTOR",
            Category::Dancer => "DANCER",
            Category::Model => "MODEL",
            Category::Singer => "SINGER",
            Category::Musician => "MUSICIAN",
            Category::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Actor => "Actor",
            Category::Dancer => "Dancer",
            Category::Model => "Model",
            Category::Singer => "Singer",
            Category::Musician => "Musician",
            Category::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "ACTOR" => Category::Actor,
            "DANCER" => Category::Dancer,
            "MODEL" => Category::Model,
            "SINGER" => Category::Singer,
            "MUSICIAN" => Category::Musician,
            _ => Category::Other,
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(raw.as_str().map(Category::from_code).unwrap_or(Category::Other))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Artist profile as fetched from the backend. Only `id` is mandatory; a
/// null or mistyped attribute is read as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub id: ArtistProfileId,

    // Identity
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,

    // Contact and background
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub experience_years: Option<f64>,
    #[serde(default, deserialize_with = "string_list")]
    pub skills: Vec<String>,

    // Physical attributes
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    /// Centimetres
    #[serde(default, deserialize_with = "lenient_number")]
    pub height: Option<f64>,
    /// Kilograms
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub profile_photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub daily_rate: Option<f64>,

    // Role
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "lenient_artist_type")]
    pub artist_type: Option<ArtistType>,
    #[serde(default)]
    pub dynamic_fields: DynamicFields,
}

impl ArtistProfile {
    pub fn new(
        id: ArtistProfileId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            location: None,
            bio: None,
            languages: Vec::new(),
            experience_years: None,
            skills: Vec::new(),
            gender: None,
            date_of_birth: None,
            age: None,
            height: None,
            weight: None,
            profile_photo_url: None,
            daily_rate: None,
            category: None,
            artist_type: None,
            dynamic_fields: DynamicFields::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Accepts the bare profile or one wrapped in `data` / `profile`
    pub fn from_response(json: &str) -> Result<Self, ProfileError> {
        let mut value: Value = serde_json::from_str(json)?;
        for key in ["data", "profile"] {
            let inner = value.get_mut(key).map(Value::take);
            if let Some(inner @ Value::Object(_)) = inner {
                value = inner;
                break;
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    /// Descriptors of the active role schema; empty without an artist type
    pub fn schema_fields(&self) -> &[FieldDescriptor] {
        self.artist_type
            .as_ref()
            .map(|t| t.fields.as_slice())
            .unwrap_or(&[])
    }

    /// Age computed from the date of birth wins over the server-supplied
    /// one; the latter is used only when no usable date is recorded.
    pub fn resolved_age(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth
            .and_then(|dob| today.years_since(dob))
            .or(self.age)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload of the profile update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub languages: Vec<String>,
    pub experience_years: Option<f64>,
    pub skills: Vec<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub profile_photo_url: Option<String>,
    pub daily_rate: Option<f64>,
    pub category: Option<Category>,
    pub artist_type_id: Option<String>,
    pub dynamic_fields: DynamicFields,
}

impl ArtistProfileUpdate {
    pub fn from_profile(profile: &ArtistProfile) -> Self {
        Self {
            first_name: profile.first_name.trim().to_string(),
            last_name: profile.last_name.trim().to_string(),
            email: profile.email.trim().to_string(),
            phone: opt(&profile.phone),
            location: opt(&profile.location),
            bio: opt(&profile.bio),
            languages: clean_list(&profile.languages),
            experience_years: profile.experience_years,
            skills: clean_list(&profile.skills),
            gender: opt(&profile.gender),
            date_of_birth: profile.date_of_birth,
            height: profile.height,
            weight: profile.weight,
            profile_photo_url: opt(&profile.profile_photo_url),
            daily_rate: profile.daily_rate,
            category: profile.category,
            artist_type_id: profile.artist_type.as_ref().and_then(|t| t.id.clone()),
            dynamic_fields: profile
                .dynamic_fields
                .coerced_for(profile.artist_type.as_ref()),
        }
    }
}

/// Blank strings are sent as absent
fn opt(v: &Option<String>) -> Option<String> {
    v.as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split comma-separated text into list items (used by list inputs)
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Lenient field parsing
// ============================================================================

/// Text from a string, number or bool
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Null or missing reads as the empty string
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(scalar_text).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(scalar_text))
}

/// A number or numeric text; non-finite values are absent
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(number_of))
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Whole years; negative or out-of-range values are absent
fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(number_of)
        .filter(|n| *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n.trunc() as u32))
}

/// Accepts a list of strings or one comma-separated string
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => split_list(&s),
        _ => Vec::new(),
    })
}

/// Accepts "YYYY-MM-DD" or a full timestamp; anything else is absent
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(|s| {
        let date_part = s.get(..10).unwrap_or(s);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }))
}

/// A malformed artist type is dropped rather than failing the profile
fn lenient_artist_type<'de, D>(deserializer: D) -> Result<Option<ArtistType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_artist_profile::dynamic_fields::FieldValue;
    use crate::shared::metadata::FieldKind;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_profile_from_server_json() {
        let profile: ArtistProfile = serde_json::from_value(json!({
            "id": "6f1c1d7e-2b7a-4d8e-9a57-2f1f0c4b9e11",
            "firstName": "Maya",
            "lastName": "Rao",
            "email": "maya@example.com",
            "languages": "Hindi, English",
            "skills": ["Kathak", "Contemporary"],
            "dateOfBirth": "1998-07-02T00:00:00Z",
            "height": 165,
            "weight": 0,
            "category": "dancer",
            "artistType": {
                "id": 3,
                "name": "Dancer",
                "fields": [{ "name": "styles", "label": "Styles", "type": "textarea" }]
            },
            "dynamicFields": [{ "fieldName": "styles", "value": "Kathak" }]
        }))
        .unwrap();

        assert_eq!(profile.display_name(), "Maya Rao");
        assert_eq!(profile.languages, vec!["Hindi", "English"]);
        assert_eq!(profile.date_of_birth, Some(date(1998, 7, 2)));
        assert_eq!(profile.weight, Some(0.0));
        assert_eq!(profile.category, Some(Category::Dancer));
        assert_eq!(profile.schema_fields()[0].kind, FieldKind::TextArea);
        assert_eq!(
            profile.dynamic_fields.get("styles"),
            Some(&FieldValue::text("Kathak"))
        );
    }

    #[test]
    fn test_malformed_artist_type_and_dates_are_dropped() {
        let profile = ArtistProfile::from_json(
            r#"{
                "id": "6f1c1d7e-2b7a-4d8e-9a57-2f1f0c4b9e11",
                "firstName": "Maya",
                "dateOfBirth": "someday",
                "artistType": "Dancer",
                "category": 12
            }"#,
        )
        .unwrap();

        assert!(profile.artist_type.is_none());
        assert!(profile.schema_fields().is_empty());
        assert_eq!(profile.date_of_birth, None);
        assert_eq!(profile.category, Some(Category::Other));
    }

    #[test]
    fn test_from_response_unwraps_envelopes() {
        let id = "6f1c1d7e-2b7a-4d8e-9a57-2f1f0c4b9e11";
        let bare = format!(r#"{{"id":"{}","firstName":"A"}}"#, id);
        let data = format!(r#"{{"success":true,"data":{{"id":"{}","firstName":"B"}}}}"#, id);
        let profile = format!(r#"{{"profile":{{"id":"{}","firstName":"C"}}}}"#, id);

        assert_eq!(ArtistProfile::from_response(&bare).unwrap().first_name, "A");
        assert_eq!(ArtistProfile::from_response(&data).unwrap().first_name, "B");
        assert_eq!(ArtistProfile::from_response(&profile).unwrap().first_name, "C");
        assert!(ArtistProfile::from_response("[]").is_err());
    }

    #[test]
    fn test_from_json_reports_malformed_payload() {
        let err = ArtistProfile::from_json("{\"firstName\": \"NoId\"}").unwrap_err();
        assert!(matches!(err, ProfileError::Malformed(_)));
    }

    #[test]
    fn test_null_identity_fields_read_as_empty() {
        let profile = ArtistProfile::from_response(
            r#"{
                "id": "6f1c1d7e-2b7a-4d8e-9a57-2f1f0c4b9e11",
                "firstName": null,
                "lastName": null,
                "email": "maya@example.com",
                "bio": null,
                "category": null,
                "dynamicFields": null
            }"#,
        )
        .unwrap();

        assert_eq!(profile.first_name, "");
        assert_eq!(profile.display_name(), "maya@example.com");
        assert_eq!(profile.bio, None);
        assert_eq!(profile.category, None);
        assert!(profile.dynamic_fields.is_empty());
    }

    #[test]
    fn test_numeric_text_fields_become_text() {
        let profile = ArtistProfile::from_response(
            r#"{"id": "6f1c1d7e-2b7a-4d8e-9a57-2f1f0c4b9e11", "phone": 9876543210, "location": 411001}"#,
        )
        .unwrap();

        assert_eq!(profile.phone.as_deref(), Some("9876543210"));
        assert_eq!(profile.location.as_deref(), Some("411001"));
    }

    #[test]
    fn test_numbers_sent_as_text_are_parsed() {
        let profile = ArtistProfile::from_response(
            r#"{
                "id": "6f1c1d7e-2b7a-4d8e-9a57-2f1f0c4b9e11",
                "height": "165",
                "weight": " 52.5 ",
                "dailyRate": "abc",
                "experienceYears": "4",
                "age": "27"
            }"#,
        )
        .unwrap();

        assert_eq!(profile.height, Some(165.0));
        assert_eq!(profile.weight, Some(52.5));
        assert_eq!(profile.daily_rate, None);
        assert_eq!(profile.experience_years, Some(4.0));
        assert_eq!(profile.age, Some(27));
    }

    #[test]
    fn test_negative_age_is_absent() {
        let profile = ArtistProfile::from_response(
            r#"{"id": "6f1c1d7e-2b7a-4d8e-9a57-2f1f0c4b9e11", "age": -3}"#,
        )
        .unwrap();
        assert_eq!(profile.age, None);
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let profile =
            ArtistProfile::from_response(r#"{"data": {"id": 42, "firstName": "Ravi"}}"#).unwrap();

        assert_eq!(profile.id, ArtistProfileId::Numeric(42));
        assert_eq!(profile.id.to_string(), "42");
        assert_eq!(serde_json::to_value(profile.id).unwrap(), json!(42));
        assert!(ArtistProfile::from_response(r#"{"id": -1}"#).is_err());
        assert!(ArtistProfile::from_response(r#"{"id": null}"#).is_err());
    }

    #[test]
    fn test_resolved_age_prefers_date_of_birth() {
        let mut profile = ArtistProfile::new(ArtistProfileId::new_v4(), "A", "B", "a@b.c");
        profile.age = Some(40);
        assert_eq!(profile.resolved_age(date(2026, 1, 1)), Some(40));

        profile.date_of_birth = Some(date(2000, 6, 15));
        assert_eq!(profile.resolved_age(date(2026, 6, 14)), Some(25));
        assert_eq!(profile.resolved_age(date(2026, 6, 15)), Some(26));

        profile.date_of_birth = Some(date(2030, 1, 1));
        assert_eq!(profile.resolved_age(date(2026, 1, 1)), Some(40));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile = ArtistProfile::new(ArtistProfileId::new_v4(), " ", "", "x@y.z");
        assert_eq!(profile.display_name(), "x@y.z");
    }

    #[test]
    fn test_update_payload_coerces_dynamic_fields() {
        let mut profile = ArtistProfile::new(ArtistProfileId::new_v4(), " Ana ", "Lee", "a@b.c");
        profile.phone = Some("   ".into());
        profile.skills = vec!["Stage combat".into(), " ".into()];
        profile.artist_type = Some(ArtistType {
            id: Some("9".into()),
            name: "Actor".into(),
            fields: vec![FieldDescriptor::new("years", "Years", FieldKind::Number)],
        });
        profile.dynamic_fields.upsert("years", "12".into());

        let update = ArtistProfileUpdate::from_profile(&profile);

        assert_eq!(update.first_name, "Ana");
        assert_eq!(update.phone, None);
        assert_eq!(update.skills, vec!["Stage combat"]);
        assert_eq!(update.artist_type_id.as_deref(), Some("9"));
        assert_eq!(
            update.dynamic_fields.get("years"),
            Some(&FieldValue::Number(12.0))
        );
    }

    #[test]
    fn test_id_round_trips_through_string() {
        let id = ArtistProfileId::new_v4();
        assert_eq!(ArtistProfileId::from_string(&id.as_string()).unwrap(), id);
        assert!(matches!(
            ArtistProfileId::from_string("not-a-uuid"),
            Err(ProfileError::InvalidId(_))
        ));
        assert_eq!(
            ArtistProfileId::from_string(" 17 ").unwrap(),
            ArtistProfileId::Numeric(17)
        );
        assert_eq!(
            ArtistProfileId::from_string("6F1C1D7E-2B7A-4D8E-9A57-2F1F0C4B9E11").unwrap(),
            ArtistProfileId::from_string("6f1c1d7e-2b7a-4d8e-9a57-2f1f0c4b9e11").unwrap()
        );
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a, b,,c "), vec!["a", "b", "c"]);
        assert!(split_list("  ").is_empty());
    }

    #[test]
    fn test_category_codes() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), category);
        }
        assert_eq!(Category::from_code("mime"), Category::Other);
    }
}
