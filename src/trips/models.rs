//! Trip data model as served by the trip API
//!
//! Wire names are camelCase (`packingItems`, `weightInGrams`, ...). The
//! category is kept as an open string here; only the filter control treats
//! it as a closed set (see [`CategoryFilter`]).

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier assigned to a trip by the API
pub type TripId = i64;

/// Trip summary, one entry of `GET /trips`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(with = "timestamp")]
    pub starttime: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub endtime: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
}

/// Full trip record, the body of `GET /trips/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetail {
    #[serde(flatten)]
    pub trip: Trip,
    /// `null` and a missing field both mean "no guide"
    #[serde(default)]
    pub guide: Option<Guide>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub packing_items: Vec<PackingItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    #[serde(default, deserialize_with = "lenient_text")]
    pub firstname: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub lastname: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_of_experience: u32,
}

impl Guide {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight_in_grams: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buying_options: Vec<BuyingOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyingOption {
    #[serde(default, deserialize_with = "lenient_text")]
    pub shop_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Category filter
// ─────────────────────────────────────────────────────────────────────────────

/// Values offered by the category selector
///
/// Trip data may carry categories outside this set. Those trips show up
/// under `All` but no other selector value matches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Beach,
    City,
    Snow,
    Lake,
    Forest,
    Sea,
}

impl CategoryFilter {
    /// Selector order, as shown in the category bar
    pub const ALL: [CategoryFilter; 7] = [
        CategoryFilter::All,
        CategoryFilter::Beach,
        CategoryFilter::City,
        CategoryFilter::Snow,
        CategoryFilter::Lake,
        CategoryFilter::Forest,
        CategoryFilter::Sea,
    ];

    /// Label as shown in the selector and as it appears in trip data
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Beach => "BEACH",
            CategoryFilter::City => "CITY",
            CategoryFilter::Snow => "SNOW",
            CategoryFilter::Lake => "LAKE",
            CategoryFilter::Forest => "FOREST",
            CategoryFilter::Sea => "SEA",
        }
    }

    /// Parse a selector label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
    }

    /// Position in [`CategoryFilter::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Selector value at a position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next value in selector order (wraps)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous value in selector order (wraps)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether a trip belongs to the view selected by this value
    ///
    /// Exact, case-sensitive comparison against the trip's category string.
    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            CategoryFilter::All => true,
            other => trip.category == other.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Deserialization helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Treat JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept strings, numbers and `null` for free-text fields (phone numbers
/// in particular show up as either)
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Timestamp (de)serialization for `starttime` / `endtime`
///
/// Accepted inputs:
/// - RFC 3339 strings (`2024-01-01T00:00:00Z`, `2024-01-01T02:00:00+02:00`)
/// - naive ISO date-times (`2024-01-01T00:00:00`, `2024-01-01 00:00:00.5`)
/// - plain dates (`2024-01-01`), midnight
/// - `[year, month, day, hour?, minute?, second?]` arrays
///
/// Values without an offset are wall-clock times in the viewer's local zone.
/// - epoch milliseconds
///
/// Serialized back as RFC 3339.
pub mod timestamp {
    use super::*;
    use serde::{de, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Millis(i64),
        Parts(Vec<u32>),
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Text(s) => parse(&s)
                .ok_or_else(|| de::Error::custom(format!("unrecognized timestamp: {:?}", s))),
            RawTimestamp::Millis(ms) => Utc
                .timestamp_millis_opt(ms)
                .single()
                .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", ms))),
            RawTimestamp::Parts(parts) => from_parts(&parts)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp parts: {:?}", parts))),
        }
    }

    /// Parse a textual timestamp in any of the accepted formats
    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }

        const NAIVE_FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
        ];
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return from_local(naive);
            }
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .and_then(from_local)
    }

    fn from_parts(parts: &[u32]) -> Option<DateTime<Utc>> {
        let (year, month, day) = match parts {
            [y, m, d, ..] => (i32::try_from(*y).ok()?, *m, *d),
            _ => return None,
        };
        let hour = parts.get(3).copied().unwrap_or(0);
        let minute = parts.get(4).copied().unwrap_or(0);
        let second = parts.get(5).copied().unwrap_or(0);

        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, second)
            .and_then(from_local)
    }

    /// Local wall-clock time to an instant
    ///
    /// Ambiguous times take the earlier instant; times inside a DST gap
    /// move forward by the gap.
    pub(crate) fn from_local(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .or_else(|| {
                Local
                    .from_local_datetime(&(naive + TimeDelta::hours(1)))
                    .earliest()
            })
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trip_summary_from_api_json() {
        let trip: Trip = serde_json::from_value(json!({
            "id": 1,
            "name": "Beach Holiday",
            "starttime": "2024-01-01T00:00:00Z",
            "endtime": "2024-01-03T00:00:00Z",
            "price": 3000.0,
            "category": "BEACH"
        }))
        .unwrap();

        assert_eq!(trip.id, 1);
        assert_eq!(trip.name, "Beach Holiday");
        assert_eq!(trip.category, "BEACH");
        assert_eq!(trip.price, 3000.0);
        assert_eq!(trip.starttime, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_null_or_missing_price_reads_as_zero() {
        let trips: Vec<Trip> = serde_json::from_value(json!([
            {
                "id": 1,
                "name": "Free Walk",
                "starttime": "2024-01-01T00:00:00Z",
                "endtime": "2024-01-02T00:00:00Z",
                "price": null,
                "category": "CITY"
            },
            {
                "id": 2,
                "starttime": "2024-01-01T00:00:00Z",
                "endtime": "2024-01-02T00:00:00Z"
            }
        ]))
        .unwrap();
        assert_eq!(trips[0].price, 0.0);
        assert_eq!(trips[1].price, 0.0);

        let detail: TripDetail = serde_json::from_value(json!({
            "id": 3,
            "name": "Forest Camp",
            "starttime": "2024-01-01T00:00:00Z",
            "endtime": "2024-01-02T00:00:00Z",
            "price": null,
            "category": "FOREST"
        }))
        .unwrap();
        assert_eq!(detail.trip.price, 0.0);
    }

    #[test]
    fn test_detail_with_null_guide_and_missing_items() {
        let detail: TripDetail = serde_json::from_value(json!({
            "id": 7,
            "name": "City Break",
            "starttime": "2024-05-01T08:00:00",
            "endtime": "2024-05-04T20:00:00",
            "price": 1500,
            "category": "CITY",
            "guide": null
        }))
        .unwrap();

        assert_eq!(detail.trip.id, 7);
        assert!(detail.guide.is_none());
        assert!(detail.packing_items.is_empty());
    }

    #[test]
    fn test_detail_with_guide_and_packing_items() {
        let detail: TripDetail = serde_json::from_value(json!({
            "id": 3,
            "name": "Snow Trek",
            "starttime": "2024-02-10",
            "endtime": "2024-02-17",
            "price": 9999.5,
            "category": "SNOW",
            "guide": {
                "firstname": "Ada",
                "lastname": "Berg",
                "email": "ada@example.com",
                "phone": 12345678,
                "yearsOfExperience": 12
            },
            "packingItems": [
                {
                    "name": "Snow boots",
                    "weightInGrams": 1200,
                    "quantity": 1,
                    "description": "Warm boots",
                    "category": "SNOW",
                    "buyingOptions": [
                        { "shopName": "Outdoor Shop", "price": 899.0 }
                    ]
                },
                {
                    "name": "Gloves",
                    "weightInGrams": 150,
                    "quantity": 2,
                    "description": null,
                    "category": "SNOW",
                    "buyingOptions": null
                }
            ]
        }))
        .unwrap();

        let guide = detail.guide.as_ref().expect("guide present");
        assert_eq!(guide.full_name(), "Ada Berg");
        assert_eq!(guide.phone, "12345678");
        assert_eq!(guide.years_of_experience, 12);

        assert_eq!(detail.packing_items.len(), 2);
        assert_eq!(detail.packing_items[0].buying_options[0].shop_name, "Outdoor Shop");
        assert_eq!(detail.packing_items[1].description, "");
        assert!(detail.packing_items[1].buying_options.is_empty());
    }

    #[test]
    fn test_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();

        assert_eq!(timestamp::parse("2024-01-01T12:30:00Z"), Some(expected));
        assert_eq!(timestamp::parse("2024-01-01T14:30:00+02:00"), Some(expected));
        assert_eq!(timestamp::parse("yesterday"), None);
    }

    fn wall_clock(at: DateTime<Utc>) -> NaiveDateTime {
        at.with_timezone(&Local).naive_local()
    }

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_timestamps_without_offset_are_local_wall_clock() {
        let at = timestamp::parse("2024-01-01T12:30:00").unwrap();
        assert_eq!(wall_clock(at), naive(2024, 1, 1, 12, 30));
        assert_eq!(timestamp::parse("2024-01-01T12:30"), Some(at));

        let midnight = timestamp::parse("2024-01-01").unwrap();
        assert_eq!(wall_clock(midnight), naive(2024, 1, 1, 0, 0));
        assert_eq!(
            midnight.with_timezone(&Local).date_naive(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_timestamp_from_parts_and_millis() {
        let from_parts: Trip = serde_json::from_value(json!({
            "id": 1,
            "name": "x",
            "starttime": [2024, 1, 1, 6, 0],
            "endtime": 1704153600000_i64,
            "price": 0,
            "category": "LAKE"
        }))
        .unwrap();

        assert_eq!(wall_clock(from_parts.starttime), naive(2024, 1, 1, 6, 0));
        assert_eq!(
            from_parts.endtime,
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_category_filter_parse_and_cycle() {
        assert_eq!(CategoryFilter::parse("city"), Some(CategoryFilter::City));
        assert_eq!(CategoryFilter::parse("All"), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::parse("DESERT"), None);

        assert_eq!(CategoryFilter::All.next(), CategoryFilter::Beach);
        assert_eq!(CategoryFilter::Sea.next(), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.prev(), CategoryFilter::Sea);
        assert_eq!(CategoryFilter::from_index(2), Some(CategoryFilter::City));
        assert_eq!(CategoryFilter::from_index(7), None);
    }

    #[test]
    fn test_unknown_category_only_matches_all() {
        let trip: Trip = serde_json::from_value(json!({
            "id": 9,
            "name": "Desert",
            "starttime": "2024-01-01T00:00:00Z",
            "endtime": "2024-01-02T00:00:00Z",
            "price": 10,
            "category": "DESERT"
        }))
        .unwrap();

        assert!(CategoryFilter::All.matches(&trip));
        for filter in &CategoryFilter::ALL[1..] {
            assert!(!filter.matches(&trip), "{} should not match", filter);
        }
    }
}
