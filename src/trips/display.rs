//! Text rendering of trips, shared by the TUI and the CLI
//!
//! Follows the "data vs rendering" split used by the TUI views: functions
//! here decide *what* is shown (labels, placeholders, formatted values);
//! widgets decide *how* it is drawn.

use super::models::{CategoryFilter, PackingItem, Trip, TripDetail};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

pub const NO_TRIPS: &str = "No trips available for the selected category.";
pub const NO_SELECTION: &str = "Select a trip to see more details here.";
pub const NO_GUIDE: &str = "Guide: Not available";
pub const NO_PACKING_ITEMS: &str = "No packing items available";
pub const NO_BUYING_OPTIONS: &str = "No buying options";

/// Column headings of the packing items table
pub const PACKING_COLUMNS: [&str; 6] = [
    "Name",
    "Weight (grams)",
    "Quantity",
    "Description",
    "Category",
    "Shop URL",
];

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Display settings
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    /// strftime pattern for calendar dates (rendered in local time)
    pub date_format: String,
    /// Currency suffix for prices
    pub currency: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            currency: "DKK".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Whole days between two instants, rounded toward negative infinity
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_milliseconds().div_euclid(MS_PER_DAY)
}

/// Duration label, e.g. `"2 days"`; anything under 24 hours is `"0 days"`
pub fn format_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{} days", days_between(start, end))
}

/// Calendar date in the viewer's local time zone
///
/// Falls back to [`DEFAULT_DATE_FORMAT`] when the configured pattern is invalid.
pub fn format_date(at: DateTime<Utc>, options: &DisplayOptions) -> String {
    let local = at.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(&options.date_format)).is_ok() {
        return out;
    }
    local.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Price with currency suffix; whole amounts print without decimals
pub fn format_price(price: f64, options: &DisplayOptions) -> String {
    format!("{} {}", price, options.currency)
}

// ─────────────────────────────────────────────────────────────────────────────
// Trip list
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of the trip list
#[derive(Debug, Clone, PartialEq)]
pub struct TripCard {
    pub name: String,
    pub start: String,
    pub end: String,
    pub price: String,
    pub duration: String,
}

impl TripCard {
    pub fn from_trip(trip: &Trip, options: &DisplayOptions) -> Self {
        Self {
            name: trip.name.clone(),
            start: format_date(trip.starttime, options),
            end: format_date(trip.endtime, options),
            price: format_price(trip.price, options),
            duration: format_duration(trip.starttime, trip.endtime),
        }
    }

    /// Labelled lines below the name
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Start Date", &self.start),
            ("End Date", &self.end),
            ("Price", &self.price),
            ("Duration", &self.duration),
        ]
    }

    /// Compact one-line form for narrow layouts
    pub fn summary_line(&self) -> String {
        format!(
            "{} │ {} → {} │ {} │ {}",
            self.name, self.start, self.end, self.price, self.duration
        )
    }
}

/// Plain-text trip list (CLI output)
pub fn list_text(trips: &[Trip], category: CategoryFilter, options: &DisplayOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "All Trips");
    let _ = writeln!(out, "Filter by Category: {}", category);
    let _ = writeln!(out);

    if trips.is_empty() {
        let _ = writeln!(out, "{}", NO_TRIPS);
        return out;
    }

    for trip in trips {
        let card = TripCard::from_trip(trip, options);
        let _ = writeln!(out, "[{}] {}", trip.id, card.name);
        for (label, value) in card.fields() {
            let _ = writeln!(out, "    {}: {}", label, value);
        }
        let _ = writeln!(out);
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail view
// ─────────────────────────────────────────────────────────────────────────────

/// Guide block of the detail view
#[derive(Debug, Clone, PartialEq)]
pub enum GuideSection {
    Known {
        name: String,
        email: String,
        phone: String,
        years_of_experience: u32,
    },
    Missing,
}

impl GuideSection {
    pub fn lines(&self) -> Vec<String> {
        match self {
            GuideSection::Known {
                name,
                email,
                phone,
                years_of_experience,
            } => vec![
                format!("Guide: {}", name),
                format!("Email: {}", email),
                format!("Phone: {}", phone),
                format!("Years of Experience: {}", years_of_experience),
            ],
            GuideSection::Missing => vec![NO_GUIDE.to_string()],
        }
    }
}

/// One row of the packing items table
#[derive(Debug, Clone, PartialEq)]
pub struct PackingRow {
    pub name: String,
    pub weight: String,
    pub quantity: String,
    pub description: String,
    pub category: String,
    /// `"{shop} - {price}"` per buying option
    pub shops: Vec<String>,
}

impl PackingRow {
    fn from_item(item: &PackingItem, options: &DisplayOptions) -> Self {
        Self {
            name: item.name.clone(),
            weight: item.weight_in_grams.to_string(),
            quantity: item.quantity.to_string(),
            description: item.description.clone(),
            category: item.category.clone(),
            shops: item
                .buying_options
                .iter()
                .map(|o| format!("{} - {}", o.shop_name, format_price(o.price, options)))
                .collect(),
        }
    }

    /// Lines of the shop column
    pub fn shop_lines(&self) -> Vec<String> {
        if self.shops.is_empty() {
            vec![NO_BUYING_OPTIONS.to_string()]
        } else {
            self.shops.clone()
        }
    }

    /// Cells in [`PACKING_COLUMNS`] order, shop lines joined with `"; "`
    pub fn cells(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.weight.clone(),
            self.quantity.clone(),
            self.description.clone(),
            self.category.clone(),
            self.shop_lines().join("; "),
        ]
    }
}

/// Packing items block of the detail view
#[derive(Debug, Clone, PartialEq)]
pub enum PackingSection {
    Rows(Vec<PackingRow>),
    Empty,
}

/// Everything the detail pane shows for one trip
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub fields: Vec<(&'static str, String)>,
    pub guide: GuideSection,
    pub packing: PackingSection,
}

impl DetailView {
    pub fn from_detail(detail: &TripDetail, options: &DisplayOptions) -> Self {
        let trip = &detail.trip;

        let guide = match &detail.guide {
            Some(g) => GuideSection::Known {
                name: g.full_name(),
                email: g.email.clone(),
                phone: g.phone.clone(),
                years_of_experience: g.years_of_experience,
            },
            None => GuideSection::Missing,
        };

        let packing = if detail.packing_items.is_empty() {
            PackingSection::Empty
        } else {
            PackingSection::Rows(
                detail
                    .packing_items
                    .iter()
                    .map(|item| PackingRow::from_item(item, options))
                    .collect(),
            )
        };

        Self {
            title: trip.name.clone(),
            fields: vec![
                ("Start Date", format_date(trip.starttime, options)),
                ("End Date", format_date(trip.endtime, options)),
                ("Price", format_price(trip.price, options)),
                ("Category", trip.category.clone()),
            ],
            guide,
            packing,
        }
    }

    /// Header lines: labelled fields followed by the guide block
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .fields
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        lines.extend(self.guide.lines());
        lines
    }

    /// Plain-text rendition (CLI output and clipboard)
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        for line in self.header_lines() {
            let _ = writeln!(out, "{}", line);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Packing Items");

        match &self.packing {
            PackingSection::Empty => {
                let _ = writeln!(out, "{}", NO_PACKING_ITEMS);
            }
            PackingSection::Rows(rows) => {
                let _ = writeln!(out, "{}", PACKING_COLUMNS.join(" | "));
                for row in rows {
                    let _ = writeln!(out, "{}", row.cells().join(" | "));
                }
            }
        }
        out
    }
}

/// Plain-text detail pane for an optional selection
pub fn detail_text(detail: Option<&TripDetail>, options: &DisplayOptions) -> String {
    match detail {
        Some(detail) => DetailView::from_detail(detail, options).to_text(),
        None => format!("{}\n", NO_SELECTION),
    }
}
