//! Reference metadata for the coffee chain: product categories, the
//! weekday-keyed store rotation, regions, and per-category margin rates.

use chrono::Weekday;
use rust_decimal::Decimal;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"
];

/// Category label for a product. Unknown products land in the open
/// `Seasonal Specials` bucket rather than failing.
pub fn product_category(product: &str) -> &'static str {
    match product {
        "Latte" | "Cappuccino" | "Americano" | "Espresso" | "Flat White" => "Espresso Classics",
        "Cold Brew" | "Iced Coffee" | "Frappuccino" => "Cold Classics",
        "Hot Chocolate" | "Matcha Latte" | "Tea" => "Non Coffee",
        _ => "Seasonal Specials"
    }
}

/// Store operating on a given weekday. The chain runs a fixed weekly
/// rotation, so the mapping is total.
pub fn store_for_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Market Street Roastery",
        Weekday::Tue => "Waterfront Kiosk",
        Weekday::Wed => "Arts District Cart",
        Weekday::Thu => "Lakeside Drive Thru",
        Weekday::Fri => "Tech Park Flagship",
        Weekday::Sat => "Suburban Express",
        Weekday::Sun => "Weekend Farmers Market"
    }
}

/// Sales region for a store, with an open fallback for pop-ups.
pub fn region_for_store(store: &str) -> &'static str {
    match store {
        "Market Street Roastery" => "West Coast",
        "Waterfront Kiosk" => "Pacific Northwest",
        "Arts District Cart" => "Mountain",
        "Lakeside Drive Thru" => "Midwest",
        "Tech Park Flagship" => "Northeast",
        "Suburban Express" => "South",
        "Weekend Farmers Market" => "Southwest",
        _ => "Pop-up Region"
    }
}

/// Gross margin rate for a product category.
pub fn margin_rate(category: &str) -> Decimal {
    match category {
        "Espresso Classics" => Decimal::new(72, 2),
        "Cold Classics" => Decimal::new(68, 2),
        "Non Coffee" => Decimal::new(58, 2),
        _ => Decimal::new(60, 2)
    }
}

/// Abbreviated English month name for a calendar month (1-12).
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    MONTH_ABBREVIATIONS.get(index).copied()
}
