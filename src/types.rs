//! Type definitions for API responses
//!
//! These mirror the JSON shapes the BookMart backend returns. The
//! backend is loose about types: ids arrive as strings or numbers,
//! prices as numbers or numeric strings, and a couple of field names
//! are historically misspelled. Deserialization absorbs all of that.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One book a seller has listed for sale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "categeory")]
    pub category: Option<String>,
    #[serde(default, alias = "subcategeory")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default, rename = "updatedPrice")]
    pub updated_price: Option<Value>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Free-text lifecycle label ("active", "pending review", ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Free-text sold flag ("Soldout", "Instock", ...).
    #[serde(default)]
    pub soldstatus: Option<String>,
}

impl Book {
    /// Display price: `updatedPrice` wins over `price` when present.
    ///
    /// Whole values render without a fractional part, everything else
    /// with two decimals. Values that do not coerce to a number render
    /// as an empty string rather than failing.
    pub fn price_text(&self) -> String {
        let raw = self.updated_price.as_ref().or(self.price.as_ref());
        match raw.and_then(as_number) {
            // Format the f64 directly; casting to an integer would
            // saturate for values beyond i64's range.
            Some(n) if n.fract() == 0.0 => format!("{:.0}", n),
            Some(n) => format!("{:.2}", n),
            None => String::new(),
        }
    }

    /// Whether the listing is currently marked sold out.
    pub fn is_sold_out(&self) -> bool {
        self.soldstatus
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains("soldout")
    }

    /// The soldstatus value a toggle should request next. Two-state:
    /// sold-out listings go back in stock, everything else sells out.
    pub fn next_sold_status(&self) -> &'static str {
        if self.is_sold_out() {
            "Instock"
        } else {
            "Soldout"
        }
    }
}

/// Coerce a JSON value to a number the way the backend expects:
/// numbers pass through, numeric strings parse, everything else is
/// not a price.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Ids arrive as JSON strings or numbers; normalize both to a string.
fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book_with_price(price: Value) -> Book {
        Book {
            price: Some(price),
            ..Book::default()
        }
    }

    #[test]
    fn test_price_text_whole_number() {
        assert_eq!(book_with_price(json!(100)).price_text(), "100");
    }

    #[test]
    fn test_price_text_huge_whole_number() {
        assert_eq!(
            book_with_price(json!(1e19)).price_text(),
            "10000000000000000000"
        );
    }

    #[test]
    fn test_price_text_fractional() {
        assert_eq!(book_with_price(json!(99.5)).price_text(), "99.50");
    }

    #[test]
    fn test_price_text_updated_price_wins() {
        let book = Book {
            price: Some(json!(100)),
            updated_price: Some(json!(50)),
            ..Book::default()
        };
        assert_eq!(book.price_text(), "50");
    }

    #[test]
    fn test_price_text_non_numeric_is_empty() {
        assert_eq!(book_with_price(json!("abc")).price_text(), "");
    }

    #[test]
    fn test_price_text_numeric_string() {
        assert_eq!(book_with_price(json!("249.90")).price_text(), "249.90");
    }

    #[test]
    fn test_price_text_missing_is_empty() {
        assert_eq!(Book::default().price_text(), "");
    }

    #[test]
    fn test_next_sold_status_round_trip() {
        let sold = Book {
            soldstatus: Some("Soldout".to_string()),
            ..Book::default()
        };
        assert_eq!(sold.next_sold_status(), "Instock");

        let in_stock = Book {
            soldstatus: Some("Instock".to_string()),
            ..Book::default()
        };
        assert_eq!(in_stock.next_sold_status(), "Soldout");

        // Anything that is not sold out toggles towards sold out.
        assert_eq!(Book::default().next_sold_status(), "Soldout");
    }

    #[test]
    fn test_is_sold_out_case_insensitive() {
        let book = Book {
            soldstatus: Some("SOLDOUT".to_string()),
            ..Book::default()
        };
        assert!(book.is_sold_out());
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let book: Book = serde_json::from_value(json!({ "id": 42, "name": "Dune" })).unwrap();
        assert_eq!(book.id.as_deref(), Some("42"));
        assert_eq!(book.name, "Dune");
    }

    #[test]
    fn test_deserialize_misspelled_category_fields() {
        let book: Book = serde_json::from_value(json!({
            "id": "b1",
            "categeory": "Fiction",
            "subcategeory": "Sci-Fi"
        }))
        .unwrap();
        assert_eq!(book.category.as_deref(), Some("Fiction"));
        assert_eq!(book.subcategory.as_deref(), Some("Sci-Fi"));
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let book: Book = serde_json::from_value(json!({
            "id": "b1",
            "seller_rating": 4.7,
            "views": 120
        }))
        .unwrap();
        assert_eq!(book.id.as_deref(), Some("b1"));
    }
}
