use crate::models::business::{Business, DayHours};
use crate::models::review::Review;
use serde_json::Value;
use std::borrow::Cow;

/// The value found at a field path. `Absent` means some segment of the path
/// did not exist.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Null,
    Bool(bool),
    Number(f64),
    Text(Cow<'a, str>),
    List(Vec<FieldValue<'a>>),
    Record,
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Absent | FieldValue::Null)
    }

    /// Text used for free-text search; `None` for missing values.
    pub fn to_search_string(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        Some(self.render())
    }

    fn render(&self) -> String {
        match self {
            FieldValue::Absent | FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => render_number(*n),
            FieldValue::Text(t) => t.to_string(),
            FieldValue::List(items) => items
                .iter()
                .map(FieldValue::render)
                .collect::<Vec<_>>()
                .join(","),
            FieldValue::Record => "[object Object]".to_string(),
        }
    }
}

// Integral values print without a fractional part, as in the browser.
fn render_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else if n.is_nan() {
        "NaN".to_string()
    } else {
        n.to_string()
    }
}

/// Lookup of dot-delimited field paths such as `"name"` or `"hours.0.open"`.
/// Never fails: unknown or unreachable paths give [`FieldValue::Absent`].
pub trait Queryable {
    fn field(&self, path: &str) -> FieldValue<'_>;
}

fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

fn leaf<'a>(value: FieldValue<'a>, rest: Option<&str>) -> FieldValue<'a> {
    match rest {
        Some(_) => FieldValue::Absent,
        None => value,
    }
}

fn optional_text<'a>(value: &'a Option<String>, rest: Option<&str>) -> FieldValue<'a> {
    match value {
        Some(v) => leaf(FieldValue::text(v), rest),
        None => FieldValue::Absent,
    }
}

fn index_of(segment: &str) -> Option<usize> {
    segment.parse().ok()
}

fn text_list<'a>(items: &'a [String], rest: Option<&str>) -> FieldValue<'a> {
    let Some(rest) = rest else {
        return FieldValue::List(items.iter().map(|s| FieldValue::text(s)).collect());
    };
    let (index, rest) = split_path(rest);
    match index_of(index).and_then(|i| items.get(i)) {
        Some(item) => leaf(FieldValue::text(item), rest),
        None => FieldValue::Absent,
    }
}

fn record_list<'a, T: Queryable>(items: &'a [T], rest: Option<&str>) -> FieldValue<'a> {
    let Some(rest) = rest else {
        return FieldValue::List(items.iter().map(|_| FieldValue::Record).collect());
    };
    let (index, rest) = split_path(rest);
    match (index_of(index).and_then(|i| items.get(i)), rest) {
        (Some(item), Some(rest)) => item.field(rest),
        (Some(_), None) => FieldValue::Record,
        (None, _) => FieldValue::Absent,
    }
}

impl Queryable for DayHours {
    fn field(&self, path: &str) -> FieldValue<'_> {
        let (head, rest) = split_path(path);
        let value = match head {
            "day" => FieldValue::text(&self.day),
            "open" => FieldValue::text(&self.open),
            "close" => FieldValue::text(&self.close),
            _ => FieldValue::Absent,
        };
        leaf(value, rest)
    }
}

impl Queryable for Business {
    fn field(&self, path: &str) -> FieldValue<'_> {
        let (head, rest) = split_path(path);
        match head {
            "Id" | "id" => leaf(FieldValue::Number(self.id as f64), rest),
            "name" => leaf(FieldValue::text(&self.name), rest),
            "category" => leaf(FieldValue::text(&self.category), rest),
            "address" => leaf(FieldValue::text(&self.address), rest),
            "phone" => leaf(FieldValue::text(&self.phone), rest),
            "website" => optional_text(&self.website, rest),
            "rating" => leaf(FieldValue::Number(self.rating), rest),
            "reviewCount" => leaf(FieldValue::Number(self.review_count as f64), rest),
            "distance" => match self.distance {
                Some(d) => leaf(FieldValue::Number(d), rest),
                None => FieldValue::Absent,
            },
            "images" => text_list(&self.images, rest),
            "hours" => record_list(&self.hours, rest),
            _ => FieldValue::Absent,
        }
    }
}

impl Queryable for Review {
    fn field(&self, path: &str) -> FieldValue<'_> {
        let (head, rest) = split_path(path);
        let value = match head {
            "Id" | "id" => FieldValue::Number(self.id as f64),
            "businessId" => FieldValue::Number(self.business_id as f64),
            "userName" => FieldValue::text(&self.user_name),
            "rating" => FieldValue::Number(self.rating as f64),
            "comment" => FieldValue::text(&self.comment),
            "date" => FieldValue::Text(Cow::Owned(self.date.format("%Y-%m-%d").to_string())),
            _ => FieldValue::Absent,
        };
        leaf(value, rest)
    }
}

fn from_json(value: &Value) -> FieldValue<'_> {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(*b),
        Value::Number(n) => n.as_f64().map_or(FieldValue::Null, FieldValue::Number),
        Value::String(s) => FieldValue::text(s),
        Value::Array(items) => FieldValue::List(items.iter().map(from_json).collect()),
        Value::Object(_) => FieldValue::Record,
    }
}

/// Arbitrary JSON records: objects are walked by key, arrays by index.
impl Queryable for Value {
    fn field(&self, path: &str) -> FieldValue<'_> {
        let mut current = self;
        for segment in path.split('.') {
            let next = match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => index_of(segment).and_then(|i| items.get(i)),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return FieldValue::Absent,
            }
        }
        from_json(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::business::NewBusiness;
    use crate::models::Entity;
    use serde_json::json;

    fn cafe() -> Business {
        Business::from_draft(
            4,
            NewBusiness {
                name: "Joe's Cafe".into(),
                category: "cafe".into(),
                images: Some(vec!["a.jpg".into(), "b.jpg".into()]),
                hours: vec![DayHours {
                    day: "Monday".into(),
                    open: "07:00".into(),
                    close: "15:00".into(),
                }],
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_business_paths() {
        let business = cafe();
        assert_eq!(business.field("name"), FieldValue::text("Joe's Cafe"));
        assert_eq!(business.field("Id"), FieldValue::Number(4.0));
        assert_eq!(business.field("website"), FieldValue::Absent);
        assert_eq!(business.field("distance"), FieldValue::Absent);
        assert_eq!(business.field("images.1"), FieldValue::text("b.jpg"));
        assert_eq!(business.field("images.9"), FieldValue::Absent);
        assert_eq!(business.field("hours.0.open"), FieldValue::text("07:00"));
        assert_eq!(business.field("hours.0"), FieldValue::Record);
        assert_eq!(business.field("hours.1.open"), FieldValue::Absent);
        assert_eq!(business.field("name.first"), FieldValue::Absent);
        assert_eq!(business.field("owner"), FieldValue::Absent);
    }

    #[test]
    fn test_json_paths_short_circuit() {
        let item = json!({"a": {"b": {"c": 3}}, "tags": ["x", "y"], "gone": null});
        assert_eq!(item.field("a.b.c"), FieldValue::Number(3.0));
        assert_eq!(item.field("a.x.c"), FieldValue::Absent);
        assert_eq!(item.field("tags.1"), FieldValue::text("y"));
        assert_eq!(item.field("gone"), FieldValue::Null);
        assert_eq!(item.field("gone.deeper"), FieldValue::Absent);
        assert_eq!(item.field("a"), FieldValue::Record);
    }

    #[test]
    fn test_search_strings() {
        assert_eq!(FieldValue::Number(4.0).to_search_string().as_deref(), Some("4"));
        assert_eq!(FieldValue::Number(4.5).to_search_string().as_deref(), Some("4.5"));
        assert_eq!(FieldValue::Bool(true).to_search_string().as_deref(), Some("true"));
        assert_eq!(
            FieldValue::List(vec![FieldValue::text("x"), FieldValue::Number(2.0)])
                .to_search_string()
                .as_deref(),
            Some("x,2")
        );
        assert_eq!(FieldValue::Null.to_search_string(), None);
        assert_eq!(FieldValue::Absent.to_search_string(), None);
    }
}
