//! Helpers for the quirks of HTML form submission: blank number inputs,
//! checkbox presence flags, repeated keys and parallel field arrays.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};

/// Number inputs submit an empty string when left blank, which would
/// otherwise fail numeric deserialization.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Checkboxes submit a value (usually "on") when ticked and nothing at all
/// otherwise; combine with `#[serde(default)]` for the unticked case.
pub fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.is_some())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Time inputs send "HH:MM" without seconds; midnight when blank or garbled.
pub fn parse_time(raw: &str) -> NaiveTime {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .unwrap_or_else(|_| NaiveTime::from_hms_opt(0, 0, 0).unwrap())
}

/// One contact person from the parallel requester arrays on the event forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Zip the parallel requester arrays into contact entries. The arrays are
/// client-supplied and may disagree in length; missing entries become empty
/// strings and fully empty rows are dropped.
pub fn zip_contacts(
    first: &[String],
    last: &[String],
    email: &[String],
    phone: &[String],
) -> Vec<ContactEntry> {
    (0..first.len())
        .map(|i| ContactEntry {
            first_name: first.get(i).cloned().unwrap_or_default(),
            last_name: last.get(i).cloned().unwrap_or_default(),
            email: email.get(i).cloned().unwrap_or_default(),
            phone: phone.get(i).cloned().unwrap_or_default(),
        })
        .filter(|c| {
            !(c.first_name.is_empty()
                && c.last_name.is_empty()
                && c.email.is_empty()
                && c.phone.is_empty())
        })
        .collect()
}

/// Zip the parallel item/quantity arrays from the edit-event form into
/// `(item_id, quantity)` pairs. Unparseable item ids are skipped; a blank
/// quantity counts as zero.
pub fn zip_line_items(items: &[String], quantities: &[String]) -> Vec<(i32, i32)> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| {
            let item_id = raw.trim().parse::<i32>().ok()?;
            let quantity = quantities
                .get(i)
                .and_then(|q| q.trim().parse::<i32>().ok())
                .unwrap_or(0);
            Some((item_id, quantity))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct NumberField {
        #[serde(default, deserialize_with = "blank_as_none")]
        n: Option<i32>,
    }

    #[derive(Debug, Deserialize)]
    struct CheckboxField {
        #[serde(default, deserialize_with = "checkbox")]
        ticked: bool,
    }

    #[test]
    fn blank_number_input_becomes_none() {
        let parsed: NumberField = serde_json::from_value(json!({ "n": "" })).unwrap();
        assert_eq!(parsed.n, None);

        let parsed: NumberField = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.n, None);

        let parsed: NumberField = serde_json::from_value(json!({ "n": "7" })).unwrap();
        assert_eq!(parsed.n, Some(7));
    }

    #[test]
    fn garbled_number_input_is_an_error() {
        assert!(serde_json::from_value::<NumberField>(json!({ "n": "seven" })).is_err());
    }

    #[test]
    fn checkbox_present_means_true() {
        let parsed: CheckboxField = serde_json::from_value(json!({ "ticked": "on" })).unwrap();
        assert!(parsed.ticked);

        let parsed: CheckboxField = serde_json::from_value(json!({})).unwrap();
        assert!(!parsed.ticked);
    }

    #[test]
    fn parses_html_date_and_time_inputs() {
        assert_eq!(
            parse_date("2024-12-06"),
            NaiveDate::from_ymd_opt(2024, 12, 6)
        );
        assert_eq!(parse_date("tomorrow"), None);
        assert_eq!(parse_date(""), None);

        assert_eq!(parse_time("13:30"), NaiveTime::from_hms_opt(13, 30, 0).unwrap());
        assert_eq!(
            parse_time("13:30:15"),
            NaiveTime::from_hms_opt(13, 30, 15).unwrap()
        );
        assert_eq!(parse_time(""), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn ragged_contact_arrays_are_padded() {
        let first = vec!["Ada".to_string(), "Grace".to_string()];
        let last = vec!["Lovelace".to_string()];
        let email = vec!["ada@example.org".to_string()];
        let phone: Vec<String> = vec![];

        let contacts = zip_contacts(&first, &last, &email, &phone);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].first_name, "Ada");
        assert_eq!(contacts[0].last_name, "Lovelace");
        assert_eq!(contacts[1].first_name, "Grace");
        assert_eq!(contacts[1].last_name, "");
        assert_eq!(contacts[1].email, "");
    }

    #[test]
    fn fully_empty_contact_rows_are_dropped() {
        let blank = vec![String::new(), "Ada".to_string()];
        let contacts = zip_contacts(&blank, &[String::new()], &[], &[]);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].first_name, "Ada");
    }

    #[test]
    fn line_items_skip_bad_ids_and_default_quantities() {
        let items = vec!["14".to_string(), "oops".to_string(), "15".to_string()];
        let quantities = vec!["3".to_string(), "1".to_string()];

        let pairs = zip_line_items(&items, &quantities);
        assert_eq!(pairs, vec![(14, 3), (15, 0)]);
    }
}
