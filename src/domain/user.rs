//! User - User Directory Records

use serde::{Deserialize, Deserializer, Serialize};

/// Identifiers arrive as numbers or strings depending on the backend
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Company block of a user record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

/// Postal address of a user record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

impl Address {
    /// `street, suite, city, zipcode`, skipping blank parts
    pub fn one_line(&self) -> String {
        [&self.street, &self.suite, &self.city, &self.zipcode]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A single user as returned by `GET <users>/<id>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl UserDetail {
    /// Labelled fields shown below the name heading; absent fields are omitted
    pub fn display_lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();
        let mut push = |label: &'static str, value: Option<&str>| {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                lines.push((label, value.to_string()));
            }
        };

        push("Username", self.username.as_deref());
        push("Email", self.email.as_deref());
        push("Phone", self.phone.as_deref());
        push("Website", self.website.as_deref());
        push("Company", self.company.as_ref().map(|c| c.name.as_str()));

        let address = self.address.as_ref().map(Address::one_line);
        push("Address", address.as_deref());

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_id_and_nested_blocks() {
        let user: UserDetail = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "John Doe",
                "username": "johndoe",
                "email": "john@example.com",
                "company": { "name": "ABC Corp" }
            }"#,
        )
        .expect("valid user");

        assert_eq!(user.id, "1");
        let lines = user.display_lines();
        assert!(lines.contains(&("Username", "johndoe".to_string())));
        assert!(lines.contains(&("Company", "ABC Corp".to_string())));
        assert!(!lines.iter().any(|(label, _)| *label == "Address"));
        assert!(!lines.iter().any(|(label, _)| *label == "Phone"));
    }

    #[test]
    fn string_id_is_kept() {
        let user: UserDetail =
            serde_json::from_str(r#"{ "id": "u-7", "name": "Ann" }"#).expect("valid user");
        assert_eq!(user.id, "u-7");
        assert!(user.display_lines().is_empty());
    }

    #[test]
    fn address_joins_present_parts() {
        let address = Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: String::new(),
        };
        assert_eq!(address.one_line(), "Kulas Light, Apt. 556, Gwenborough");
    }
}
