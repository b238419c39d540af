// User request/response DTOs and their constraint tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{evaluate, FieldConstraint, FieldValue, Rule, Validate, Violation};

/// Incoming user payload; every member is optional at the JSON level so that
/// absent fields surface as validation violations instead of parse errors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "mm_dd_yyyy::deserialize")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub permission: Option<Vec<String>>,
}

impl Validate for UserRequest {
    fn validate(&self) -> Result<(), Vec<Violation>> {
        let constraints: [FieldConstraint; 6] = [
            FieldConstraint {
                field: "firstName",
                value: FieldValue::Text(self.first_name.as_deref()),
                rules: &[(Rule::NotBlank, "firstName must be not blank")],
            },
            FieldConstraint {
                field: "lastName",
                value: FieldValue::Text(self.last_name.as_deref()),
                rules: &[(Rule::NotNull, "lastName must be not null")],
            },
            FieldConstraint {
                field: "phone",
                value: FieldValue::Text(self.phone.as_deref()),
                rules: &[(Rule::Phone, "Invalid phone number")],
            },
            FieldConstraint {
                field: "email",
                value: FieldValue::Text(self.email.as_deref()),
                rules: &[(Rule::Email, "email invalid format")],
            },
            FieldConstraint {
                field: "dateOfBirth",
                value: FieldValue::Date(self.date_of_birth),
                rules: &[(Rule::NotNull, "dateOfBirth must be not null")],
            },
            FieldConstraint {
                field: "permission",
                value: FieldValue::List(self.permission.as_deref()),
                rules: &[(Rule::NotEmpty, "permission must be empty")],
            },
        ];

        let violations: Vec<Violation> = evaluate(&constraints);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Placeholder user returned by the detail endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl UserDetail {
    pub fn placeholder() -> Self {
        Self {
            first_name: "jane".to_string(),
            last_name: "doe".to_string(),
            phone: "0902345345".to_string(),
            email: "jane.doe@example.com".to_string(),
        }
    }
}

/// `dateOfBirth` travels as "MM/dd/yyyy" on the wire
mod mm_dd_yyyy {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    const FORMAT: &str = "%m/%d/%Y";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;

        raw.map(|value| {
            NaiveDate::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}
