//! src/domain/application.rs

use crate::domain::{ApplicantEmail, ApplicantName, PaymentReference, ValidationError};

/// Fields every submission must carry, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 3] = ["firstName", "lastName", "email"];

const PAYMENT_REFERENCE_FIELD: &str = "paymentReference";

/// Text fields of one submission in arrival order.
///
/// A repeated key keeps its first position but takes the latest value.
#[derive(Debug, Default, Clone)]
pub struct ApplicationFields(Vec<(String, String)>);

impl ApplicationFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Required fields that are absent or empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|field| self.get(field).map_or(true, str::is_empty))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ApplicationFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (k, v) in iter {
            fields.insert(k.into(), v.into());
        }
        fields
    }
}

/// A submission that passed validation and is ready to be mailed.
#[derive(Debug)]
pub struct NewApplication {
    pub first_name: ApplicantName,
    pub last_name: ApplicantName,
    pub email: ApplicantEmail,
    pub payment_reference: Option<PaymentReference>,
    pub fields: ApplicationFields,
}

impl TryFrom<ApplicationFields> for NewApplication {
    type Error = ValidationError;

    fn try_from(fields: ApplicationFields) -> Result<Self, Self::Error> {
        let missing = fields.missing_required();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        let field = |key: &str| fields.get(key).unwrap_or_default().to_string();
        let first_name = ApplicantName::parse(field("firstName"))?;
        let last_name = ApplicantName::parse(field("lastName"))?;
        let email = ApplicantEmail::parse(field("email"))?;
        let payment_reference = match fields.get(PAYMENT_REFERENCE_FIELD) {
            Some(reference) if !reference.is_empty() => {
                Some(PaymentReference::parse(reference.to_string())?)
            }
            _ => None,
        };
        Ok(Self {
            first_name,
            last_name,
            email,
            payment_reference,
            fields,
        })
    }
}

impl NewApplication {
    pub fn subject(&self) -> String {
        format!("New Application: {} {}", self.first_name, self.last_name)
    }

    /// One `key: value` line per submitted field.
    pub fn text_body(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn html_body(&self) -> String {
        let paragraphs = self
            .fields
            .iter()
            .map(|(k, v)| {
                format!(
                    "<p><strong>{}:</strong> {}</p>",
                    htmlescape::encode_minimal(k),
                    htmlescape::encode_minimal(v)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("<h1>New Application Submission</h1>\n{}", paragraphs)
    }
}
