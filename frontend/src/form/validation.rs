use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-()]+$").expect("phone pattern compiles"));

const MIN_NAME: usize = 2;
const MIN_PHONE: usize = 10;
const MIN_COMPANY: usize = 2;
const MIN_MESSAGE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Employees,
    Message,
}

impl Field {
    #[cfg(test)]
    pub const REQUIRED: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Message,
    ];

    /// Stable name used for element ids and analytics labels.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Employees => "employees",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EmployeeRange {
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    UpTo50,
    #[serde(rename = "51-200")]
    UpTo200,
    #[serde(rename = "201-500")]
    UpTo500,
    #[serde(rename = "500+")]
    Over500,
}

impl EmployeeRange {
    pub const ALL: [EmployeeRange; 5] = [
        EmployeeRange::UpTo10,
        EmployeeRange::UpTo50,
        EmployeeRange::UpTo200,
        EmployeeRange::UpTo500,
        EmployeeRange::Over500,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRange::UpTo10 => "1-10",
            EmployeeRange::UpTo50 => "11-50",
            EmployeeRange::UpTo200 => "51-200",
            EmployeeRange::UpTo500 => "201-500",
            EmployeeRange::Over500 => "500+",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_str() == value)
    }
}

/// A lead as typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<EmployeeRange>,
    pub message: String,
}

impl LeadForm {
    #[cfg(test)]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Employees => self.employees.map(|range| range.as_str()).unwrap_or(""),
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Company => self.company = value,
            Field::Employees => self.employees = EmployeeRange::parse(&value),
            Field::Message => self.message = value,
        }
    }
}

/// Per-field validation messages. Empty means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// The first failing field in form order.
    pub fn first(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    char_len(value) >= MIN_PHONE && PHONE_RE.is_match(value)
}

pub fn validate(form: &LeadForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if char_len(&form.name) < MIN_NAME {
        errors.insert(Field::Name, "Nome deve ter pelo menos 2 caracteres");
    }
    if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "Email inválido");
    }
    if !is_valid_phone(&form.phone) {
        errors.insert(Field::Phone, "Telefone inválido");
    }
    if char_len(&form.company) < MIN_COMPANY {
        errors.insert(Field::Company, "Nome da empresa é obrigatório");
    }
    if char_len(&form.message) < MIN_MESSAGE {
        errors.insert(Field::Message, "Mensagem deve ter pelo menos 10 caracteres");
    }
    errors
}

#[cfg(test)]
pub(crate) fn valid_lead() -> LeadForm {
    LeadForm {
        name: "João Silva".into(),
        email: "joao@empresa.com.br".into(),
        phone: "(11) 98765-4321".into(),
        company: "Distribuidora Sul".into(),
        employees: Some(EmployeeRange::UpTo50),
        message: "Queremos automatizar a cobrança.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_fails_every_required_field() {
        let errors = validate(&LeadForm::default());
        for field in Field::REQUIRED {
            assert!(errors.get(field).is_some(), "{:?} should fail", field);
        }
        assert_eq!(errors.get(Field::Employees), None);
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn bad_email_only_flags_email() {
        let mut lead = valid_lead();
        lead.email = "not-an-email".into();
        let errors = validate(&lead);
        assert_eq!(errors.get(Field::Email), Some("Email inválido"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn valid_lead_passes() {
        assert!(validate(&valid_lead()).is_empty());
    }

    #[test]
    fn employee_count_is_optional() {
        let mut lead = valid_lead();
        lead.employees = None;
        assert!(validate(&lead).is_empty());
    }

    #[test]
    fn phone_rules() {
        assert!(is_valid_phone("(11) 98765-4321"));
        assert!(is_valid_phone("11987654321"));
        assert!(!is_valid_phone("123-456"));
        assert!(!is_valid_phone("+55 11 98765-4321"));
        assert!(!is_valid_phone("11 9876 ABCD"));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last+tag@sub.example.com", "o'neil@x.io"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["", "plain", "a@b", "a@@b.com", ".a@b.com", "a..b@c.com", "a b@c.com"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut lead = valid_lead();
        lead.name = "Jô".into();
        assert!(validate(&lead).get(Field::Name).is_none());
        lead.name = "J".into();
        assert!(validate(&lead).get(Field::Name).is_some());
    }

    #[test]
    fn first_error_follows_form_order() {
        let mut lead = valid_lead();
        lead.message.clear();
        lead.phone.clear();
        assert_eq!(validate(&lead).first(), Some(Field::Phone));
    }

    #[test]
    fn employee_range_round_trips_through_select_values() {
        let mut lead = LeadForm::default();
        lead.set(Field::Employees, "201-500".into());
        assert_eq!(lead.employees, Some(EmployeeRange::UpTo500));
        assert_eq!(lead.value(Field::Employees), "201-500");
        lead.set(Field::Employees, String::new());
        assert_eq!(lead.employees, None);
    }
}
