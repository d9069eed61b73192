use chrono::{NaiveDate, NaiveDateTime};
use rowbind_model::{FieldValue, ModelError, Record};
use std::sync::Arc;

/// In-memory stand-in for a persisted user row.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub join_date: NaiveDateTime,
    pub active: bool,
    pub admin: bool,
    pub email: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 0,
            username: String::new(),
            password: String::new(),
            join_date: joined(2024, 1, 1),
            active: true,
            admin: false,
            email: String::new(),
        }
    }
}

impl Record for User {
    fn kind(&self) -> &'static str {
        "user"
    }

    fn id(&self) -> FieldValue {
        FieldValue::Int(self.id)
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["id", "username", "password", "join_date", "active", "admin", "email"]
    }

    fn get_field(&self, name: &str) -> Result<FieldValue, ModelError> {
        match name {
            "id" => Ok(FieldValue::Int(self.id)),
            "username" => Ok(self.username.as_str().into()),
            "password" => Ok(self.password.as_str().into()),
            "join_date" => Ok(self.join_date.into()),
            "active" => Ok(self.active.into()),
            "admin" => Ok(self.admin.into()),
            "email" => Ok(self.email.as_str().into()),
            _ => Err(unknown(name)),
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ModelError> {
        match (name, value) {
            ("id", FieldValue::Int(v)) => self.id = v,
            ("username", FieldValue::Text(v)) => self.username = v,
            ("password", FieldValue::Text(v)) => self.password = v,
            ("join_date", FieldValue::DateTime(v)) => self.join_date = v,
            ("active", FieldValue::Bool(v)) => self.active = v,
            ("admin", FieldValue::Bool(v)) => self.admin = v,
            ("email", FieldValue::Text(v)) => self.email = v,
            (other, _) => return Err(unknown(other)),
        }
        Ok(())
    }
}

/// Message row holding a reference to its author.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub pub_date: NaiveDateTime,
    pub user: Arc<User>,
}

impl Record for Message {
    fn kind(&self) -> &'static str {
        "message"
    }

    fn id(&self) -> FieldValue {
        FieldValue::Int(self.id)
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["id", "content", "pub_date", "user"]
    }

    fn get_field(&self, name: &str) -> Result<FieldValue, ModelError> {
        match name {
            "id" => Ok(FieldValue::Int(self.id)),
            "content" => Ok(self.content.as_str().into()),
            "pub_date" => Ok(self.pub_date.into()),
            "user" => Ok(FieldValue::Record(self.user.clone())),
            _ => Err(unknown(name)),
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ModelError> {
        match (name, value) {
            ("id", FieldValue::Int(v)) => self.id = v,
            ("content", FieldValue::Text(v)) => self.content = v,
            ("pub_date", FieldValue::DateTime(v)) => self.pub_date = v,
            (other, _) => return Err(unknown(other)),
        }
        Ok(())
    }
}

fn unknown(name: &str) -> ModelError {
    ModelError::UnknownField { name: name.to_owned().into(), context: None }
}

pub fn joined(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(8, 30, 0).unwrap()
}

#[must_use]
pub fn admin_user() -> User {
    User {
        id: 5,
        username: "admin".into(),
        password: "sha256$salt$digest".into(),
        join_date: joined(2023, 11, 2),
        active: true,
        admin: true,
        email: String::new(),
    }
}
