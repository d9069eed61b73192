use chrono::NaiveDate;
use rowbind_model::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: i64,
    username: String,
    email: String,
    active: bool,
    admin: bool,
    join_date: chrono::NaiveDateTime,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 0,
            username: String::new(),
            email: String::new(),
            active: true,
            admin: false,
            join_date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
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
        &["id", "username", "email", "active", "admin", "join_date"]
    }

    fn get_field(&self, name: &str) -> Result<FieldValue, ModelError> {
        match name {
            "id" => Ok(FieldValue::Int(self.id)),
            "username" => Ok(self.username.as_str().into()),
            "email" => Ok(self.email.as_str().into()),
            "active" => Ok(self.active.into()),
            "admin" => Ok(self.admin.into()),
            "join_date" => Ok(self.join_date.into()),
            _ => Err(ModelError::UnknownField { name: name.to_owned().into(), context: None }),
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ModelError> {
        match (name, value) {
            ("id", FieldValue::Int(v)) => self.id = v,
            ("username", FieldValue::Text(v)) => self.username = v,
            ("email", FieldValue::Text(v)) => self.email = v,
            ("active", FieldValue::Bool(v)) => self.active = v,
            ("admin", FieldValue::Bool(v)) => self.admin = v,
            ("join_date", FieldValue::DateTime(v)) => self.join_date = v,
            (other, _) => {
                return Err(ModelError::UnknownField {
                    name: other.to_owned().into(),
                    context: None,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Message {
    id: i64,
    content: String,
    user: Arc<User>,
}

impl Record for Message {
    fn kind(&self) -> &'static str {
        "message"
    }

    fn id(&self) -> FieldValue {
        FieldValue::Int(self.id)
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["id", "content", "user"]
    }

    fn get_field(&self, name: &str) -> Result<FieldValue, ModelError> {
        match name {
            "id" => Ok(FieldValue::Int(self.id)),
            "content" => Ok(self.content.as_str().into()),
            "user" => Ok(FieldValue::Record(self.user.clone())),
            _ => Err(ModelError::UnknownField { name: name.to_owned().into(), context: None }),
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ModelError> {
        match (name, value) {
            ("id", FieldValue::Int(v)) => self.id = v,
            ("content", FieldValue::Text(v)) => self.content = v,
            (other, _) => {
                return Err(ModelError::UnknownField {
                    name: other.to_owned().into(),
                    context: None,
                });
            }
        }
        Ok(())
    }
}

/// In-memory table, optionally narrowed by a pre-filter (a "query").
struct UserTable {
    rows: Vec<User>,
    pre_filter: Option<fn(&User) -> bool>,
}

impl UserTable {
    fn new(rows: Vec<User>) -> Self {
        Self { rows, pre_filter: None }
    }

    fn filtered(rows: Vec<User>, pre_filter: fn(&User) -> bool) -> Self {
        Self { rows, pre_filter: Some(pre_filter) }
    }
}

impl QuerySource for UserTable {
    type Record = User;

    fn fetch_where(&self, predicate: &dyn Fn(&User) -> bool) -> Vec<User> {
        self.rows
            .iter()
            .filter(|row| self.pre_filter.is_none_or(|pre| pre(row)))
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User { id: 1, username: "admin".into(), admin: true, ..User::default() },
        User { id: 2, username: "test".into(), ..User::default() },
        User { id: 3, username: "retired".into(), active: false, ..User::default() },
    ]
}

#[test]
fn test_fetch_or_not_found_on_table() {
    let table = UserTable::new(sample_users());

    let user = fetch_or_not_found(&table, |u| u.username == "test").unwrap();
    assert_eq!(user.id, 2);

    let missing = fetch_or_not_found(&table, |u| u.username == "nonexistent");
    assert!(matches!(missing, Err(ModelError::NotFound { .. })));
}

#[test]
fn test_fetch_or_not_found_on_prefiltered_query() {
    let active = UserTable::filtered(sample_users(), |u| u.active);
    let inactive = UserTable::filtered(sample_users(), |u| !u.active);

    let user = fetch_or_not_found(&active, |u| u.username == "test").unwrap();
    assert_eq!(user.id, 2);

    // "retired" exists in the table but not behind the active pre-filter.
    let hidden = fetch_or_not_found(&active, |u| u.username == "retired");
    assert!(matches!(hidden, Err(ModelError::NotFound { .. })));

    let retired = fetch_or_not_found(&inactive, |u| u.username == "retired").unwrap();
    assert_eq!(retired.id, 3);
}

#[test]
fn test_fetch_or_not_found_returns_first_of_many() {
    let table = UserTable::new(sample_users());

    let first = fetch_or_not_found(&table, |u| u.active).unwrap();
    assert_eq!(first.id, 1);
}

#[test]
fn test_record_to_map_keeps_temporal_values_typed() {
    let user = User { id: 1, username: "admin".into(), ..User::default() };
    let map = record_to_map(&user, 0).unwrap();

    assert_eq!(map["id"], FieldValue::Int(1));
    assert_eq!(map["username"], FieldValue::Text("admin".into()));
    assert!(matches!(map["join_date"], FieldValue::DateTime(_)));
    assert_eq!(map.len(), user.field_names().len());
}

#[test]
fn test_record_to_map_collapses_reference_without_expansion() {
    let user = Arc::new(User { id: 7, username: "admin".into(), ..User::default() });
    let message = Message { id: 1, content: "answer: 42".into(), user };

    let map = record_to_map(&message, 0).unwrap();
    assert_eq!(map["user"], FieldValue::Int(7));
}

#[test]
fn test_record_to_map_expands_reference_one_level() {
    let user = Arc::new(User { id: 7, username: "admin".into(), ..User::default() });
    let message = Message { id: 1, content: "answer: 42".into(), user: user.clone() };

    let map = record_to_map(&message, 1).unwrap();
    let expected = record_to_map(user.as_ref(), 0).unwrap();

    assert_eq!(map["user"], FieldValue::Map(expected));
    assert_eq!(map["content"], FieldValue::Text("answer: 42".into()));
}

#[test]
fn test_record_references_compare_by_kind_and_id() {
    let a = FieldValue::record(User { id: 7, username: "a".into(), ..User::default() });
    let b = FieldValue::record(User { id: 7, username: "b".into(), ..User::default() });
    let c = FieldValue::record(User { id: 8, ..User::default() });

    assert_eq!(a, b);
    assert_ne!(a, c);
}
