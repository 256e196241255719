// Code generated by plainrec. DO NOT EDIT.

#![allow(non_snake_case)]
#[allow(unused_imports)]
use super::*;
pub struct User {
    confirmedAt: chrono::DateTime<chrono::Utc>,
    email: String,
    signInCount: i32,
}
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn new_user(
    confirmedAt: chrono::DateTime<chrono::Utc>,
    email: String,
    signInCount: i32,
) -> User {
    User {
        confirmedAt,
        email,
        signInCount,
    }
}
#[must_use]
pub fn new_from_user(source: super::User) -> User {
    let mut email: String = Default::default();
    if source.Email.valid {
        email = source.Email.string;
    }
    let mut confirmedAt: chrono::DateTime<chrono::Utc> = Default::default();
    if source.ConfirmedAt.valid {
        confirmedAt = source.ConfirmedAt.time;
    }
    User {
        confirmedAt,
        email,
        signInCount: source.SignInCount,
    }
}
impl From<super::User> for User {
    fn from(value: super::User) -> Self {
        new_from_user(value)
    }
}
impl User {
    #[must_use]
    pub fn ConfirmedAt(&self) -> chrono::DateTime<chrono::Utc> {
        self.confirmedAt
    }
    #[must_use]
    pub fn Email(&self) -> &String {
        &self.email
    }
    #[must_use]
    pub fn SignInCount(&self) -> i32 {
        self.signInCount
    }
}
