//! Sign-up model compiled together with its generated plain record.

use plainrec_sql as sql;

#[path = "user_gen.rs"]
pub mod user_gen;

pub struct User {
    pub Email: sql::NullString,
    pub ConfirmedAt: sql::NullTime,
    pub SignInCount: i32,
}
