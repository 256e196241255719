#![allow(non_snake_case)]

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use plainrec_sql as sql;
use uuid::Uuid;

pub struct User {
    pub ID: Uuid,
    pub Email: sql::NullString,
    pub EmailVerified: bool,
    pub PhoneNumber: String,
    pub PhoneNumberVerified: bool,
    pub Name: String,
    pub FamilyName: String,
    pub GivenName: String,
    pub MiddleName: String,
    pub Nickname: String,
    pub PreferredUsername: String,
    /// URL of the End-User's profile page.
    pub Profile: String,
    pub Picture: String,
    /// URL of the End-User's web page or blog.
    pub Website: String,
    pub Gender: String,
    /// ISO 8601 birthday.
    pub Birthdate: sql::NullTime,
    pub Zoneinfo: String,
    pub Locale: String,
    pub StreetAddress: String,
    pub Locality: String,
    pub Region: String,
    pub PostalCode: String,
    pub Country: String,
    pub ConfirmationToken: sql::NullString,
    pub ConfirmationSentAt: sql::NullTime,
    pub ConfirmedAt: sql::NullTime,
    pub UnconfirmedEmail: String,
    pub ResetPasswordToken: sql::NullString,
    pub ResetPasswordSentAt: sql::NullTime,
    pub AllowPasswordChange: bool,
    pub SignInCount: i32,
    pub CurrentSignInAt: sql::NullTime,
    pub CurrentSignInIp: IpAddr,
    pub CurrentSignInUserAgent: String,
    pub LastSignInAt: sql::NullTime,
    pub LastSignInIp: IpAddr,
    pub LastSignInUserAgent: String,
    pub LastSignOutAt: sql::NullTime,
    pub LastSignOutIp: IpAddr,
    pub LastSignOutUserAgent: String,
    pub CreatedAt: DateTime<Utc>,
    pub UpdatedAt: DateTime<Utc>,
    pub DeletedAt: sql::NullTime,
}

pub fn anonymous() -> User {
    unimplemented!()
}
