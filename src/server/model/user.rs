//! User domain models and the Google profile they are created from.

use serde::Deserialize;

use crate::model::user::{LoginDto, UserDto};

/// Prefix Google puts in front of a person's subject identifier.
const PEOPLE_RESOURCE_PREFIX: &str = "people/";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub unique_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            unique_id: entity.unique_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            unique_id: self.unique_id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }

    /// Builds the login response, pairing the user with the ID token to use as bearer.
    pub fn into_login_dto(self, token: String) -> LoginDto {
        LoginDto {
            first_name: self.first_name,
            last_name: self.last_name,
            unique_id: self.unique_id,
            token,
        }
    }
}

/// Identity returned by Google after a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleProfile {
    /// Subject identifier, the same value as the ID token's `sub` claim.
    pub unique_id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Response of the People API `people/me` endpoint with `personFields=names`.
#[derive(Debug, Deserialize)]
pub struct PersonResponse {
    #[serde(rename = "resourceName")]
    pub resource_name: String,
    #[serde(default)]
    pub names: Vec<PersonName>,
}

#[derive(Debug, Deserialize)]
pub struct PersonName {
    #[serde(rename = "givenName", default)]
    pub given_name: String,
    #[serde(rename = "familyName", default)]
    pub family_name: String,
}

impl GoogleProfile {
    /// Extracts the subject and primary name from a People API response.
    ///
    /// A person with no names yields empty first and last names.
    pub fn from_person(person: PersonResponse) -> Self {
        let unique_id = person
            .resource_name
            .strip_prefix(PEOPLE_RESOURCE_PREFIX)
            .unwrap_or(&person.resource_name)
            .to_string();

        let (first_name, last_name) = person
            .names
            .into_iter()
            .next()
            .map(|name| (name.given_name, name.family_name))
            .unwrap_or_default();

        Self {
            unique_id,
            first_name,
            last_name,
        }
    }
}
