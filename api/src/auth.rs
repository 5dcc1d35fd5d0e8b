use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

pub type UserId = String;
pub type TeamId = String;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    // locale tag, i.e. en_US
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

// the identity of the current browser session
//
// both halves are None until the server has confirmed the session, and
// the ui treats a missing half the same as a missing whole
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AuthInfo {
    pub user: Option<User>,
    pub team: Option<Team>,
}

impl AuthInfo {
    pub fn identity(&self) -> Option<(&User, &Team)> {
        match (&self.user, &self.team) {
            (Some(user), Some(team)) => Some((user, team)),
            _ => None,
        }
    }
}

// messages

// who is the current session
endpoint!(GetAuthInfo);

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GetAuthInfoReq {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetAuthInfoResp {
    pub auth: AuthInfo,
}

// change the language of the current user
endpoint!(UpdateUserLanguage);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateUserLanguageReq {
    pub language: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateUserLanguageResp {
    pub user: User,
}
