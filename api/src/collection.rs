use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

pub type CollectionUuid = i64;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Collection {
    pub uuid: CollectionUuid,
    pub name: String,
    // css color, i.e. #4e5c6e
    pub color: String,
}

// messages

// collections the current user may create documents in
endpoint!(ListCollections);

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ListCollectionsReq {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListCollectionsResp {
    pub collections: Vec<Collection>,
}
