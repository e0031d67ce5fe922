use serde::Deserialize;

/// A file read through the panel's file manager.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileContents {
    pub status: bool,
    pub data: String,
    pub encoding: String,
    pub only_read: bool,
}
