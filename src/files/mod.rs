//! Reading and saving file contents through the panel's file manager.

mod types;

pub use types::FileContents;

use crate::Result;
use crate::client::Client;
use crate::params::Params;
use crate::site::Message;

impl Client {
    /// Reads a file's contents.
    pub async fn file_contents(&self, path: &str) -> Result<FileContents> {
        self.fetch("/files?action=GetFileBody", Params::new().push("path", path))
            .await
    }

    /// Overwrites a file's contents as UTF-8. The panel cannot create new
    /// files through this endpoint, only modify existing ones.
    pub async fn save_file(&self, path: &str, body: &str) -> Result<Message> {
        let params = Params::new()
            .push("path", path)
            .push("data", body)
            .push("encoding", "utf-8");
        self.fetch_lenient("/files?action=SaveFileBody", params).await
    }
}
