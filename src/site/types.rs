use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;
use crate::params::Params;

/// Generic status/message payload most mutating endpoints answer with.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Message {
    pub status: bool,
    pub msg: String,
}

/// One installed PHP runtime, e.g. `{ "version": "72", "name": "PHP-72" }`.
/// Version `"00"` is the panel's pure-static pseudo runtime.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhpVersion {
    pub version: String,
    pub name: String,
}

/// Paging/filter inputs for the site list.
#[derive(Clone, Debug, PartialEq)]
pub struct SitesQuery {
    pub page: i64,
    pub limit: i64,
    /// Site category id; `-1` lists every category.
    pub category: i64,
    pub order: String,
    pub tojs: String,
    pub search: String,
}

impl SitesQuery {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: 15,
            category: -1,
            order: String::new(),
            tojs: String::new(),
            search: String::new(),
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub(crate) fn params(&self) -> Params {
        Params::new()
            .push("p", self.page)
            .push("limit", self.limit)
            .push("type", self.category)
            .push("order", &self.order)
            .push("tojs", &self.tojs)
            .push("search", &self.search)
    }
}

impl Default for SitesQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// One page of the site table.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SitePage {
    pub data: Vec<Site>,
    /// Pagination widget markup as rendered by the panel.
    pub page: String,
    #[serde(rename = "where")]
    pub where_clause: String,
}

/// One site row. `status` is the panel's `"1"`/`"0"` running flag and
/// `edate` of `0000-00-00` means the site never expires.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Site {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub status: String,
    pub ps: String,
    pub addtime: String,
    pub edate: String,
}

/// Structured display name sent JSON-encoded in the `webname` form field.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SiteName {
    pub domain: String,
    pub domainlist: Vec<String>,
    pub count: i64,
}

impl SiteName {
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            domainlist: Vec::new(),
            count: 0,
        }
    }
}

/// FTP account provisioned together with a new site.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FtpAccount {
    pub username: String,
    pub password: String,
}

/// Database provisioned together with a new site.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatabaseAccount {
    /// Database charset, e.g. `utf8`.
    pub charset: String,
    pub username: String,
    pub password: String,
}

/// Inputs for creating a site.
#[derive(Clone, Debug, PartialEq)]
pub struct AddSiteRequest {
    pub name: SiteName,
    /// Site root directory, e.g. `/www/wwwroot/example.com`.
    pub path: String,
    /// Site category id; `0` is the default category.
    pub category_id: i64,
    /// Project type, e.g. `PHP`.
    pub project_type: String,
    /// PHP version digits, e.g. `72`; `0` for a pure-static site.
    pub php_version: i64,
    pub port: u16,
    /// Free-form note shown in the site list.
    pub note: String,
    pub ftp: Option<FtpAccount>,
    pub database: Option<DatabaseAccount>,
}

impl AddSiteRequest {
    #[must_use]
    pub fn new(name: SiteName, path: impl Into<String>, php_version: i64) -> Self {
        Self {
            name,
            path: path.into(),
            category_id: 0,
            project_type: "PHP".to_owned(),
            php_version,
            port: 80,
            note: String::new(),
            ftp: None,
            database: None,
        }
    }

    #[must_use]
    pub fn with_ftp(mut self, ftp: FtpAccount) -> Self {
        self.ftp = Some(ftp);
        self
    }

    #[must_use]
    pub fn with_database(mut self, database: DatabaseAccount) -> Self {
        self.database = Some(database);
        self
    }

    pub(crate) fn params(&self) -> Result<Params> {
        let webname = serde_json::to_string(&self.name)
            .map_err(|err| Error::validation(format!("unable to encode site name: {err}")))?;
        Ok(Params::new()
            .push("webname", webname)
            .push("path", &self.path)
            .push("type_id", self.category_id)
            .push("type", &self.project_type)
            .push("version", self.php_version)
            .push("port", self.port)
            .push("ps", &self.note)
            .push("ftp", self.ftp.is_some())
            .push("ftp_username", self.ftp.as_ref().map_or("", |f| f.username.as_str()))
            .push("ftp_password", self.ftp.as_ref().map_or("", |f| f.password.as_str()))
            .push("sql", self.database.is_some())
            .push("codeing", self.database.as_ref().map_or("", |d| d.charset.as_str()))
            .push("datauser", self.database.as_ref().map_or("", |d| d.username.as_str()))
            .push(
                "datapassword",
                self.database.as_ref().map_or("", |d| d.password.as_str()),
            ))
    }
}

/// What the panel provisioned for a new site.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddSiteResponse {
    #[serde(rename = "siteStatus")]
    pub site_status: bool,
    #[serde(rename = "ftpStatus")]
    pub ftp_status: bool,
    #[serde(rename = "ftpUser")]
    pub ftp_user: String,
    #[serde(rename = "ftpPass")]
    pub ftp_pass: String,
    #[serde(rename = "databaseStatus")]
    pub database_status: bool,
    #[serde(rename = "databaseUser")]
    pub database_user: String,
    #[serde(rename = "databasePass")]
    pub database_pass: String,
}

/// Inputs for deleting a site; the `remove_*` flags also drop the
/// associated FTP account, database, or site directory.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteSiteRequest {
    pub id: i64,
    pub name: String,
    pub remove_ftp: bool,
    pub remove_database: bool,
    pub remove_path: bool,
}

impl DeleteSiteRequest {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            remove_ftp: false,
            remove_database: false,
            remove_path: false,
        }
    }

    pub(crate) fn params(&self) -> Params {
        // The panel only looks for the presence of these flags.
        let mut params = Params::new().push("id", self.id).push("webname", &self.name);
        if self.remove_ftp {
            params = params.push("ftp", 1);
        }
        if self.remove_database {
            params = params.push("database", 1);
        }
        if self.remove_path {
            params = params.push("path", 1);
        }
        params
    }
}

/// Paging inputs for the backup table of one site.
#[derive(Clone, Debug, PartialEq)]
pub struct BackupsQuery {
    pub page: i64,
    pub limit: i64,
    pub category: i64,
    pub tojs: String,
    /// Site id whose backups are listed.
    pub site_id: i64,
}

impl BackupsQuery {
    #[must_use]
    pub fn new(site_id: i64) -> Self {
        Self {
            page: 1,
            limit: 5,
            category: 0,
            tojs: String::new(),
            site_id,
        }
    }

    pub(crate) fn params(&self) -> Params {
        Params::new()
            .push("p", self.page)
            .push("limit", self.limit)
            .push("type", self.category)
            .push("tojs", &self.tojs)
            .push("search", self.site_id)
    }
}

/// One page of the backup table.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackupPage {
    pub data: Vec<Backup>,
    pub page: String,
    #[serde(rename = "where")]
    pub where_clause: String,
}

/// One site backup archive.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Backup {
    pub id: i64,
    /// Site id this backup belongs to.
    pub pid: i64,
    pub name: String,
    pub filename: String,
    pub addtime: String,
    /// Archive size in bytes.
    pub size: i64,
}

/// One bound domain row.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DomainEntry {
    pub id: i64,
    /// Site id the domain is bound to.
    pub pid: i64,
    pub name: String,
    pub port: i64,
    pub addtime: String,
}

/// Rewrite-rule templates available for a site.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RewriteList {
    pub rewrite: Vec<String>,
}

/// Cross-site protection, access-log and run-directory state of a site.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DirUserIni {
    /// Password access enabled.
    pub pass: bool,
    /// Access log enabled.
    pub logs: bool,
    /// Cross-site protection (`.user.ini`) enabled.
    pub userini: bool,
    #[serde(rename = "runPath")]
    pub run_path: RunPathInfo,
}

/// Selectable run directories and the active one.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunPathInfo {
    pub dirs: Vec<String>,
    #[serde(rename = "runPath")]
    pub run_path: String,
}

/// Current traffic-throttle settings of a site (nginx only).
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrafficLimit {
    #[serde(rename = "perserver")]
    pub per_server: i64,
    #[serde(rename = "perip")]
    pub per_ip: i64,
    /// Per-request rate cap in KB/s.
    pub limit_rate: i64,
}
