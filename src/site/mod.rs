//! Site lifecycle, domains, backups, rewrite rules and throttling.
//!
//! The mutating endpoints here answer with a JSON status/message body that
//! is meaningful even when the panel reports an error status, so they go
//! through the best-effort decode path: the call outcome is ignored and the
//! body (empty on failure) is decoded, surfacing at worst a decode error.

mod types;

pub use types::{
    AddSiteRequest, AddSiteResponse, Backup, BackupPage, BackupsQuery, DatabaseAccount,
    DeleteSiteRequest, DirUserIni, DomainEntry, FtpAccount, Message, PhpVersion, RewriteList,
    RunPathInfo, Site, SiteName, SitePage, SitesQuery, TrafficLimit,
};

use crate::Result;
use crate::client::Client;
use crate::params::Params;

impl Client {
    /// Installed PHP runtimes selectable for sites.
    pub async fn php_versions(&self) -> Result<Vec<PhpVersion>> {
        self.fetch("/site?action=GetPHPVersion", Params::new()).await
    }

    /// One page of the site table.
    pub async fn sites(&self, query: &SitesQuery) -> Result<SitePage> {
        self.fetch("/data?action=getData&table=sites", query.params())
            .await
    }

    /// Creates a site, optionally provisioning FTP and a database.
    pub async fn add_site(&self, request: &AddSiteRequest) -> Result<AddSiteResponse> {
        self.fetch("/site?action=AddSite", request.params()?).await
    }

    /// Deletes a site and, per the request flags, its FTP account,
    /// database, and directory.
    pub async fn delete_site(&self, request: &DeleteSiteRequest) -> Result<Message> {
        self.fetch_lenient("/site?action=DeleteSite", request.params())
            .await
    }

    /// Stops a site; the panel parks it on its default stop page.
    pub async fn stop_site(&self, id: i64, name: &str) -> Result<Message> {
        let params = Params::new().push("id", id).push("name", name);
        self.fetch_lenient("/site?action=SiteStop", params).await
    }

    /// Starts a stopped site.
    pub async fn start_site(&self, id: i64, name: &str) -> Result<Message> {
        let params = Params::new().push("id", id).push("name", name);
        self.fetch_lenient("/site?action=SiteStart", params).await
    }

    /// Sets the site's expiry date, `YYYY-MM-DD`; all zeros means never.
    pub async fn set_site_expiration(&self, id: i64, edate: &str) -> Result<Message> {
        let params = Params::new().push("id", id).push("edate", edate);
        self.fetch_lenient("/site?action=SetEdate", params).await
    }

    /// Sets the free-form note shown in the site list.
    pub async fn set_site_note(&self, id: i64, note: &str) -> Result<Message> {
        let params = Params::new().push("id", id).push("ps", note);
        self.fetch_lenient("/data?action=setPs&table=sites", params)
            .await
    }

    /// One page of a site's backup table.
    pub async fn site_backups(&self, query: &BackupsQuery) -> Result<BackupPage> {
        self.fetch("/data?action=getData&table=backup", query.params())
            .await
    }

    /// Kicks off a backup of the site.
    pub async fn backup_site(&self, id: i64) -> Result<Message> {
        self.fetch_lenient("/site?action=ToBackup", Params::new().push("id", id))
            .await
    }

    /// Deletes one backup archive.
    pub async fn delete_site_backup(&self, id: i64) -> Result<Message> {
        self.fetch_lenient("/site?action=DelBackup", Params::new().push("id", id))
            .await
    }

    /// Domains bound across sites, optionally filtered by search keywords
    /// (each keyword becomes a repeated `search` form value).
    pub async fn site_domains(&self, search: &[&str]) -> Result<Vec<DomainEntry>> {
        let mut params = Params::new().push("list", true);
        if !search.is_empty() {
            params = params.push_all("search", search.iter().copied());
        }
        self.fetch("/data?action=getData&table=domain", params).await
    }

    /// Binds a domain to a site.
    pub async fn add_domain(&self, id: i64, name: &str, domain: &str) -> Result<Message> {
        let params = Params::new()
            .push("id", id)
            .push("webname", name)
            .push("domain", domain);
        self.fetch_lenient("/site?action=AddDomain", params).await
    }

    /// Unbinds a domain from a site.
    pub async fn delete_domain(
        &self,
        id: i64,
        name: &str,
        domain: &str,
        port: i64,
    ) -> Result<Message> {
        let params = Params::new()
            .push("id", id)
            .push("webname", name)
            .push("domain", domain)
            .push("port", port);
        self.fetch_lenient("/site?action=DelDomain", params).await
    }

    /// Rewrite-rule templates selectable for a site.
    pub async fn rewrite_templates(&self, site_name: &str) -> Result<RewriteList> {
        let params = Params::new().push("siteName", site_name);
        self.fetch("/site?action=GetRewriteList", params).await
    }

    /// Cross-site protection, log and run-directory state of a site.
    pub async fn dir_user_ini(&self, id: i64, path: &str) -> Result<DirUserIni> {
        let params = Params::new().push("id", id).push("path", path);
        self.fetch("/site?action=GetDirUserINI", params).await
    }

    /// Toggles cross-site protection for the directory.
    pub async fn toggle_dir_user_ini(&self, path: &str) -> Result<Message> {
        let params = Params::new().push("path", path);
        self.fetch_lenient("/site?action=SetDirUserINI", params).await
    }

    /// Toggles the site's access log.
    pub async fn toggle_access_logs(&self, id: i64) -> Result<Message> {
        self.fetch_lenient("/site?action=logsOpen", Params::new().push("id", id))
            .await
    }

    /// Moves the site's root directory.
    pub async fn set_site_path(&self, id: i64, path: &str) -> Result<Message> {
        let params = Params::new().push("id", id).push("path", path);
        self.fetch_lenient("/site?action=SetPath", params).await
    }

    /// Sets the run directory relative to the site root, e.g. `/public`.
    pub async fn set_site_run_path(&self, id: i64, path: &str) -> Result<Message> {
        let params = Params::new().push("id", id).push("runPath", path);
        self.fetch_lenient("/site?action=SetSiteRunPath", params).await
    }

    /// Turns on HTTP basic password access for the site.
    pub async fn enable_password_access(
        &self,
        id: i64,
        username: &str,
        password: &str,
    ) -> Result<Message> {
        let params = Params::new()
            .push("id", id)
            .push("username", username)
            .push("password", password);
        self.fetch_lenient("/site?action=SetHasPwd", params).await
    }

    /// Turns password access back off.
    pub async fn disable_password_access(&self, id: i64) -> Result<Message> {
        self.fetch_lenient("/site?action=CloseHasPwd", Params::new().push("id", id))
            .await
    }

    /// Current traffic-throttle settings (nginx only).
    pub async fn traffic_limit(&self, id: i64) -> Result<TrafficLimit> {
        self.fetch("/site?action=GetLimitNet", Params::new().push("id", id))
            .await
    }

    /// Enables or updates traffic throttling (nginx only).
    pub async fn set_traffic_limit(
        &self,
        id: i64,
        per_server: i64,
        per_ip: i64,
        limit_rate: i64,
    ) -> Result<Message> {
        let params = Params::new()
            .push("id", id)
            .push("perserver", per_server)
            .push("perip", per_ip)
            .push("limit_rate", limit_rate);
        self.fetch_lenient("/site?action=SetLimitNet", params).await
    }

    /// Disables traffic throttling.
    pub async fn close_traffic_limit(&self, id: i64) -> Result<Message> {
        self.fetch_lenient("/site?action=CloseLimitNet", Params::new().push("id", id))
            .await
    }

    /// The site's default-document list, returned by the panel as plain
    /// text, e.g. `index.php,index.html`.
    pub async fn default_documents(&self, id: i64) -> Result<String> {
        self.fetch_text("/site?action=GetIndex", Params::new().push("id", id))
            .await
    }

    /// Replaces the default-document list.
    pub async fn set_default_documents(&self, id: i64, index: &str) -> Result<Message> {
        let params = Params::new().push("id", id).push("Index", index);
        self.fetch_lenient("/site?action=SetIndex", params).await
    }
}
