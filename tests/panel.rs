//! End-to-end coverage of the typed surface against a mocked panel.

use aapanel_client_sdk::site::{
    AddSiteRequest, BackupsQuery, DatabaseAccount, SiteName, SitesQuery,
};
use aapanel_client_sdk::{Client, Kind, Params};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> Client {
    Client::new(server.base_url(), "secret").expect("client")
}

#[tokio::test]
async fn network_status_decodes_the_documented_shape() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/system")
                .query_param("action", "GetNetWork")
                .x_www_form_urlencoded_key_exists("request_token")
                .x_www_form_urlencoded_key_exists("request_time");
            then.status(200).json_body(json!({
                "cpu": [1.85, 16.0],
                "load": { "max": 32, "safe": 24, "one": 0.91, "five": 0.76, "fifteen": 0.62 },
                "mem": { "memTotal": 31700, "memFree": 18000, "memBuffers": 1200,
                         "memCached": 8000, "memRealUsed": 4500 },
                "up": 4.7,
                "down": 0.31,
                "upTotal": 335_981_528_i64,
                "downTotal": 455_885_371_i64,
                "upPackets": 1_517_443,
                "downPackets": 1_360_592
            }));
        })
        .await;

    let status = client_for(&server).network_status().await.expect("status");
    mock.assert_async().await;

    assert_eq!(status.cpu, vec![1.85, 16.0]);
    assert!((status.load.one - 0.91).abs() < f64::EPSILON);
    assert_eq!(status.mem.total, 31700);
    assert_eq!(status.up_total, 335_981_528);
    assert_eq!(status.down_packets, 1_360_592);
}

#[tokio::test]
async fn malformed_body_surfaces_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/system");
            then.status(200).body("<html>login page</html>");
        })
        .await;

    let err = client_for(&server)
        .network_status()
        .await
        .expect_err("decode error");
    assert_eq!(err.kind(), Kind::Decode);
}

#[tokio::test]
async fn http_error_status_propagates_with_status_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/system");
            then.status(500).body("{\"would\": \"be ignored\"}");
        })
        .await;

    let err = client_for(&server)
        .system_total()
        .await
        .expect_err("status error");
    assert_eq!(err.kind(), Kind::Status);
    assert!(err.to_string().contains("500"), "got: {err}");
}

#[tokio::test]
async fn best_effort_operations_decode_the_body_over_the_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/site")
                .query_param("action", "SiteStop")
                .x_www_form_urlencoded_tuple("id", "66")
                .x_www_form_urlencoded_tuple("name", "example.com");
            then.status(200).json_body(json!({ "status": true, "msg": "ok" }));
        })
        .await;

    let message = client_for(&server)
        .stop_site(66, "example.com")
        .await
        .expect("message");
    assert!(message.status);
    assert_eq!(message.msg, "ok");
}

#[tokio::test]
async fn best_effort_operations_fail_as_decode_when_the_call_fails() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/site");
            then.status(500).body("");
        })
        .await;

    // The 500 is deliberately ignored; the empty body then fails to parse.
    let err = client_for(&server)
        .start_site(66, "example.com")
        .await
        .expect_err("decode error");
    assert_eq!(err.kind(), Kind::Decode);
}

#[tokio::test]
async fn task_count_parses_a_bare_integer() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/ajax").query_param("action", "GetTaskCount");
            then.status(200).body("3");
        })
        .await;

    assert_eq!(client_for(&server).task_count().await, 3);
}

#[tokio::test]
async fn task_count_degrades_to_zero() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/ajax");
            then.status(200).body("not a number");
        })
        .await;
    assert_eq!(client_for(&server).task_count().await, 0);

    let failing = MockServer::start_async().await;
    failing
        .mock_async(|when, then| {
            when.method(POST).path("/ajax");
            then.status(500).body("3");
        })
        .await;
    assert_eq!(client_for(&failing).task_count().await, 0);
}

#[tokio::test]
async fn session_cookies_are_replayed_and_replaced_across_calls() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(POST).path("/system");
            then.status(200)
                .header("set-cookie", "session=abc; Path=/; HttpOnly")
                .body("{}");
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(POST).path("/site").header("cookie", "session=abc");
            then.status(200)
                .header("set-cookie", "session=def")
                .body("[]");
        })
        .await;
    let third = server
        .mock_async(|when, then| {
            when.method(POST).path("/ajax").header("cookie", "session=def");
            then.status(200).body("0");
        })
        .await;

    let client = client_for(&server);
    client.network_status().await.expect("first call");
    client.php_versions().await.expect("second call");
    client.task_count().await;

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
}

#[tokio::test]
async fn add_site_encodes_the_site_name_as_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/site")
                .query_param("action", "AddSite")
                .x_www_form_urlencoded_tuple(
                    "webname",
                    r#"{"domain":"example.com","domainlist":[],"count":0}"#,
                )
                .x_www_form_urlencoded_tuple("path", "/www/wwwroot/example.com")
                .x_www_form_urlencoded_tuple("version", "72")
                .x_www_form_urlencoded_tuple("sql", "true")
                .x_www_form_urlencoded_tuple("datauser", "example")
                .x_www_form_urlencoded_tuple("ftp", "false");
            then.status(200).json_body(json!({
                "siteStatus": true,
                "ftpStatus": false,
                "ftpUser": "",
                "ftpPass": "",
                "databaseStatus": true,
                "databaseUser": "example",
                "databasePass": "p4ss"
            }));
        })
        .await;

    let request = AddSiteRequest::new(SiteName::new("example.com"), "/www/wwwroot/example.com", 72)
        .with_database(DatabaseAccount {
            charset: "utf8".to_owned(),
            username: "example".to_owned(),
            password: "p4ss".to_owned(),
        });
    let created = client_for(&server).add_site(&request).await.expect("created");

    mock.assert_async().await;
    assert!(created.site_status);
    assert!(created.database_status);
    assert_eq!(created.database_user, "example");
}

#[tokio::test]
async fn sites_query_maps_to_the_panel_table_parameters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/data")
                .query_param("action", "getData")
                .query_param("table", "sites")
                .x_www_form_urlencoded_tuple("p", "2")
                .x_www_form_urlencoded_tuple("limit", "15")
                .x_www_form_urlencoded_tuple("type", "-1")
                .x_www_form_urlencoded_tuple("search", "blog");
            then.status(200).json_body(json!({
                "data": [{
                    "id": 66,
                    "name": "blog.example.com",
                    "path": "/www/wwwroot/blog",
                    "status": "1",
                    "ps": "blog",
                    "addtime": "2024-05-01 10:00:00",
                    "edate": "0000-00-00"
                }],
                "page": "<div>1</div>",
                "where": "type_id=0"
            }));
        })
        .await;

    let page = client_for(&server)
        .sites(&SitesQuery::new().with_page(2).with_search("blog"))
        .await
        .expect("page");

    mock.assert_async().await;
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, 66);
    assert_eq!(page.data[0].status, "1");
    assert_eq!(page.where_clause, "type_id=0");
}

#[tokio::test]
async fn site_domains_repeats_search_keywords() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/data")
                .query_param("table", "domain")
                .x_www_form_urlencoded_tuple("list", "true")
                .x_www_form_urlencoded_tuple("search", "example.com")
                .x_www_form_urlencoded_tuple("search", "blog.example.com");
            then.status(200).json_body(json!([
                { "id": 1, "pid": 66, "name": "example.com", "port": 80,
                  "addtime": "2024-05-01 10:00:00" },
                { "id": 2, "pid": 66, "name": "blog.example.com", "port": 80,
                  "addtime": "2024-05-02 09:30:00" }
            ]));
        })
        .await;

    let domains = client_for(&server)
        .site_domains(&["example.com", "blog.example.com"])
        .await
        .expect("domains");

    mock.assert_async().await;
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[1].name, "blog.example.com");
    assert_eq!(domains[1].pid, 66);
}

#[tokio::test]
async fn site_backups_search_by_site_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/data")
                .query_param("table", "backup")
                .x_www_form_urlencoded_tuple("search", "66")
                .x_www_form_urlencoded_tuple("limit", "5");
            then.status(200).json_body(json!({
                "data": [{
                    "id": 7, "pid": 66, "name": "blog.example.com",
                    "filename": "/www/backup/site/blog_20240501.tar.gz",
                    "addtime": "2024-05-01 03:00:00", "size": 10_485_760
                }],
                "page": "",
                "where": "pid=66"
            }));
        })
        .await;

    let page = client_for(&server)
        .site_backups(&BackupsQuery::new(66))
        .await
        .expect("backups");

    mock.assert_async().await;
    assert_eq!(page.data[0].size, 10_485_760);
    assert_eq!(page.data[0].pid, 66);
}

#[tokio::test]
async fn default_documents_returns_the_body_verbatim() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/site")
                .query_param("action", "GetIndex")
                .x_www_form_urlencoded_tuple("id", "66");
            then.status(200).body("index.php,index.html,index.htm");
        })
        .await;

    let index = client_for(&server)
        .default_documents(66)
        .await
        .expect("index list");
    assert_eq!(index, "index.php,index.html,index.htm");
}

#[tokio::test]
async fn update_status_sends_boolean_strings() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/ajax")
                .query_param("action", "UpdatePanel")
                .x_www_form_urlencoded_tuple("check", "true")
                .x_www_form_urlencoded_tuple("force", "false");
            then.status(200).json_body(json!({
                "status": true, "version": "7.0.3", "updateMsg": "up to date"
            }));
        })
        .await;

    let update = client_for(&server)
        .update_status(true, false)
        .await
        .expect("update status");
    mock.assert_async().await;
    assert!(update.status);
    assert_eq!(update.version, "7.0.3");
}

#[tokio::test]
async fn file_round_trip_through_the_file_manager() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/files")
                .query_param("action", "GetFileBody")
                .x_www_form_urlencoded_tuple("path", "/www/wwwroot/blog/index.php");
            then.status(200).json_body(json!({
                "status": true,
                "data": "<?php phpinfo();",
                "encoding": "utf-8",
                "only_read": false
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/files")
                .query_param("action", "SaveFileBody")
                .x_www_form_urlencoded_tuple("data", "<?php echo 1;")
                .x_www_form_urlencoded_tuple("encoding", "utf-8");
            then.status(200).json_body(json!({ "status": true, "msg": "saved" }));
        })
        .await;

    let client = client_for(&server);
    let file = client
        .file_contents("/www/wwwroot/blog/index.php")
        .await
        .expect("file");
    assert_eq!(file.data, "<?php phpinfo();");
    assert_eq!(file.encoding, "utf-8");

    let saved = client
        .save_file("/www/wwwroot/blog/index.php", "<?php echo 1;")
        .await
        .expect("saved");
    assert!(saved.status);
}

#[tokio::test]
async fn dir_user_ini_decodes_the_nested_run_path() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/site").query_param("action", "GetDirUserINI");
            then.status(200).json_body(json!({
                "pass": false,
                "logs": true,
                "userini": true,
                "runPath": { "dirs": ["/", "/public"], "runPath": "/public" }
            }));
        })
        .await;

    let state = client_for(&server)
        .dir_user_ini(66, "/www/wwwroot/blog")
        .await
        .expect("state");
    assert!(state.userini);
    assert_eq!(state.run_path.run_path, "/public");
    assert_eq!(state.run_path.dirs, vec!["/", "/public"]);
}

#[tokio::test]
async fn raw_passthrough_returns_the_body_verbatim() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/system")
                .query_param("action", "GetNetWork")
                .x_www_form_urlencoded_tuple("debug", "1");
            then.status(200).body("anything the panel says");
        })
        .await;

    #[allow(deprecated)]
    let body = client_for(&server)
        .raw("/system?action=GetNetWork", Params::new().push("debug", 1))
        .await
        .expect("body");

    mock.assert_async().await;
    assert_eq!(body, b"anything the panel says");
}
