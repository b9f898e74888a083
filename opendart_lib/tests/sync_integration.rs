use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use opendart_lib::{sync_corp_index, Client, Db, RegistryError, Resolver};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::write::SimpleFileOptions;

fn corp_index_zip(entries: &[(&str, &str, &str)]) -> Vec<u8> {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<result>\n");
    for (code, name, stock) in entries {
        xml.push_str(&format!(
            "    <list>\n        <corp_code>{}</corp_code>\n        <corp_name>{}</corp_name>\n        <corp_eng_name> </corp_eng_name>\n        <stock_code>{}</stock_code>\n        <modify_date>20230110</modify_date>\n    </list>\n",
            code, name, stock
        ));
    }
    xml.push_str("</result>");

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("CORPCODE.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

async fn mock_feed(server: &MockServer, body: Vec<u8>) {
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/corpCode.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn sync_populates_store_and_count_matches() {
    let server = MockServer::start().await;
    mock_feed(
        &server,
        corp_index_zip(&[
            ("00126380", "삼성전자", "005930"),
            ("00164742", "현대자동차", "005380"),
            ("00434003", "다코", " "),
        ]),
    )
    .await;

    let client = Client::with_base_url(&server.uri(), "test-key").unwrap();
    let mut db = Db::open_in_memory().unwrap();
    db.init().unwrap();

    let report = sync_corp_index(&client, &mut db).await.unwrap();
    assert_eq!(report.corp_count, 3);
    assert_eq!(db.corp_count().unwrap(), 3);
    assert!(db.get_meta("last_corp_sync").unwrap().is_some());
}

#[tokio::test]
async fn fetch_failure_leaves_prior_contents_intact() {
    let server = MockServer::start().await;
    mock_feed(&server, corp_index_zip(&[("00126380", "삼성전자", "005930")])).await;

    let client = Client::with_base_url(&server.uri(), "test-key").unwrap();
    let mut db = Db::open_in_memory().unwrap();
    db.init().unwrap();
    sync_corp_index(&client, &mut db).await.unwrap();

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/corpCode.xml"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = sync_corp_index(&client, &mut db).await;
    assert!(matches!(result, Err(RegistryError::Api(_))));
    assert_eq!(db.corp_count().unwrap(), 1);
    let survivors = db.find_corps_by_name_substring("삼성전자").unwrap();
    assert_eq!(survivors.len(), 1);
}

#[tokio::test]
async fn resync_drops_stale_corps() {
    let server = MockServer::start().await;
    mock_feed(
        &server,
        corp_index_zip(&[
            ("00126380", "삼성전자", "005930"),
            ("99999999", "사라질회사", " "),
        ]),
    )
    .await;

    let client = Client::with_base_url(&server.uri(), "test-key").unwrap();
    let mut db = Db::open_in_memory().unwrap();
    db.init().unwrap();
    sync_corp_index(&client, &mut db).await.unwrap();
    assert_eq!(db.corp_count().unwrap(), 2);

    mock_feed(&server, corp_index_zip(&[("00126380", "삼성전자", "005930")])).await;
    let report = sync_corp_index(&client, &mut db).await.unwrap();
    assert_eq!(report.corp_count, 1);
    assert!(db.find_corps_by_name_substring("사라질회사").unwrap().is_empty());
}

#[tokio::test]
async fn synced_store_serves_resolution() {
    let server = MockServer::start().await;
    mock_feed(
        &server,
        corp_index_zip(&[
            ("00000001", "삼성전자판매", " "),
            ("00126380", "삼성전자", "005930"),
            ("00164742", "현대자동차", "005380"),
        ]),
    )
    .await;

    let client = Client::with_base_url(&server.uri(), "test-key").unwrap();
    let mut db = Db::open_in_memory().unwrap();
    db.init().unwrap();
    sync_corp_index(&client, &mut db).await.unwrap();

    let resolver = Resolver::new(Arc::new(Mutex::new(db)));
    let results = resolver.resolve("삼성전자", 5).unwrap();
    assert_eq!(results[0].corp_code, "00126380");
    assert_eq!(results.len(), 2);

    // unlisted corp carried no ticker in the feed
    assert_eq!(results[1].stock_code, None);
}
