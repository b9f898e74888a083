//! Decoding of the `corpCode.xml` bulk feed.
//!
//! The feed is a ZIP archive holding a single `CORPCODE.xml` document
//! with one `<list>` element per registrant.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::types::{CorpIndex, CorpRecord, StatusEnvelope};
use crate::Error;

const INDEX_FILE_NAME: &str = "CORPCODE.xml";

/// Decodes a raw feed body into its corp records, in source order.
pub fn parse_corp_index(body: &[u8]) -> Result<Vec<CorpRecord>, Error> {
    let mut archive = match ZipArchive::new(Cursor::new(body)) {
        Ok(archive) => archive,
        Err(e) => return Err(non_archive_error(body, &e)),
    };

    let mut xml = String::new();
    archive
        .by_name(INDEX_FILE_NAME)
        .map_err(|e| Error::MalformedFeed(format!("missing {}: {}", INDEX_FILE_NAME, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::MalformedFeed(format!("unreadable {}: {}", INDEX_FILE_NAME, e)))?;

    let index: CorpIndex = quick_xml::de::from_str(&xml)
        .map_err(|e| Error::MalformedFeed(format!("bad index XML: {}", e)))?;
    Ok(index.entries)
}

/// OpenDART rejects the feed request (invalid key, quota) with a bare XML
/// status envelope instead of an archive. Surface that as an API error;
/// anything else unrecognizable is a malformed feed.
fn non_archive_error(body: &[u8], zip_err: &zip::result::ZipError) -> Error {
    if let Ok(text) = std::str::from_utf8(body) {
        if let Ok(envelope) = quick_xml::de::from_str::<StatusEnvelope>(text) {
            return Error::Api {
                code: envelope.status,
                message: envelope.message,
            };
        }
    }
    Error::MalformedFeed(format!("not a ZIP archive: {}", zip_err))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
    <list>
        <corp_code>00126380</corp_code>
        <corp_name>삼성전자</corp_name>
        <corp_eng_name>SAMSUNG ELECTRONICS CO,.LTD</corp_eng_name>
        <stock_code>005930</stock_code>
        <modify_date>20230110</modify_date>
    </list>
    <list>
        <corp_code>00434003</corp_code>
        <corp_name>다코</corp_name>
        <corp_eng_name> </corp_eng_name>
        <stock_code> </stock_code>
        <modify_date>20170630</modify_date>
    </list>
</result>"#;

    fn zip_body(xml: &str) -> Vec<u8> {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(INDEX_FILE_NAME, SimpleFileOptions::default())
            .expect("start zip entry");
        writer.write_all(xml.as_bytes()).expect("write zip entry");
        writer.finish().expect("finish zip").into_inner()
    }

    #[test]
    fn parses_records_in_source_order() {
        let records = parse_corp_index(&zip_body(SAMPLE_XML)).expect("parse feed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].corp_code, "00126380");
        assert_eq!(records[0].corp_name, "삼성전자");
        assert_eq!(records[0].stock_code, "005930");
        assert_eq!(records[1].corp_code, "00434003");
    }

    #[test]
    fn unlisted_corp_has_blank_stock_code() {
        let records = parse_corp_index(&zip_body(SAMPLE_XML)).expect("parse feed");
        assert!(records[1].stock_code.trim().is_empty());
        assert!(records[1].corp_eng_name.trim().is_empty());
    }

    #[test]
    fn empty_result_yields_no_records() {
        let records = parse_corp_index(&zip_body("<result></result>")).expect("parse feed");
        assert!(records.is_empty());
    }

    #[test]
    fn status_envelope_body_maps_to_api_error() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
    <status>010</status>
    <message>등록되지 않은 키입니다.</message>
</result>"#;
        match parse_corp_index(body.as_bytes()) {
            Err(Error::Api { code, .. }) => assert_eq!(code, "010"),
            other => panic!("expected Api error, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn garbage_body_is_malformed_feed() {
        match parse_corp_index(b"definitely not a zip") {
            Err(Error::MalformedFeed(_)) => {}
            other => panic!("expected MalformedFeed, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn archive_without_index_file_is_malformed() {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("OTHER.xml", SimpleFileOptions::default())
            .expect("start zip entry");
        writer.write_all(b"<result></result>").expect("write zip entry");
        let body = writer.finish().expect("finish zip").into_inner();

        match parse_corp_index(&body) {
            Err(Error::MalformedFeed(msg)) => assert!(msg.contains("CORPCODE.xml")),
            other => panic!("expected MalformedFeed, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn truncated_xml_is_malformed() {
        let body = zip_body("<result><list><corp_code>001");
        assert!(matches!(
            parse_corp_index(&body),
            Err(Error::MalformedFeed(_))
        ));
    }
}
