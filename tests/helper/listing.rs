//! Document builders for listing fixtures

use chrono::DateTime;

/// Format a UNIX timestamp the way S3 reports `LastModified`
pub fn s3_time(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap()
        .format("%Y-%m-%dT%H:%M:%S.000Z")
        .to_string()
}

/// Build a `ListBucketResult` document from (key, timestamp, etag) triples
pub fn bucket_listing(objects: &[(&str, i64, &str)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
<Name>bucket</Name><Prefix></Prefix><Marker></Marker><MaxKeys>1000</MaxKeys><IsTruncated>false</IsTruncated>
"#,
    );
    for (key, timestamp, etag) in objects {
        xml.push_str(&format!(
            "<Contents><Key>{}</Key><LastModified>{}</LastModified><ETag>&quot;{}&quot;</ETag>\
             <Size>1024</Size><StorageClass>STANDARD</StorageClass></Contents>\n",
            key,
            s3_time(*timestamp),
            etag
        ));
    }
    xml.push_str("</ListBucketResult>");
    xml
}

/// Build a nostalgia feed document with the given version order
pub fn nostalgia_feed(order: &[&str]) -> String {
    serde_json::json!({ "order": order }).to_string()
}
