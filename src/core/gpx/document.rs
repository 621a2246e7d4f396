//! GPX 1.1 document builder
//!
//! Assembles the fixed document structure around the merge engine's output:
//! the XML prolog and `<gpx>` header, `<metadata>`, one `<trk>` with one
//! `<trkseg>` per route segment, and one `<trkpt>` per location point with
//! the applicable heart rate attached as a Garmin TrackPointExtension.
//!
//! The element layout and namespace block are fixed for compatibility with
//! consumers of previously exported files; output is single-line
//! concatenation with no pretty-printing.

use crate::core::gpx::merge::HeartRateCursor;
use crate::core::gpx::writer::GpxWriter;
use crate::domain::{HeartRateSample, Result, RouteSegment, Workout};
use chrono::{DateTime, SecondsFormat, Utc};
use futures::StreamExt;

/// Fixed `<gpx>` opening tag: GPX 1.1 plus the Garmin extension schemas
const GPX_HEADER: &str = concat!(
    r#"<gpx creator="gpxport" "#,
    r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"xsi:schemaLocation="http://www.topografix.com/GPX/1/1 "#,
    r#"http://www.topografix.com/GPX/1/1/gpx.xsd "#,
    r#"http://www.garmin.com/xmlschemas/GpxExtensions/v3 "#,
    r#"http://www.garmin.com/xmlschemas/GpxExtensionsv3.xsd "#,
    r#"http://www.garmin.com/xmlschemas/TrackPointExtension/v1 "#,
    r#"http://www.garmin.com/xmlschemas/TrackPointExtensionv1.xsd" "#,
    r#"version="1.1" "#,
    r#"xmlns="http://www.topografix.com/GPX/1/1" "#,
    r#"xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1" "#,
    r#"xmlns:gpxx="http://www.garmin.com/xmlschemas/GpxExtensions/v3">"#,
);

fn iso8601(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Streams a complete GPX document for one workout into `writer`
///
/// Route segments are written in provider order; within a segment, batches
/// are consumed and written in arrival order. A segment's `<trkseg>` is
/// opened before its first batch is requested and closed after the stream
/// is exhausted, so a segment with zero batches still produces an empty,
/// well-formed `<trkseg></trkseg>`.
///
/// # Errors
///
/// Writer and route-stream errors propagate without local recovery; the
/// caller owns cleanup of the partially written file.
pub async fn write_document(
    writer: &mut GpxWriter,
    workout: &Workout,
    segments: Vec<RouteSegment>,
    heart_rate: Vec<HeartRateSample>,
) -> Result<()> {
    writer.write_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writer.write_str(GPX_HEADER)?;
    writer.write_str(&format!(
        "<metadata><time>{}</time></metadata><trk><name>{}</name>",
        iso8601(workout.start),
        workout.track_name()
    ))?;

    let mut cursor = HeartRateCursor::new(heart_rate);

    for segment in segments {
        writer.write_str("<trkseg>")?;
        let mut stream = segment.into_stream();
        while let Some(batch) = stream.next().await {
            let batch = batch?;
            let mut buffer = String::new();
            for location in &batch {
                buffer.push_str(&format!(
                    r#"<trkpt lat="{}" lon="{}"><ele>{}</ele><time>{}</time>"#,
                    location.latitude,
                    location.longitude,
                    location.altitude,
                    iso8601(location.timestamp)
                ));

                if let Some(bpm) = cursor.bpm_before(location.timestamp) {
                    buffer.push_str(&format!(
                        "<extensions><gpxtpx:TrackPointExtension>\
                         <gpxtpx:hr>{bpm}</gpxtpx:hr>\
                         </gpxtpx:TrackPointExtension></extensions>"
                    ));
                }

                buffer.push_str("</trkpt>");
            }
            writer.write_str(&buffer)?;
        }
        writer.write_str("</trkseg>")?;
    }

    writer.write_str("</trk></gpx>")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ActivityType, GpxportError, HeartRateSample, LocationPoint, ProviderError, WorkoutId,
    };
    use chrono::TimeZone;
    use futures::stream;
    use std::fs;

    fn workout() -> Workout {
        Workout {
            id: WorkoutId::new("w1").unwrap(),
            activity: ActivityType::Cycling,
            start: Utc.with_ymd_and_hms(2022, 2, 3, 10, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2022, 2, 3, 11, 0, 0).unwrap(),
            distance_meters: None,
        }
    }

    fn point(sec: u32) -> LocationPoint {
        LocationPoint {
            latitude: 51.5,
            longitude: -0.25,
            altitude: 30.5,
            timestamp: Utc.with_ymd_and_hms(2022, 2, 3, 10, 0, sec).unwrap(),
        }
    }

    fn sample(sec: u32, bpm: f64) -> HeartRateSample {
        HeartRateSample {
            timestamp: Utc.with_ymd_and_hms(2022, 2, 3, 10, 0, sec).unwrap(),
            bpm,
        }
    }

    async fn render(segments: Vec<RouteSegment>, heart_rate: Vec<HeartRateSample>) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.gpx");
        let mut writer = GpxWriter::create(&path).unwrap();
        write_document(&mut writer, &workout(), segments, heart_rate)
            .await
            .unwrap();
        writer.close().unwrap();
        fs::read_to_string(&path).unwrap()
    }

    #[tokio::test]
    async fn test_document_shape() {
        let segments = vec![RouteSegment::from_batches(vec![vec![point(5), point(15)]])];
        let doc = render(segments, vec![sample(10, 60.0)]).await;

        assert!(doc.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><gpx creator="gpxport""#));
        assert!(doc.ends_with("</trk></gpx>"));
        assert!(doc.contains(r#"version="1.1""#));
        assert!(doc.contains("<metadata><time>2022-02-03T10:00:00Z</time></metadata>"));
        assert!(doc.contains("<trk><name>Feb 3, 2022 10:00 AM Cycle</name>"));
        assert!(doc.contains(r#"<trkpt lat="51.5" lon="-0.25"><ele>30.5</ele>"#));
        assert_eq!(doc.matches("<trkpt").count(), 2);
        assert_eq!(doc.matches("</trkpt>").count(), 2);
        assert_eq!(doc.matches("<ele>").count(), 2);
        // metadata time plus one per trackpoint
        assert_eq!(doc.matches("<time>").count(), 3);
    }

    #[tokio::test]
    async fn test_heart_rate_extension_only_when_applicable() {
        let segments = vec![RouteSegment::from_batches(vec![vec![point(5), point(15)]])];
        let doc = render(segments, vec![sample(10, 60.0)]).await;

        // The t=5 point precedes every sample: no extension. The t=15 point
        // picks up the t=10 sample.
        assert_eq!(doc.matches("<gpxtpx:hr>").count(), 1);
        assert!(doc.contains("<gpxtpx:hr>60</gpxtpx:hr>"));
    }

    #[tokio::test]
    async fn test_no_heart_rate_data_means_no_extensions() {
        let segments = vec![RouteSegment::from_batches(vec![vec![point(5), point(15)]])];
        let doc = render(segments, Vec::new()).await;
        assert!(!doc.contains("<extensions>"));
    }

    #[tokio::test]
    async fn test_empty_segment_still_emits_trkseg() {
        let segments = vec![
            RouteSegment::from_batches(vec![]),
            RouteSegment::from_batches(vec![vec![point(5)]]),
        ];
        let doc = render(segments, Vec::new()).await;

        assert!(doc.contains("<trkseg></trkseg>"));
        assert_eq!(doc.matches("<trkseg>").count(), 2);
        assert_eq!(doc.matches("</trkseg>").count(), 2);
    }

    #[tokio::test]
    async fn test_no_route_produces_empty_track() {
        let doc = render(Vec::new(), vec![sample(10, 60.0)]).await;
        assert!(doc.contains("</name></trk></gpx>"));
        assert!(!doc.contains("<trkseg>"));
    }

    #[tokio::test]
    async fn test_batch_split_does_not_change_output() {
        let heart_rate = vec![sample(4, 58.0), sample(12, 61.0), sample(20, 64.0)];
        let points = vec![point(2), point(8), point(14), point(20), point(27)];

        let one_batch = vec![RouteSegment::from_batches(vec![points.clone()])];
        let many_batches = vec![RouteSegment::from_batches(
            points.iter().map(|p| vec![*p]).collect(),
        )];

        let doc_a = render(one_batch, heart_rate.clone()).await;
        let doc_b = render(many_batches, heart_rate).await;
        assert_eq!(doc_a, doc_b);
    }

    #[tokio::test]
    async fn test_stream_error_propagates() {
        let failing = RouteSegment::new(
            stream::iter(vec![
                Ok(vec![point(5)]),
                Err(GpxportError::Provider(ProviderError::RouteStreamFailed(
                    "gps dropout".to_string(),
                ))),
            ])
            .boxed(),
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.gpx");
        let mut writer = GpxWriter::create(&path).unwrap();
        let result = write_document(&mut writer, &workout(), vec![failing], Vec::new()).await;
        assert!(matches!(result, Err(GpxportError::Provider(_))));
    }

    #[tokio::test]
    async fn test_tie_break_matches_reference_example() {
        // H = [(10, 60), (20, 65)], locations at 5, 15, 20, 25.
        let heart_rate = vec![sample(10, 60.0), sample(20, 65.0)];
        let segments = vec![RouteSegment::from_batches(vec![vec![
            point(5),
            point(15),
            point(20),
            point(25),
        ]])];
        let doc = render(segments, heart_rate).await;

        let hr_values: Vec<&str> = doc
            .split("<gpxtpx:hr>")
            .skip(1)
            .map(|rest| rest.split("</gpxtpx:hr>").next().unwrap())
            .collect();
        // First point has no applicable sample; t=20 keeps 60 (strict <).
        assert_eq!(hr_values, vec!["60", "60", "65"]);
    }
}
