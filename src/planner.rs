//! Turning a selection window into a merge request, and interpreting the
//! merge service's reply.

use crate::catalog::{MergeResponseBody, MergeService};
use crate::window::SelectionWindow;
use clipstitch_common::paths::{is_artifact_file, validate_file_name};
use clipstitch_common::{ArtifactId, Error, Result, SegmentId, Side};

const MISSING_FILE_NAME: &str = "response did not include the generated file name";

/// The contiguous run of segments selected in `window`, in chronological
/// order: `back` segments before the anchor, the anchor, `forward` after.
pub fn plan(window: &SelectionWindow) -> Result<&[SegmentId]> {
    let segments = window.segments();
    let Some(anchor) = window.anchor_index() else {
        return Err(Error::EmptySelection);
    };
    if segments.is_empty() {
        return Err(Error::EmptySelection);
    }

    let lo = anchor.saturating_sub(window.count(Side::Back));
    let hi = (segments.len() - 1).min(anchor + window.count(Side::Forward));
    Ok(&segments[lo..=hi])
}

/// Map a merge reply to an artifact id or a `MergeFailed` error.
///
/// A successful status must carry a plain `.mp4` `clip_filename`. A failed
/// one reports the server's `error` (or `detail`) text, else `HTTP <status>`.
pub fn interpret_merge_response(status: u16, body: Option<MergeResponseBody>) -> Result<ArtifactId> {
    let body = body.unwrap_or_default();

    if !(200..300).contains(&status) {
        let reason = body
            .error
            .or(body.detail)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(Error::merge_failed(reason));
    }

    let name = match body.clip_filename {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(Error::merge_failed(MISSING_FILE_NAME)),
    };
    if validate_file_name(&name).is_err() || !is_artifact_file(&name) {
        return Err(Error::merge_failed(format!(
            "server returned an unusable file name: {name}"
        )));
    }
    Ok(ArtifactId::from(name))
}

/// Plan `window` and submit it to `merger`.
pub async fn submit(
    window: &SelectionWindow,
    channel: &str,
    merger: &dyn MergeService,
) -> Result<ArtifactId> {
    let segments = plan(window)?;

    tracing::info!(
        channel,
        count = segments.len(),
        back = window.count(Side::Back),
        forward = window.count(Side::Forward),
        "Submitting merge"
    );

    match merger.merge(segments, channel).await {
        Ok(artifact) => {
            tracing::info!(channel, artifact = %artifact, "Merge complete");
            Ok(artifact)
        }
        Err(e) => {
            tracing::warn!(channel, error = %e, "Merge failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn window_at(anchor: &str) -> SelectionWindow {
        let segments = ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(SegmentId::from)
            .collect();
        let mut window = SelectionWindow::default();
        window.load(segments, &SegmentId::from(anchor)).unwrap();
        window
    }

    fn names(segments: &[SegmentId]) -> Vec<&str> {
        segments.iter().map(SegmentId::as_str).collect()
    }

    #[test]
    fn empty_window_has_nothing_to_plan() {
        assert_matches!(plan(&SelectionWindow::default()), Err(Error::EmptySelection));
    }

    #[test]
    fn window_without_anchor_has_nothing_to_plan() {
        let mut window = SelectionWindow::default();
        let _ = window.load(vec![SegmentId::from("A")], &SegmentId::from("Z"));
        assert_matches!(plan(&window), Err(Error::EmptySelection));
    }

    #[test]
    fn plan_anchor_only() {
        assert_eq!(names(plan(&window_at("C")).unwrap()), ["C"]);
    }

    #[test]
    fn plan_is_contiguous_around_anchor() {
        let mut window = window_at("C");
        window.expand(Side::Back);
        window.expand(Side::Forward);
        window.expand(Side::Forward);

        let selected = plan(&window).unwrap();
        assert_eq!(names(selected), ["B", "C", "D", "E"]);
        assert_eq!(
            selected.len(),
            window.count(Side::Back) + window.count(Side::Forward) + 1
        );
        assert_eq!(selected.len(), window.selected_len());
    }

    #[test]
    fn plan_at_list_start() {
        let mut window = window_at("A");
        window.expand(Side::Back);
        window.expand(Side::Forward);
        assert_eq!(names(plan(&window).unwrap()), ["A", "B"]);
    }

    #[test]
    fn merge_success() {
        let body = MergeResponseBody {
            clip_filename: Some("clip_c5n_1.mp4".into()),
            ..Default::default()
        };
        let artifact = interpret_merge_response(200, Some(body)).unwrap();
        assert_eq!(artifact.as_str(), "clip_c5n_1.mp4");
    }

    #[test]
    fn merge_success_without_file_name() {
        let err = interpret_merge_response(200, Some(MergeResponseBody::default())).unwrap_err();
        assert_matches!(err, Error::MergeFailed(ref reason) if reason == MISSING_FILE_NAME);
    }

    #[test]
    fn merge_failure_uses_server_text() {
        let body = MergeResponseBody {
            error: Some("ffmpeg exited with status 1".into()),
            ..Default::default()
        };
        let err = interpret_merge_response(500, Some(body)).unwrap_err();
        assert_eq!(err.to_string(), "Merge failed: ffmpeg exited with status 1");

        let body = MergeResponseBody {
            detail: Some("Máximo 20 videos permitidos".into()),
            ..Default::default()
        };
        let err = interpret_merge_response(400, Some(body)).unwrap_err();
        assert_matches!(err, Error::MergeFailed(ref reason) if reason.contains("20"));
    }

    #[test]
    fn merge_success_with_unusable_file_name() {
        for name in ["../clip.mp4", "clip.ts", "clips/clip.mp4"] {
            let body = MergeResponseBody {
                clip_filename: Some(name.into()),
                ..Default::default()
            };
            let err = interpret_merge_response(200, Some(body)).unwrap_err();
            assert_matches!(err, Error::MergeFailed(ref reason) if reason.contains(name));
        }
    }

    struct RecordingMerger {
        reply: &'static str,
    }

    #[async_trait::async_trait]
    impl MergeService for RecordingMerger {
        async fn merge(&self, segments: &[SegmentId], channel: &str) -> Result<ArtifactId> {
            Ok(ArtifactId::from(format!(
                "{}_{}_{}.mp4",
                self.reply,
                channel,
                segments.len()
            )))
        }

        fn artifact_url(&self, artifact: &ArtifactId) -> Result<String> {
            Ok(format!("memory://{artifact}"))
        }
    }

    #[test]
    fn submit_sends_planned_slice() {
        let mut window = window_at("B");
        window.expand(Side::Forward);
        window.expand(Side::Back);

        let merger = RecordingMerger { reply: "clip" };
        let artifact = tokio_test::block_on(submit(&window, "c5n", &merger)).unwrap();
        assert_eq!(artifact.as_str(), "clip_c5n_3.mp4");
    }

    #[test]
    fn submit_empty_window_never_reaches_merger() {
        let merger = RecordingMerger { reply: "clip" };
        let result = tokio_test::block_on(submit(&SelectionWindow::default(), "c5n", &merger));
        assert_matches!(result, Err(Error::EmptySelection));
    }

    #[test]
    fn merge_failure_without_body() {
        let err = interpret_merge_response(502, None).unwrap_err();
        assert_matches!(err, Error::MergeFailed(ref reason) if reason == "HTTP 502");
    }
}
