use uuid::Uuid;

use crate::models::Submission;
use crate::qr;
use crate::state::SharedState;

use super::parser::{FormFields, VideoFile};

/// Run the intake workflow: upload the video, render and store the QR image,
/// persist the record, then notify the administrator. Everything before the
/// notification must succeed in order; the notification itself is best
/// effort, so a dead SMTP relay cannot sink an otherwise complete submission.
pub async fn run(
    state: &SharedState,
    fields: FormFields,
    video: VideoFile,
) -> Result<Submission, String> {
    let id = Uuid::now_v7().to_string();

    let video_url = state
        .media
        .store_video(&id, &video.content_type, video.data)
        .await
        .map_err(|e| format!("Video upload failed: {e}"))?;

    let page_url = qr::page_url(&state.config.frontend_base_url, &id);
    let png = qr::render_png(&page_url)?;
    let qr_path = state
        .media
        .store_qr(&id, png)
        .await
        .map_err(|e| format!("QR storage failed: {e}"))?;

    let submission = Submission {
        id,
        name: fields.name,
        email: fields.email,
        company: fields.company,
        location: fields.location,
        template: fields.template,
        video_url,
        qr_path,
        page_url,
        created_at: chrono::Utc::now(),
    };

    state
        .store
        .create(&submission)
        .await
        .map_err(|e| format!("Failed to store submission: {e}"))?;

    if let Some(notifier) = &state.notifier {
        if let Err(e) = notifier
            .send_submission_notice(&submission.name, &submission.page_url)
            .await
        {
            tracing::warn!("Admin notification failed for {}: {e}", submission.id);
        }
    } else {
        tracing::debug!("SMTP not configured, skipping admin notification");
    }

    Ok(submission)
}
