// src/repositories/mysql/validations.rs

use sqlx::mysql::MySqlRow;
use sqlx::Row;

use glpiwatch_common::models::{PendingValidation, TicketStatus};

use crate::utils::normalize_html_text;
use crate::Error;

/// Tickets modified since the threshold that carry a validation still waiting, with the
/// ticket requester and the user asked to validate.
/// Binds: requester role, threshold, waiting status code.
pub const PENDING_VALIDATIONS_SQL: &str = r#"
    SELECT
        CAST(t.id AS SIGNED) AS id,
        t.name,
        t.content,
        v.comment_submission,
        t.date_creation,
        t.date_mod,
        CAST(t.status AS SIGNED) AS status,
        req_user.name AS requester_name,
        req_user.phone AS phone,
        val_user.name AS validator_name,
        val_user.phone AS validator_phone
    FROM glpi_tickets AS t
    INNER JOIN glpi_ticketvalidations AS v
        ON t.id = v.tickets_id
    LEFT JOIN glpi_tickets_users AS req_tu
        ON t.id = req_tu.tickets_id
        AND req_tu.type = ?
    LEFT JOIN glpi_users AS req_user
        ON req_tu.users_id = req_user.id
    LEFT JOIN glpi_users AS val_user
        ON v.users_id_validate = val_user.id
    WHERE t.date_mod >= ?
        AND v.status = ?
    ORDER BY t.date_mod DESC
"#;

pub(crate) fn validation_from_row(r: &MySqlRow) -> Result<PendingValidation, Error> {
    let content: Option<String> = r.try_get("content")?;
    let comment: Option<String> = r.try_get("comment_submission")?;
    Ok(PendingValidation {
        id: r.try_get("id")?,
        name: r.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
        content: normalize_html_text(content.as_deref()),
        comment_submission: normalize_html_text(comment.as_deref()),
        date_creation: r.try_get("date_creation")?,
        date_mod: r.try_get("date_mod")?,
        status: TicketStatus::from(r.try_get::<i64, _>("status")?),
        requester_name: r.try_get("requester_name")?,
        phone: r.try_get("phone")?,
        validator_name: r.try_get("validator_name")?,
        validator_phone: r.try_get("validator_phone")?,
    })
}
