// src/repositories/mysql/followups.rs

use sqlx::mysql::MySqlRow;
use sqlx::Row;

use glpiwatch_common::models::Followup;

use crate::repositories::mysql::contacts_from_row;
use crate::utils::normalize_html_text;
use crate::Error;

/// Public ticket follow-ups created since the threshold. Private entries never match.
/// Binds: requester role, technician role, threshold.
pub const NEW_FOLLOWUPS_SQL: &str = r#"
    SELECT
        CAST(f.id AS SIGNED) AS id,
        CAST(f.items_id AS SIGNED) AS ticket_id,
        f.content,
        f.date_creation,
        t.name AS ticket_title,
        author.name AS author_name,
        author_email.email AS author_email,
        req_user.name AS requester_name,
        req_user.phone AS phone,
        req_email.email AS requester_email,
        tech_user.name AS technician_name,
        tech_email.email AS technician_email
    FROM glpi_itilfollowups AS f
    INNER JOIN glpi_tickets AS t
        ON f.items_id = t.id
    LEFT JOIN glpi_users AS author
        ON f.users_id = author.id
    LEFT JOIN glpi_useremails AS author_email
        ON author.id = author_email.users_id
        AND author_email.is_default = 1
    LEFT JOIN glpi_tickets_users AS req_tu
        ON t.id = req_tu.tickets_id
        AND req_tu.type = ?
    LEFT JOIN glpi_users AS req_user
        ON req_tu.users_id = req_user.id
    LEFT JOIN glpi_useremails AS req_email
        ON req_user.id = req_email.users_id
        AND req_email.is_default = 1
    LEFT JOIN glpi_tickets_users AS tech_tu
        ON t.id = tech_tu.tickets_id
        AND tech_tu.type = ?
    LEFT JOIN glpi_users AS tech_user
        ON tech_tu.users_id = tech_user.id
    LEFT JOIN glpi_useremails AS tech_email
        ON tech_user.id = tech_email.users_id
        AND tech_email.is_default = 1
    WHERE f.itemtype = 'Ticket'
        AND f.is_private = 0
        AND f.date_creation >= ?
    ORDER BY f.date_creation DESC
"#;

pub(crate) fn followup_from_row(r: &MySqlRow) -> Result<Followup, Error> {
    let content: Option<String> = r.try_get("content")?;
    Ok(Followup {
        id: r.try_get("id")?,
        ticket_id: r.try_get("ticket_id")?,
        ticket_title: r.try_get::<Option<String>, _>("ticket_title")?.unwrap_or_default(),
        content: normalize_html_text(content.as_deref()),
        date_creation: r.try_get("date_creation")?,
        author_name: r.try_get("author_name")?,
        author_email: r.try_get("author_email")?,
        contacts: contacts_from_row(r)?,
    })
}
