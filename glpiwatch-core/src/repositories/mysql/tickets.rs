// src/repositories/mysql/tickets.rs

use sqlx::mysql::MySqlRow;
use sqlx::Row;

use glpiwatch_common::models::{ClosedTicket, Ticket, TicketStatus};

use crate::repositories::mysql::contacts_from_row;
use crate::utils::normalize_html_text;
use crate::Error;

/// Tickets created since the threshold, with requester and technician resolved to their
/// default e-mail. Binds: requester role, technician role, threshold.
pub const NEW_TICKETS_SQL: &str = r#"
    SELECT
        CAST(t.id AS SIGNED) AS id,
        t.name,
        t.content,
        t.date_creation,
        t.date_mod,
        CAST(t.status AS SIGNED) AS status,
        req_user.name AS requester_name,
        req_email.email AS requester_email,
        req_user.phone AS phone,
        tech_user.name AS technician_name,
        tech_email.email AS technician_email
    FROM glpi_tickets AS t
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
    WHERE t.date_creation >= ?
    ORDER BY t.date_creation DESC
"#;

/// Closed tickets modified since the threshold, joined to their solution text.
/// Binds: requester role, technician role, threshold, closed status code.
pub const CLOSED_TICKETS_SQL: &str = r#"
    SELECT
        CAST(t.id AS SIGNED) AS id,
        t.name,
        s.content,
        t.date_creation,
        t.date_mod,
        CAST(t.status AS SIGNED) AS status,
        req_user.name AS requester_name,
        req_email.email AS requester_email,
        req_user.phone AS phone,
        tech_user.name AS technician_name,
        tech_email.email AS technician_email
    FROM glpi_tickets AS t
    LEFT JOIN glpi_itilsolutions AS s
        ON t.id = s.items_id
        AND s.itemtype = 'Ticket'
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
    WHERE t.date_mod >= ?
        AND t.status = ?
    ORDER BY t.date_mod DESC
"#;

pub(crate) fn ticket_from_row(r: &MySqlRow) -> Result<Ticket, Error> {
    let content: Option<String> = r.try_get("content")?;
    Ok(Ticket {
        id: r.try_get("id")?,
        name: r.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
        content: normalize_html_text(content.as_deref()),
        date_creation: r.try_get("date_creation")?,
        date_mod: r.try_get("date_mod")?,
        status: TicketStatus::from(r.try_get::<i64, _>("status")?),
        contacts: contacts_from_row(r)?,
    })
}

pub(crate) fn closed_ticket_from_row(r: &MySqlRow) -> Result<ClosedTicket, Error> {
    let solution: Option<String> = r.try_get("content")?;
    Ok(ClosedTicket {
        id: r.try_get("id")?,
        name: r.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
        solution: normalize_html_text(solution.as_deref()),
        date_creation: r.try_get("date_creation")?,
        date_mod: r.try_get("date_mod")?,
        status: TicketStatus::from(r.try_get::<i64, _>("status")?),
        contacts: contacts_from_row(r)?,
    })
}
