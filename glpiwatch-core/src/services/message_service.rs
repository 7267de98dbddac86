// glpiwatch-core/src/services/message_service.rs

use glpiwatch_common::models::{ClosedTicket, Followup, PendingValidation, Ticket};

use crate::utils::time::format_optional;

/// Renders notification bodies for each category of change.
///
/// The text is what ends up on the requester's phone, so it follows the wording GLPI users
/// already receive, line by line.
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    base_url: String,
}

impl MessageFormatter {
    /// `glpi_url` is a bare host (`helpdesk.example.com`) or a full base URL.
    pub fn new(glpi_url: &str) -> Self {
        let trimmed = glpi_url.trim().trim_end_matches('/');
        let base_url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
        Self { base_url }
    }

    pub fn ticket_link(&self, ticket_id: i64) -> String {
        format!("{}/front/ticket.form.php?id={}", self.base_url, ticket_id)
    }

    fn link_line(&self, ticket_id: i64) -> String {
        format!("Clique para ver o chamado⬇️: \n{}\n", self.ticket_link(ticket_id))
    }

    pub fn new_followup(&self, f: &Followup) -> String {
        format!(
            "💬 Novo acompanhamento\n\
             {} adicionou um acompanhamento no chamado #{}.\n\
             Título do chamado: {}\n\
             Mensagem Adicionada: {}\n\
             Registrado em: {}\n\
             {}",
            or_empty(&f.author_name),
            f.ticket_id,
            f.ticket_title,
            f.content,
            format_optional(f.date_creation),
            self.link_line(f.ticket_id),
        )
    }

    pub fn new_ticket(&self, t: &Ticket) -> String {
        format!(
            "🎫 Novo chamado GLPI\n\
             ID: {}\n\
             Título: {}\n\
             Solicitante: {}\n\
             Descrição: {}\n\
             Registrado em: {}\n\
             {}",
            t.id,
            t.name,
            or_empty(&t.contacts.requester_name),
            t.content,
            format_optional(t.date_creation),
            self.link_line(t.id),
        )
    }

    pub fn closed_ticket(&self, t: &ClosedTicket) -> String {
        format!(
            "✅ Chamado Fechado!\n\
             ID: {}\n\
             Título: {}\n\
             Solicitante: {}\n\
             Data de fechamento: {}\n\
             Solução: {}\n\
             {}",
            t.id,
            t.name,
            or_empty(&t.contacts.requester_name),
            format_optional(t.date_mod),
            t.solution,
            self.link_line(t.id),
        )
    }

    pub fn pending_validation(&self, v: &PendingValidation) -> String {
        format!(
            "☑️ Foi solicitada a aprovação do seu chamado!\n\
             ID: {}\n\
             Título: {}\n\
             Solicitante: {}\n\
             Validador: {}\n\
             Comentário da Solicitação: {}\n\
             Registrado em: {}\n\
             {}",
            v.id,
            v.name,
            or_empty(&v.requester_name),
            or_empty(&v.validator_name),
            v.comment_submission,
            format_optional(v.date_mod),
            self.link_line(v.id),
        )
    }
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
