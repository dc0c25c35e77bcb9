//! Schema documentation update handlers

use crate::commands::Cmd;
use crate::messages::SchemaMsg;
use crate::model::EditorSession;
use crate::schema::doc_url;

/// Navigation command for `name`, or None if the base URL is unusable
pub fn docs_command(session: &EditorSession, name: &str) -> Option<Cmd> {
    match doc_url(&session.config.docs_base_url, name) {
        Ok(url) => Some(Cmd::NavigateDocs { url }),
        Err(e) => {
            tracing::warn!(
                "Cannot build documentation URL for {} from {}: {}",
                name,
                session.config.docs_base_url,
                e
            );
            None
        }
    }
}

/// Handle schema messages
pub fn update_schema(session: &mut EditorSession, msg: SchemaMsg) -> Option<Cmd> {
    match msg {
        SchemaMsg::Restore { record, now_ms } => {
            session
                .schema
                .restore(record, now_ms, session.config.schema_ttl_hours);
            let name = session.schema.current()?.name.clone();
            tracing::debug!("Restored schema {}", name);
            docs_command(session, &name)
        }
    }
}
