use tracing::{debug, info, warn};

use crate::auth::{AuthFailure, Identity};
use crate::logging::pii::Redacted;
use crate::web::trace_ctx;

/// Which gate produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    Mandatory,
    Optional,
}

impl GateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateKind::Mandatory => "mandatory",
            GateKind::Optional => "optional",
        }
    }
}

/// Log a request the mandatory gate turned away.
pub fn auth_rejected(failure: &AuthFailure) {
    let trace_id = trace_ctx::trace_id();
    let cause = failure.to_string();

    match failure {
        AuthFailure::Unexpected(_) => warn!(
            event = "SECURITY_AUTH_REJECTED",
            %trace_id,
            gate = GateKind::Mandatory.as_str(),
            reason = failure.reason(),
            cause = %Redacted(&cause),
            "Authentication failed unexpectedly"
        ),
        _ => info!(
            event = "SECURITY_AUTH_REJECTED",
            %trace_id,
            gate = GateKind::Mandatory.as_str(),
            reason = failure.reason(),
            "Authentication rejected"
        ),
    }
}

/// Log a request the optional gate let through anonymously after a failure.
pub fn auth_downgraded(failure: &AuthFailure) {
    let trace_id = trace_ctx::trace_id();
    let cause = failure.to_string();

    debug!(
        event = "SECURITY_AUTH_ANONYMOUS",
        %trace_id,
        gate = GateKind::Optional.as_str(),
        reason = failure.reason(),
        cause = %Redacted(&cause),
        "Proceeding without identity"
    );
}

/// Log a successful authentication.
pub fn auth_accepted(gate: GateKind, identity: &Identity) {
    let trace_id = trace_ctx::trace_id();

    debug!(
        event = "SECURITY_AUTH_ACCEPTED",
        %trace_id,
        gate = gate.as_str(),
        user_id = %identity.id,
        email = %Redacted(identity.email.as_deref().unwrap_or_default()),
        role = identity.role.as_deref().unwrap_or("none"),
        "Authenticated"
    );
}
