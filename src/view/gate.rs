use crate::model::{Principal, UserRole};
use crate::query::QueryStatus;

/// What the admin area shows for the current caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// "Authentication Required" with a login action.
    SignIn,
    Loading,
    /// "Access Denied" with a return-home action that reloads the site.
    Denied,
    Granted,
}

impl GateView {
    pub fn title(self) -> Option<&'static str> {
        match self {
            GateView::SignIn => Some("Authentication Required"),
            GateView::Denied => Some("Access Denied"),
            GateView::Loading | GateView::Granted => None,
        }
    }
}

pub struct AdminGate;

impl AdminGate {
    pub fn evaluate(identity: Option<&Principal>, role: &QueryStatus<UserRole>) -> GateView {
        if identity.is_none() {
            return GateView::SignIn;
        }
        match role {
            QueryStatus::Disabled | QueryStatus::Pending => GateView::Loading,
            QueryStatus::Failed(_) => GateView::Denied,
            QueryStatus::Ready(role) => match role {
                UserRole::Admin => GateView::Granted,
                UserRole::User | UserRole::Guest => GateView::Denied,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_states() {
        let caller = Principal::new("bbbbb-bb");
        let ready = |role| QueryStatus::Ready(role);

        assert_eq!(AdminGate::evaluate(None, &ready(UserRole::Admin)), GateView::SignIn);
        assert_eq!(
            AdminGate::evaluate(Some(&caller), &QueryStatus::Pending),
            GateView::Loading
        );
        assert_eq!(
            AdminGate::evaluate(Some(&caller), &QueryStatus::Disabled),
            GateView::Loading
        );
        assert_eq!(
            AdminGate::evaluate(Some(&caller), &ready(UserRole::User)),
            GateView::Denied
        );
        assert_eq!(
            AdminGate::evaluate(Some(&caller), &ready(UserRole::Guest)),
            GateView::Denied
        );
        assert_eq!(
            AdminGate::evaluate(Some(&caller), &QueryStatus::Failed("Actor closed".into())),
            GateView::Denied
        );
        assert_eq!(
            AdminGate::evaluate(Some(&caller), &ready(UserRole::Admin)),
            GateView::Granted
        );
        assert_eq!(GateView::Denied.title(), Some("Access Denied"));
    }
}
