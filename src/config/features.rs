//! Feature flags configuration

use serde::Deserialize;

use crate::domain::flow::GuardPolicy;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Gate the Assessment page on login like Home and Results
    #[serde(default)]
    pub require_login_for_assessment: bool,

    /// Tell the visitor why they were redirected
    #[serde(default)]
    pub show_redirect_notices: bool,
}

impl FeatureFlags {
    /// Entry guard policy these flags select.
    pub fn guard_policy(&self) -> GuardPolicy {
        GuardPolicy {
            require_login_for_assessment: self.require_login_for_assessment,
        }
    }
}
