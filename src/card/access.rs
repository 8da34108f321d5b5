use crate::model::prompt::{Creator, SessionUser};

/// Route of the signed-in viewer's own profile.
pub const OWN_PROFILE_PATH: &str = "/profile";

/// Viewer identity and current location, handed to every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardContext {
    pub viewer: Option<SessionUser>,
    pub pathname: String,
}

impl CardContext {
    pub fn new(viewer: Option<SessionUser>, pathname: impl Into<String>) -> Self {
        Self {
            viewer,
            pathname: pathname.into(),
        }
    }

    pub fn viewer_id(&self) -> Option<&str> {
        self.viewer.as_ref().map(|u| u.id.as_str())
    }

    pub fn is_viewer(&self, creator: &Creator) -> bool {
        self.viewer_id() == Some(creator.id.as_str())
    }

    /// Where a click on the creator block leads.
    pub fn profile_route(&self, creator: &Creator) -> String {
        if self.is_viewer(creator) {
            OWN_PROFILE_PATH.to_string()
        } else {
            format!(
                "{OWN_PROFILE_PATH}/{}?name={}",
                urlencoding::encode(&creator.id),
                urlencoding::encode(&creator.username)
            )
        }
    }

    /// Edit and delete are offered only to the creator, on their own profile.
    pub fn shows_owner_actions(&self, creator: &Creator) -> bool {
        self.is_viewer(creator) && self.pathname == OWN_PROFILE_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator(id: &str, username: &str) -> Creator {
        Creator {
            id: id.into(),
            username: username.into(),
            email: String::new(),
            image_url: String::new(),
        }
    }

    fn viewer(id: &str) -> Option<SessionUser> {
        Some(SessionUser {
            id: id.into(),
            name: None,
            email: None,
            image: None,
        })
    }

    #[test]
    fn own_card_links_to_own_profile() {
        let ctx = CardContext::new(viewer("u1"), "/");
        assert_eq!(ctx.profile_route(&creator("u1", "ada")), "/profile");
    }

    #[test]
    fn other_card_links_to_creator_profile() {
        let ctx = CardContext::new(viewer("u1"), "/");
        assert_eq!(
            ctx.profile_route(&creator("u2", "grace")),
            "/profile/u2?name=grace"
        );
    }

    #[test]
    fn signed_out_viewer_links_to_creator_profile() {
        let ctx = CardContext::new(None, "/");
        assert_eq!(
            ctx.profile_route(&creator("u2", "grace hopper")),
            "/profile/u2?name=grace%20hopper"
        );
    }

    #[test]
    fn owner_actions_need_both_identity_and_own_profile() {
        let owner = creator("u1", "ada");
        let cases = [
            (viewer("u1"), "/profile", true),
            (viewer("u1"), "/", false),
            (viewer("u1"), "/profile/u1", false),
            (viewer("u2"), "/profile", false),
            (None, "/profile", false),
        ];
        for (who, path, expected) in cases {
            let ctx = CardContext::new(who.clone(), path);
            assert_eq!(
                ctx.shows_owner_actions(&owner),
                expected,
                "viewer {who:?} at {path}"
            );
        }
    }
}
